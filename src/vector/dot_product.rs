use num_traits::Float;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Sum of the elementwise products, accumulated left to right.
///
/// Panics when the vectors do not have the same length.
pub fn dot_product<T: Float>(vector1: &[T], vector2: &[T]) -> T {
    assert_eq!(
        vector1.len(),
        vector2.len(),
        "Vectors are not the same length"
    );

    vector1
        .iter()
        .zip(vector2.iter())
        .fold(T::zero(), |acc, (a, b)| acc + *a * *b)
}

#[pyfunction(name = "dot_product")]
pub fn py_dot_product(vector1: Vec<f64>, vector2: Vec<f64>) -> PyResult<f64> {
    if vector1.len() != vector2.len() {
        return Err(PyValueError::new_err("Vectors are not the same length"));
    }
    Ok(dot_product(&vector1, &vector2))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_dot_product() {
        assert_eq!(dot_product(&[2.0, 0.0, 1.0], &[0.0, 1.0, 0.0]), 0.0);
        assert_eq!(dot_product(&[1.0f32, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        assert_eq!(dot_product(&[-1.5, 2.0], &[2.0, 0.25]), -2.5);
        assert_eq!(dot_product::<f64>(&[], &[]), 0.0);
    }

    #[test]
    fn test_dot_product_symmetric() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let n = rng.gen_range(1..20);
            let a: Vec<f64> = (0..n).map(|_| rng.gen_range(-100.0..100.0)).collect();
            let b: Vec<f64> = (0..n).map(|_| rng.gen_range(-100.0..100.0)).collect();
            assert_eq!(dot_product(&a, &b), dot_product(&b, &a));
        }
    }

    #[test]
    #[should_panic(expected = "Vectors are not the same length")]
    fn test_dot_product_length_mismatch() {
        dot_product(&[1.0, 2.0], &[1.0]);
    }
}
