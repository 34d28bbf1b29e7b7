use num_traits::Float;

// Tolerance-aware comparisons. With `eps == 0` they are the exact `== 0`,
// `== 1` and `== ±1` checks.

#[inline(always)]
pub fn is_zero<T: Float>(x: T, eps: T) -> bool {
    x.abs() <= eps
}

#[inline(always)]
pub fn is_one<T: Float>(x: T, eps: T) -> bool {
    (x - T::one()).abs() <= eps
}

/// `x` is `1` or `-1`.
#[inline(always)]
pub fn is_unit<T: Float>(x: T, eps: T) -> bool {
    (x.abs() - T::one()).abs() <= eps
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
