//! Null-safe boolean logic and arithmetic.
//!
//! Any absent operand makes the result absent. Division by exactly zero is
//! also absent rather than a panic. Integer operations wrap on overflow, so
//! none of these functions can panic.

/// Numeric types supported by the null-safe arithmetic helpers.
pub trait NullSafeNumber: Copy {
    /// `self + rhs`, wrapping for integers.
    #[must_use]
    fn plus(self, rhs: Self) -> Self;
    /// `self - rhs`, wrapping for integers.
    #[must_use]
    fn minus(self, rhs: Self) -> Self;
    /// `self * rhs`, wrapping for integers.
    #[must_use]
    fn times(self, rhs: Self) -> Self;
    /// `self / rhs`, or `None` when `rhs` is zero.
    fn divide(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl NullSafeNumber for $t {
                fn plus(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                fn minus(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                fn times(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                fn divide(self, rhs: Self) -> Option<Self> {
                    if rhs == 0 {
                        None
                    } else {
                        Some(self.wrapping_div(rhs))
                    }
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl NullSafeNumber for $t {
                fn plus(self, rhs: Self) -> Self {
                    self + rhs
                }

                fn minus(self, rhs: Self) -> Self {
                    self - rhs
                }

                fn times(self, rhs: Self) -> Self {
                    self * rhs
                }

                fn divide(self, rhs: Self) -> Option<Self> {
                    if rhs == 0.0 {
                        None
                    } else {
                        Some(self / rhs)
                    }
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

/// Logical AND; absent if either operand is absent.
#[must_use]
pub fn null_safe_and(a: Option<bool>, b: Option<bool>) -> Option<bool> {
    Some(a? && b?)
}

/// Logical OR; absent if either operand is absent.
#[must_use]
pub fn null_safe_or(a: Option<bool>, b: Option<bool>) -> Option<bool> {
    Some(a? || b?)
}

/// Logical NOT; absent if the operand is absent.
#[must_use]
pub fn null_safe_not(a: Option<bool>) -> Option<bool> {
    a.map(|v| !v)
}

/// AND over every flag; absent if any flag is absent.
#[must_use]
pub fn null_safe_all(values: &[Option<bool>]) -> Option<bool> {
    values
        .iter()
        .copied()
        .collect::<Option<Vec<bool>>>()
        .map(|flags| flags.into_iter().all(|f| f))
}

/// OR over every flag; absent if any flag is absent.
#[must_use]
pub fn null_safe_any(values: &[Option<bool>]) -> Option<bool> {
    values
        .iter()
        .copied()
        .collect::<Option<Vec<bool>>>()
        .map(|flags| flags.into_iter().any(|f| f))
}

/// Addition; absent if either operand is absent.
pub fn null_safe_plus<N: NullSafeNumber>(a: Option<N>, b: Option<N>) -> Option<N> {
    Some(a?.plus(b?))
}

/// Subtraction; absent if either operand is absent.
pub fn null_safe_minus<N: NullSafeNumber>(a: Option<N>, b: Option<N>) -> Option<N> {
    Some(a?.minus(b?))
}

/// Multiplication; absent if either operand is absent.
pub fn null_safe_multiply<N: NullSafeNumber>(a: Option<N>, b: Option<N>) -> Option<N> {
    Some(a?.times(b?))
}

/// Division; absent if either operand is absent or the divisor is zero.
pub fn null_safe_divide<N: NullSafeNumber>(a: Option<N>, b: Option<N>) -> Option<N> {
    a?.divide(b?)
}
