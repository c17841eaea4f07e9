//! Deferred division.
//!
//! A quotient is carried as a numerator paired with the reciprocal of
//! its denominator. Products of such pairs compose by multiplying
//! numerators and denominators independently, so a chain of normalized
//! values costs one square root each but only a single division, paid
//! when the chain is materialized back to a concrete value.

use crate::quaternion::RIJK;
use crate::unit::R;
use num_traits::Float;

/// Stores `x`, read as `1/x`. No division is performed to construct one.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Reciprocal<T>(pub T);

/// `(1/a)·(1/b) = 1/(ab)`
impl<T: Float> std::ops::Mul for Reciprocal<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Reciprocal(self.0 * rhs.0)
    }
}

/// A fraction whose denominator is pre-inverted: `num / (1/recip)`.
///
/// Generic over the numerator type; any two pairs whose numerators
/// multiply compose without dividing.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Homogeneous<N, T> {
    pub num: N,
    pub recip: Reciprocal<T>,
}

/// Homogeneous scalar.
pub type HR<T> = Homogeneous<R<T>, T>;

/// Homogeneous quaternion, e.g. a quaternion paired with the reciprocal
/// of its length.
pub type HRIJK<T> = Homogeneous<RIJK<T>, T>;

impl<N, T: Float> Homogeneous<N, T> {
    /// Wraps the divisor as its reciprocal once.
    #[inline]
    pub fn new(num: N, denom: R<T>) -> Self {
        Homogeneous {
            num,
            recip: Reciprocal(denom.0),
        }
    }
}

/// Numerators and denominators compose independently; neither side is
/// cross-multiplied and nothing divides here.
impl<N, M, T: Float> std::ops::Mul<Homogeneous<M, T>> for Homogeneous<N, T>
where
    N: std::ops::Mul<M>,
{
    type Output = Homogeneous<<N as std::ops::Mul<M>>::Output, T>;
    #[inline]
    fn mul(self, rhs: Homogeneous<M, T>) -> Self::Output {
        Homogeneous {
            num: self.num * rhs.num,
            recip: self.recip * rhs.recip,
        }
    }
}

/// `(a/b) / (c/d) = ad / bc`, still in homogeneous form.
impl<T: Float> std::ops::Div for HR<T> {
    type Output = HR<T>;
    #[inline]
    fn div(self, rhs: HR<T>) -> HR<T> {
        Homogeneous {
            num: self.num * R(rhs.recip.0),
            recip: Reciprocal(self.recip.0 * rhs.num.0),
        }
    }
}

impl<T: Float> std::ops::Mul<R<T>> for Reciprocal<T> {
    type Output = HR<T>;
    #[inline]
    fn mul(self, rhs: R<T>) -> HR<T> {
        Homogeneous { num: rhs, recip: self }
    }
}

impl<T: Float> std::ops::Mul<Reciprocal<T>> for R<T> {
    type Output = HR<T>;
    #[inline]
    fn mul(self, rhs: Reciprocal<T>) -> HR<T> {
        Homogeneous { num: self, recip: rhs }
    }
}

impl<T: Float> std::ops::Mul<RIJK<T>> for Reciprocal<T> {
    type Output = HRIJK<T>;
    #[inline]
    fn mul(self, rhs: RIJK<T>) -> HRIJK<T> {
        Homogeneous { num: rhs, recip: self }
    }
}

impl<T: Float> std::ops::Mul<Reciprocal<T>> for RIJK<T> {
    type Output = HRIJK<T>;
    #[inline]
    fn mul(self, rhs: Reciprocal<T>) -> HRIJK<T> {
        Homogeneous { num: self, recip: rhs }
    }
}

impl<T: Float> From<HR<T>> for R<T> {
    /// The one place the deferred scalar division happens.
    #[inline]
    fn from(h: HR<T>) -> R<T> {
        R(h.num.0 / h.recip.0)
    }
}

impl<T: Float> From<HRIJK<T>> for RIJK<T> {
    /// Inverts the denominator once and scales the numerator by it.
    #[inline]
    fn from(h: HRIJK<T>) -> RIJK<T> {
        R(T::one() / h.recip.0) * h.num
    }
}
