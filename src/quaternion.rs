//! Quaternions and the Hamilton product.

use crate::homogeneous::{Reciprocal, HRIJK};
use crate::unit::{I, J, K, R};
use crate::vector::IJK;
use crate::{Conjugate, Cross, Dot, Norm, Norm2, Unitize};
use num_traits::Float;

/// Quaternion: `w + xi + yj + zk`.
///
/// No unit-norm invariant is enforced. Callers that interpret a value as
/// a rotation normalize it explicitly with [`Unitize`]; repeated Hamilton
/// products of nominally unit quaternions drift from unit norm, and
/// renormalizing periodically is the caller's responsibility.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct RIJK<T> {
    pub r: R<T>,
    pub i: I<T>,
    pub j: J<T>,
    pub k: K<T>,
}

impl<T> RIJK<T> {
    #[inline]
    pub const fn new(r: R<T>, i: I<T>, j: J<T>, k: K<T>) -> Self {
        RIJK { r, i, j, k }
    }
}

impl<T: Float> RIJK<T> {
    /// Real-first float constructor.
    #[inline]
    pub fn from_wxyz(w: T, x: T, y: T, z: T) -> Self {
        RIJK::new(R(w), I(x), J(y), K(z))
    }

    /// Real-last float constructor. Produces the same structural layout
    /// as [`RIJK::from_wxyz`].
    #[inline]
    pub fn from_xyzw(x: T, y: T, z: T, w: T) -> Self {
        RIJK::new(R(w), I(x), J(y), K(z))
    }

    #[inline]
    pub fn from_parts(r: R<T>, ijk: IJK<T>) -> Self {
        RIJK::new(r, ijk.i, ijk.j, ijk.k)
    }

    /// Pure-imaginary quaternion embedding a 3-vector.
    #[inline]
    pub fn pure(x: T, y: T, z: T) -> Self {
        RIJK::from_wxyz(T::zero(), x, y, z)
    }

    #[inline]
    pub fn identity() -> Self {
        RIJK::from_wxyz(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// The imaginary part.
    #[inline]
    pub fn ijk(self) -> IJK<T> {
        IJK::new(self.i, self.j, self.k)
    }

    #[inline]
    pub fn into_wxyz(self) -> [T; 4] {
        [self.r.0, self.i.0, self.j.0, self.k.0]
    }

    #[inline]
    pub fn reciprocal_length(self) -> Reciprocal<T> {
        Reciprocal(self.norm().0)
    }
}

impl<T: Float> std::ops::Neg for RIJK<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        RIJK::new(-self.r, -self.i, -self.j, -self.k)
    }
}

impl<T: Float> std::ops::Add for RIJK<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        RIJK::new(self.r + rhs.r, self.i + rhs.i, self.j + rhs.j, self.k + rhs.k)
    }
}

impl<T: Float> std::ops::Sub for RIJK<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        RIJK::new(self.r - rhs.r, self.i - rhs.i, self.j - rhs.j, self.k - rhs.k)
    }
}

impl<T: Float> std::ops::Mul<T> for RIJK<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        RIJK::new(self.r * rhs, self.i * rhs, self.j * rhs, self.k * rhs)
    }
}

impl<T: Float> std::ops::Mul<RIJK<T>> for R<T> {
    type Output = RIJK<T>;
    #[inline]
    fn mul(self, rhs: RIJK<T>) -> RIJK<T> {
        RIJK::new(self * rhs.r, self * rhs.i, self * rhs.j, self * rhs.k)
    }
}

impl std::ops::Mul<RIJK<f32>> for f32 {
    type Output = RIJK<f32>;
    #[inline]
    fn mul(self, rhs: RIJK<f32>) -> RIJK<f32> {
        R(self) * rhs
    }
}

impl std::ops::Mul<RIJK<f64>> for f64 {
    type Output = RIJK<f64>;
    #[inline]
    fn mul(self, rhs: RIJK<f64>) -> RIJK<f64> {
        R(self) * rhs
    }
}

/// Signed 4-component dot product, the real part of the Hamilton product.
impl<T: Float> Dot<RIJK<T>> for RIJK<T> {
    type Output = R<T>;
    #[inline]
    fn dot(self, rhs: RIJK<T>) -> R<T> {
        self.r * rhs.r + self.ijk().dot(rhs.ijk())
    }
}

/// Hamilton product. Non-commutative.
impl<T: Float> std::ops::Mul for RIJK<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        RIJK::from_parts(
            self.dot(rhs),
            self.r * rhs.ijk() + rhs.r * self.ijk() + self.ijk().cross(rhs.ijk()),
        )
    }
}

impl<T: Float> Conjugate for RIJK<T> {
    type Output = Self;
    #[inline]
    fn conj(self) -> Self {
        RIJK::new(self.r, -self.i, -self.j, -self.k)
    }
}

impl<T: Float> Norm2 for RIJK<T> {
    type Output = R<T>;
    /// `w² + x² + y² + z²` through the signed unit products; never
    /// negative for real inputs.
    #[inline]
    fn norm2(self) -> R<T> {
        self.r * self.r - self.i * self.i - self.j * self.j - self.k * self.k
    }
}

impl<T: Float> Norm for RIJK<T> {
    type Output = R<T>;
    #[inline]
    fn norm(self) -> R<T> {
        R(self.norm2().0.sqrt())
    }
}

impl<T: Float> Unitize for RIJK<T> {
    type Output = HRIJK<T>;
    /// Pairs `self` with the reciprocal of its length. No division
    /// happens until the result is materialized.
    #[inline]
    fn unit(self) -> HRIJK<T> {
        self.reciprocal_length() * self
    }
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for RIJK<T> {}
unsafe impl<T: bytemuck::Pod + bytemuck::Zeroable> bytemuck::Pod for RIJK<T> {}

impl<T: approx::AbsDiffEq> approx::AbsDiffEq for RIJK<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon)
            && self.i.abs_diff_eq(&other.i, epsilon)
            && self.j.abs_diff_eq(&other.j, epsilon)
            && self.k.abs_diff_eq(&other.k, epsilon)
    }
}

impl<T: approx::RelativeEq> approx::RelativeEq for RIJK<T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.r.relative_eq(&other.r, epsilon, max_relative)
            && self.i.relative_eq(&other.i, epsilon, max_relative)
            && self.j.relative_eq(&other.j, epsilon, max_relative)
            && self.k.relative_eq(&other.k, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_float_orderings_agree() {
        assert_eq!(
            RIJK::from_wxyz(1.0, 2.0, 3.0, 4.0),
            RIJK::from_xyzw(2.0, 3.0, 4.0, 1.0),
        );
        assert_eq!(
            [1.0, 2.0, 3.0, 4.0],
            RIJK::from_xyzw(2.0, 3.0, 4.0, 1.0).into_wxyz(),
        );
    }

    #[test]
    fn identity_is_neutral() {
        let q = RIJK::from_wxyz(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q, RIJK::identity() * q);
        assert_eq!(q, q * RIJK::identity());
    }

    #[test]
    fn pure_units_multiply_like_the_basis() {
        let i = RIJK::pure(1.0, 0.0, 0.0);
        let j = RIJK::pure(0.0, 1.0, 0.0);
        let k = RIJK::pure(0.0, 0.0, 1.0);

        assert_eq!(k, i * j);
        assert_eq!(-k, j * i);
        assert_eq!(-RIJK::identity(), i * i);
    }

    #[test]
    fn norm2_is_positive_definite() {
        let q = RIJK::from_wxyz(1.0, 2.0, 3.0, 4.0);
        assert_eq!(R(30.0), q.norm2());
    }

    #[test]
    fn conjugate_flips_the_imaginary_part() {
        let q = RIJK::from_wxyz(1.0, 2.0, 3.0, 4.0);
        assert_eq!(RIJK::from_wxyz(1.0, -2.0, -3.0, -4.0), q.conj());
    }

    #[test]
    fn conjugate_product_is_the_squared_norm() {
        let q = RIJK::from_wxyz(1.0, 2.0, 3.0, 4.0);
        let p = q * q.conj();
        assert_eq!(q.norm2(), p.r);
        assert_eq!(IJK::from_xyz(0.0, 0.0, 0.0), p.ijk());
    }

    #[test]
    fn scaling() {
        let q = RIJK::from_wxyz(1.0, 2.0, 3.0, 4.0);
        let expected = RIJK::from_wxyz(2.0, 4.0, 6.0, 8.0);
        assert_eq!(expected, q * 2.0);
        assert_eq!(expected, 2.0f64 * q);
        assert_eq!(expected, R(2.0) * q);
    }
}
