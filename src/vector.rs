//! Imaginary 3-vector.

use crate::unit::{I, J, K, R};
use crate::{Cross, Dot};
use num_traits::Float;

/// The imaginary part of a quaternion: `xi + yj + zk`.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct IJK<T> {
    pub i: I<T>,
    pub j: J<T>,
    pub k: K<T>,
}

impl<T> IJK<T> {
    #[inline]
    pub const fn new(i: I<T>, j: J<T>, k: K<T>) -> Self {
        IJK { i, j, k }
    }
}

impl<T: Float> IJK<T> {
    #[inline]
    pub fn from_xyz(x: T, y: T, z: T) -> Self {
        IJK::new(I(x), J(y), K(z))
    }

    #[inline]
    pub fn into_xyz(self) -> [T; 3] {
        [self.i.0, self.j.0, self.k.0]
    }
}

impl<T: Float> std::ops::Neg for IJK<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        IJK::new(-self.i, -self.j, -self.k)
    }
}

impl<T: Float> std::ops::Add for IJK<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        IJK::new(self.i + rhs.i, self.j + rhs.j, self.k + rhs.k)
    }
}

impl<T: Float> std::ops::Sub for IJK<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        IJK::new(self.i - rhs.i, self.j - rhs.j, self.k - rhs.k)
    }
}

impl<T: Float> std::ops::Mul<T> for IJK<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        IJK::new(self.i * rhs, self.j * rhs, self.k * rhs)
    }
}

impl<T: Float> std::ops::Mul<IJK<T>> for R<T> {
    type Output = IJK<T>;
    #[inline]
    fn mul(self, rhs: IJK<T>) -> IJK<T> {
        IJK::new(self * rhs.i, self * rhs.j, self * rhs.k)
    }
}

impl std::ops::Mul<IJK<f32>> for f32 {
    type Output = IJK<f32>;
    #[inline]
    fn mul(self, rhs: IJK<f32>) -> IJK<f32> {
        IJK::new(self * rhs.i, self * rhs.j, self * rhs.k)
    }
}

impl std::ops::Mul<IJK<f64>> for f64 {
    type Output = IJK<f64>;
    #[inline]
    fn mul(self, rhs: IJK<f64>) -> IJK<f64> {
        IJK::new(self * rhs.i, self * rhs.j, self * rhs.k)
    }
}

/// Quaternion-signed dot product.
///
/// Each term is a typed `i·i`-style product, so the result carries the
/// `i² = -1` sign: the negated Euclidean dot of the float triples, as an
/// [`R`].
impl<T: Float> Dot<IJK<T>> for IJK<T> {
    type Output = R<T>;
    #[inline]
    fn dot(self, rhs: IJK<T>) -> R<T> {
        self.i * rhs.i + self.j * rhs.j + self.k * rhs.k
    }
}

/// 3-vector cross product.
///
/// Every term is a typed product of two distinct imaginary units; the
/// anti-commutativity of the table supplies the usual minus signs.
impl<T: Float> Cross<IJK<T>> for IJK<T> {
    type Output = IJK<T>;
    #[inline]
    fn cross(self, rhs: IJK<T>) -> IJK<T> {
        IJK::new(
            self.j * rhs.k + self.k * rhs.j,
            self.k * rhs.i + self.i * rhs.k,
            self.i * rhs.j + self.j * rhs.i,
        )
    }
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for IJK<T> {}
unsafe impl<T: bytemuck::Pod + bytemuck::Zeroable> bytemuck::Pod for IJK<T> {}

impl<T: approx::AbsDiffEq> approx::AbsDiffEq for IJK<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.i.abs_diff_eq(&other.i, epsilon)
            && self.j.abs_diff_eq(&other.j, epsilon)
            && self.k.abs_diff_eq(&other.k, epsilon)
    }
}

impl<T: approx::RelativeEq> approx::RelativeEq for IJK<T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.i.relative_eq(&other.i, epsilon, max_relative)
            && self.j.relative_eq(&other.j, epsilon, max_relative)
            && self.k.relative_eq(&other.k, epsilon, max_relative)
    }
}
