//! Scalar dual numbers.

use crate::unit::{D, R};
use num_traits::Float;

/// Dual number: `w + dε`, with `ε² = 0`.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct RD<T> {
    pub r: R<T>,
    pub d: D<T>,
}

impl<T> RD<T> {
    #[inline]
    pub const fn new(r: R<T>, d: D<T>) -> Self {
        RD { r, d }
    }
}

impl<T: Float> RD<T> {
    #[inline]
    pub fn from_real(r: R<T>) -> Self {
        RD::new(r, D(T::zero()))
    }

    #[inline]
    pub fn from_dual(d: D<T>) -> Self {
        RD::new(R(T::zero()), d)
    }
}

impl<T: Float> std::ops::Add for RD<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        RD::new(self.r + rhs.r, self.d + rhs.d)
    }
}

impl<T: Float> std::ops::Sub for RD<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        RD::new(self.r - rhs.r, self.d - rhs.d)
    }
}

/// Product rule: `(w + dε)(w' + d'ε) = ww' + (wd' + w'd)ε`.
impl<T: Float> std::ops::Mul for RD<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        RD::new(self.r * rhs.r, self.r * rhs.d + rhs.r * self.d)
    }
}

/// Quotient rule: `(a/b).d = (b.w·a.d - a.w·b.d) / b.w²`.
impl<T: Float> std::ops::Div for RD<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        RD::new(
            self.r / rhs.r,
            (rhs.r * self.d - self.r * rhs.d) / (rhs.r * rhs.r),
        )
    }
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for RD<T> {}
unsafe impl<T: bytemuck::Pod + bytemuck::Zeroable> bytemuck::Pod for RD<T> {}

impl<T: approx::AbsDiffEq> approx::AbsDiffEq for RD<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon) && self.d.abs_diff_eq(&other.d, epsilon)
    }
}

impl<T: approx::RelativeEq> approx::RelativeEq for RD<T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.r.relative_eq(&other.r, epsilon, max_relative)
            && self.d.relative_eq(&other.d, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_rule() {
        let a = RD::new(R(5.0), D(7.0));
        let b = RD::new(R(2.0), D(9.0));
        assert_eq!(RD::new(R(10.0), D(59.0)), a * b);
    }

    #[test]
    fn real_product_squares() {
        let a = RD::from_real(R(5.0));
        assert_eq!(RD::new(R(25.0), D(0.0)), a * a);
    }

    #[test]
    fn quotient_undoes_the_product() {
        let a = RD::new(R(5.0), D(7.0));
        let b = RD::new(R(2.0), D(9.0));
        assert_eq!(a, (a * b) / b);
    }

    #[test]
    fn part_constructors_compose() {
        let a = RD::from_real(R(5.0)) + RD::from_dual(D(7.0));
        assert_eq!(RD::new(R(5.0), D(7.0)), a);
    }

    #[test]
    fn sums_are_componentwise() {
        let a = RD::new(R(5.0), D(7.0));
        let b = RD::new(R(2.0), D(9.0));
        assert_eq!(RD::new(R(7.0), D(16.0)), a + b);
        assert_eq!(RD::new(R(3.0), D(-2.0)), a - b);
    }
}
