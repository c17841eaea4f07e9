//! Dual quaternions: rigid transforms as a single algebraic value.

use crate::quaternion::RIJK;
use crate::unit::{D, DI, DJ, DK, I, J, K, R};
use crate::Conjugate;
use num_traits::Float;

/// Dual quaternion: `w + xi + yj + zk + Wε + Xεi + Yεj + Zεk`.
///
/// Viewed as a real quaternion part plus a dual part that is itself
/// quaternion-shaped. As a rigid-transform encoding the real part is a
/// unit rotation and the dual part is `½·(0, tx, ty, tz)·real`; that
/// invariant is established by [`RIJKD::from_rotation_position`] and not
/// otherwise enforced. Component-wise sums and scalings are still
/// well-defined algebra but generally do not encode valid transforms.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct RIJKD<T> {
    pub r: R<T>,
    pub i: I<T>,
    pub j: J<T>,
    pub k: K<T>,
    pub d: D<T>,
    pub di: DI<T>,
    pub dj: DJ<T>,
    pub dk: DK<T>,
}

impl<T> RIJKD<T> {
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        r: R<T>,
        i: I<T>,
        j: J<T>,
        k: K<T>,
        d: D<T>,
        di: DI<T>,
        dj: DJ<T>,
        dk: DK<T>,
    ) -> Self {
        RIJKD {
            r,
            i,
            j,
            k,
            d,
            di,
            dj,
            dk,
        }
    }
}

impl<T: Float> RIJKD<T> {
    /// The rotation part.
    #[inline]
    pub fn real(self) -> RIJK<T> {
        RIJK::new(self.r, self.i, self.j, self.k)
    }

    /// The dual part, reinterpreted as a quaternion.
    #[inline]
    pub fn dual(self) -> RIJK<T> {
        RIJK::from_wxyz(self.d.0, self.di.0, self.dj.0, self.dk.0)
    }

    #[inline]
    pub fn from_real_dual(real: RIJK<T>, dual: RIJK<T>) -> Self {
        RIJKD::new(
            real.r,
            real.i,
            real.j,
            real.k,
            D(dual.r.0),
            DI(dual.i.0),
            DJ(dual.j.0),
            DK(dual.k.0),
        )
    }

    /// Encodes a rigid transform from a unit rotation and a position.
    ///
    /// The dual part is half the Hamilton product of the pure position
    /// quaternion with the rotation.
    #[inline]
    pub fn from_rotation_position(rotation: RIJK<T>, position: [T; 3]) -> Self {
        let half = T::one() / (T::one() + T::one());
        let [x, y, z] = position;
        let p = RIJK::pure(x * half, y * half, z * half);
        RIJKD::from_real_dual(rotation, p * rotation)
    }

    /// Recovers the position of a rigid transform.
    ///
    /// Extracts `t = 2·dual·conj(real)` and returns its imaginary
    /// triple; for a valid transform the real part of `t` is close to
    /// zero.
    #[inline]
    pub fn position(self) -> [T; 3] {
        let t = self.position_quaternion();
        [t.i.0, t.j.0, t.k.0]
    }

    /// The position extraction kept in dual-tagged form.
    #[inline]
    pub fn position_units(self) -> (D<T>, DI<T>, DJ<T>, DK<T>) {
        let t = self.position_quaternion();
        (D(t.r.0), DI(t.i.0), DJ(t.j.0), DK(t.k.0))
    }

    #[inline]
    fn position_quaternion(self) -> RIJK<T> {
        let two = T::one() + T::one();
        R(two) * (self.dual() * self.real().conj())
    }

    #[inline]
    pub fn into_components(self) -> [T; 8] {
        [
            self.r.0, self.i.0, self.j.0, self.k.0, self.d.0, self.di.0, self.dj.0, self.dk.0,
        ]
    }
}

impl<T: Float> std::ops::Neg for RIJKD<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        RIJKD::new(
            -self.r, -self.i, -self.j, -self.k, -self.d, -self.di, -self.dj, -self.dk,
        )
    }
}

impl<T: Float> std::ops::Add for RIJKD<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        RIJKD::new(
            self.r + rhs.r,
            self.i + rhs.i,
            self.j + rhs.j,
            self.k + rhs.k,
            self.d + rhs.d,
            self.di + rhs.di,
            self.dj + rhs.dj,
            self.dk + rhs.dk,
        )
    }
}

impl<T: Float> std::ops::Sub for RIJKD<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        RIJKD::new(
            self.r - rhs.r,
            self.i - rhs.i,
            self.j - rhs.j,
            self.k - rhs.k,
            self.d - rhs.d,
            self.di - rhs.di,
            self.dj - rhs.dj,
            self.dk - rhs.dk,
        )
    }
}

impl<T: Float> std::ops::Mul<T> for RIJKD<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        RIJKD::new(
            self.r * rhs,
            self.i * rhs,
            self.j * rhs,
            self.k * rhs,
            self.d * rhs,
            self.di * rhs,
            self.dj * rhs,
            self.dk * rhs,
        )
    }
}

impl<T: Float> std::ops::Mul<RIJKD<T>> for R<T> {
    type Output = RIJKD<T>;
    #[inline]
    fn mul(self, rhs: RIJKD<T>) -> RIJKD<T> {
        RIJKD::new(
            self * rhs.r,
            self * rhs.i,
            self * rhs.j,
            self * rhs.k,
            self * rhs.d,
            self * rhs.di,
            self * rhs.dj,
            self * rhs.dk,
        )
    }
}

impl std::ops::Mul<RIJKD<f32>> for f32 {
    type Output = RIJKD<f32>;
    #[inline]
    fn mul(self, rhs: RIJKD<f32>) -> RIJKD<f32> {
        R(self) * rhs
    }
}

impl std::ops::Mul<RIJKD<f64>> for f64 {
    type Output = RIJKD<f64>;
    #[inline]
    fn mul(self, rhs: RIJKD<f64>) -> RIJKD<f64> {
        R(self) * rhs
    }
}

/// Transform composition: the dual-number product rule applied to
/// quaternion-valued parts, `(ar·br, ar·bd + ad·br)`. Composes "apply
/// `rhs`, then `self`" when both operands encode rigid transforms.
impl<T: Float> std::ops::Mul for RIJKD<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let real = self.real() * rhs.real();
        let dual = self.real() * rhs.dual() + self.dual() * rhs.real();
        RIJKD::from_real_dual(real, dual)
    }
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for RIJKD<T> {}
unsafe impl<T: bytemuck::Pod + bytemuck::Zeroable> bytemuck::Pod for RIJKD<T> {}

impl<T: approx::AbsDiffEq> approx::AbsDiffEq for RIJKD<T>
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
            && self.d.abs_diff_eq(&other.d, epsilon)
            && self.di.abs_diff_eq(&other.di, epsilon)
            && self.dj.abs_diff_eq(&other.dj, epsilon)
            && self.dk.abs_diff_eq(&other.dk, epsilon)
    }
}

impl<T: approx::RelativeEq> approx::RelativeEq for RIJKD<T>
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
            && self.d.relative_eq(&other.d, epsilon, max_relative)
            && self.di.relative_eq(&other.di, epsilon, max_relative)
            && self.dj.relative_eq(&other.dj, epsilon, max_relative)
            && self.dk.relative_eq(&other.dk, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RIJKD<f32> {
        RIJKD::new(
            R(1.0),
            I(2.0),
            J(3.0),
            K(4.0),
            D(5.0),
            DI(6.0),
            DJ(7.0),
            DK(8.0),
        )
    }

    #[test]
    fn real_and_dual_views() {
        let dq = sample();
        assert_eq!(RIJK::from_wxyz(1.0, 2.0, 3.0, 4.0), dq.real());
        assert_eq!(RIJK::from_wxyz(5.0, 6.0, 7.0, 8.0), dq.dual());
    }

    #[test]
    fn real_dual_round_trip() {
        let dq = sample();
        assert_eq!(dq, RIJKD::from_real_dual(dq.real(), dq.dual()));
    }

    #[test]
    fn negation_flips_every_component() {
        let dq = sample();
        assert_eq!(
            [-1.0, -2.0, -3.0, -4.0, -5.0, -6.0, -7.0, -8.0],
            (-dq).into_components(),
        );
    }

    #[test]
    fn scaling_reaches_all_eight_components() {
        let dq = sample();
        let expected = [2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0];
        assert_eq!(expected, (dq * 2.0).into_components());
        assert_eq!(expected, (2.0f32 * dq).into_components());
        assert_eq!(expected, (R(2.0) * dq).into_components());
    }

    #[test]
    fn product_follows_the_dual_number_rule() {
        let a = sample();
        let b = sample();
        let p = a * b;
        assert_eq!(a.real() * b.real(), p.real());
        assert_eq!(a.real() * b.dual() + a.dual() * b.real(), p.dual());
    }
}
