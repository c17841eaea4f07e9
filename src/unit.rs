//! The eight unit scalar types and their multiplication table.
//!
//! Each type wraps one float and tags which basis element that float
//! multiplies. Addition and subtraction are only defined within a tag;
//! multiplication between tags is defined pair by pair in the table at
//! the bottom of this module, which is the sole source of truth for the
//! algebra. Derivation rules:
//!
//! - `i² = j² = k² = -1`, `ij = k`, `jk = i`, `ki = j`, mirrored pairs
//!   negate
//! - `ε² = 0`, and `ε` commutes with `i`, `j`, `k`
//! - a product with one `ε` factor applies the quaternion rule under the
//!   dual tag, e.g. `i·εj = ε(ij) = εk`
//! - a product with two `ε` factors is [`Zero`]

use crate::Zero;
use num_traits::Float;

macro_rules! units {
    ($($(#[$attr:meta])* $unit:ident),* $(,)?) => {$(
        $(#[$attr])*
        #[repr(C)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
        #[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
        pub struct $unit<T>(pub T);

        impl<T> $unit<T> {
            #[inline]
            pub const fn new(value: T) -> Self {
                Self(value)
            }
        }

        impl<T: Float> std::ops::Neg for $unit<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl<T: Float> std::ops::Add for $unit<T> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl<T: Float> std::ops::Sub for $unit<T> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl<T: Float> std::ops::Mul<T> for $unit<T> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: T) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl std::ops::Mul<$unit<f32>> for f32 {
            type Output = $unit<f32>;
            #[inline]
            fn mul(self, rhs: $unit<f32>) -> $unit<f32> {
                $unit(self * rhs.0)
            }
        }

        impl std::ops::Mul<$unit<f64>> for f64 {
            type Output = $unit<f64>;
            #[inline]
            fn mul(self, rhs: $unit<f64>) -> $unit<f64> {
                $unit(self * rhs.0)
            }
        }

        unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $unit<T> {}
        unsafe impl<T: bytemuck::Pod + bytemuck::Zeroable> bytemuck::Pod for $unit<T> {}

        impl<T: approx::AbsDiffEq> approx::AbsDiffEq for $unit<T> {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> T::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
                self.0.abs_diff_eq(&other.0, epsilon)
            }
        }

        impl<T: approx::RelativeEq> approx::RelativeEq for $unit<T> {
            fn default_max_relative() -> T::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
                self.0.relative_eq(&other.0, epsilon, max_relative)
            }
        }
    )*};
}

units! {
    /// Real unit: `w`
    R,
    /// Quaternion unit i: `xi`
    I,
    /// Quaternion unit j: `yj`
    J,
    /// Quaternion unit k: `zk`
    K,
    /// Dual unit ε: `wε`
    D,
    /// Dual quaternion unit εi: `xεi`
    DI,
    /// Dual quaternion unit εj: `yεj`
    DJ,
    /// Dual quaternion unit εk: `zεk`
    DK,
}

macro_rules! unit_mul {
    ($($lhs:ident * $rhs:ident => $sign:tt $out:ident),* $(,)?) => {$(
        impl<T: Float> std::ops::Mul<$rhs<T>> for $lhs<T> {
            type Output = $out<T>;
            #[inline]
            fn mul(self, rhs: $rhs<T>) -> $out<T> {
                unit_mul!(@product $sign $out, self.0 * rhs.0)
            }
        }
    )*};
    (@product + $out:ident, $x:expr) => { $out($x) };
    (@product - $out:ident, $x:expr) => { $out(-($x)) };
}

macro_rules! unit_mul_zero {
    ($($lhs:ident * $rhs:ident),* $(,)?) => {$(
        impl<T: Float> std::ops::Mul<$rhs<T>> for $lhs<T> {
            type Output = Zero;
            #[inline]
            fn mul(self, _rhs: $rhs<T>) -> Zero {
                Zero
            }
        }
    )*};
}

unit_mul! {
    // the real unit is the identity and scales every tag on either side
    R * R => + R,
    R * I => + I,     I * R => + I,
    R * J => + J,     J * R => + J,
    R * K => + K,     K * R => + K,
    R * D => + D,     D * R => + D,
    R * DI => + DI,   DI * R => + DI,
    R * DJ => + DJ,   DJ * R => + DJ,
    R * DK => + DK,   DK * R => + DK,

    // quaternion sub-algebra
    I * I => - R,
    J * J => - R,
    K * K => - R,
    I * J => + K,     J * I => - K,
    J * K => + I,     K * J => - I,
    K * I => + J,     I * K => - J,

    // ε commutes with the imaginary units
    D * I => + DI,    I * D => + DI,
    D * J => + DJ,    J * D => + DJ,
    D * K => + DK,    K * D => + DK,

    // one ε factor: the quaternion rule carried under the dual tag
    I * DI => - D,    DI * I => - D,
    J * DJ => - D,    DJ * J => - D,
    K * DK => - D,    DK * K => - D,
    I * DJ => + DK,   DJ * I => - DK,
    DI * J => + DK,   J * DI => - DK,
    J * DK => + DI,   DK * J => - DI,
    DJ * K => + DI,   K * DJ => - DI,
    K * DI => + DJ,   DI * K => - DJ,
    DK * I => + DJ,   I * DK => - DJ,
}

unit_mul_zero! {
    // two ε factors
    D * D,   D * DI,   D * DJ,   D * DK,
    DI * D,  DI * DI,  DI * DJ,  DI * DK,
    DJ * D,  DJ * DI,  DJ * DJ,  DJ * DK,
    DK * D,  DK * DI,  DK * DJ,  DK * DK,
}

impl<T: Float> std::ops::Div for R<T> {
    type Output = R<T>;
    #[inline]
    fn div(self, rhs: R<T>) -> R<T> {
        R(self.0 / rhs.0)
    }
}

impl<T: Float> std::ops::Div<R<T>> for D<T> {
    type Output = D<T>;
    #[inline]
    fn div(self, rhs: R<T>) -> D<T> {
        D(self.0 / rhs.0)
    }
}
