//! Typed quaternion and dual-quaternion algebra for rigid-body pose.
//!
//! Every basis element of the algebra (the real unit, the quaternion
//! imaginary units `i`, `j`, `k`, the nilpotent dual unit `ε`, and the
//! dual-imaginary units `εi`, `εj`, `εk`) is its own wrapper type, and
//! every product between two of them is a separate `Mul` impl generated
//! from one multiplication table ([`unit`]). The aggregates are built on
//! top of those rules rather than on ad hoc float formulas, so the
//! Hamilton product, the vector cross product, and the dual-quaternion
//! product cannot drift out of agreement with the basis algebra.
//!
//! Types:
//! - [`R`], [`I`], [`J`], [`K`], [`D`], [`DI`], [`DJ`], [`DK`]: unit scalars
//! - [`IJK`]: imaginary 3-vector
//! - [`RIJK`]: quaternion
//! - [`RD`]: dual number
//! - [`RIJKD`]: dual quaternion (rigid transform)
//! - [`Reciprocal`], [`Homogeneous`]: deferred division
//!
//! Products:
//! - [`Dot`], [`Cross`]: signed vector products derived from the table
//! - `Mul`: Hamilton product on [`RIJK`], transform composition on [`RIJKD`]
//!
//! Norm-based operations:
//! - [`Conjugate`], [`Norm2`], [`Norm`]
//! - [`Unitize`]: normalization with the division deferred
//!
//! Normalizing produces a [`Homogeneous`] value, a numerator paired with
//! the reciprocal of its denominator, and chains of such values compose
//! by multiplying numerators and denominators independently. Converting
//! back to a concrete value is the only point where a floating-point
//! division happens.

pub mod unit;

mod dual;
mod dual_quaternion;
mod homogeneous;
mod quaternion;
mod vector;

pub use dual::RD;
pub use dual_quaternion::RIJKD;
pub use homogeneous::{Homogeneous, Reciprocal, HR, HRIJK};
pub use quaternion::RIJK;
pub use unit::{D, DI, DJ, DK, I, J, K, R};
pub use vector::IJK;

pub trait Dot<Rhs> {
    type Output;
    fn dot(self, rhs: Rhs) -> Self::Output;
}

pub trait Cross<Rhs> {
    type Output;
    fn cross(self, rhs: Rhs) -> Self::Output;
}

pub trait Conjugate {
    type Output;
    fn conj(self) -> Self::Output;
}

pub trait Norm2 {
    type Output;
    fn norm2(self) -> Self::Output;
}

pub trait Norm {
    type Output;
    fn norm(self) -> Self::Output;
}

/// Normalization with the division deferred.
///
/// Implementations pair the value with the reciprocal of its length
/// instead of dividing eagerly. Unitizing a zero-length value stores a
/// zero denominator; materializing it then divides by zero and the
/// non-finite result propagates per IEEE-754. This is not an error.
pub trait Unitize {
    type Output;
    fn unit(self) -> Self::Output;
}

/// The annihilated product.
///
/// Any product carrying `ε²` as a factor vanishes identically, with no
/// float left to tag. Those products return `Zero` rather than a
/// zero-valued unit scalar.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct Zero;

impl<T> std::ops::Add<T> for Zero {
    type Output = T;
    fn add(self, rhs: T) -> T {
        rhs
    }
}

impl<T: std::ops::Neg<Output = T>> std::ops::Sub<T> for Zero {
    type Output = T;
    fn sub(self, rhs: T) -> T {
        -rhs
    }
}

impl<T> std::ops::Mul<T> for Zero {
    type Output = Zero;
    fn mul(self, _rhs: T) -> Zero {
        Zero
    }
}
