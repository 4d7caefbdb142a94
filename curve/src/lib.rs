//! secp256k1 group arithmetic behind a narrow capability interface.
//!
//! This crate provides the base and scalar fields, affine points with a
//! reference implementation of the group law, and the [`CurveArithmetic`]
//! trait through which verifiers consume curve operations. Two
//! implementations are shipped: [`K256Curve`], backed by the `k256` crate,
//! and [`ReferenceCurve`], which uses only the formulas in this crate.

mod affine;
mod arithmetic;
mod basefield;
mod group;
mod random;
mod reference;
mod scalarfield;
mod secp256k1;

pub use affine::{Affine, UNCOMPRESSED_LEN, UNCOMPRESSED_TAG};
pub use arithmetic::CurveArithmetic;
pub use basefield::FieldElement;
pub use group::{Group, ScalarBits};
pub use random::RandomField;
pub use reference::ReferenceCurve;
pub use scalarfield::Scalar;
pub use secp256k1::K256Curve;
