//! Schnorr commitment verification over secp256k1.
//!
//! This crate checks that the holder of a public key PK also produced a nonce
//! commitment R, by testing `s*G == R + c*PK` for a challenge
//! `c = SHA256(unhex(hex(SHA256(m)) || R_hex)) mod n`. It is meant to sit
//! behind a host that decides who may call it, as a gate in front of actions
//! such as relaying a cross-chain message.
//!
//! # Example
//!
//! ```
//! use schnorr::{Authorization, Identity, verify};
//!
//! let auth = Authorization::granted(Identity::new("relayer"));
//!
//! let commitment = "0427d37b225eea1ee8c632107ea1e7ea133d8c8aae895e5dc51013fe02a1dd71c8\
//!                   aaabeeaf8c1c15c42ff5ccc1550fb1ce9903dc4bf6db57510e586b6e4bb6c06f";
//! let public_key = "04ad9b5314c8c99ee3a1c83c53d6e1452f72710e20fcb3cc0a8c6454e95c79999d\
//!                   9267e3010a31bb5943d47a0d638c2a28cce99401d276557aa1c62c510bf16d02";
//! let signature = "ac71ffc076d3d950ec72eaa4d816c98668ca18cfb34cf14b014d5a8709870fc5";
//!
//! let verified = verify(&auth, commitment, signature, public_key, b"test", "")
//!     .expect("verification failed");
//! assert_eq!(verified.compute_used(), schnorr::FULL_VERIFICATION_COST);
//! ```
//!
//! # Checks
//!
//! - Points use the layout `[04][X:64][Y:64]` in hex; anything else is
//!   [`SchnorrError::MalformedInput`].
//! - R, then PK, must be on the curve, else [`SchnorrError::NotOnCurve`].
//! - A failed equation is [`SchnorrError::SignatureMismatch`].
//! - A host compute ceiling is enforced step by step and reported as
//!   [`SchnorrError::BudgetExceeded`].
//!
//! Every failure is final. Nothing is retried and nothing is persisted.

mod auth;
mod budget;
mod challenge;
mod config;
mod constants;
mod encoding;
mod errors;
mod signatures;
mod verifier;


pub use auth::{Authorization, Authorizer, Identity};
pub use budget::Meter;
pub use challenge::{challenge_digest, derive_challenge};
pub use config::{Backend, VerifierConfig};
pub use constants::{
    COORDINATE_HEX_LEN, COST_ADD, COST_CURVE_CHECK, COST_HASH, COST_MULTIPLY, COST_NORMALIZE,
    DIGEST_SIZE, FULL_VERIFICATION_COST, POINT_HEX_LEN, PREFIX_HEX_LEN, SCALAR_HEX_LEN,
};
pub use encoding::{EncodedPoint, decode_scalar};
pub use errors::{Input, PointRole, Result, SchnorrError};
pub use signatures::SignatureTuple;
pub use verifier::{Verified, Verifier, verify};
