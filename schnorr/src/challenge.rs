//! Fiat-Shamir challenge derivation.
//!
//! ```text
//! inner = SHA256(message)
//! outer = SHA256(unhex(hex(inner) || R_hex))
//! c     = int_be(outer) mod n
//! ```
//!
//! `R_hex` is the commitment string exactly as the caller supplied it. The
//! trip through the hex domain is part of the protocol that signers
//! implement, so it is performed literally.

use curve::Scalar;
use sha2::{Digest, Sha256};

use crate::constants::DIGEST_SIZE;
use crate::encoding::EncodedPoint;
use crate::errors::{Input, Result, SchnorrError};

/// The raw 32-byte outer digest.
pub fn challenge_digest(message: &[u8], commitment_hex: &str) -> Result<[u8; DIGEST_SIZE]> {
    let inner = Sha256::digest(message);

    let mut input_hex = hex::encode(inner);
    input_hex.push_str(commitment_hex);

    let input = hex::decode(&input_hex).map_err(|_| SchnorrError::MalformedInput {
        input: Input::Commitment,
        reason: "challenge input is not valid hex",
    })?;

    Ok(Sha256::digest(&input).into())
}

/// The challenge scalar `c` for `message` under `commitment`.
///
/// The digest is read as a big-endian integer and reduced modulo the group
/// order. Multiplying a point by the reduced value gives the same result as
/// multiplying by the full 256-bit integer.
pub fn derive_challenge(message: &[u8], commitment: &EncodedPoint<'_>) -> Result<Scalar> {
    let digest = challenge_digest(message, commitment.as_hex())?;
    Ok(Scalar::from_be_bytes_reduced(&digest))
}
