//! Decoding and curve validation of the hex-encoded inputs.

use curve::{Affine, CurveArithmetic, Scalar, UNCOMPRESSED_LEN};

use crate::constants::{POINT_HEX_LEN, SCALAR_HEX_LEN};
use crate::errors::{Input, PointRole, Result, SchnorrError};

/// A point as the caller sent it, together with its decoded coordinates.
///
/// The caller's string is kept because the challenge hashes it as supplied.
/// Decoding is purely structural: nothing here has touched the curve yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedPoint<'a> {
    hex: &'a str,
    point: Affine,
}

impl<'a> EncodedPoint<'a> {
    /// Decode a `[prefix:2][X:64][Y:64]` hex string. The prefix must be `04`.
    pub fn decode(hex: &'a str, input: Input) -> Result<Self> {
        if hex.len() != POINT_HEX_LEN {
            return Err(malformed(input, "expected 130 hex characters"));
        }

        let mut bytes = [0u8; UNCOMPRESSED_LEN];
        hex::decode_to_slice(hex, &mut bytes).map_err(|_| malformed(input, "invalid hex"))?;

        let point =
            Affine::from_uncompressed(&bytes).ok_or(malformed(input, "prefix must be 04"))?;

        Ok(Self { hex, point })
    }

    /// The string exactly as supplied.
    #[inline]
    pub fn as_hex(&self) -> &'a str {
        self.hex
    }

    /// Decoded coordinates; possibly off the curve.
    #[inline]
    pub fn point(&self) -> &Affine {
        &self.point
    }

    /// Run the curve-membership check and load the point into `curve`.
    pub fn validate<C: CurveArithmetic>(&self, curve: &C, role: PointRole) -> Result<C::Point> {
        if !curve.is_on_curve(&self.point) {
            return Err(SchnorrError::NotOnCurve(role));
        }
        curve
            .lift(&self.point)
            .ok_or(SchnorrError::NotOnCurve(role))
    }
}

/// Decode a 64-character big-endian hex scalar.
///
/// Values at or above the group order are rejected rather than reduced, so
/// every accepted signature has exactly one encoding.
pub fn decode_scalar(hex: &str) -> Result<Scalar> {
    if hex.len() != SCALAR_HEX_LEN {
        return Err(malformed(Input::Signature, "expected 64 hex characters"));
    }

    let mut bytes = [0u8; 32];
    hex::decode_to_slice(hex, &mut bytes).map_err(|_| malformed(Input::Signature, "invalid hex"))?;

    Scalar::from_canonical_be_bytes(&bytes)
        .ok_or(malformed(Input::Signature, "not below the group order"))
}

#[inline]
fn malformed(input: Input, reason: &'static str) -> SchnorrError {
    SchnorrError::MalformedInput { input, reason }
}
