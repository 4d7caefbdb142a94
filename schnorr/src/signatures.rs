//! The per-call verification request.

use curve::Scalar;

use crate::encoding::{EncodedPoint, decode_scalar};
use crate::errors::{Input, Result};

/// One verification request after structural decoding.
///
/// The pair `(R, s)` satisfies `s*G == R + c*PK` when valid, where
/// `c` is derived from `message` and the encoded `R`. The memo travels with
/// the request but plays no part in the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureTuple<'a> {
    /// The nonce commitment R.
    pub commitment: EncodedPoint<'a>,
    /// The response scalar s.
    pub s: Scalar,
    /// The signer's public key PK.
    pub public_key: EncodedPoint<'a>,
    /// The signed payload.
    pub message: &'a [u8],
    /// Opaque passthrough.
    pub memo: &'a str,
}

impl<'a> SignatureTuple<'a> {
    /// Decode all string inputs. Only lengths, hex digits, the point prefix
    /// and the scalar range are checked here.
    pub fn parse(
        commitment: &'a str,
        signature: &'a str,
        public_key: &'a str,
        message: &'a [u8],
        memo: &'a str,
    ) -> Result<Self> {
        let commitment = EncodedPoint::decode(commitment, Input::Commitment)?;
        let s = decode_scalar(signature)?;
        let public_key = EncodedPoint::decode(public_key, Input::PublicKey)?;

        Ok(Self {
            commitment,
            s,
            public_key,
            message,
            memo,
        })
    }
}
