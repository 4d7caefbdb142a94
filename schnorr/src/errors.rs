//! Error types for the verification gate.

use core::fmt::{self, Display, Formatter};
use thiserror::Error;

/// Which caller-supplied string failed to decode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Input {
    Commitment,
    Signature,
    PublicKey,
}

impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Input::Commitment => "commitment point",
            Input::Signature => "signature scalar",
            Input::PublicKey => "public key",
        })
    }
}

/// Which point failed a curve-membership check.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointRole {
    /// The nonce commitment R.
    Commitment,
    /// The signer's public key PK.
    PublicKey,
    /// The computed `s*G`.
    LeftSide,
    /// The computed `R + c*PK`.
    RightSide,
}

impl Display for PointRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PointRole::Commitment => "commitment point",
            PointRole::PublicKey => "public key",
            PointRole::LeftSide => "left side s*G",
            PointRole::RightSide => "right side R + c*PK",
        })
    }
}

/// Errors that end a verification. None of them is retried.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SchnorrError {
    /// A string has the wrong length, prefix or digits, or a scalar is not
    /// below the group order.
    #[error("malformed {input}: {reason}")]
    MalformedInput { input: Input, reason: &'static str },

    /// A decoded or computed point does not lie on the curve.
    ///
    /// For [`PointRole::LeftSide`] and [`PointRole::RightSide`] this points at
    /// a faulty arithmetic implementation rather than a bad signature.
    #[error("{0} is not on the curve")]
    NotOnCurve(PointRole),

    /// Both inputs are well formed but `s*G != R + c*PK`.
    #[error("invalid signature")]
    SignatureMismatch,

    /// The host's compute ceiling would be crossed by the next step.
    #[error("compute budget exceeded: {required} units required, limit is {limit}")]
    BudgetExceeded { limit: u64, required: u64 },
}

pub type Result<T> = core::result::Result<T, SchnorrError>;
