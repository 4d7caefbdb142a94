//! Caller identity and the capability token that proves it was authorized.

use core::fmt::{self, Display, Formatter};
use serde::{Deserialize, Serialize};

/// Opaque principal on whose behalf a verification runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identity {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Evidence that a host checked `identity` before asking for a verification.
///
/// The verifier never inspects how the check was done. Holding one of these
/// is the precondition for calling [`crate::Verifier::verify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorization {
    identity: Identity,
}

impl Authorization {
    /// Issue a token for `identity`. Hosts call this once their own
    /// authorization check has passed, usually from an [`Authorizer`].
    pub fn granted(identity: Identity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

/// Host policy deciding who may invoke the verifier.
pub trait Authorizer {
    type Error;

    fn authorize(&self, identity: &Identity) -> Result<Authorization, Self::Error>;
}
