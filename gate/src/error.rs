use schnorr::{Identity, SchnorrError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GateError {
    #[error("identity {0} is not allowed to relay")]
    Unauthorized(Identity),

    #[error("verification failed: {0}")]
    Verification(#[from] SchnorrError),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GateError>;
