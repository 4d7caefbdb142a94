//! Host gate in front of the Schnorr verifier.
//!
//! A [`Gate`] owns the allow-list of identities that may request a
//! verification, picks the curve backend from its configuration and hands
//! back a [`Receipt`] for every signature that passes.

pub mod cmd;
mod config;
mod error;
mod gate;

pub use config::GateConfig;
pub use error::GateError;
pub use gate::{Gate, Receipt, RelayRequest};
