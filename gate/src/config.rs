//! Configuration for the gate

use schnorr::VerifierConfig;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::error::Result;

/// Configuration for the gate
///
/// ```toml
/// allowed = ["relayer"]
///
/// [verifier]
/// backend = "k256"
/// compute_budget = 210
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GateConfig {
    /// Identities allowed to request a verification
    pub allowed: Vec<String>,

    /// Verifier settings
    #[serde(default)]
    pub verifier: VerifierConfig,
}

impl GateConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load the configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let file = fs::read_to_string(path)?;
        Self::from_toml_str(&file)
    }
}
