//! Verifier settings a host may load from its own configuration.

use serde::{Deserialize, Serialize};

/// Curve implementation to run the equation on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// [`curve::K256Curve`]
    #[default]
    K256,
    /// [`curve::ReferenceCurve`]; slow, for cross-checking.
    Reference,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifierConfig {
    pub backend: Backend,
    /// Ceiling in compute units. Absent means unlimited.
    pub compute_budget: Option<u64>,
}
