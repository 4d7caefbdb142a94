//! Authorization and relay of verified requests.

use std::collections::HashSet;

use curve::{CurveArithmetic, K256Curve, ReferenceCurve};
use schnorr::{Authorization, Authorizer, Backend, Identity, Verified, Verifier, VerifierConfig};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::GateConfig;
use crate::error::{GateError, Result};

/// A request to relay `message` once its signature checks out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayRequest {
    pub identity: Identity,
    /// R, uncompressed hex.
    pub commitment: String,
    /// s, 64 hex characters.
    pub signature: String,
    /// PK, uncompressed hex.
    pub public_key: String,
    pub message: Vec<u8>,
    #[serde(default)]
    pub memo: String,
}

/// Notification handed back to the caller for a verified request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub identity: Identity,
    pub memo: String,
    pub compute_used: u64,
}

#[derive(Debug, Clone)]
pub struct Gate {
    allowed: HashSet<Identity>,
    verifier: VerifierConfig,
}

impl Gate {
    pub fn new(config: GateConfig) -> Self {
        Self {
            allowed: config.allowed.into_iter().map(Identity::new).collect(),
            verifier: config.verifier,
        }
    }

    /// Authorize the caller, verify its signature and issue a receipt.
    pub fn relay(&self, request: &RelayRequest) -> Result<Receipt> {
        let auth = self.authorize(&request.identity)?;

        let verified = match self.verifier.backend {
            Backend::K256 => self.verify_with(K256Curve, &auth, request),
            Backend::Reference => self.verify_with(ReferenceCurve, &auth, request),
        }
        .inspect_err(|err| warn!(identity = %request.identity, "relay refused: {err}"))?;

        info!(
            identity = %request.identity,
            compute_used = verified.compute_used(),
            "relay accepted"
        );

        Ok(Receipt {
            identity: request.identity.clone(),
            memo: request.memo.clone(),
            compute_used: verified.compute_used(),
        })
    }

    fn verify_with<C: CurveArithmetic>(
        &self,
        curve: C,
        auth: &Authorization,
        request: &RelayRequest,
    ) -> schnorr::Result<Verified> {
        Verifier::new(curve)
            .with_compute_budget(self.verifier.compute_budget)
            .verify(
                auth,
                &request.commitment,
                &request.signature,
                &request.public_key,
                &request.message,
                &request.memo,
            )
    }
}

impl Authorizer for Gate {
    type Error = GateError;

    fn authorize(&self, identity: &Identity) -> Result<Authorization> {
        if self.allowed.contains(identity) {
            Ok(Authorization::granted(identity.clone()))
        } else {
            warn!(%identity, "unauthorized caller");
            Err(GateError::Unauthorized(identity.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schnorr::{FULL_VERIFICATION_COST, SchnorrError};

    const R_HEX: &str = "0427d37b225eea1ee8c632107ea1e7ea133d8c8aae895e5dc51013fe02a1dd71c8aaabeeaf8c1c15c42ff5ccc1550fb1ce9903dc4bf6db57510e586b6e4bb6c06f";
    const PK_HEX: &str = "04ad9b5314c8c99ee3a1c83c53d6e1452f72710e20fcb3cc0a8c6454e95c79999d9267e3010a31bb5943d47a0d638c2a28cce99401d276557aa1c62c510bf16d02";
    const S_HEX: &str = "ac71ffc076d3d950ec72eaa4d816c98668ca18cfb34cf14b014d5a8709870fc5";

    fn gate(backend: Backend, compute_budget: Option<u64>) -> Gate {
        Gate::new(GateConfig {
            allowed: vec!["relayer".into()],
            verifier: VerifierConfig {
                backend,
                compute_budget,
            },
        })
    }

    fn request(identity: &str, message: &[u8]) -> RelayRequest {
        RelayRequest {
            identity: identity.into(),
            commitment: R_HEX.into(),
            signature: S_HEX.into(),
            public_key: PK_HEX.into(),
            message: message.to_vec(),
            memo: "to chain B".into(),
        }
    }

    #[test]
    fn test_authorize() {
        let gate = gate(Backend::K256, None);
        let auth = gate.authorize(&"relayer".into()).expect("allowed");
        assert_eq!(auth.identity().as_str(), "relayer");

        assert!(matches!(
            gate.authorize(&"mallory".into()),
            Err(GateError::Unauthorized(id)) if id.as_str() == "mallory"
        ));
    }

    #[test]
    fn test_relay_issues_receipt() {
        for backend in [Backend::K256, Backend::Reference] {
            let receipt = gate(backend, None)
                .relay(&request("relayer", b"test"))
                .expect("relay");
            assert_eq!(receipt.identity.as_str(), "relayer");
            assert_eq!(receipt.memo, "to chain B");
            assert_eq!(receipt.compute_used, FULL_VERIFICATION_COST);
        }
    }

    #[test]
    fn test_unauthorized_caller_is_not_verified() {
        // Budget 0 would fail any verification, so only the auth check can run.
        let result = gate(Backend::K256, Some(0)).relay(&request("mallory", b"test"));
        assert!(matches!(result, Err(GateError::Unauthorized(_))));
    }

    #[test]
    fn test_relay_rejects_bad_signature() {
        let result = gate(Backend::K256, None).relay(&request("relayer", b"Test"));
        assert!(matches!(
            result,
            Err(GateError::Verification(SchnorrError::SignatureMismatch))
        ));
    }

    #[test]
    fn test_relay_respects_budget() {
        let result = gate(Backend::K256, Some(50)).relay(&request("relayer", b"test"));
        assert!(matches!(
            result,
            Err(GateError::Verification(SchnorrError::BudgetExceeded { limit: 50, .. }))
        ));
    }
}
