//! The verification equation and the public entry points.

use curve::{Affine, CurveArithmetic, K256Curve};
use tracing::{debug, warn};

use crate::auth::Authorization;
use crate::budget::Meter;
use crate::challenge::derive_challenge;
use crate::constants::{COST_ADD, COST_CURVE_CHECK, COST_HASH, COST_MULTIPLY, COST_NORMALIZE};
use crate::errors::{PointRole, Result, SchnorrError};
use crate::signatures::SignatureTuple;

/// Marker for a signature that passed every check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verified {
    compute_used: u64,
}

impl Verified {
    /// Compute units the verification consumed.
    pub fn compute_used(&self) -> u64 {
        self.compute_used
    }
}

/// Schnorr verifier over a pluggable curve implementation.
///
/// Holds no per-call state, so one instance can serve concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verifier<C> {
    curve: C,
    compute_budget: Option<u64>,
}

impl<C: CurveArithmetic> Verifier<C> {
    pub fn new(curve: C) -> Self {
        Self {
            curve,
            compute_budget: None,
        }
    }

    /// Apply a compute ceiling to every verification. `None` lifts it.
    pub fn with_compute_budget(mut self, budget: Option<u64>) -> Self {
        self.compute_budget = budget;
        self
    }

    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// Verify a signature on behalf of an authorized caller.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    ///
    /// 1. decode R, s and PK
    /// 2. R is on the curve
    /// 3. PK is on the curve
    /// 4. `s*G == R + c*PK`
    ///
    /// `memo` is carried along untouched and never affects the outcome.
    pub fn verify(
        &self,
        auth: &Authorization,
        commitment: &str,
        signature: &str,
        public_key: &str,
        message: &[u8],
        memo: &str,
    ) -> Result<Verified> {
        let result = SignatureTuple::parse(commitment, signature, public_key, message, memo)
            .and_then(|tuple| self.verify_tuple(&tuple));

        match &result {
            Ok(verified) => debug!(
                identity = %auth.identity(),
                backend = self.curve.name(),
                compute_used = verified.compute_used,
                "signature verified"
            ),
            Err(
                err @ (SchnorrError::BudgetExceeded { .. }
                | SchnorrError::NotOnCurve(PointRole::LeftSide | PointRole::RightSide)),
            ) => warn!(
                identity = %auth.identity(),
                backend = self.curve.name(),
                "verification aborted: {err}"
            ),
            Err(err) => debug!(
                identity = %auth.identity(),
                backend = self.curve.name(),
                "signature rejected: {err}"
            ),
        }

        result
    }

    /// Run the curve checks and the equation on an already decoded request.
    pub fn verify_tuple(&self, tuple: &SignatureTuple<'_>) -> Result<Verified> {
        let curve = &self.curve;
        let mut meter = Meter::new(self.compute_budget);

        meter.charge(COST_CURVE_CHECK)?;
        let r = tuple.commitment.validate(curve, PointRole::Commitment)?;
        meter.charge(COST_CURVE_CHECK)?;
        let pk = tuple.public_key.validate(curve, PointRole::PublicKey)?;

        meter.charge(2 * COST_HASH)?;
        let c = derive_challenge(tuple.message, &tuple.commitment)?;

        // left = s*G
        meter.charge(COST_MULTIPLY + COST_NORMALIZE)?;
        let left = curve.normalize(&curve.multiply(&curve.generator(), &tuple.s));
        meter.charge(COST_CURVE_CHECK)?;
        ensure_on_curve(curve, &left, PointRole::LeftSide)?;

        // s = 0 collapses the left side to the identity; no valid signer produces it.
        if left.is_infinity() {
            return Err(SchnorrError::SignatureMismatch);
        }

        // right = c*PK + R
        meter.charge(COST_MULTIPLY + COST_ADD + COST_NORMALIZE)?;
        let right = curve.normalize(&curve.add(&curve.multiply(&pk, &c), &r));
        meter.charge(COST_CURVE_CHECK)?;
        ensure_on_curve(curve, &right, PointRole::RightSide)?;

        if left != right {
            return Err(SchnorrError::SignatureMismatch);
        }

        Ok(Verified {
            compute_used: meter.used(),
        })
    }
}

// Guards against a faulty arithmetic implementation.
fn ensure_on_curve<C: CurveArithmetic>(curve: &C, point: &Affine, role: PointRole) -> Result<()> {
    if curve.is_on_curve(point) {
        Ok(())
    } else {
        Err(SchnorrError::NotOnCurve(role))
    }
}

/// Verify with the production curve and no compute ceiling.
///
/// Equivalent to `Verifier::new(K256Curve).verify(..)`.
pub fn verify(
    auth: &Authorization,
    commitment: &str,
    signature: &str,
    public_key: &str,
    message: &[u8],
    memo: &str,
) -> Result<Verified> {
    Verifier::new(K256Curve).verify(auth, commitment, signature, public_key, message, memo)
}
