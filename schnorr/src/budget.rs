//! Deterministic compute metering.

use crate::errors::{Result, SchnorrError};

/// Running total of compute units for one verification.
///
/// Every step is charged before it runs. A charge that would cross the limit
/// fails with [`SchnorrError::BudgetExceeded`] and leaves the total unchanged,
/// so the same inputs under the same limit always stop at the same step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meter {
    limit: Option<u64>,
    used: u64,
}

impl Meter {
    /// `None` means no ceiling.
    pub fn new(limit: Option<u64>) -> Self {
        Self { limit, used: 0 }
    }

    pub fn unlimited() -> Self {
        Self::new(None)
    }

    pub fn charge(&mut self, units: u64) -> Result<()> {
        let required = self.used.saturating_add(units);
        if let Some(limit) = self.limit {
            if required > limit {
                return Err(SchnorrError::BudgetExceeded { limit, required });
            }
        }
        self.used = required;
        Ok(())
    }

    #[inline]
    pub fn used(&self) -> u64 {
        self.used
    }

    #[inline]
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited() {
        let mut meter = Meter::unlimited();
        meter.charge(u64::MAX).expect("no limit");
        meter.charge(1).expect("saturates");
        assert_eq!(meter.used(), u64::MAX);
    }

    #[test]
    fn test_exact_limit() {
        let mut meter = Meter::new(Some(10));
        meter.charge(4).expect("within");
        meter.charge(6).expect("exactly at limit");
        assert_eq!(meter.used(), 10);
        assert_eq!(
            meter.charge(1),
            Err(SchnorrError::BudgetExceeded {
                limit: 10,
                required: 11
            })
        );
        assert_eq!(meter.used(), 10);
    }

    #[test]
    fn test_zero_limit() {
        let mut meter = Meter::new(Some(0));
        assert_eq!(meter.limit(), Some(0));
        meter.charge(0).expect("free step");
        assert!(meter.charge(1).is_err());
    }
}
