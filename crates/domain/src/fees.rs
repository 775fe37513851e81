use crate::constants::{BPS_TOTAL, DEFAULT_FEE_BPS};
use crate::error::{LaunchError, Result};
use serde::{Deserialize, Serialize};

/// Static swap fees of the launch pool, in bps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticFees {
    /// Fee charged when the paired token is swapped in.
    pub paired_fee_bps: u16,
    /// Fee charged when the launched token is swapped in.
    pub token_fee_bps: u16,
}

impl Default for StaticFees {
    fn default() -> Self {
        Self {
            paired_fee_bps: DEFAULT_FEE_BPS,
            token_fee_bps: DEFAULT_FEE_BPS,
        }
    }
}

impl StaticFees {
    pub fn validate(&self) -> Result<()> {
        for (label, bps) in [
            ("paired_fee_bps", self.paired_fee_bps),
            ("token_fee_bps", self.token_fee_bps),
        ] {
            if u32::from(bps) > BPS_TOTAL {
                return Err(LaunchError::Validation(format!(
                    "{label} must not exceed {BPS_TOTAL}, got {bps}"
                )));
            }
        }
        Ok(())
    }

    /// Fees in hundredths of a bip, as the hook expects.
    pub fn as_ppm(&self) -> (u32, u32) {
        (
            u32::from(self.paired_fee_bps) * 100,
            u32::from(self.token_fee_bps) * 100,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fees() {
        let fees = StaticFees::default();
        assert_eq!(fees.as_ppm(), (10_000, 10_000));
        assert!(fees.validate().is_ok());
    }

    #[test]
    fn test_fee_above_total_rejected() {
        let fees = StaticFees {
            paired_fee_bps: 10_001,
            token_fee_bps: 0,
        };
        assert!(matches!(fees.validate(), Err(LaunchError::Validation(_))));
    }
}
