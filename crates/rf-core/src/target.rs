//! Caller-supplied ration target.

use crate::error::{CoreError, CoreResult};
use crate::numeric::ensure_finite;
use serde::{Deserialize, Serialize};

/// What the caller asks for: a desired output level, an acceptance band
/// around it, and an optional spend ceiling.
///
/// The band exists because pinning output to one exact value is often
/// infeasible while a nearby value is not; the solver is free to place the
/// realized output anywhere in `[target - low_band, target + high_band]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RationTarget {
    /// Desired output quantity (litres/day for the dairy model)
    pub target_output: f64,
    /// Accepted shortfall below the target
    pub low_band: f64,
    /// Accepted overshoot above the target
    pub high_band: f64,
    /// Optional ceiling on total feed cost per day
    pub max_cost: Option<f64>,
}

impl RationTarget {
    /// Target with the default acceptance band (2 below, 5 above).
    pub fn new(target_output: f64) -> Self {
        Self {
            target_output,
            low_band: 2.0,
            high_band: 5.0,
            max_cost: None,
        }
    }

    pub fn with_band(mut self, low_band: f64, high_band: f64) -> Self {
        self.low_band = low_band;
        self.high_band = high_band;
        self
    }

    pub fn with_max_cost(mut self, max_cost: f64) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    pub fn validate(&self) -> CoreResult<()> {
        let target = ensure_finite(self.target_output, "target output")?;
        if target <= 0.0 {
            return Err(CoreError::InvalidArg {
                what: "target output must be positive",
            });
        }
        let low = ensure_finite(self.low_band, "low band")?;
        let high = ensure_finite(self.high_band, "high band")?;
        if low < 0.0 || high < 0.0 {
            return Err(CoreError::InvalidArg {
                what: "band widths must be non-negative",
            });
        }
        if let Some(max_cost) = self.max_cost {
            let max_cost = ensure_finite(max_cost, "max cost")?;
            if max_cost <= 0.0 {
                return Err(CoreError::InvalidArg {
                    what: "cost ceiling must be positive",
                });
            }
        }
        Ok(())
    }

    /// Output interval `[lo, hi]`, with `lo` clamped to the domain floor.
    pub fn output_band(&self, min_output_floor: f64) -> (f64, f64) {
        let lo = (self.target_output - self.low_band).max(min_output_floor);
        let hi = self.target_output + self.high_band;
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_band_matches_construction() {
        let target = RationTarget::new(15.0);
        assert_eq!(target.output_band(10.0), (13.0, 20.0));
    }

    #[test]
    fn band_lower_edge_clamps_to_floor() {
        let target = RationTarget::new(11.0);
        let (lo, hi) = target.output_band(10.0);
        assert_eq!(lo, 10.0);
        assert_eq!(hi, 16.0);
    }

    #[test]
    fn validates_target_positive() {
        assert!(RationTarget::new(0.0).validate().is_err());
        assert!(RationTarget::new(-3.0).validate().is_err());
        assert!(RationTarget::new(f64::NAN).validate().is_err());
        assert!(RationTarget::new(15.0).validate().is_ok());
    }

    #[test]
    fn validates_bands_and_ceiling() {
        assert!(RationTarget::new(15.0).with_band(-1.0, 5.0).validate().is_err());
        assert!(RationTarget::new(15.0).with_max_cost(0.0).validate().is_err());
        assert!(
            RationTarget::new(15.0)
                .with_max_cost(10_000.0)
                .validate()
                .is_ok()
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn band_is_well_ordered(
            target in 10.0_f64..30.0,
            low in 0.0_f64..5.0,
            high in 0.0_f64..10.0,
            floor in 0.0_f64..10.0,
        ) {
            let t = RationTarget::new(target).with_band(low, high);
            prop_assert!(t.validate().is_ok());
            let (lo, hi) = t.output_band(floor);
            prop_assert!(lo <= hi);
            prop_assert!(lo >= floor);
            prop_assert!(hi >= target);
        }
    }
}
