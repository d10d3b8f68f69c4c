//! Animal-level formulation limits.

use crate::error::{CoreError, CoreResult};
use crate::numeric::{ensure_finite, ensure_non_negative};
use serde::{Deserialize, Serialize};

/// Physiological limits that bound every formulation, independent of the
/// ingredient catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnimalLimits {
    /// Ceiling on total dry-matter intake across all ingredients (kg/day)
    pub max_total_intake_kg: f64,
    /// Floor for the output band's lower edge; must sit below any sane target
    pub min_output_floor: f64,
}

impl Default for AnimalLimits {
    fn default() -> Self {
        Self {
            max_total_intake_kg: 8.25,
            min_output_floor: 10.0,
        }
    }
}

impl AnimalLimits {
    pub fn validate(&self) -> CoreResult<()> {
        let ceiling = ensure_finite(self.max_total_intake_kg, "total intake ceiling")?;
        if ceiling <= 0.0 {
            return Err(CoreError::InvalidArg {
                what: "total intake ceiling must be positive",
            });
        }
        ensure_non_negative(self.min_output_floor, "minimum output floor")?;
        Ok(())
    }
}
