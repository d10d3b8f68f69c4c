//! Nutrient requirements: maintenance plus production.

use crate::error::{CoreError, CoreResult};
use crate::numeric::ensure_non_negative;
use crate::nutrient::Nutrient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Requirement for one nutrient kind.
///
/// Total requirement at output level `y` is `maintenance + per_unit_output * y`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NutrientRequirement {
    /// Baseline metabolic need, independent of production
    pub maintenance: f64,
    /// Additional need per unit of output produced
    pub per_unit_output: f64,
}

/// Per-nutrient requirement model for a lactating animal.
///
/// Pure lookup-and-evaluate; holds no request state. Validates that every
/// maintenance value and coefficient is finite and non-negative at
/// construction, so evaluation only has to check its own input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementModel {
    requirements: BTreeMap<Nutrient, NutrientRequirement>,
}

impl RequirementModel {
    pub fn new(
        requirements: impl IntoIterator<Item = (Nutrient, NutrientRequirement)>,
    ) -> CoreResult<Self> {
        let requirements: BTreeMap<_, _> = requirements.into_iter().collect();
        for req in requirements.values() {
            ensure_non_negative(req.maintenance, "maintenance requirement")?;
            ensure_non_negative(req.per_unit_output, "per-unit-output requirement")?;
        }
        for nutrient in Nutrient::ALL {
            if !requirements.contains_key(&nutrient) {
                return Err(CoreError::InvalidArg {
                    what: "requirement model must cover every tracked nutrient",
                });
            }
        }
        Ok(Self { requirements })
    }

    /// Total requirement for `nutrient` at the given output quantity.
    ///
    /// The output quantity must be finite and non-negative; the model does
    /// not judge business plausibility beyond that.
    pub fn requirement(&self, nutrient: Nutrient, output_qty: f64) -> CoreResult<f64> {
        let y = ensure_non_negative(output_qty, "output quantity")?;
        let req = self.get(nutrient);
        Ok(req.maintenance + req.per_unit_output * y)
    }

    pub fn get(&self, nutrient: Nutrient) -> NutrientRequirement {
        // `new` guarantees full coverage of Nutrient::ALL.
        self.requirements[&nutrient]
    }

    pub fn maintenance(&self, nutrient: Nutrient) -> f64 {
        self.get(nutrient).maintenance
    }

    pub fn per_unit_output(&self, nutrient: Nutrient) -> f64 {
        self.get(nutrient).per_unit_output
    }

    /// Requirement model for a lactating dairy cow (output in litres of milk).
    pub fn dairy_default() -> Self {
        use Nutrient::*;
        let requirements = BTreeMap::from([
            (
                MetabolizableEnergy,
                NutrientRequirement {
                    maintenance: 7.0,
                    per_unit_output: 0.62,
                },
            ),
            (
                CrudeProtein,
                NutrientRequirement {
                    maintenance: 191.0,
                    per_unit_output: 45.0,
                },
            ),
            (
                Calcium,
                NutrientRequirement {
                    maintenance: 10.0,
                    per_unit_output: 1.605,
                },
            ),
            (
                Phosphorus,
                NutrientRequirement {
                    maintenance: 7.0,
                    per_unit_output: 0.99,
                },
            ),
        ]);
        Self { requirements }
    }
}
