//! Solution record types.

use rf_core::Nutrient;
use serde::{Deserialize, Serialize};

/// Quantity of one ingredient in the solved ration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedAllocation {
    pub key: String,
    pub kg: f64,
}

/// Supplied-vs-required balance for one nutrient at the solved output level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientBalance {
    pub nutrient: Nutrient,
    pub required: f64,
    pub provided: f64,
    /// `provided - required`; never meaningfully negative in a valid solution
    pub balance: f64,
}

/// The least-cost ration for one request.
///
/// Constructed once from the decision vector, returned to the caller and
/// discarded; nothing mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RationSolution {
    pub feeds: Vec<FeedAllocation>,
    /// Realized output quantity (litres/day for the dairy model)
    pub output: f64,
    pub total_intake_kg: f64,
    pub total_cost: f64,
    /// Total cost over realized output; 0 when output rounds to zero
    pub cost_per_unit: f64,
    /// Output over total dry-matter intake; 0 when intake rounds to zero
    pub intake_efficiency: f64,
    pub nutrients: Vec<NutrientBalance>,
}

impl RationSolution {
    pub fn feed(&self, key: &str) -> Option<&FeedAllocation> {
        self.feeds.iter().find(|f| f.key == key)
    }

    pub fn nutrient(&self, nutrient: Nutrient) -> Option<&NutrientBalance> {
        self.nutrients.iter().find(|b| b.nutrient == nutrient)
    }
}
