//! Tracked nutrient kinds.

use serde::{Deserialize, Serialize};

/// Nutrient kinds the formulation tracks for a lactating animal.
///
/// Each kind has one sufficiency row in the built program and one
/// `{required, provided, balance}` triple in the solution report. Adding a
/// kind here (plus its densities and requirement) is the whole change; no
/// constraint-construction code needs touching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Nutrient {
    /// Metabolizable energy (MJ/day)
    #[serde(rename = "ME")]
    MetabolizableEnergy,
    /// Crude protein (g/day)
    #[serde(rename = "CP")]
    CrudeProtein,
    /// Calcium (g/day)
    #[serde(rename = "Ca")]
    Calcium,
    /// Phosphorus (g/day)
    #[serde(rename = "P")]
    Phosphorus,
}

impl Nutrient {
    pub const ALL: [Nutrient; 4] = [
        Nutrient::MetabolizableEnergy,
        Nutrient::CrudeProtein,
        Nutrient::Calcium,
        Nutrient::Phosphorus,
    ];

    /// Short label used in diagnostics and serialized maps.
    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::MetabolizableEnergy => "ME",
            Nutrient::CrudeProtein => "CP",
            Nutrient::Calcium => "Ca",
            Nutrient::Phosphorus => "P",
        }
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
