//! Process-wide formulation configuration.

use crate::error::FormulationError;
use crate::formulate::formulate_ration;
use rf_core::{AnimalLimits, Catalog, RationTarget, RequirementModel};
use rf_report::RationSolution;

/// Immutable configuration for the formulation engine: ingredient catalog,
/// nutrient requirement model and animal limits.
///
/// Constructed explicitly once at process start; read-only afterwards, so it
/// can be shared across request threads without synchronization.
#[derive(Debug, Clone)]
pub struct FormulationContext {
    catalog: Catalog,
    requirements: RequirementModel,
    limits: AnimalLimits,
}

impl FormulationContext {
    pub fn new(
        catalog: Catalog,
        requirements: RequirementModel,
        limits: AnimalLimits,
    ) -> Result<Self, FormulationError> {
        limits.validate()?;
        Ok(Self {
            catalog,
            requirements,
            limits,
        })
    }

    /// The stock dairy configuration: four-ingredient catalog, lactating-cow
    /// requirement model, default intake ceiling and output floor.
    pub fn dairy_default() -> Self {
        Self {
            catalog: Catalog::dairy_default(),
            requirements: RequirementModel::dairy_default(),
            limits: AnimalLimits::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn requirements(&self) -> &RequirementModel {
        &self.requirements
    }

    pub fn limits(&self) -> &AnimalLimits {
        &self.limits
    }

    /// Convenience for [`formulate_ration`].
    pub fn formulate(&self, target: &RationTarget) -> Result<RationSolution, FormulationError> {
        formulate_ration(self, target)
    }
}
