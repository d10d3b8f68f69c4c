//! Ration formulation service layer.
//!
//! This crate ties the pieces together behind one operation: build the
//! linear program for a caller's target, solve it, and interpret the result
//! as a [`RationSolution`]. Configuration (catalog, requirement model,
//! animal limits) is assembled once at process start into an immutable
//! [`FormulationContext`]; every request after that is stateless and may run
//! on any thread.

pub mod context;
pub mod error;
pub mod formulate;

pub use context::FormulationContext;
pub use error::FormulationError;
pub use formulate::formulate_ration;

// Re-export the types callers hand in and get back
pub use rf_core::{
    AnimalLimits, Catalog, Ingredient, Nutrient, NutrientRequirement, RationTarget,
    RequirementModel,
};
pub use rf_report::{FeedAllocation, NutrientBalance, RationSolution};
