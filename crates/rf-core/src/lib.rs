//! rf-core: stable foundation for rationflow.
//!
//! Contains:
//! - nutrient (tracked nutrient kinds)
//! - ingredient (feed ingredient data + validated catalog)
//! - requirement (maintenance + production nutrient requirements)
//! - target (caller-supplied ration target)
//! - limits (animal-level intake and output limits)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod ingredient;
pub mod limits;
pub mod numeric;
pub mod nutrient;
pub mod requirement;
pub mod target;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use ingredient::{Catalog, Ingredient};
pub use limits::AnimalLimits;
pub use numeric::*;
pub use nutrient::Nutrient;
pub use requirement::{NutrientRequirement, RequirementModel};
pub use target::RationTarget;
