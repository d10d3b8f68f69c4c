//! rf-report: domain-shaped solution records and the interpreter that
//! produces them from a raw decision vector.

pub mod interpret;
pub mod types;

pub use interpret::interpret;
pub use types::{FeedAllocation, NutrientBalance, RationSolution};

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("Decision vector length mismatch: {got} != {expected}")]
    LengthMismatch { got: usize, expected: usize },

    #[error("Solver returned an inconsistent point: {what}")]
    DomainInconsistency { what: String },

    #[error("Core error: {0}")]
    Core(#[from] rf_core::CoreError),
}
