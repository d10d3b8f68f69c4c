//! Error types for program construction and solving.

use rf_core::CoreError;
use thiserror::Error;

/// Errors that can occur while building or solving the ration program.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Program setup error: {what}")]
    ProgramSetup { what: String },

    #[error("No feasible ration exists for the given targets")]
    Infeasible,

    #[error("Solver failure: {what}")]
    SolverFailure { what: String },

    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

pub type SolverResult<T> = Result<T, SolverError>;
