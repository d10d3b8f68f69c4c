//! Public error taxonomy for formulation requests.

use rf_core::CoreError;
use rf_report::ReportError;
use rf_solver::SolverError;
use thiserror::Error;

/// Everything a formulation request can fail with.
///
/// `Infeasible` is an expected business outcome ("no valid ration exists
/// for these targets"), kept apart from `SolverFailure` so callers can tell
/// "no solution exists" from "the solver could not decide". None of these
/// are retried: feasibility and solver breakdown are properties of the
/// input, not transient conditions.
#[derive(Error, Debug)]
pub enum FormulationError {
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    #[error("No feasible ration exists for the given targets")]
    Infeasible,

    #[error("Ration solution inconsistent: {0}")]
    Inconsistent(#[from] ReportError),

    #[error("Solver failure: {what}")]
    SolverFailure { what: String },
}

impl From<CoreError> for FormulationError {
    fn from(e: CoreError) -> Self {
        FormulationError::InvalidInput {
            what: e.to_string(),
        }
    }
}

impl From<SolverError> for FormulationError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::Infeasible => FormulationError::Infeasible,
            SolverError::SolverFailure { what } => FormulationError::SolverFailure { what },
            SolverError::ProgramSetup { what } => FormulationError::InvalidInput { what },
            SolverError::Core(e) => e.into(),
        }
    }
}
