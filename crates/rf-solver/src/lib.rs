//! Linear-program construction and solving for ration formulation.
//!
//! This crate turns a catalog, a requirement model and a caller target into
//! a solver-neutral linear program (one intake variable per ingredient plus
//! one free variable for realized output), then solves it through good_lp's
//! pure-Rust backend. Infeasibility is a distinct, expected outcome, kept
//! separate from solver breakdown.

pub mod adapter;
pub mod builder;
pub mod error;
pub mod program;

pub use adapter::solve_program;
pub use builder::{build_program, RationProgram};
pub use error::{SolverError, SolverResult};
pub use program::{ConstraintRow, LinearProgram, RowOp, VariableDef};
