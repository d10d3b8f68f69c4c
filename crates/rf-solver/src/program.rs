//! Solver-neutral linear-program description.
//!
//! The builder emits this shape and the adapter consumes it; nothing in
//! between knows which LP backend runs. Rows carry names so diagnostics and
//! the interpreter's re-check can say which constraint a point violates.

use crate::error::{SolverError, SolverResult};

/// One decision variable with its box bounds.
#[derive(Debug, Clone)]
pub struct VariableDef {
    pub name: String,
    pub min: f64,
    pub max: f64,
}

/// Comparison operator for a constraint row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOp {
    /// Less than or equal (<=)
    Le,
    /// Greater than or equal (>=)
    Ge,
}

/// One named inequality row: `coefficients . x  op  rhs`.
#[derive(Debug, Clone)]
pub struct ConstraintRow {
    pub name: String,
    pub coefficients: Vec<f64>,
    pub op: RowOp,
    pub rhs: f64,
}

impl ConstraintRow {
    /// Evaluate the row's left-hand side at a point.
    pub fn lhs(&self, point: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(point)
            .map(|(c, x)| c * x)
            .sum()
    }

    /// Whether the point satisfies the row within `tol` of slack.
    pub fn satisfied_by(&self, point: &[f64], tol: f64) -> bool {
        let lhs = self.lhs(point);
        match self.op {
            RowOp::Le => lhs <= self.rhs + tol,
            RowOp::Ge => lhs >= self.rhs - tol,
        }
    }
}

/// A minimization problem over box-bounded variables with named rows.
#[derive(Debug, Clone, Default)]
pub struct LinearProgram {
    pub variables: Vec<VariableDef>,
    /// Objective coefficients, one per variable; always minimized
    pub objective: Vec<f64>,
    pub constraints: Vec<ConstraintRow>,
}

impl LinearProgram {
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn add_variable(&mut self, name: impl Into<String>, min: f64, max: f64) -> usize {
        self.variables.push(VariableDef {
            name: name.into(),
            min,
            max,
        });
        self.variables.len() - 1
    }

    pub fn add_constraint(
        &mut self,
        name: impl Into<String>,
        coefficients: Vec<f64>,
        op: RowOp,
        rhs: f64,
    ) {
        self.constraints.push(ConstraintRow {
            name: name.into(),
            coefficients,
            op,
            rhs,
        });
    }

    /// Structural checks: bounds ordered, lengths consistent, values finite.
    pub fn validate(&self) -> SolverResult<()> {
        if self.variables.is_empty() {
            return Err(SolverError::ProgramSetup {
                what: "program has no variables".to_string(),
            });
        }
        if self.objective.len() != self.variables.len() {
            return Err(SolverError::ProgramSetup {
                what: format!(
                    "objective length mismatch: {} != {}",
                    self.objective.len(),
                    self.variables.len()
                ),
            });
        }
        for var in &self.variables {
            if !var.min.is_finite() || !var.max.is_finite() {
                return Err(SolverError::ProgramSetup {
                    what: format!("non-finite bounds on variable {}", var.name),
                });
            }
            if var.min > var.max {
                return Err(SolverError::ProgramSetup {
                    what: format!(
                        "inverted bounds on variable {}: [{}, {}]",
                        var.name, var.min, var.max
                    ),
                });
            }
        }
        for row in &self.constraints {
            if row.coefficients.len() != self.variables.len() {
                return Err(SolverError::ProgramSetup {
                    what: format!("row {} length mismatch", row.name),
                });
            }
            if !row.rhs.is_finite() || row.coefficients.iter().any(|c| !c.is_finite()) {
                return Err(SolverError::ProgramSetup {
                    what: format!("non-finite values in row {}", row.name),
                });
            }
        }
        Ok(())
    }
}
