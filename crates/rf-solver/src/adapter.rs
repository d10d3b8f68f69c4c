//! Adapter from the neutral program description onto good_lp.

use crate::error::{SolverError, SolverResult};
use crate::program::{LinearProgram, RowOp};
use good_lp::{
    default_solver, variable, Expression, ProblemVariables, ResolutionError, Solution, SolverModel,
    Variable,
};
use tracing::debug;

/// Solve a linear program, returning the optimal point in variable order.
///
/// Feasibility is a property of the input, so nothing is retried here:
/// an infeasible program maps to [`SolverError::Infeasible`], every other
/// backend outcome to [`SolverError::SolverFailure`].
pub fn solve_program(program: &LinearProgram) -> SolverResult<Vec<f64>> {
    program.validate()?;

    let mut vars = ProblemVariables::new();
    let handles: Vec<Variable> = program
        .variables
        .iter()
        .map(|def| vars.add(variable().min(def.min).max(def.max)))
        .collect();

    let mut objective = Expression::with_capacity(handles.len());
    for (&coef, &var) in program.objective.iter().zip(&handles) {
        objective.add_mul(coef, var);
    }

    let mut model = vars.minimise(objective).using(default_solver);
    for row in &program.constraints {
        let mut lhs = Expression::with_capacity(row.coefficients.len());
        for (&coef, &var) in row.coefficients.iter().zip(&handles) {
            if coef != 0.0 {
                lhs.add_mul(coef, var);
            }
        }
        let constraint = match row.op {
            RowOp::Le => lhs.leq(row.rhs),
            RowOp::Ge => lhs.geq(row.rhs),
        };
        model = model.with(constraint);
    }

    match model.solve() {
        Ok(solution) => {
            let point: Vec<f64> = handles.iter().map(|&v| solution.value(v)).collect();
            debug!(variables = point.len(), "program solved");
            Ok(point)
        }
        Err(ResolutionError::Infeasible) => Err(SolverError::Infeasible),
        Err(other) => Err(SolverError::SolverFailure {
            what: other.to_string(),
        }),
    }
}
