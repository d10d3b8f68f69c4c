//! The single public operation: target in, ration report out.

use crate::context::FormulationContext;
use crate::error::FormulationError;
use rf_core::RationTarget;
use rf_report::{interpret, RationSolution};
use rf_solver::{build_program, solve_program};
use tracing::debug;

/// Formulate the least-cost ration for one target.
///
/// Validates the target, builds the linear program, solves it and interprets
/// the decision vector. Stateless: nothing outlives the call, and two calls
/// with identical context and target produce identical solutions.
pub fn formulate_ration(
    context: &FormulationContext,
    target: &RationTarget,
) -> Result<RationSolution, FormulationError> {
    target.validate()?;

    let program = build_program(
        context.catalog(),
        context.requirements(),
        context.limits(),
        target,
    )?;
    let decision = solve_program(&program.lp)?;
    let solution = interpret(&program, &decision, context.catalog(), context.requirements())?;

    debug!(
        target = target.target_output,
        output = solution.output,
        total_cost = solution.total_cost,
        "ration formulated"
    );
    Ok(solution)
}
