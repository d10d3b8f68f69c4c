//! Builds the ration linear program from catalog, requirements and target.

use crate::error::{SolverError, SolverResult};
use crate::program::{LinearProgram, RowOp};
use rf_core::{AnimalLimits, Catalog, Nutrient, RationTarget, RequirementModel};
use tracing::debug;

/// A built program plus the metadata needed to read its solution back.
///
/// Variable layout: one intake variable per catalog ingredient, in catalog
/// order, followed by one free variable for realized output. Output is a
/// decision variable on purpose: the solver may trade feed against output
/// anywhere inside the declared band instead of being pinned to one point.
#[derive(Debug, Clone)]
pub struct RationProgram {
    pub lp: LinearProgram,
    /// Ingredient keys in variable order
    pub ingredient_keys: Vec<String>,
    /// Index of the realized-output variable
    pub output_index: usize,
}

/// Assemble the complete linear program for one formulation request.
///
/// Rows are emitted in a fixed order (nutrient sufficiency, ingredient
/// minima, ingredient maxima, intake ceiling, output band, optional cost
/// ceiling); the order only matters for diagnostics. Box bounds are declared
/// per variable as well, derived from the same values as the rows, so the
/// two representations cannot disagree.
pub fn build_program(
    catalog: &Catalog,
    requirements: &RequirementModel,
    limits: &AnimalLimits,
    target: &RationTarget,
) -> SolverResult<RationProgram> {
    target.validate()?;
    limits.validate()?;

    let n = catalog.len();
    let (band_lo, band_hi) = target.output_band(limits.min_output_floor);
    if band_lo > band_hi {
        // Clamping to the output floor emptied the band; no point exists.
        return Err(SolverError::Infeasible);
    }

    let mut lp = LinearProgram::default();
    let mut ingredient_keys = Vec::with_capacity(n);
    for ing in catalog.iter() {
        lp.add_variable(ing.key.clone(), ing.min_kg, ing.max_kg);
        ingredient_keys.push(ing.key.clone());
    }
    let output_index = lp.add_variable("output", band_lo, band_hi);

    // Minimize feed cost; the output variable costs nothing by itself.
    lp.objective = catalog.iter().map(|ing| ing.price).collect();
    lp.objective.push(0.0);

    // 1. Per-nutrient sufficiency, negated into solver normal form:
    //    -sum(density * intake) + per_unit * output <= -maintenance
    for nutrient in Nutrient::ALL {
        let mut coefficients: Vec<f64> = catalog.iter().map(|ing| -ing.density(nutrient)).collect();
        coefficients.push(requirements.per_unit_output(nutrient));
        lp.add_constraint(
            format!("{nutrient}_sufficiency"),
            coefficients,
            RowOp::Le,
            -requirements.maintenance(nutrient),
        );
    }

    // 2. Per-ingredient lower bounds
    for (i, ing) in catalog.iter().enumerate() {
        lp.add_constraint(
            format!("{}_min", ing.key),
            unit_row(n + 1, i),
            RowOp::Ge,
            ing.min_kg,
        );
    }

    // 3. Per-ingredient upper bounds
    for (i, ing) in catalog.iter().enumerate() {
        lp.add_constraint(
            format!("{}_max", ing.key),
            unit_row(n + 1, i),
            RowOp::Le,
            ing.max_kg,
        );
    }

    // 4. Total dry-matter intake ceiling (aggregate, not per-ingredient)
    let mut intake_row = vec![1.0; n];
    intake_row.push(0.0);
    lp.add_constraint(
        "total_intake",
        intake_row,
        RowOp::Le,
        limits.max_total_intake_kg,
    );

    // 5. Output band
    lp.add_constraint("output_max", unit_row(n + 1, output_index), RowOp::Le, band_hi);
    lp.add_constraint("output_min", unit_row(n + 1, output_index), RowOp::Ge, band_lo);

    // 6. Optional cost ceiling
    if let Some(max_cost) = target.max_cost {
        let mut cost_row: Vec<f64> = catalog.iter().map(|ing| ing.price).collect();
        cost_row.push(0.0);
        lp.add_constraint("cost_ceiling", cost_row, RowOp::Le, max_cost);
    }

    lp.validate()?;
    debug!(
        variables = lp.num_variables(),
        rows = lp.constraints.len(),
        band_lo,
        band_hi,
        "ration program built"
    );

    Ok(RationProgram {
        lp,
        ingredient_keys,
        output_index,
    })
}

fn unit_row(len: usize, index: usize) -> Vec<f64> {
    let mut row = vec![0.0; len];
    row[index] = 1.0;
    row
}
