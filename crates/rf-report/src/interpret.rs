//! Interprets a raw decision vector as a domain-shaped ration report.

use crate::types::{FeedAllocation, NutrientBalance, RationSolution};
use crate::{ReportError, ReportResult};
use rf_core::{Catalog, Nutrient, RequirementModel, Tolerances};
use rf_solver::RationProgram;

/// Convert the solver's decision vector into a [`RationSolution`].
///
/// Before any arithmetic, the point is checked against every declared box
/// bound and every constraint row of the program it came from; a violation
/// beyond tolerance is a contract failure on the solver's side and is
/// reported, never silently corrected.
pub fn interpret(
    program: &RationProgram,
    decision: &[f64],
    catalog: &Catalog,
    requirements: &RequirementModel,
) -> ReportResult<RationSolution> {
    let tol = Tolerances::default();
    check_consistency(program, decision, tol)?;

    let output = decision[program.output_index];

    let mut feeds = Vec::with_capacity(program.ingredient_keys.len());
    let mut total_intake_kg = 0.0;
    let mut total_cost = 0.0;
    for (key, &kg) in program.ingredient_keys.iter().zip(decision) {
        let ingredient = catalog.get(key)?;
        total_intake_kg += kg;
        total_cost += kg * ingredient.price;
        feeds.push(FeedAllocation {
            key: key.clone(),
            kg,
        });
    }

    let mut nutrients = Vec::with_capacity(Nutrient::ALL.len());
    for nutrient in Nutrient::ALL {
        let required = requirements.requirement(nutrient, output)?;
        let provided: f64 = program
            .ingredient_keys
            .iter()
            .zip(decision)
            .map(|(key, &kg)| {
                catalog
                    .get(key)
                    .map(|ingredient| kg * ingredient.density(nutrient))
            })
            .sum::<Result<f64, _>>()?;
        nutrients.push(NutrientBalance {
            nutrient,
            required,
            provided,
            balance: provided - required,
        });
    }

    // A zero-intake, zero-output point is a valid (if useless) optimum under
    // degenerate inputs; report zero ratios rather than dividing by zero.
    let intake_efficiency = if total_intake_kg > tol.abs {
        output / total_intake_kg
    } else {
        0.0
    };
    let cost_per_unit = if output > tol.abs {
        total_cost / output
    } else {
        0.0
    };

    Ok(RationSolution {
        feeds,
        output,
        total_intake_kg,
        total_cost,
        cost_per_unit,
        intake_efficiency,
        nutrients,
    })
}

/// Re-check the point against everything the program declared.
fn check_consistency(
    program: &RationProgram,
    decision: &[f64],
    tol: Tolerances,
) -> ReportResult<()> {
    let expected = program.lp.num_variables();
    if decision.len() != expected {
        return Err(ReportError::LengthMismatch {
            got: decision.len(),
            expected,
        });
    }

    for (var, &value) in program.lp.variables.iter().zip(decision) {
        if !value.is_finite() {
            return Err(ReportError::DomainInconsistency {
                what: format!("non-finite value {value} for variable {}", var.name),
            });
        }
        if value < var.min - tol.abs || value > var.max + tol.abs {
            return Err(ReportError::DomainInconsistency {
                what: format!(
                    "variable {} = {value} outside bounds [{}, {}]",
                    var.name, var.min, var.max
                ),
            });
        }
    }

    for row in &program.lp.constraints {
        if !row.satisfied_by(decision, tol.abs) {
            return Err(ReportError::DomainInconsistency {
                what: format!("constraint {} violated (lhs = {})", row.name, row.lhs(decision)),
            });
        }
    }

    Ok(())
}
