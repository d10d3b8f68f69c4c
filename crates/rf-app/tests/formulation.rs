//! End-to-end formulation scenarios.

use rf_app::{
    Catalog, FormulationContext, FormulationError, Ingredient, Nutrient, RationTarget,
    RequirementModel,
};

const EPS: f64 = 1e-6;

fn dairy_context() -> FormulationContext {
    FormulationContext::dairy_default()
}

/// The dairy catalog with every ingredient pinned to its minimum (zero slack).
fn pinned_catalog() -> Catalog {
    let ingredients = Catalog::dairy_default()
        .iter()
        .map(|ing| {
            Ingredient::new(
                ing.key.clone(),
                ing.price,
                ing.density.clone(),
                ing.min_kg,
                ing.min_kg,
            )
        })
        .collect();
    Catalog::new(ingredients).unwrap()
}

#[test]
fn degenerate_ceiling_scenario() {
    // Target 15, effectively unlimited budget: must come back feasible with
    // everything inside its declared interval.
    let context = dairy_context();
    let target = RationTarget::new(15.0).with_max_cost(1.0e9);
    let solution = context.formulate(&target).unwrap();

    for (feed, ing) in solution.feeds.iter().zip(context.catalog().iter()) {
        assert_eq!(feed.key, ing.key);
        assert!(feed.kg >= ing.min_kg - EPS, "{} below min", feed.key);
        assert!(feed.kg <= ing.max_kg + EPS, "{} above max", feed.key);
    }
    assert!(solution.total_intake_kg <= 8.25 + EPS);
    assert!(solution.output >= 13.0 - EPS && solution.output <= 20.0 + EPS);

    for balance in &solution.nutrients {
        assert!(
            balance.provided >= balance.required - EPS,
            "{} undersupplied: {} < {}",
            balance.nutrient,
            balance.provided,
            balance.required
        );
    }

    assert!(solution.total_cost > 0.0);
    assert!((solution.cost_per_unit - solution.total_cost / solution.output).abs() < EPS);
    assert!((solution.intake_efficiency - solution.output / solution.total_intake_kg).abs() < EPS);
}

#[test]
fn infeasible_when_bounds_are_pinned() {
    // A fixed mix at the minima cannot supply a 15 L day: infeasible is the
    // answer, not a crash and not a silently wrong ration.
    let context = FormulationContext::new(
        pinned_catalog(),
        RequirementModel::dairy_default(),
        Default::default(),
    )
    .unwrap();
    let err = context.formulate(&RationTarget::new(15.0)).unwrap_err();
    assert!(matches!(err, FormulationError::Infeasible));
}

#[test]
fn infeasible_is_distinct_from_solver_failure() {
    let context = FormulationContext::new(
        pinned_catalog(),
        RequirementModel::dairy_default(),
        Default::default(),
    )
    .unwrap();
    match context.formulate(&RationTarget::new(15.0)) {
        Err(FormulationError::Infeasible) => {}
        other => panic!("expected Infeasible, got {other:?}"),
    }
}

#[test]
fn formulation_is_idempotent() {
    let context = dairy_context();
    let target = RationTarget::new(15.0);
    let first = context.formulate(&target).unwrap();
    let second = context.formulate(&target).unwrap();

    assert_eq!(first.output, second.output);
    assert_eq!(first.total_cost, second.total_cost);
    assert_eq!(first.feeds.len(), second.feeds.len());
    for (a, b) in first.feeds.iter().zip(&second.feeds) {
        assert_eq!(a.key, b.key);
        assert_eq!(a.kg, b.kg);
    }
}

#[test]
fn output_band_containment_across_targets() {
    let context = dairy_context();
    for target_output in [13.0, 14.0, 15.0] {
        let target = RationTarget::new(target_output);
        let solution = context.formulate(&target).unwrap();
        let lo = (target_output - 2.0).max(10.0);
        let hi = target_output + 5.0;
        assert!(
            solution.output >= lo - EPS && solution.output <= hi + EPS,
            "output {} outside [{lo}, {hi}] for target {target_output}",
            solution.output
        );
    }
}

#[test]
fn intake_ceiling_always_respected() {
    let context = dairy_context();
    for target_output in [13.0, 14.0, 14.5] {
        let solution = context.formulate(&RationTarget::new(target_output)).unwrap();
        assert!(solution.total_intake_kg <= 8.25 + EPS);
    }
}

#[test]
fn tight_cost_ceiling_is_infeasible() {
    // The minima alone cost 3434/day; a 100/day budget cannot work.
    let context = dairy_context();
    let err = context
        .formulate(&RationTarget::new(15.0).with_max_cost(100.0))
        .unwrap_err();
    assert!(matches!(err, FormulationError::Infeasible));
}

#[test]
fn cost_ceiling_bounds_the_spend() {
    let context = dairy_context();
    let solution = context
        .formulate(&RationTarget::new(15.0).with_max_cost(6000.0))
        .unwrap();
    assert!(solution.total_cost <= 6000.0 + EPS);
}

#[test]
fn every_nutrient_is_reported() {
    let context = dairy_context();
    let solution = context.formulate(&RationTarget::new(15.0)).unwrap();
    for nutrient in Nutrient::ALL {
        assert!(solution.nutrient(nutrient).is_some(), "{nutrient} missing");
    }
}
