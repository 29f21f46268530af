use super::common::*;
use crate::evaluation::{
    ApprovalStatus, DecisionWeights, EvaluationConfig, EvaluationEngine, EvaluationError,
    InvalidParameter,
};

#[test]
fn reference_bridge_is_approved() {
    let result = engine()
        .evaluate_project(&bridge_request())
        .expect("evaluation succeeds");

    assert_eq!(result.project_name, "Riverside Crossing");
    assert_eq!(result.engineering.total_construction_cost, 600_000.0);
    assert_eq!(result.environmental.material_carbon_kg, 1_200_000.0);
    assert!((result.environmental.total_carbon_tons - 2400.0).abs() < 1e-9);
    assert_eq!(result.financial.financial_score, 100.0);
    assert!((result.engineering_score - 96.211_870_315).abs() < 1e-6);
    assert!((result.final_score - 78.181_187_031).abs() < 1e-6);
    assert_eq!(result.approval_status, ApprovalStatus::Approved);
}

#[test]
fn decision_log_reports_key_figures_in_order() {
    let result = engine()
        .evaluate_project(&bridge_request())
        .expect("evaluation succeeds");

    assert_eq!(
        result.decision_log,
        vec![
            "Engineering Cost Calculated: $600000.00".to_string(),
            "Total Carbon Emission: 2400.00 tons".to_string(),
            "Financial NPV: $3588046.97".to_string(),
            "Weighted Score Calculated: 78.18".to_string(),
        ]
    );
}

#[test]
fn repeated_evaluations_are_bit_identical() {
    let engine = engine();
    let request = bridge_request();

    let first = engine.evaluate_project(&request).expect("first run");
    let second = engine.evaluate_project(&request).expect("second run");

    assert_eq!(first, second);
    assert_eq!(first.final_score.to_bits(), second.final_score.to_bits());
    assert_eq!(first.financial.npv.to_bits(), second.financial.npv.to_bits());
    assert_eq!(first.financial.irr.to_bits(), second.financial.irr.to_bits());
}

#[test]
fn final_score_is_weighted_sum_of_sub_scores() {
    let mut request = bridge_request();
    request.social.jobs_created = 250;
    request.social.population_served = 5_000;
    request.social.safety_score = 8.0;

    let result = engine().evaluate_project(&request).expect("evaluation succeeds");

    let expected = 0.4 * result.financial.financial_score
        + 0.3 * result.environmental.environmental_score
        + 0.2 * result.social.social_score
        + 0.1 * result.engineering_score;
    assert!((result.final_score - expected).abs() < 1e-12);
    assert!((result.final_score - 89.381_187_031).abs() < 1e-6);
}

#[test]
fn marginal_project_is_rejected_below_threshold() {
    let result = engine()
        .evaluate_project(&marginal_request())
        .expect("evaluation succeeds");

    assert!((result.final_score - 59.932_2).abs() < 1e-3);
    assert_eq!(result.approval_status, ApprovalStatus::Rejected);
}

#[test]
fn threshold_equal_to_score_approves() {
    let engine = engine();
    let mut request = marginal_request();
    let score = engine
        .evaluate_project(&request)
        .expect("evaluation succeeds")
        .final_score;

    request.policy.approval_threshold = score;
    let result = engine.evaluate_project(&request).expect("evaluation succeeds");

    assert_eq!(result.approval_status, ApprovalStatus::Approved);
}

#[test]
fn zero_design_life_is_an_invalid_design_parameter() {
    let mut request = bridge_request();
    request.design_life_years = 0;

    let error = engine()
        .evaluate_project(&request)
        .expect_err("zero design life cannot be scored");

    assert_eq!(
        error,
        EvaluationError::InvalidDesignParameters(InvalidParameter::ZeroDesignLife)
    );
}

#[test]
fn empty_boq_fails_on_zero_investment() {
    let mut request = bridge_request();
    request.boq.clear();

    let error = engine()
        .evaluate_project(&request)
        .expect_err("nothing to ratio NPV against");

    assert_eq!(
        error,
        EvaluationError::InvalidDesignParameters(InvalidParameter::ZeroInitialInvestment)
    );
}

#[test]
fn carbon_tax_ignores_computed_footprint() {
    let engine = engine();
    let base = engine
        .evaluate_project(&bridge_request())
        .expect("evaluation succeeds");

    let mut dirtier = bridge_request();
    dirtier.boq[0].carbon_factor = 480.0;
    let dirty = engine.evaluate_project(&dirtier).expect("evaluation succeeds");

    assert_eq!(base.financial.npv, dirty.financial.npv);
    assert!(dirty.environmental.environmental_score < base.environmental.environmental_score);
}

#[test]
fn custom_weights_flow_through_engine() {
    let config = EvaluationConfig {
        weights: DecisionWeights {
            financial: 1.0,
            environmental: 0.0,
            social: 0.0,
            engineering: 0.0,
        },
        ..EvaluationConfig::standard()
    };
    let result = EvaluationEngine::new(config)
        .evaluate_project(&bridge_request())
        .expect("evaluation succeeds");

    assert_eq!(result.final_score, result.financial.financial_score);
}

#[test]
fn design_life_beyond_ceiling_is_rejected_before_cash_flows() {
    let mut request = bridge_request();
    request.design_life_years = 36_000;

    let error = engine()
        .evaluate_project(&request)
        .expect_err("compounding would overflow");

    assert_eq!(
        error,
        EvaluationError::InvalidDesignParameters(InvalidParameter::DesignLifeTooLong {
            years: 36_000,
            max: 1_000,
        })
    );

    request.design_life_years = u32::MAX;
    assert!(engine().evaluate_project(&request).is_err());
}

#[test]
fn design_life_at_ceiling_stays_finite() {
    let mut request = bridge_request();
    request.design_life_years = 1_000;

    let result = engine()
        .evaluate_project(&request)
        .expect("ceiling is inclusive");

    assert!(result.financial.npv.is_finite());
    assert!(result.final_score.is_finite());
}

#[test]
fn overflowing_final_score_is_an_error_not_a_rejection() {
    let mut request = bridge_request();
    request.social.safety_score = f64::MAX;

    let error = engine()
        .evaluate_project(&request)
        .expect_err("social score overflows");

    assert_eq!(
        error,
        EvaluationError::InvalidDesignParameters(InvalidParameter::NonFinite(
            "final sustainability score"
        ))
    );
}
