use super::config::{DecisionWeights, EvaluationConfig};
use super::domain::{ApprovalStatus, EngineeringMetrics, EnvironmentalMetrics, FinancialMetrics};
use super::error::{EvaluationError, InvalidParameter};

/// Efficiency score from life-cycle cost per year of design life.
pub(crate) fn engineering_score(
    life_cycle_cost: f64,
    design_life_years: u32,
    config: &EvaluationConfig,
) -> Result<f64, EvaluationError> {
    if design_life_years == 0 {
        return Err(EvaluationError::InvalidDesignParameters(
            InvalidParameter::ZeroDesignLife,
        ));
    }

    let cost_per_year = life_cycle_cost / f64::from(design_life_years);
    Ok((100.0 - cost_per_year / config.cost_per_year_divisor).max(0.0))
}

pub(crate) fn weighted_score(
    weights: &DecisionWeights,
    financial_score: f64,
    environmental_score: f64,
    social_score: f64,
    engineering_score: f64,
) -> f64 {
    financial_score * weights.financial
        + environmental_score * weights.environmental
        + social_score * weights.social
        + engineering_score * weights.engineering
}

/// Equality approves.
pub(crate) fn decide_status(final_score: f64, approval_threshold: f64) -> ApprovalStatus {
    if final_score >= approval_threshold {
        ApprovalStatus::Approved
    } else {
        ApprovalStatus::Rejected
    }
}

pub(crate) fn decision_log(
    engineering: &EngineeringMetrics,
    environmental: &EnvironmentalMetrics,
    financial: &FinancialMetrics,
    final_score: f64,
) -> Vec<String> {
    vec![
        format!(
            "Engineering Cost Calculated: ${:.2}",
            engineering.total_construction_cost
        ),
        format!(
            "Total Carbon Emission: {:.2} tons",
            environmental.total_carbon_tons
        ),
        format!("Financial NPV: ${:.2}", financial.npv),
        format!("Weighted Score Calculated: {:.2}", final_score),
    ]
}
