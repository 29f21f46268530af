use super::config::EvaluationConfig;
use super::domain::{BillOfQuantitiesItem, EnvironmentalMetrics};

/// Embodied plus operational carbon over the design life, scored against the reference ceiling.
///
/// Operational carbon is a fixed fraction of embodied carbon per year, not a physical model.
pub fn calculate_impact(
    boq: &[BillOfQuantitiesItem],
    design_life_years: u32,
    config: &EvaluationConfig,
) -> EnvironmentalMetrics {
    let material_carbon_kg: f64 = boq
        .iter()
        .map(|item| item.quantity * item.carbon_factor)
        .sum();
    let material_carbon_tons = material_carbon_kg / config.kg_per_ton;

    let annual_operational_tons = material_carbon_tons * config.operational_carbon_ratio;
    let operational_carbon_tons = annual_operational_tons * f64::from(design_life_years);
    let total_carbon_tons = material_carbon_tons + operational_carbon_tons;

    EnvironmentalMetrics {
        material_carbon_kg,
        material_carbon_tons,
        operational_carbon_tons,
        total_carbon_tons,
        environmental_score: carbon_score(total_carbon_tons, config),
    }
}

/// 100 at zero carbon, falling linearly to 0 at the reference ceiling. Never negative.
pub(crate) fn carbon_score(total_carbon_tons: f64, config: &EvaluationConfig) -> f64 {
    (100.0 - (total_carbon_tons / config.carbon_reference_tons * 100.0)).max(0.0)
}
