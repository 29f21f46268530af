use super::domain::{BillOfQuantitiesItem, EngineeringMetrics};

/// Aggregate the bill of quantities into construction cost and material mass.
pub fn calculate_metrics(boq: &[BillOfQuantitiesItem]) -> EngineeringMetrics {
    let total_construction_cost: f64 = boq
        .iter()
        .map(|item| item.quantity * item.unit_cost)
        .sum();
    let total_material_mass: f64 = boq.iter().map(|item| item.quantity).sum();

    EngineeringMetrics {
        total_construction_cost,
        total_material_mass,
    }
}
