use axum::response::Response;
use serde_json::{json, Value};

use crate::evaluation::domain::{
    BillOfQuantitiesItem, EconomicParams, MaintenanceParams, PolicyParams, ProjectRequest,
    ProjectType, SocialParams,
};
use crate::evaluation::{EvaluationConfig, EvaluationEngine};

pub(super) fn concrete() -> BillOfQuantitiesItem {
    BillOfQuantitiesItem {
        name: "Concrete C40".to_string(),
        quantity: 5000.0,
        unit_cost: 120.0,
        carbon_factor: 240.0,
    }
}

/// Reference bridge: 600k construction cost, 1200 t embodied carbon, 50 year life.
pub(super) fn bridge_request() -> ProjectRequest {
    ProjectRequest {
        name: "Riverside Crossing".to_string(),
        project_type: ProjectType::Bridge,
        design_life_years: 50,
        construction_duration_months: 18,
        boq: vec![concrete()],
        maintenance: MaintenanceParams {
            annual_maintenance_cost: 15_000.0,
            degradation_rate: 0.02,
        },
        economics: EconomicParams {
            discount_rate: 0.05,
            annual_economic_benefit: 250_000.0,
        },
        social: SocialParams {
            jobs_created: 0,
            population_served: 0,
            safety_score: 0.0,
        },
        policy: PolicyParams {
            subsidy_rate: 10.0,
            carbon_tax_rate: 25.0,
            approval_threshold: 60.0,
        },
    }
}

/// Unsubsidised, untaxed variant whose final score lands just under 60.
pub(super) fn marginal_request() -> ProjectRequest {
    let mut request = bridge_request();
    request.economics.annual_economic_benefit = 60_000.0;
    request.policy.subsidy_rate = 0.0;
    request.policy.carbon_tax_rate = 0.0;
    request
}

pub(super) fn engine() -> EvaluationEngine {
    EvaluationEngine::new(EvaluationConfig::standard())
}

pub(super) fn bridge_payload() -> Value {
    json!({
        "name": "Riverside Crossing",
        "projectType": "BRIDGE",
        "designLifeYears": 50,
        "constructionDurationMonths": 18,
        "boq": [
            { "name": "Concrete C40", "quantity": 5000, "unitCost": 120, "carbonFactor": 240 }
        ],
        "maintenance": { "annualMaintenanceCost": 15000, "degradationRate": 0.02 },
        "economics": { "discountRate": 0.05, "annualEconomicBenefit": 250000 },
        "social": { "jobsCreated": 0, "populationServed": 0, "safetyScore": 0 },
        "policy": { "subsidyRate": 10, "carbonTaxRate": 25, "approvalThreshold": 60 }
    })
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
