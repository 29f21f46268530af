use crate::infra::default_evaluation_config;
use chrono::Local;
use clap::Args;
use sidss::boq::BoqImporter;
use sidss::error::AppError;
use sidss::evaluation::{
    BillOfQuantitiesItem, EconomicParams, EvaluationEngine, EvaluationResult, MaintenanceParams,
    PolicyParams, ProjectRequest, ProjectRequestPayload, ProjectType, SocialParams,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Project request JSON in the dashboard wire format
    #[arg(long)]
    pub(crate) request: PathBuf,
    /// Optional bill-of-quantities CSV replacing the request's BOQ
    #[arg(long)]
    pub(crate) boq: Option<PathBuf>,
    /// Print the evaluation result as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the approval threshold of the reference project
    #[arg(long)]
    pub(crate) threshold: Option<f64>,
    /// Print the evaluation result as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs { request, boq, json } = args;

    let raw = std::fs::read_to_string(request)?;
    let payload: ProjectRequestPayload = serde_json::from_str(&raw)?;
    let mut request = payload.into_request()?;
    if let Some(path) = boq {
        request.boq = BoqImporter::from_path(path)?;
    }

    let engine = EvaluationEngine::new(default_evaluation_config());
    let result = engine.evaluate_project(&request)?;
    print_result(&request, &result, json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let mut request = reference_bridge();
    if let Some(threshold) = args.threshold {
        request.policy.approval_threshold = threshold;
    }

    let engine = EvaluationEngine::new(default_evaluation_config());
    let result = engine.evaluate_project(&request)?;

    if !args.json {
        println!("Project evaluation demo");
    }
    print_result(&request, &result, args.json)
}

fn print_result(
    request: &ProjectRequest,
    result: &EvaluationResult,
    json: bool,
) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        render_evaluation_report(request, result);
    }
    Ok(())
}

fn render_evaluation_report(request: &ProjectRequest, result: &EvaluationResult) {
    println!(
        "{} ({}) | design life {} years | construction {} months (evaluated {})",
        result.project_name,
        request.project_type.label(),
        request.design_life_years,
        request.construction_duration_months,
        Local::now().format("%Y-%m-%d %H:%M")
    );

    println!("\nEngineering");
    println!(
        "- Construction cost: {:.2} | material mass: {:.2}",
        result.engineering.total_construction_cost, result.engineering.total_material_mass
    );
    println!("- Efficiency score: {:.2}", result.engineering_score);

    println!("\nEnvironmental");
    println!(
        "- Embodied carbon: {:.2} t | operational carbon: {:.2} t | total {:.2} t",
        result.environmental.material_carbon_tons,
        result.environmental.operational_carbon_tons,
        result.environmental.total_carbon_tons
    );
    println!("- Score: {:.2}", result.environmental.environmental_score);

    println!("\nFinancial");
    println!(
        "- NPV: {:.2} | IRR: {:.2}% ({}) | life-cycle cost: {:.2}",
        result.financial.npv,
        result.financial.irr,
        result.financial.irr_status.label(),
        result.financial.life_cycle_cost
    );
    println!("- Score: {:.2}", result.financial.financial_score);

    println!("\nSocial");
    println!("- Score: {:.2}", result.social.social_score);

    println!(
        "\nFinal score {:.2} against threshold {:.2} -> {}",
        result.final_score,
        request.policy.approval_threshold,
        result.approval_status.label()
    );

    println!("\nDecision log");
    for entry in &result.decision_log {
        println!("- {entry}");
    }
}

fn reference_bridge() -> ProjectRequest {
    ProjectRequest {
        name: "Reference river bridge".to_string(),
        project_type: ProjectType::Bridge,
        design_life_years: 50,
        construction_duration_months: 18,
        boq: vec![BillOfQuantitiesItem {
            name: "Concrete C40".to_string(),
            quantity: 5000.0,
            unit_cost: 120.0,
            carbon_factor: 240.0,
        }],
        maintenance: MaintenanceParams {
            annual_maintenance_cost: 15_000.0,
            degradation_rate: 0.02,
        },
        economics: EconomicParams {
            discount_rate: 0.05,
            annual_economic_benefit: 250_000.0,
        },
        social: SocialParams {
            jobs_created: 120,
            population_served: 8_000,
            safety_score: 8.0,
        },
        policy: PolicyParams {
            subsidy_rate: 10.0,
            carbon_tax_rate: 25.0,
            approval_threshold: 60.0,
        },
    }
}
