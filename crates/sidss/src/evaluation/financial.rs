use tracing::{debug, warn};

use super::config::EvaluationConfig;
use super::domain::{EconomicParams, FinancialMetrics, MaintenanceParams, PolicyParams};
use super::error::{EvaluationError, InvalidParameter};
use super::irr::{net_present_value, solve_irr};

/// Subsidised outlay at year 0 followed by one net flow per year of design life.
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowSeries {
    pub initial_investment: f64,
    pub flows: Vec<f64>,
    pub total_maintenance: f64,
}

/// Build the yearly cash flows.
///
/// Maintenance compounds with the degradation rate. The carbon tax bills a fixed
/// volume per year at the policy rate, independent of the environmental model.
pub fn build_cash_flows(
    construction_cost: f64,
    maintenance: &MaintenanceParams,
    economics: &EconomicParams,
    design_life_years: u32,
    policy: &PolicyParams,
    config: &EvaluationConfig,
) -> CashFlowSeries {
    let initial_investment = construction_cost * (1.0 - policy.subsidy_rate / 100.0);
    let annual_carbon_tax = config.carbon_tax_volume_tons * policy.carbon_tax_rate;

    let mut flows = Vec::with_capacity(design_life_years as usize + 1);
    flows.push(-initial_investment);

    let mut total_maintenance = 0.0;
    for year in 1..=design_life_years {
        let current_maintenance = maintenance.annual_maintenance_cost
            * (1.0 + maintenance.degradation_rate).powi(year as i32);
        total_maintenance += current_maintenance;

        let net_cash_flow = economics.annual_economic_benefit - current_maintenance;
        flows.push(net_cash_flow - annual_carbon_tax);
    }

    CashFlowSeries {
        initial_investment,
        flows,
        total_maintenance,
    }
}

/// Life-cycle financial analysis: NPV, IRR, life-cycle cost and the normalised score.
pub fn analyze(
    construction_cost: f64,
    maintenance: &MaintenanceParams,
    economics: &EconomicParams,
    design_life_years: u32,
    policy: &PolicyParams,
    config: &EvaluationConfig,
) -> Result<FinancialMetrics, EvaluationError> {
    let series = build_cash_flows(
        construction_cost,
        maintenance,
        economics,
        design_life_years,
        policy,
        config,
    );

    let npv = net_present_value(&series.flows, economics.discount_rate);
    if !npv.is_finite() {
        return Err(EvaluationError::InvalidDesignParameters(
            InvalidParameter::NonFinite("net present value"),
        ));
    }
    let irr = solve_irr(&series.flows, &config.irr);
    if !irr.status.converged() {
        warn!(
            status = irr.status.label(),
            iterations = irr.iterations,
            rate = irr.rate,
            "irr solver did not converge, reporting best approximation"
        );
    }

    let life_cycle_cost = construction_cost + series.total_maintenance;
    let financial_score = npv_score(npv, series.initial_investment, config)?;

    debug!(
        initial_investment = series.initial_investment,
        npv,
        irr = irr.rate,
        life_cycle_cost,
        financial_score,
        "financial model computed"
    );

    Ok(FinancialMetrics {
        npv,
        irr: irr.rate * 100.0,
        irr_status: irr.status,
        payback_period: 0.0,
        life_cycle_cost,
        financial_score,
    })
}

/// Baseline at break-even, shifted by the NPV-to-investment ratio and clamped to [0, 100].
pub(crate) fn npv_score(
    npv: f64,
    initial_investment: f64,
    config: &EvaluationConfig,
) -> Result<f64, EvaluationError> {
    if initial_investment == 0.0 {
        return Err(EvaluationError::InvalidDesignParameters(
            InvalidParameter::ZeroInitialInvestment,
        ));
    }

    let npv_ratio = npv / initial_investment;
    let score = config.financial_baseline + npv_ratio * config.npv_ratio_scale;
    Ok(score.clamp(0.0, 100.0))
}
