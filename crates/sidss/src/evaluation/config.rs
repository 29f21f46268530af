use serde::{Deserialize, Serialize};

/// Relative weight of each sub-score in the final Go/No-Go score. Sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionWeights {
    pub financial: f64,
    pub environmental: f64,
    pub social: f64,
    pub engineering: f64,
}

impl DecisionWeights {
    pub const STANDARD: Self = Self {
        financial: 0.4,
        environmental: 0.3,
        social: 0.2,
        engineering: 0.1,
    };
}

/// Newton-Raphson controls for the internal rate of return.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrSolverConfig {
    pub initial_rate: f64,
    pub max_iterations: u32,
    /// Step size under which the iteration is considered converged.
    pub tolerance: f64,
    /// Derivative magnitude under which the iteration stops early.
    pub derivative_floor: f64,
}

impl Default for IrrSolverConfig {
    fn default() -> Self {
        Self {
            initial_rate: 0.10,
            max_iterations: 20,
            tolerance: 1e-6,
            derivative_floor: 1e-6,
        }
    }
}

/// Fixed policy constants of the decision model.
///
/// Requests never carry these. Build an engine with a modified copy to audit
/// the effect of a constant without editing any formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub weights: DecisionWeights,
    /// Lifetime carbon total that maps to an environmental score of 0.
    pub carbon_reference_tons: f64,
    /// Yearly operational carbon as a fraction of embodied carbon.
    pub operational_carbon_ratio: f64,
    pub kg_per_ton: f64,
    /// Life-cycle cost per year that costs one engineering point.
    pub cost_per_year_divisor: f64,
    /// Tons per year billed at the carbon tax rate.
    pub carbon_tax_volume_tons: f64,
    pub financial_baseline: f64,
    pub npv_ratio_scale: f64,
    pub jobs_reference: f64,
    pub population_reference: f64,
    pub safety_reference: f64,
    pub jobs_weight: f64,
    pub population_weight: f64,
    pub safety_weight: f64,
    /// Longest design life accepted. Yearly flows are materialised and compounded
    /// over the whole life, and `1.02^t` overflows near 35,800 years.
    pub max_design_life_years: u32,
    pub irr: IrrSolverConfig,
}

impl EvaluationConfig {
    pub fn standard() -> Self {
        Self {
            weights: DecisionWeights::STANDARD,
            carbon_reference_tons: 50_000.0,
            operational_carbon_ratio: 0.02,
            kg_per_ton: 1_000.0,
            cost_per_year_divisor: 10_000.0,
            carbon_tax_volume_tons: 100.0,
            financial_baseline: 50.0,
            npv_ratio_scale: 25.0,
            jobs_reference: 500.0,
            population_reference: 10_000.0,
            safety_reference: 10.0,
            jobs_weight: 40.0,
            population_weight: 40.0,
            safety_weight: 20.0,
            max_design_life_years: 1_000,
            irr: IrrSolverConfig::default(),
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self::standard()
    }
}
