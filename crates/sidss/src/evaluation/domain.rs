use serde::{Deserialize, Serialize};

/// Structural category of the proposal. Carried for reporting only; no model branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectType {
    #[default]
    Building,
    Bridge,
    Road,
}

impl ProjectType {
    pub const fn label(self) -> &'static str {
        match self {
            ProjectType::Building => "BUILDING",
            ProjectType::Bridge => "BRIDGE",
            ProjectType::Road => "ROAD",
        }
    }
}

/// One line of the bill of quantities.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillOfQuantitiesItem {
    pub name: String,
    /// Physical units (m3, t, m, ...).
    pub quantity: f64,
    /// Currency per unit.
    pub unit_cost: f64,
    /// kg CO2e per unit.
    pub carbon_factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceParams {
    pub annual_maintenance_cost: f64,
    /// Yearly growth applied to the maintenance bill, e.g. 0.02 for 2%.
    pub degradation_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicParams {
    pub discount_rate: f64,
    /// Tolls, rent or monetised social value per year. May be negative.
    pub annual_economic_benefit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialParams {
    pub jobs_created: u32,
    pub population_served: u32,
    /// Intended range 1-10, not enforced.
    pub safety_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyParams {
    /// Percent of construction cost covered by government funding.
    pub subsidy_rate: f64,
    /// Currency per ton CO2e.
    pub carbon_tax_rate: f64,
    /// Minimum final score (0-100) required for approval.
    pub approval_threshold: f64,
}

/// A fully-populated proposal, read-only for the duration of one evaluation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub name: String,
    pub project_type: ProjectType,
    pub design_life_years: u32,
    pub construction_duration_months: u32,
    pub boq: Vec<BillOfQuantitiesItem>,
    pub maintenance: MaintenanceParams,
    pub economics: EconomicParams,
    pub social: SocialParams,
    pub policy: PolicyParams,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineeringMetrics {
    pub total_construction_cost: f64,
    pub total_material_mass: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalMetrics {
    /// Embodied carbon in kg CO2e.
    #[serde(rename = "materialCarbon")]
    pub material_carbon_kg: f64,
    pub material_carbon_tons: f64,
    /// Operational carbon over the design life, in tons.
    #[serde(rename = "operationalCarbon")]
    pub operational_carbon_tons: f64,
    pub total_carbon_tons: f64,
    pub environmental_score: f64,
}

/// How the IRR iteration terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IrrStatus {
    Converged,
    FlatDerivative,
    IterationLimit,
    Diverged,
}

impl IrrStatus {
    pub const fn label(self) -> &'static str {
        match self {
            IrrStatus::Converged => "converged",
            IrrStatus::FlatDerivative => "flat_derivative",
            IrrStatus::IterationLimit => "iteration_limit",
            IrrStatus::Diverged => "diverged",
        }
    }

    pub const fn converged(self) -> bool {
        matches!(self, IrrStatus::Converged)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMetrics {
    pub npv: f64,
    /// Percent.
    pub irr: f64,
    pub irr_status: IrrStatus,
    /// Not computed; always 0.
    pub payback_period: f64,
    pub life_cycle_cost: f64,
    pub financial_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMetrics {
    pub social_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApprovalStatus::Approved => "APPROVED",
            ApprovalStatus::Rejected => "REJECTED",
        }
    }
}

/// Aggregated output of one evaluation, including the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub project_name: String,
    pub engineering: EngineeringMetrics,
    pub financial: FinancialMetrics,
    pub environmental: EnvironmentalMetrics,
    pub social: SocialMetrics,
    pub engineering_score: f64,
    #[serde(rename = "finalSustainabilityScore")]
    pub final_score: f64,
    pub approval_status: ApprovalStatus,
    pub decision_log: Vec<String>,
}
