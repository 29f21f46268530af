//! Multi-criteria Go/No-Go evaluation of a construction proposal.
//!
//! Four sub-models score the proposal on engineering efficiency, life-cycle finance,
//! carbon and social utility. [`EvaluationEngine`] runs them in a fixed order and folds
//! the sub-scores through a weighted sum into a single decision with an audit trail.

mod config;
pub mod domain;
pub mod engineering;
pub mod environmental;
mod error;
pub mod financial;
pub mod intake;
pub mod irr;
mod policy;
pub mod router;
pub mod social;

#[cfg(test)]
mod tests;

pub use config::{DecisionWeights, EvaluationConfig, IrrSolverConfig};
pub use domain::{
    ApprovalStatus, BillOfQuantitiesItem, EconomicParams, EngineeringMetrics,
    EnvironmentalMetrics, EvaluationResult, FinancialMetrics, IrrStatus, MaintenanceParams,
    PolicyParams, ProjectRequest, ProjectType, SocialMetrics, SocialParams,
};
pub use error::{EvaluationError, InvalidParameter};
pub use intake::ProjectRequestPayload;
pub use irr::{solve_irr, IrrSolution};
pub use router::evaluation_router;

use tracing::{debug, info};

/// Stateless evaluator applying the decision model constants to a request.
#[derive(Debug, Clone, Default)]
pub struct EvaluationEngine {
    config: EvaluationConfig,
}

impl EvaluationEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Evaluate one proposal. Pure: identical requests yield identical results.
    pub fn evaluate_project(
        &self,
        request: &ProjectRequest,
    ) -> Result<EvaluationResult, EvaluationError> {
        let config = &self.config;
        if request.design_life_years > config.max_design_life_years {
            return Err(EvaluationError::InvalidDesignParameters(
                InvalidParameter::DesignLifeTooLong {
                    years: request.design_life_years,
                    max: config.max_design_life_years,
                },
            ));
        }

        let engineering = engineering::calculate_metrics(&request.boq);
        debug!(
            project = %request.name,
            total_construction_cost = engineering.total_construction_cost,
            total_material_mass = engineering.total_material_mass,
            "engineering model computed"
        );

        let environmental =
            environmental::calculate_impact(&request.boq, request.design_life_years, config);
        debug!(
            project = %request.name,
            total_carbon_tons = environmental.total_carbon_tons,
            environmental_score = environmental.environmental_score,
            "environmental model computed"
        );

        let financial = financial::analyze(
            engineering.total_construction_cost,
            &request.maintenance,
            &request.economics,
            request.design_life_years,
            &request.policy,
            config,
        )?;

        let social = social::evaluate(&request.social, config);
        debug!(
            project = %request.name,
            social_score = social.social_score,
            "social model computed"
        );

        let engineering_score = policy::engineering_score(
            financial.life_cycle_cost,
            request.design_life_years,
            config,
        )?;

        let final_score = policy::weighted_score(
            &config.weights,
            financial.financial_score,
            environmental.environmental_score,
            social.social_score,
            engineering_score,
        );
        if !final_score.is_finite() {
            return Err(EvaluationError::InvalidDesignParameters(
                InvalidParameter::NonFinite("final sustainability score"),
            ));
        }
        let approval_status = policy::decide_status(final_score, request.policy.approval_threshold);
        let decision_log =
            policy::decision_log(&engineering, &environmental, &financial, final_score);

        info!(
            project = %request.name,
            project_type = request.project_type.label(),
            final_score,
            status = approval_status.label(),
            "project evaluated"
        );

        Ok(EvaluationResult {
            project_name: request.name.clone(),
            engineering,
            financial,
            environmental,
            social,
            engineering_score,
            final_score,
            approval_status,
            decision_log,
        })
    }
}
