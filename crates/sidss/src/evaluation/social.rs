use super::config::EvaluationConfig;
use super::domain::{SocialMetrics, SocialParams};

/// Weighted social utility. Jobs and population saturate at their references;
/// the safety rating passes through unclamped.
pub fn evaluate(social: &SocialParams, config: &EvaluationConfig) -> SocialMetrics {
    let jobs_norm = (f64::from(social.jobs_created) / config.jobs_reference).min(1.0);
    let population_norm =
        (f64::from(social.population_served) / config.population_reference).min(1.0);
    let safety_norm = social.safety_score / config.safety_reference;

    let social_score = jobs_norm * config.jobs_weight
        + population_norm * config.population_weight
        + safety_norm * config.safety_weight;

    SocialMetrics { social_score }
}
