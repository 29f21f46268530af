//! Wire-format intake for evaluation requests.
//!
//! The dashboard posts loosely typed form values. Numeric fields may arrive as numbers,
//! numeric strings, blanks or garbage; everything that is not a finite number becomes 0
//! before the engine sees it.

use std::io::Cursor;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::domain::{
    BillOfQuantitiesItem, EconomicParams, MaintenanceParams, PolicyParams, ProjectRequest,
    ProjectType, SocialParams,
};
use crate::boq::{BoqImportError, BoqImporter};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequestPayload {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_project_type")]
    pub project_type: ProjectType,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub design_life_years: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub construction_duration_months: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub boq: Vec<BoqItemPayload>,
    /// CSV bill of quantities; replaces `boq` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boq_csv: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub maintenance: MaintenancePayload,
    #[serde(default, deserialize_with = "null_as_default")]
    pub economics: EconomicsPayload,
    #[serde(default, deserialize_with = "null_as_default")]
    pub social: SocialPayload,
    #[serde(default, deserialize_with = "null_as_default")]
    pub policy: PolicyPayload,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoqItemPayload {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub unit_cost: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub carbon_factor: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenancePayload {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub annual_maintenance_cost: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub degradation_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicsPayload {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub discount_rate: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub annual_economic_benefit: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPayload {
    #[serde(default, deserialize_with = "lenient_u32")]
    pub jobs_created: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub population_served: u32,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub safety_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyPayload {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub subsidy_rate: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub carbon_tax_rate: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub approval_threshold: f64,
}

impl ProjectRequestPayload {
    /// Convert into the engine's value object, importing `boqCsv` if supplied.
    pub fn into_request(self) -> Result<ProjectRequest, BoqImportError> {
        let boq = match self.boq_csv {
            Some(csv) => BoqImporter::from_reader(Cursor::new(csv.into_bytes()))?,
            None => self.boq.into_iter().map(BillOfQuantitiesItem::from).collect(),
        };

        Ok(ProjectRequest {
            name: self.name,
            project_type: self.project_type,
            design_life_years: self.design_life_years,
            construction_duration_months: self.construction_duration_months,
            boq,
            maintenance: MaintenanceParams {
                annual_maintenance_cost: self.maintenance.annual_maintenance_cost,
                degradation_rate: self.maintenance.degradation_rate,
            },
            economics: EconomicParams {
                discount_rate: self.economics.discount_rate,
                annual_economic_benefit: self.economics.annual_economic_benefit,
            },
            social: SocialParams {
                jobs_created: self.social.jobs_created,
                population_served: self.social.population_served,
                safety_score: self.social.safety_score,
            },
            policy: PolicyParams {
                subsidy_rate: self.policy.subsidy_rate,
                carbon_tax_rate: self.policy.carbon_tax_rate,
                approval_threshold: self.policy.approval_threshold,
            },
        })
    }
}

impl From<BoqItemPayload> for BillOfQuantitiesItem {
    fn from(item: BoqItemPayload) -> Self {
        Self {
            name: item.name,
            quantity: item.quantity,
            unit_cost: item.unit_cost,
            carbon_factor: item.carbon_factor,
        }
    }
}

/// Finite number or 0. Shared with the CSV importer.
pub(crate) fn coerce_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

fn value_as_f64(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => coerce_number(text),
        _ => 0.0,
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_f64(&value))
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    // `as` truncates toward zero and saturates negatives to 0.
    Ok(value_as_f64(&value) as u32)
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_project_type<'de, D>(deserializer: D) -> Result<ProjectType, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let project_type = match value.as_str().map(|raw| raw.trim().to_ascii_uppercase()) {
        Some(raw) if raw == "BRIDGE" => ProjectType::Bridge,
        Some(raw) if raw == "ROAD" => ProjectType::Road,
        _ => ProjectType::Building,
    };
    Ok(project_type)
}
