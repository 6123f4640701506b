use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlantingType {
    DirectSow,
    Transplant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FrostTolerance {
    Tender,
    SemiHardy,
    Hardy,
    VeryHardy,
}

/// Sowing and transplanting offsets, in weeks, relative to the frost dates of a zone.
/// Zero and missing offsets are both treated as "not applicable".
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlantingInfo {
    #[serde(rename = "type")]
    pub planting_type: PlantingType,
    pub frost_tolerance: FrostTolerance,
    /// `[min_days, max_days]`
    pub days_to_maturity: Vec<u32>,

    pub start_indoors_weeks_before_last_frost: Option<u32>,
    pub transplant_weeks_before_last_frost: Option<u32>,
    pub transplant_weeks_after_last_frost: Option<u32>,

    pub direct_sow: Option<bool>,
    pub direct_sow_weeks_before_last_frost: Option<u32>,
    pub direct_sow_weeks_after_last_frost: Option<u32>,

    pub fall_planting: Option<bool>,
    pub fall_planting_weeks_before_first_frost: Option<u32>,
    pub transplant_for_fall_weeks_before_first_frost: Option<u32>,
    pub spring_planting_weeks_before_last_frost: Option<u32>,

    pub succession_planting_weeks: Option<u32>,

    pub notes: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CareInfo {
    pub watering: String,
    /// e.g. "daily", "every 2-3 days"
    pub watering_frequency: String,
    pub sunlight: String,
    pub fertilizing: Option<String>,
    pub pruning: Option<String>,
    pub pests: Option<String>,
    pub harvesting: Option<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Plant {
    pub id: String,
    pub name: String,
    /// Number of plants that fit in one square foot. Informational only.
    #[serde(rename = "spacing_per_sqft")]
    pub density: u32,
    #[serde(default)]
    pub companions: Vec<String>,
    #[serde(default)]
    pub antagonists: Vec<String>,
    pub planting: Option<PlantingInfo>,
    pub care: Option<CareInfo>,
}

impl Plant {
    pub fn new(id: impl Into<String>, name: impl Into<String>, density: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            density,
            companions: Vec::new(),
            antagonists: Vec::new(),
            planting: None,
            care: None,
        }
    }

    pub fn with_companions(mut self, ids: &[&str]) -> Self {
        self.companions = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn with_antagonists(mut self, ids: &[&str]) -> Self {
        self.antagonists = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn is_companion_of(&self, other_id: &str) -> bool {
        self.companions.iter().any(|c| c == other_id)
    }

    pub fn is_antagonist_of(&self, other_id: &str) -> bool {
        self.antagonists.iter().any(|a| a == other_id)
    }
}
