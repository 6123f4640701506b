use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::{IntoParams, ToSchema};

use crate::models::garden::{Garden, Placement};

/// Query string of `POST /api/garden`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateGardenQuery {
    /// Width of the garden in feet.
    pub width: usize,
    /// Height of the garden in feet.
    pub height: usize,
}

/// Query string of `GET /api/schedule/{zone}`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScheduleQuery {
    /// Calendar year; defaults to the current year.
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OptimizeRequest {
    pub garden: Garden,
    /// Plant IDs to place, in placement order. Duplicates are allowed.
    pub plants_to_place: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OptimizeResponse {
    pub garden: Garden,
    pub score: i32,
    pub placements: Vec<Placement>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreResponse {
    pub score: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlantingAction {
    StartIndoors,
    DirectSow,
    Transplant,
    FallDirectSow,
    FallTransplant,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlantingDate {
    pub plant_id: String,
    pub plant_name: String,
    pub action: PlantingAction,
    pub date: NaiveDate,
    /// ISO 8601 week number of `date`.
    pub week_of_year: u32,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlantingScheduleResponse {
    pub zone: String,
    pub last_frost_date: NaiveDate,
    pub first_frost_date: NaiveDate,
    pub schedule: Vec<PlantingDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}
