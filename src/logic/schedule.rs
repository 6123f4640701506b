use chrono::{Datelike, Duration, NaiveDate};

use crate::data::{catalog::PlantCatalog, zones};
use crate::error::ScheduleError;
use crate::models::{
    plant::{Plant, PlantingInfo, PlantingType},
    request::{PlantingAction, PlantingDate, PlantingScheduleResponse},
};

/// Builds the sowing and transplanting calendar of every catalog plant for a frost zone.
/// Entries are sorted by date; plants without planting info are skipped.
pub fn planting_schedule(
    catalog: &PlantCatalog,
    zone: &str,
    year: i32,
) -> Result<PlantingScheduleResponse, ScheduleError> {
    let dates = zones::frost_dates(zone).ok_or_else(|| ScheduleError::UnknownZone {
        zone: zone.to_string(),
        valid: zones::zone_names().into_iter().map(String::from).collect(),
    })?;
    let last_frost = dates
        .last_frost_in(year)
        .ok_or(ScheduleError::InvalidYear(year))?;
    let first_frost = dates
        .first_frost_in(year)
        .ok_or(ScheduleError::InvalidYear(year))?;

    let mut schedule = Vec::new();
    for plant in catalog.plants() {
        let dates = plant_dates(plant, last_frost, first_frost)
            .ok_or(ScheduleError::InvalidYear(year))?;
        schedule.extend(dates);
    }
    // Stable: same-day entries keep catalog order.
    schedule.sort_by_key(|entry| entry.date);

    Ok(PlantingScheduleResponse {
        zone: zone.to_lowercase(),
        last_frost_date: last_frost,
        first_frost_date: first_frost,
        schedule,
    })
}

// `None` when a shifted date falls outside the representable calendar.
fn plant_dates(
    plant: &Plant,
    last_frost: NaiveDate,
    first_frost: NaiveDate,
) -> Option<Vec<PlantingDate>> {
    let Some(info) = &plant.planting else {
        return Some(Vec::new());
    };

    // (offset in weeks, action, direction relative to the last frost)
    let spring = [
        (
            info.start_indoors_weeks_before_last_frost,
            PlantingAction::StartIndoors,
            -1,
        ),
        (
            info.transplant_weeks_before_last_frost,
            PlantingAction::Transplant,
            -1,
        ),
        (
            info.transplant_weeks_after_last_frost,
            PlantingAction::Transplant,
            1,
        ),
        (
            info.direct_sow_weeks_before_last_frost,
            PlantingAction::DirectSow,
            -1,
        ),
        (
            info.direct_sow_weeks_after_last_frost,
            PlantingAction::DirectSow,
            1,
        ),
    ];

    let mut entries = Vec::new();
    for (offset, action, direction) in spring {
        if let Some(weeks) = non_zero(offset) {
            let date = shift(last_frost, direction * i64::from(weeks))?;
            entries.push(entry(plant, action, date, info.notes.clone()));
        }
    }

    if let Some(weeks) = non_zero(info.fall_planting_weeks_before_first_frost) {
        let date = shift(first_frost, -i64::from(weeks))?;
        let notes = match &info.notes {
            Some(notes) if !notes.is_empty() => format!("Fall planting. {notes}"),
            _ => "Fall planting.".to_string(),
        };
        entries.push(entry(plant, fall_action(info), date, Some(notes)));
    }

    Some(entries)
}

fn shift(date: NaiveDate, weeks: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::weeks(weeks))
}

fn non_zero(weeks: Option<u32>) -> Option<u32> {
    weeks.filter(|&w| w > 0)
}

fn fall_action(info: &PlantingInfo) -> PlantingAction {
    match info.planting_type {
        PlantingType::DirectSow => PlantingAction::FallDirectSow,
        PlantingType::Transplant => PlantingAction::FallTransplant,
    }
}

fn entry(
    plant: &Plant,
    action: PlantingAction,
    date: NaiveDate,
    notes: Option<String>,
) -> PlantingDate {
    PlantingDate {
        plant_id: plant.id.clone(),
        plant_name: plant.name.clone(),
        action,
        date,
        week_of_year: date.iso_week().week(),
        notes,
    }
}
