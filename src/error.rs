use std::path::PathBuf;

/// Failures of the placement engine. Placements committed before the error stay in the grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("Unknown plant ID: {0}")]
    UnknownPlant(String),
    #[error("Garden is full, cannot place more plants")]
    GardenFull,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GardenError {
    #[error("Garden dimensions must be strictly positive (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },
    #[error("Garden of {width}x{height} exceeds the limit of {max} cells")]
    TooLarge {
        width: usize,
        height: usize,
        max: usize,
    },
    #[error("Garden grid must contain {expected} cells, got {actual}")]
    CellCount { expected: usize, actual: usize },
    #[error("Cell ({x}, {y}) lies outside the {width}x{height} garden")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("Cell ({x}, {y}) appears more than once in the grid")]
    DuplicateCell { x: usize, y: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read plant data from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed plant data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate plant ID in catalog: {0}")]
    DuplicateId(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("Unknown zone: {zone}. Valid zones: {}", .valid.join(", "))]
    UnknownZone { zone: String, valid: Vec<String> },
    #[error("Frost dates cannot be computed for year {0}")]
    InvalidYear(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_messages() {
        assert_eq!(
            PlacementError::UnknownPlant("kale".into()).to_string(),
            "Unknown plant ID: kale"
        );
        assert!(PlacementError::GardenFull.to_string().contains("Garden is full"));
    }

    #[test]
    fn test_unknown_zone_lists_valid_zones() {
        let err = ScheduleError::UnknownZone {
            zone: "12z".into(),
            valid: vec!["3a".into(), "3b".into()],
        };
        assert_eq!(err.to_string(), "Unknown zone: 12z. Valid zones: 3a, 3b");
    }
}
