use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::GardenError, models::Coordinate};

/// Largest garden accepted, in cells.
pub const MAX_CELLS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GridCell {
    pub x: usize,
    pub y: usize,
    #[serde(default)]
    pub plant_id: Option<String>,
}

impl GridCell {
    pub fn empty(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            plant_id: None,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }

    pub fn is_occupied(&self) -> bool {
        self.plant_id.is_some()
    }
}

/// One committed decision of the placement engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Placement {
    pub plant_id: String,
    pub x: usize,
    pub y: usize,
    /// Companion score of the chosen cell at the time of placement.
    pub score: i32,
}

/// A rectangular garden of unit cells.
///
/// Once built through [`Garden::new`] or [`Garden::normalized`], `grid` holds exactly
/// `width * height` cells in scan order: ascending `x`, then ascending `y`. The cell at
/// `(x, y)` therefore lives at index `x * height + y`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Garden {
    /// Width in feet.
    pub width: usize,
    /// Height in feet.
    pub height: usize,
    #[serde(default)]
    pub grid: Vec<GridCell>,
}

impl Garden {
    /// Builds an empty garden with every cell unoccupied.
    pub fn new(width: usize, height: usize) -> Result<Self, GardenError> {
        check_dimensions(width, height)?;
        let grid = (0..width)
            .flat_map(|x| (0..height).map(move |y| GridCell::empty(x, y)))
            .collect();
        Ok(Self {
            width,
            height,
            grid,
        })
    }

    /// Validates a client-supplied garden and sorts its cells into scan order.
    pub fn normalized(mut self) -> Result<Self, GardenError> {
        let expected = check_dimensions(self.width, self.height)?;
        if self.grid.len() != expected {
            return Err(GardenError::CellCount {
                expected,
                actual: self.grid.len(),
            });
        }

        let mut seen = HashSet::with_capacity(expected);
        for cell in &self.grid {
            if cell.x >= self.width || cell.y >= self.height {
                return Err(GardenError::OutOfBounds {
                    x: cell.x,
                    y: cell.y,
                    width: self.width,
                    height: self.height,
                });
            }
            if !seen.insert(cell.coordinate()) {
                return Err(GardenError::DuplicateCell {
                    x: cell.x,
                    y: cell.y,
                });
            }
        }

        self.grid.sort_by_key(|cell| (cell.x, cell.y));
        Ok(self)
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| x * self.height + y)
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&GridCell> {
        self.index(x, y).and_then(|i| self.grid.get(i))
    }

    pub fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut GridCell> {
        let index = self.index(x, y)?;
        self.grid.get_mut(index)
    }

    /// Occupies `(x, y)` with `plant_id`. Returns false when the cell does not exist.
    pub fn plant(&mut self, x: usize, y: usize, plant_id: impl Into<String>) -> bool {
        match self.cell_mut(x, y) {
            Some(cell) => {
                cell.plant_id = Some(plant_id.into());
                true
            }
            None => false,
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.grid.iter().filter(|c| c.is_occupied()).count()
    }

    pub fn count_of(&self, plant_id: &str) -> usize {
        self.grid
            .iter()
            .filter(|c| c.plant_id.as_deref() == Some(plant_id))
            .count()
    }
}

/// Returns the cell count of a `width` x `height` garden.
fn check_dimensions(width: usize, height: usize) -> Result<usize, GardenError> {
    if width == 0 || height == 0 {
        return Err(GardenError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .filter(|&cells| cells <= MAX_CELLS)
        .ok_or(GardenError::TooLarge {
            width,
            height,
            max: MAX_CELLS,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_covers_every_coordinate_in_scan_order() {
        let garden = Garden::new(3, 2).unwrap();
        assert_eq!(garden.grid.len(), 6);
        let coords: Vec<(usize, usize)> = garden.grid.iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
        assert_eq!(garden.occupied_count(), 0);
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            Garden::new(0, 3),
            Err(GardenError::InvalidDimensions {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn test_new_rejects_oversized_garden() {
        assert_eq!(
            Garden::new(1_000_000, 1_000_000),
            Err(GardenError::TooLarge {
                width: 1_000_000,
                height: 1_000_000,
                max: MAX_CELLS
            })
        );
        assert!(Garden::new(MAX_CELLS, 1).is_ok());
        assert!(Garden::new(MAX_CELLS + 1, 1).is_err());
    }

    #[test]
    fn test_normalized_rejects_overflowing_dimensions() {
        let garden = Garden {
            width: usize::MAX / 2 + 1,
            height: 2,
            grid: vec![],
        };
        assert!(matches!(
            garden.normalized(),
            Err(GardenError::TooLarge { .. })
        ));

        let garden = Garden {
            width: 1 << 32,
            height: 1 << 32,
            grid: vec![],
        };
        assert!(matches!(
            garden.normalized(),
            Err(GardenError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_cell_lookup_matches_coordinates() {
        let garden = Garden::new(4, 3).unwrap();
        for x in 0..4 {
            for y in 0..3 {
                let cell = garden.cell(x, y).unwrap();
                assert_eq!((cell.x, cell.y), (x, y));
            }
        }
        assert!(garden.cell(4, 0).is_none());
        assert!(garden.cell(0, 3).is_none());
    }

    #[test]
    fn test_plant_marks_cell() {
        let mut garden = Garden::new(2, 2).unwrap();
        assert!(garden.plant(1, 0, "tomato"));
        assert!(!garden.plant(2, 0, "tomato"));
        assert_eq!(garden.cell(1, 0).unwrap().plant_id.as_deref(), Some("tomato"));
        assert_eq!(garden.count_of("tomato"), 1);
    }

    #[test]
    fn test_normalized_sorts_shuffled_grid() {
        let mut garden = Garden::new(2, 2).unwrap();
        garden.plant(1, 1, "basil");
        garden.grid.reverse();
        let garden = garden.normalized().unwrap();
        assert_eq!(garden.grid[0].coordinate(), Coordinate::new(0, 0));
        assert_eq!(garden.cell(1, 1).unwrap().plant_id.as_deref(), Some("basil"));
    }

    #[test]
    fn test_normalized_rejects_missing_cells() {
        let garden = Garden {
            width: 2,
            height: 2,
            grid: vec![],
        };
        assert_eq!(
            garden.normalized(),
            Err(GardenError::CellCount {
                expected: 4,
                actual: 0
            })
        );
    }

    #[test]
    fn test_normalized_rejects_out_of_bounds_and_duplicates() {
        let mut garden = Garden::new(2, 1).unwrap();
        garden.grid[1] = GridCell::empty(5, 0);
        assert!(matches!(
            garden.normalized(),
            Err(GardenError::OutOfBounds { x: 5, y: 0, .. })
        ));

        let mut garden = Garden::new(2, 1).unwrap();
        garden.grid[1] = GridCell::empty(0, 0);
        assert_eq!(
            garden.normalized(),
            Err(GardenError::DuplicateCell { x: 0, y: 0 })
        );
    }

    #[test]
    fn test_deserialize_missing_plant_id_as_empty() {
        let garden: Garden = serde_json::from_str(
            r#"{"width":1,"height":1,"grid":[{"x":0,"y":0}]}"#,
        )
        .unwrap();
        assert!(!garden.grid[0].is_occupied());
    }
}
