use crate::data::catalog::PlantCatalog;
use crate::error::PlacementError;
use crate::logic::{companion::companion_score, neighbors::adjacent_cells};
use crate::models::{
    garden::{Garden, Placement},
    plant::Plant,
};

/// Greedy placement on the grid.
///
/// For each requested plant ID, in order, chooses the free cell that maximises the companion
/// score against already-placed neighbours; ties go to the first cell in scan order. There is
/// no lookahead: earlier placements constrain later ones, and a different order may produce a
/// different layout.
///
/// The garden is mutated in place. On error the placements committed before the failing entry
/// remain in the grid.
pub fn optimize_garden<S: AsRef<str>>(
    garden: &mut Garden,
    plants_to_place: &[S],
    catalog: &PlantCatalog,
) -> Result<Vec<Placement>, PlacementError> {
    let mut placements = Vec::with_capacity(plants_to_place.len());

    for plant_id in plants_to_place {
        let plant_id = plant_id.as_ref();
        let plant = catalog
            .get(plant_id)
            .ok_or_else(|| PlacementError::UnknownPlant(plant_id.to_string()))?;

        let Some((index, score)) = find_best_cell(garden, plant, catalog) else {
            log::info!(
                "Garden full after placing {} of {} plants",
                placements.len(),
                plants_to_place.len()
            );
            return Err(PlacementError::GardenFull);
        };

        let cell = &mut garden.grid[index];
        cell.plant_id = Some(plant.id.clone());
        log::debug!("Placed {} at ({}, {}) with score {score}", plant.id, cell.x, cell.y);
        placements.push(Placement {
            plant_id: plant.id.clone(),
            x: cell.x,
            y: cell.y,
            score,
        });
    }

    log::info!(
        "Placed {} plants in a {}x{} garden",
        placements.len(),
        garden.width,
        garden.height
    );
    Ok(placements)
}

/// Grid index and score of the best empty cell for `plant`, or `None` when the garden is full.
pub fn find_best_cell(
    garden: &Garden,
    plant: &Plant,
    catalog: &PlantCatalog,
) -> Option<(usize, i32)> {
    let mut best: Option<(usize, i32)> = None;

    for (index, cell) in garden.grid.iter().enumerate() {
        if cell.is_occupied() {
            continue;
        }
        let neighbors = neighbor_plants(garden, cell.x, cell.y, catalog);
        let score = companion_score(plant, &neighbors);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    best
}

/// Total companion score of a placed garden.
///
/// Each adjacent pair is seen once from each side, so the sum is halved (floor division).
/// The result is only an exact pair count when companion and antagonist lists are symmetric.
pub fn garden_score(garden: &Garden, catalog: &PlantCatalog) -> i32 {
    let total: i32 = garden
        .grid
        .iter()
        .filter_map(|cell| {
            let plant = catalog.get(cell.plant_id.as_deref()?)?;
            let neighbors = neighbor_plants(garden, cell.x, cell.y, catalog);
            Some(companion_score(plant, &neighbors))
        })
        .sum();

    total.div_euclid(2)
}

// Empty neighbours and IDs missing from the catalog are skipped.
fn neighbor_plants<'a>(
    garden: &Garden,
    x: usize,
    y: usize,
    catalog: &'a PlantCatalog,
) -> Vec<&'a Plant> {
    adjacent_cells(garden, x, y)
        .into_iter()
        .filter_map(|cell| cell.plant_id.as_deref())
        .filter_map(|id| catalog.get(id))
        .collect()
}
