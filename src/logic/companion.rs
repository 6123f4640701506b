use crate::models::plant::Plant;

pub const GOOD_COMPANION_SCORE: i32 = 1;
pub const BAD_COMPANION_SCORE: i32 = -2;

/// Calculates the companion score of a plant against its neighbours.
/// +1 per companion, -2 per antagonist. Only `plant`'s own lists are consulted, so the
/// relation does not have to be symmetric. A neighbour listed as both counts twice.
pub fn companion_score(plant: &Plant, neighbors: &[&Plant]) -> i32 {
    let mut score = 0;
    for neighbor in neighbors {
        if plant.is_companion_of(&neighbor.id) {
            score += GOOD_COMPANION_SCORE;
        }
        if plant.is_antagonist_of(&neighbor.id) {
            score += BAD_COMPANION_SCORE;
        }
    }
    score
}
