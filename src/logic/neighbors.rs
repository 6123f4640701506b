use crate::models::{
    garden::{Garden, GridCell},
    Coordinate,
};

/// Moore neighbourhood offsets, `dx` outer and `dy` inner.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The up-to-8 in-bounds coordinates surrounding `(x, y)`, diagonals included.
pub fn neighbor_coordinates(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> impl Iterator<Item = Coordinate> {
    OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < width && ny < height).then(|| Coordinate::new(nx, ny))
    })
}

/// All adjacent cells of `(x, y)`, occupied or not.
pub fn adjacent_cells(garden: &Garden, x: usize, y: usize) -> Vec<&GridCell> {
    neighbor_coordinates(x, y, garden.width, garden.height)
        .filter_map(|c| garden.cell(c.x, c.y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_corner_has_three_neighbors() {
        let garden = Garden::new(3, 3).unwrap();
        let adjacent = adjacent_cells(&garden, 0, 0);
        assert_eq!(adjacent.len(), 3);
        let positions: Vec<(usize, usize)> = adjacent.iter().map(|c| (c.x, c.y)).collect();
        assert!(positions.contains(&(1, 0)));
        assert!(positions.contains(&(0, 1)));
        assert!(positions.contains(&(1, 1)));
    }

    #[test]
    fn test_center_has_eight_neighbors() {
        let garden = Garden::new(3, 3).unwrap();
        assert_eq!(adjacent_cells(&garden, 1, 1).len(), 8);
    }

    #[test]
    fn test_edge_has_five_neighbors() {
        let garden = Garden::new(3, 3).unwrap();
        assert_eq!(adjacent_cells(&garden, 1, 0).len(), 5);
        assert_eq!(adjacent_cells(&garden, 2, 1).len(), 5);
    }

    #[test]
    fn test_single_cell_has_no_neighbors() {
        let garden = Garden::new(1, 1).unwrap();
        assert!(adjacent_cells(&garden, 0, 0).is_empty());
    }

    #[test]
    fn test_order_is_deterministic() {
        let first: Vec<Coordinate> = neighbor_coordinates(1, 1, 3, 3).collect();
        let second: Vec<Coordinate> = neighbor_coordinates(1, 1, 3, 3).collect();
        assert_eq!(first, second);
        assert_eq!(first[0], Coordinate::new(0, 0));
        assert_eq!(first[7], Coordinate::new(2, 2));
    }

    fn expected_count(x: usize, y: usize, width: usize, height: usize) -> usize {
        let span = |v: usize, max: usize| {
            let lo = v.saturating_sub(1);
            let hi = (v + 1).min(max - 1);
            hi - lo + 1
        };
        span(x, width) * span(y, height) - 1
    }

    proptest! {
        #[test]
        fn prop_neighbor_count_matches_position(
            width in 1usize..12,
            height in 1usize..12,
            px in 0usize..12,
            py in 0usize..12,
        ) {
            let x = px % width;
            let y = py % height;
            let count = neighbor_coordinates(x, y, width, height).count();
            prop_assert_eq!(count, expected_count(x, y, width, height));

            let on_x_edge = x == 0 || x == width - 1;
            let on_y_edge = y == 0 || y == height - 1;
            if width >= 3 && height >= 3 {
                let expected = match (on_x_edge, on_y_edge) {
                    (true, true) => 3,
                    (true, false) | (false, true) => 5,
                    (false, false) => 8,
                };
                prop_assert_eq!(count, expected);
            }
        }

        #[test]
        fn prop_neighbors_are_in_bounds_and_distinct(
            width in 1usize..10,
            height in 1usize..10,
            px in 0usize..10,
            py in 0usize..10,
        ) {
            let (x, y) = (px % width, py % height);
            let coords: Vec<Coordinate> = neighbor_coordinates(x, y, width, height).collect();
            for c in &coords {
                prop_assert!(c.x < width && c.y < height);
                prop_assert!(*c != Coordinate::new(x, y));
                prop_assert!(c.x.abs_diff(x) <= 1 && c.y.abs_diff(y) <= 1);
            }
            let mut dedup = coords.clone();
            dedup.sort_by_key(|c| (c.x, c.y));
            dedup.dedup();
            prop_assert_eq!(dedup.len(), coords.len());
        }
    }
}
