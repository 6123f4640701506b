use serde::{Deserialize, Serialize};

pub mod garden;
pub mod plant;
pub mod request;

/// A zero-based (x, y) position within the garden grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}
