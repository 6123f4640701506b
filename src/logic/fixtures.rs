use crate::{data::catalog::PlantCatalog, models::plant::Plant};

/// tomato ↔ basil are mutual companions; tomato ↔ cabbage are mutual antagonists.
pub fn sample_catalog() -> PlantCatalog {
    PlantCatalog::from_plants(vec![
        Plant::new("tomato", "Tomato", 1)
            .with_companions(&["basil", "carrot"])
            .with_antagonists(&["cabbage"]),
        Plant::new("basil", "Basil", 4).with_companions(&["tomato"]),
        Plant::new("cabbage", "Cabbage", 1).with_antagonists(&["tomato"]),
    ])
    .expect("sample catalog has unique ids")
}
