use std::{collections::HashMap, path::Path};

use crate::{error::CatalogError, models::plant::Plant};

const BUILTIN_PLANTS: &str = include_str!("../../data/plants.json");

/// Read-only plant database, keyed by plant ID.
///
/// Built once at startup and shared by reference afterwards. Listing keeps the order in
/// which plants were loaded.
#[derive(Debug, Clone, Default)]
pub struct PlantCatalog {
    plants: Vec<Plant>,
    index: HashMap<String, usize>,
}

impl PlantCatalog {
    pub fn from_plants(plants: Vec<Plant>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(plants.len());
        for (i, plant) in plants.iter().enumerate() {
            if index.insert(plant.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(plant.id.clone()));
            }
        }
        let catalog = Self { plants, index };
        catalog.warn_dangling_references();
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let plants: Vec<Plant> = serde_json::from_str(json)?;
        Self::from_plants(plants)
    }

    /// Loads a JSON plant array from disk.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_json_str(&json)?;
        log::info!("Loaded {} plants from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The catalog bundled with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_PLANTS)
    }

    pub fn get(&self, id: &str) -> Option<&Plant> {
        self.index.get(id).map(|&i| &self.plants[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    // Dangling IDs are legal: scoring ignores them.
    fn warn_dangling_references(&self) {
        for plant in &self.plants {
            for other in plant.companions.iter().chain(&plant.antagonists) {
                if !self.contains(other) {
                    log::warn!(
                        "Plant '{}' references unknown plant '{}'",
                        plant.id,
                        other
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = PlantCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        let tomato = catalog.get("tomato").expect("tomato must be in the builtin catalog");
        assert!(tomato.is_companion_of("basil"));
        assert!(tomato.planting.is_some());
    }

    #[test]
    fn test_builtin_catalog_keeps_file_order() {
        let catalog = PlantCatalog::builtin().unwrap();
        assert_eq!(catalog.plants()[0].id, "tomato");
        assert_eq!(catalog.plants()[1].id, "basil");
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let plants = vec![Plant::new("mint", "Mint", 1), Plant::new("mint", "Mint", 1)];
        assert!(matches!(
            PlantCatalog::from_plants(plants),
            Err(CatalogError::DuplicateId(id)) if id == "mint"
        ));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            PlantCatalog::from_json_str("[{\"id\": 3}]"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_dangling_reference_is_accepted() {
        let plants = vec![Plant::new("tomato", "Tomato", 1).with_antagonists(&["walnut"])];
        let catalog = PlantCatalog::from_plants(plants).unwrap();
        assert!(catalog.contains("tomato"));
        assert!(!catalog.contains("walnut"));
        assert!(catalog.get("walnut").is_none());
    }

    #[actix_web::test]
    async fn test_load_missing_file_reports_path() {
        let err = PlantCatalog::load("/nonexistent/plants.json").await.unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/plants.json"));
    }

    #[actix_web::test]
    async fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("gardengod-plants-{}.json", std::process::id()));
        std::fs::write(&path, r#"[{"id":"mint","name":"Mint","spacing_per_sqft":1}]"#).unwrap();
        let catalog = PlantCatalog::load(&path).await.unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("mint").map(|p| p.name.as_str()), Some("Mint"));
    }
}
