//! Static reference catalogs for crops and growth stages
//!
//! Returned verbatim by the catalog endpoints. These match the label set
//! the recommendation classifier was trained on.

use serde::{Deserialize, Serialize};

/// A selectable crop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropOption {
    pub id: String,
    pub name: String,
}

/// A named phase of a crop's lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthStage {
    pub id: String,
    pub name: String,
    pub duration: String,
}

/// Crops available for advisory generation
pub fn available_crops() -> Vec<CropOption> {
    [
        ("rice", "Rice"),
        ("maize", "Maize"),
        ("chickpea", "Chickpea"),
        ("kidneybeans", "Kidney Beans"),
        ("wheat", "Wheat"),
        ("cotton", "Cotton"),
    ]
    .into_iter()
    .map(|(id, name)| CropOption {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

/// Growth stages for a crop.
///
/// The catalog is the same for every crop today; the name is accepted so
/// the endpoint shape stays stable when per-crop stages arrive.
pub fn growth_stages(_crop_name: &str) -> Vec<GrowthStage> {
    [
        ("germination", "Germination", "7-14 days"),
        ("vegetative", "Vegetative", "30-60 days"),
        ("flowering", "Flowering", "7-14 days"),
        ("grain_filling", "Grain Filling", "15-30 days"),
        ("maturity", "Maturity", "7-14 days"),
    ]
    .into_iter()
    .map(|(id, name, duration)| GrowthStage {
        id: id.to_string(),
        name: name.to_string(),
        duration: duration.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_crops_catalog() {
        let crops = available_crops();
        assert_eq!(crops.len(), 6);
        assert_eq!(crops[0].id, "rice");
        assert_eq!(crops[0].name, "Rice");
        assert!(crops.iter().any(|c| c.id == "cotton"));
    }

    #[test]
    fn test_growth_stages_catalog() {
        let stages = growth_stages("rice");
        assert_eq!(stages.len(), 5);
        assert_eq!(stages[0].id, "germination");
        assert_eq!(stages[1].duration, "30-60 days");
        // Same catalog regardless of crop
        assert_eq!(stages, growth_stages("wheat"));
    }
}
