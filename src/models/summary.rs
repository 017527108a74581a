use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::crop::{Crop, CropSize};

/// Per-crop tallies within a garden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CropBreakdown {
    /// Number of tiles planted with this crop.
    pub total: usize,
    pub needing_water: usize,
    pub size: CropSize,
    pub tiles_per_plant: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CropSummary {
    /// Planted tile count across the whole garden.
    pub total_plants: usize,
    pub plants_needing_water: usize,
    /// `plants_needing_water / total_plants * 100`, or `0` for an empty garden.
    pub watering_percentage: f64,
    #[schema(value_type = BTreeMap<String, CropBreakdown>)]
    pub crop_breakdown: BTreeMap<Crop, CropBreakdown>,
}

impl Default for CropSummary {
    fn default() -> Self {
        Self {
            total_plants: 0,
            plants_needing_water: 0,
            watering_percentage: 0.0,
            crop_breakdown: BTreeMap::new(),
        }
    }
}
