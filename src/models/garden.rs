use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::models::{
    crop::{Crop, Fertilizer},
    summary::CropSummary,
    version::SaveVersion,
    Coordinate, Matrix,
};

/// One planting cell of the garden.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GridTile {
    pub row: usize,
    pub col: usize,
    /// `None` on an active tile means an empty plot; always `None` on inactive tiles.
    pub crop_type: Option<Crop>,
    pub fertilizer_type: Option<Fertilizer>,
    pub is_active: bool,
    pub needs_water: bool,
}

impl GridTile {
    pub fn inactive(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            crop_type: None,
            fertilizer_type: None,
            is_active: false,
            needs_water: false,
        }
    }

    /// An active tile fresh from the planner: anything planted is assumed unwatered.
    pub fn planted(
        row: usize,
        col: usize,
        crop_type: Option<Crop>,
        fertilizer_type: Option<Fertilizer>,
    ) -> Self {
        Self {
            row,
            col,
            crop_type,
            fertilizer_type,
            is_active: true,
            needs_water: crop_type.is_some(),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            row: self.row,
            col: self.col,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

/// A decoded garden layout with its derived statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedGardenData {
    pub dimensions: Dimensions,
    #[schema(value_type = Vec<Vec<GridTile>>)]
    pub tiles: Matrix<GridTile>,
    /// Plot-level activity (at most 3×3), not the expanded tile mask.
    #[schema(value_type = Vec<Vec<bool>>)]
    pub active_plots: Matrix<bool>,
    pub crop_summary: CropSummary,
    #[schema(value_type = String, example = "v0.4")]
    pub version: SaveVersion,
    pub save_code: String,
}

impl ParsedGardenData {
    pub fn tile(&self, at: Coordinate) -> Option<&GridTile> {
        self.tiles.get(at.row).and_then(|row| row.get(at.col))
    }

    pub fn tiles_iter(&self) -> impl Iterator<Item = &GridTile> {
        self.tiles.iter().flat_map(|row| row.iter())
    }

    /// Number of active plots (not tiles).
    pub fn active_plot_count(&self) -> usize {
        self.active_plots
            .iter()
            .flat_map(|row| row.iter())
            .filter(|active| **active)
            .count()
    }
}
