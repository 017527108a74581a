use utoipa::OpenApi;

use crate::{
    logic::tiling::TileLayout,
    models::{
        crop::{Crop, CropSize, Fertilizer},
        garden::{Dimensions, GridTile, ParsedGardenData},
        summary::{CropBreakdown, CropSummary},
        Coordinate,
    },
};

/// Schema of the decoded garden model, for UI and persistence layers that consume it.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Garden Save Code Model",
        description = "Structures produced by decoding a garden planner save code: the tile grid, plot activity, and per-crop watering summary.",
        version = "0.4.0",
        license(name = "MIT"),
    ),
    components(
        schemas(
            // Enums
            Crop, CropSize, Fertilizer,
            // Grid
            Coordinate, Dimensions, GridTile, ParsedGardenData,
            // Summary
            CropBreakdown, CropSummary,
            // Layout
            TileLayout,
        )
    )
)]
pub struct ModelDoc;
