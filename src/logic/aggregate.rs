use std::collections::BTreeMap;

use crate::{
    data::crops::crop_size,
    models::{
        crop::Crop,
        garden::{Dimensions, GridTile, ParsedGardenData},
        summary::{CropBreakdown, CropSummary},
        Coordinate, Matrix,
    },
};

/// Tile rows present, and the widest tile row.
pub fn dimensions(tiles: &Matrix<GridTile>) -> Dimensions {
    Dimensions {
        rows: tiles.len(),
        columns: tiles.iter().map(Vec::len).max().unwrap_or(0),
    }
}

/// Share of plants needing water, in percent. An empty garden is 0%.
pub fn watering_percentage(needing_water: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        needing_water as f64 / total as f64 * 100.0
    }
}

/// Tallies planted tiles per crop. Every tile counts once, whatever the crop's footprint.
pub fn summarize(tiles: &Matrix<GridTile>) -> CropSummary {
    let mut crop_breakdown: BTreeMap<Crop, CropBreakdown> = BTreeMap::new();
    for tile in tiles.iter().flat_map(|row| row.iter()) {
        let Some(crop) = tile.crop_type.filter(|_| tile.is_active) else {
            continue;
        };
        let entry = crop_breakdown.entry(crop).or_insert_with(|| {
            let size = crop_size(crop);
            CropBreakdown {
                total: 0,
                needing_water: 0,
                size,
                tiles_per_plant: size.tiles_per_plant(),
            }
        });
        entry.total += 1;
        if tile.needs_water {
            entry.needing_water += 1;
        }
    }

    let total_plants = crop_breakdown.values().map(|b| b.total).sum();
    let plants_needing_water = crop_breakdown.values().map(|b| b.needing_water).sum();
    CropSummary {
        total_plants,
        plants_needing_water,
        watering_percentage: watering_percentage(plants_needing_water, total_plants),
        crop_breakdown,
    }
}

impl ParsedGardenData {
    /// Recomputes `crop_summary` from the current tiles.
    pub fn refresh_summary(&mut self) {
        self.crop_summary = summarize(&self.tiles);
    }

    /// Marks one planted tile as watered. Returns whether anything changed.
    pub fn water_tile(&mut self, at: Coordinate) -> bool {
        self.set_watering(|tile| tile.coordinate() == at, false) > 0
    }

    /// Marks every tile of `crop` as watered and returns how many tiles changed.
    pub fn water_crop(&mut self, crop: Crop) -> usize {
        self.set_watering(|tile| tile.crop_type == Some(crop), false)
    }

    pub fn water_all(&mut self) -> usize {
        self.set_watering(|_| true, false)
    }

    /// Back to the import convention: every planted tile needs water.
    pub fn reset_watering(&mut self) -> usize {
        self.set_watering(|_| true, true)
    }

    fn set_watering(&mut self, matches: impl Fn(&GridTile) -> bool, needs_water: bool) -> usize {
        let mut changed = 0;
        for tile in self.tiles.iter_mut().flat_map(|row| row.iter_mut()) {
            let planted = tile.is_active && tile.crop_type.is_some();
            if planted && matches(&*tile) && tile.needs_water != needs_water {
                tile.needs_water = needs_water;
                changed += 1;
            }
        }
        if changed > 0 {
            self.refresh_summary();
        }
        changed
    }
}
