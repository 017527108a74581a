use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{garden::Dimensions, PLOT_SIZE};

/// Tiles never shrink below this many pixels.
pub const MIN_TILE_SIZE: u32 = 16;

/// Pixel geometry of a tile grid laid out in a container of a given width.
/// Tiles of one plot touch; adjacent plots are separated by `gap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TileLayout {
    pub tile_size: u32,
    pub gap: u32,
    pub width: u32,
    pub height: u32,
}

fn plot_gaps(tiles: usize) -> u32 {
    let plots = tiles.div_ceil(PLOT_SIZE);
    u32::try_from(plots.saturating_sub(1)).unwrap_or(u32::MAX)
}

impl TileLayout {
    /// Largest tile size that fits `dimensions` into `available_width`.
    pub fn fit(dimensions: Dimensions, available_width: u32, gap: u32) -> Self {
        let columns = u32::try_from(dimensions.columns).unwrap_or(u32::MAX);
        let rows = u32::try_from(dimensions.rows).unwrap_or(u32::MAX);
        let column_gaps = plot_gaps(dimensions.columns).saturating_mul(gap);
        let row_gaps = plot_gaps(dimensions.rows).saturating_mul(gap);

        let tile_size = available_width
            .saturating_sub(column_gaps)
            .checked_div(columns)
            .unwrap_or(MIN_TILE_SIZE)
            .max(MIN_TILE_SIZE);
        Self {
            tile_size,
            gap,
            width: tile_size.saturating_mul(columns).saturating_add(column_gaps),
            height: tile_size.saturating_mul(rows).saturating_add(row_gaps),
        }
    }

    /// Top-left pixel of the tile at (`row`, `col`).
    pub fn tile_origin(&self, row: usize, col: usize) -> (u32, u32) {
        let offset = |index: usize| {
            let index = u32::try_from(index).unwrap_or(u32::MAX);
            let plot = index / PLOT_SIZE as u32;
            index
                .saturating_mul(self.tile_size)
                .saturating_add(plot.saturating_mul(self.gap))
        };
        (offset(col), offset(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_garden_fits_width() {
        let layout = TileLayout::fit(Dimensions { rows: 9, columns: 9 }, 500, 10);
        // (500 - 2 * 10) / 9 = 53
        assert_eq!(layout.tile_size, 53);
        assert_eq!(layout.width, 53 * 9 + 20);
        assert_eq!(layout.height, layout.width);
        assert!(layout.width <= 500);
    }

    #[test]
    fn test_single_plot_has_no_gaps() {
        let layout = TileLayout::fit(Dimensions { rows: 3, columns: 3 }, 300, 10);
        assert_eq!(layout.tile_size, 100);
        assert_eq!(layout.width, 300);
    }

    #[test]
    fn test_narrow_container_clamps_tile_size() {
        let layout = TileLayout::fit(Dimensions { rows: 9, columns: 9 }, 50, 10);
        assert_eq!(layout.tile_size, MIN_TILE_SIZE);
    }

    #[test]
    fn test_empty_grid_does_not_divide_by_zero() {
        let layout = TileLayout::fit(Dimensions { rows: 0, columns: 0 }, 300, 10);
        assert_eq!(layout.tile_size, MIN_TILE_SIZE);
        assert_eq!(layout.width, 0);
    }

    #[test]
    fn test_tile_origin_skips_plot_gaps() {
        let layout = TileLayout::fit(Dimensions { rows: 6, columns: 6 }, 200, 20);
        // (200 - 20) / 6 = 30
        assert_eq!(layout.tile_size, 30);
        assert_eq!(layout.tile_origin(0, 0), (0, 0));
        assert_eq!(layout.tile_origin(0, 2), (60, 0));
        assert_eq!(layout.tile_origin(4, 3), (110, 140));
    }
}
