use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod crop;
pub mod garden;
pub mod summary;
pub mod version;

/// Convenience alias for a two-dimensional grid.
pub type Matrix<T> = Vec<Vec<T>>;

/// A zero-based (row, col) position within the tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

/// Number of tiles along each edge of a plot, and of plots along each edge of a garden.
pub const PLOT_SIZE: usize = 3;

/// Largest tile grid a save code can describe (3×3 plots of 3×3 tiles).
pub const MAX_TILES: usize = PLOT_SIZE * PLOT_SIZE;
