//! Codec for garden planner save codes.
//!
//! A save code such as `v0.4_D-111-111-111_CR-TTT-PPP-RRR` describes up to 3×3
//! plots of 3×3 tiles, the crop on every tile and, optionally, its fertilizer.
//! Older codes are upgraded to the current version before decoding, and decoded
//! gardens carry a per-crop watering summary.
//!
//! ```
//! let garden = garden::parse("v0.1_D-111-111-111_CROPS-ToToTo-PoPoPo-RiRiRi")?;
//! assert_eq!(garden.crop_summary.total_plants, 9);
//! assert_eq!(garden::encode(&garden)?, "v0.4_D-111-111-111_CR-TTT-PPP-RRR");
//! # Ok::<(), garden::GardenError>(())
//! ```

pub mod data;
pub mod error;
pub mod logic;
pub mod models;
pub mod schema;

pub use error::{CodeTableKind, GardenError, Section};
pub use logic::{
    decoder::decode,
    encoder::encode,
    parse,
    url::planner_link,
    version::{detect_and_convert, Converted, CURRENT_VERSION},
};
pub use models::garden::ParsedGardenData;
