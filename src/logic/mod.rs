use log::debug;

use crate::{error::GardenError, models::garden::ParsedGardenData};

pub mod aggregate;
pub mod codes;
pub mod decoder;
pub mod encoder;
pub mod tiling;
pub mod url;
pub mod version;

/// Parses a bare save code or a planner link in any supported version.
pub fn parse(input: &str) -> Result<ParsedGardenData, GardenError> {
    let raw = url::extract_save_code(input)?;
    let converted = version::detect_and_convert(&raw)?;
    debug!(
        "decoding save code originally in {}: {}",
        converted.original_version, converted.code
    );
    decoder::decode(&converted.code)
}
