use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::GardenError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "PascalCase")]
pub enum Crop {
    Tomato,
    Potato,
    Rice,
    Wheat,
    Carrot,
    Onion,
    Cotton,
    Corn,
    Blueberry,
    Apple,
    SpicyPepper,
    NapaCabbage,
    BokChoy,
}

impl Crop {
    /// Human-readable crop name, as shown by the planner.
    pub fn name(self) -> &'static str {
        match self {
            Crop::Tomato => "Tomato",
            Crop::Potato => "Potato",
            Crop::Rice => "Rice",
            Crop::Wheat => "Wheat",
            Crop::Carrot => "Carrot",
            Crop::Onion => "Onion",
            Crop::Cotton => "Cotton",
            Crop::Corn => "Corn",
            Crop::Blueberry => "Blueberry",
            Crop::Apple => "Apple",
            Crop::SpicyPepper => "Spicy Pepper",
            Crop::NapaCabbage => "Napa Cabbage",
            Crop::BokChoy => "Bok Choy",
        }
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a display name (`"Spicy Pepper"`) or its serialized form (`"SpicyPepper"`),
/// ignoring case.
impl FromStr for Crop {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        crate::data::crops::get_all_crops()
            .iter()
            .map(|info| info.crop)
            .find(|crop| {
                let name: String = crop.name().chars().filter(|c| !c.is_whitespace()).collect();
                name.eq_ignore_ascii_case(&wanted)
            })
            .ok_or_else(|| GardenError::UnknownCrop(s.to_string()))
    }
}

/// Growth footprint of a crop. Counting is always per tile; the footprint is metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CropSize {
    Single,
    Bush,
    Tree,
}

impl CropSize {
    pub fn tiles_per_plant(self) -> u32 {
        match self {
            CropSize::Single => 1,
            CropSize::Bush => 4,
            CropSize::Tree => 9,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "PascalCase")]
pub enum Fertilizer {
    SpeedyGro,
    QualityUp,
    WeedBlock,
    HarvestBoost,
    Hydrated,
}

impl Fertilizer {
    pub fn name(self) -> &'static str {
        match self {
            Fertilizer::SpeedyGro => "Speedy Gro",
            Fertilizer::QualityUp => "Quality Up",
            Fertilizer::WeedBlock => "Weed Block",
            Fertilizer::HarvestBoost => "Harvest Boost",
            Fertilizer::Hydrated => "Hydrated",
        }
    }
}

impl fmt::Display for Fertilizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Fertilizer {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        crate::data::fertilizers::get_all_fertilizers()
            .iter()
            .map(|info| info.fertilizer)
            .find(|f| {
                let name: String = f.name().chars().filter(|c| !c.is_whitespace()).collect();
                name.eq_ignore_ascii_case(&wanted)
            })
            .ok_or_else(|| GardenError::UnknownFertilizer(s.to_string()))
    }
}
