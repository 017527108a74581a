use crate::models::crop::{Crop, CropSize};

/// Catalogue entry for one crop: its save-code tokens and size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropInfo {
    pub crop: Crop,
    /// Token used from v0.2 onwards. One or two characters.
    pub code: &'static str,
    /// Fixed-width two-character token of the v0.1 alphabet, for crops that existed then.
    pub legacy_code: Option<&'static str>,
    pub size: CropSize,
}

/// Empty-tile token of the v0.1 alphabet.
pub const LEGACY_EMPTY_CODE: &str = "No";

const CROPS: &[CropInfo] = &[
    CropInfo { crop: Crop::Tomato, code: "T", legacy_code: Some("To"), size: CropSize::Single },
    CropInfo { crop: Crop::Potato, code: "P", legacy_code: Some("Po"), size: CropSize::Single },
    CropInfo { crop: Crop::Rice, code: "R", legacy_code: Some("Ri"), size: CropSize::Single },
    CropInfo { crop: Crop::Wheat, code: "W", legacy_code: Some("Wh"), size: CropSize::Single },
    CropInfo { crop: Crop::Carrot, code: "C", legacy_code: Some("Ca"), size: CropSize::Single },
    CropInfo { crop: Crop::Onion, code: "O", legacy_code: Some("On"), size: CropSize::Single },
    // Kept two characters in v0.2: "C" already belonged to Carrot.
    CropInfo { crop: Crop::Cotton, code: "Co", legacy_code: Some("Co"), size: CropSize::Single },
    CropInfo { crop: Crop::Corn, code: "Cr", legacy_code: None, size: CropSize::Single },
    CropInfo { crop: Crop::Blueberry, code: "B", legacy_code: Some("Bl"), size: CropSize::Bush },
    CropInfo { crop: Crop::Apple, code: "A", legacy_code: Some("Ap"), size: CropSize::Tree },
    CropInfo { crop: Crop::SpicyPepper, code: "S", legacy_code: None, size: CropSize::Bush },
    CropInfo { crop: Crop::NapaCabbage, code: "Na", legacy_code: None, size: CropSize::Single },
    CropInfo { crop: Crop::BokChoy, code: "Bk", legacy_code: None, size: CropSize::Single },
];

pub fn get_all_crops() -> &'static [CropInfo] {
    CROPS
}

pub fn get_crop_info(crop: Crop) -> Option<&'static CropInfo> {
    CROPS.iter().find(|info| info.crop == crop)
}

pub fn get_crop_by_code(code: &str) -> Option<&'static CropInfo> {
    CROPS.iter().find(|info| info.code == code)
}

pub fn get_crop_by_legacy_code(code: &str) -> Option<&'static CropInfo> {
    CROPS.iter().find(|info| info.legacy_code == Some(code))
}

/// Size class of a crop; crops missing from the catalogue count as single-tile.
pub fn crop_size(crop: Crop) -> CropSize {
    get_crop_info(crop).map_or(CropSize::Single, |info| info.size)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::data::EMPTY_CODE;

    #[test]
    fn test_every_crop_has_an_entry() {
        for info in get_all_crops() {
            assert_eq!(get_crop_info(info.crop), Some(info));
        }
        assert_eq!(get_all_crops().len(), 13);
    }

    #[test]
    fn test_codes_are_unique_and_short() {
        let mut seen = HashSet::new();
        for info in get_all_crops() {
            assert!(matches!(info.code.len(), 1 | 2), "{} has code {}", info.crop, info.code);
            assert!(seen.insert(info.code), "duplicate code {}", info.code);
        }
        assert!(!seen.contains(EMPTY_CODE));
    }

    #[test]
    fn test_legacy_codes_are_two_characters() {
        for info in get_all_crops() {
            if let Some(legacy) = info.legacy_code {
                assert_eq!(legacy.len(), 2, "{} has legacy code {legacy}", info.crop);
            }
        }
        assert_eq!(LEGACY_EMPTY_CODE.len(), 2);
    }

    #[test]
    fn test_lookup_by_code() {
        assert_eq!(get_crop_by_code("Co").map(|i| i.crop), Some(Crop::Cotton));
        assert_eq!(get_crop_by_code("C").map(|i| i.crop), Some(Crop::Carrot));
        assert_eq!(get_crop_by_code("Zz"), None);
        assert_eq!(get_crop_by_legacy_code("Ap").map(|i| i.crop), Some(Crop::Apple));
    }

    #[test]
    fn test_multi_tile_crops() {
        assert_eq!(crop_size(Crop::Apple), CropSize::Tree);
        assert_eq!(crop_size(Crop::Blueberry), CropSize::Bush);
        assert_eq!(crop_size(Crop::SpicyPepper), CropSize::Bush);
        assert_eq!(crop_size(Crop::Wheat), CropSize::Single);
    }
}
