use crate::models::crop::Fertilizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FertilizerInfo {
    pub fertilizer: Fertilizer,
    pub code: &'static str,
}

const FERTILIZERS: &[FertilizerInfo] = &[
    FertilizerInfo { fertilizer: Fertilizer::SpeedyGro, code: "S" },
    FertilizerInfo { fertilizer: Fertilizer::QualityUp, code: "Q" },
    FertilizerInfo { fertilizer: Fertilizer::WeedBlock, code: "W" },
    FertilizerInfo { fertilizer: Fertilizer::HarvestBoost, code: "H" },
    FertilizerInfo { fertilizer: Fertilizer::Hydrated, code: "Hy" },
];

pub fn get_all_fertilizers() -> &'static [FertilizerInfo] {
    FERTILIZERS
}

pub fn get_fertilizer_by_code(code: &str) -> Option<&'static FertilizerInfo> {
    FERTILIZERS.iter().find(|info| info.code == code)
}

pub fn get_fertilizer_info(fertilizer: Fertilizer) -> Option<&'static FertilizerInfo> {
    FERTILIZERS.iter().find(|info| info.fertilizer == fertilizer)
}
