//! Bidirectional code tables and the longest-match-first row scanner.
//!
//! Codes are one or two characters wide. Some one-character codes are prefixes of
//! two-character codes (`C` Carrot, `Co` Cotton, `Cr` Corn), so a row of
//! concatenated codes is split by trying a two-character match first and falling
//! back to a single character.

use crate::{
    data::{
        crops::{get_all_crops, get_crop_by_code, get_crop_info},
        fertilizers::{get_all_fertilizers, get_fertilizer_by_code, get_fertilizer_info},
        EMPTY_CODE,
    },
    error::{CodeTableKind, GardenError},
    models::crop::{Crop, Fertilizer},
};

/// A value that has a short save-code token.
pub trait CodeTable: Copy + Eq + std::str::FromStr<Err = GardenError> + 'static {
    const KIND: CodeTableKind;

    fn from_code(code: &str) -> Option<Self>;
    fn code(self) -> &'static str;
    fn name(self) -> &'static str;
    /// Every code in the table, the empty code excluded.
    fn all_codes() -> Vec<&'static str>;
}

impl CodeTable for Crop {
    const KIND: CodeTableKind = CodeTableKind::Crop;

    fn from_code(code: &str) -> Option<Self> {
        get_crop_by_code(code).map(|info| info.crop)
    }

    fn code(self) -> &'static str {
        get_crop_info(self).map_or(EMPTY_CODE, |info| info.code)
    }

    fn name(self) -> &'static str {
        Crop::name(self)
    }

    fn all_codes() -> Vec<&'static str> {
        get_all_crops().iter().map(|info| info.code).collect()
    }
}

impl CodeTable for Fertilizer {
    const KIND: CodeTableKind = CodeTableKind::Fertilizer;

    fn from_code(code: &str) -> Option<Self> {
        get_fertilizer_by_code(code).map(|info| info.fertilizer)
    }

    fn code(self) -> &'static str {
        get_fertilizer_info(self).map_or(EMPTY_CODE, |info| info.code)
    }

    fn name(self) -> &'static str {
        Fertilizer::name(self)
    }

    fn all_codes() -> Vec<&'static str> {
        get_all_fertilizers().iter().map(|info| info.code).collect()
    }
}

/// Outer `None`: no such code. Inner `None`: the empty-tile code.
fn lookup<T: CodeTable>(token: &str) -> Option<Option<T>> {
    if token == EMPTY_CODE {
        Some(None)
    } else {
        T::from_code(token).map(Some)
    }
}

/// Resolves a single token; `N` decodes to an empty tile.
pub fn decode_token<T: CodeTable>(token: &str) -> Result<Option<T>, GardenError> {
    lookup(token).ok_or_else(|| GardenError::UnknownCode {
        table: T::KIND,
        code: token.to_string(),
    })
}

pub fn encode_token<T: CodeTable>(value: Option<T>) -> &'static str {
    value.map_or(EMPTY_CODE, T::code)
}

/// Code → display name. The empty code has no name.
pub fn decode_name<T: CodeTable>(code: &str) -> Result<Option<&'static str>, GardenError> {
    Ok(decode_token::<T>(code)?.map(T::name))
}

/// Display name → code. Fails with `UnknownCrop` / `UnknownFertilizer`.
pub fn encode_name<T: CodeTable>(name: &str) -> Result<&'static str, GardenError> {
    Ok(name.parse::<T>()?.code())
}

/// Splits a row of concatenated codes, two-character match first.
pub fn scan_row<T: CodeTable>(row: &str) -> Result<Vec<Option<T>>, GardenError> {
    let mut cells = Vec::with_capacity(row.len());
    let mut rest = row;
    while !rest.is_empty() {
        let pair = rest.get(..2);
        if let Some(value) = pair.and_then(lookup::<T>) {
            cells.push(value);
            rest = &rest[2..];
            continue;
        }
        let width = rest.chars().next().map_or(1, char::len_utf8);
        let single = &rest[..width];
        match lookup::<T>(single) {
            Some(value) => {
                cells.push(value);
                rest = &rest[width..];
            }
            None => {
                // Name the two-character token when the row looks like it carries one.
                let code = match pair {
                    Some(p) if p.as_bytes()[1].is_ascii_lowercase() => p,
                    _ => single,
                };
                return Err(GardenError::UnknownCode {
                    table: T::KIND,
                    code: code.to_string(),
                });
            }
        }
    }
    Ok(cells)
}

/// Concatenates codes into a row, the inverse of [`scan_row`].
pub fn encode_row<T: CodeTable>(cells: impl IntoIterator<Item = Option<T>>) -> String {
    cells.into_iter().map(encode_token).collect()
}
