//! Save-code version detection and the forward upgrade chain.
//!
//! Every supported legacy format is upgraded one version at a time through
//! [`UPGRADE_CHAIN`], an ordered list of pure string rewrites. Only the
//! current format is ever decoded.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    data::crops::{get_crop_by_legacy_code, LEGACY_EMPTY_CODE},
    data::EMPTY_CODE,
    error::GardenError,
    models::version::SaveVersion,
};

pub const CURRENT_VERSION: SaveVersion = SaveVersion::new(0, 4);

/// Oldest format this build can still read.
pub const OLDEST_VERSION: SaveVersion = SaveVersion::new(0, 1);

pub const SECTION_DELIMITER: char = '_';
pub const ROW_DELIMITER: char = '-';

pub const PLOT_PREFIX: &str = "D-";
pub const CROP_PREFIX: &str = "CR-";
pub const LEGACY_CROP_PREFIX: &str = "CROPS-";
pub const FERTILIZER_PREFIX: &str = "FE-";

/// First version that names the crop section `CR-`.
const SHORT_PREFIX_SINCE: SaveVersion = SaveVersion::new(0, 3);

/// A single-version upgrade applied to the sections after the version tag.
pub struct UpgradeStep {
    pub from: SaveVersion,
    pub to: SaveVersion,
    pub description: &'static str,
    pub apply: fn(&str) -> Result<String, GardenError>,
}

pub const UPGRADE_CHAIN: &[UpgradeStep] = &[
    UpgradeStep {
        from: SaveVersion::new(0, 1),
        to: SaveVersion::new(0, 2),
        description: "re-encode two-letter crop tokens into the v0.2 alphabet",
        apply: upgrade_crop_alphabet,
    },
    UpgradeStep {
        from: SaveVersion::new(0, 2),
        to: SaveVersion::new(0, 3),
        description: "rename the crop section prefix CROPS- to CR-",
        apply: shorten_crop_prefix,
    },
    UpgradeStep {
        from: SaveVersion::new(0, 3),
        to: SaveVersion::new(0, 4),
        description: "normalise to v0.4 (no structural change)",
        apply: normalise_v04,
    },
];

/// A save code rewritten into the current format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Converted {
    pub code: String,
    pub original_version: SaveVersion,
    /// Descriptions of the upgrade steps applied, oldest first.
    pub steps_applied: Vec<String>,
}

fn split_tag(raw: &str) -> (&str, &str) {
    raw.split_once(SECTION_DELIMITER).unwrap_or((raw, ""))
}

/// Reads and validates the leading version tag.
pub fn detect_version(raw: &str) -> Result<SaveVersion, GardenError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(GardenError::UnsupportedVersion(
            "save code is empty".to_string(),
        ));
    }
    let (tag, body) = split_tag(raw);
    let version: SaveVersion = tag.parse().map_err(|_| {
        GardenError::UnsupportedVersion(format!("'{tag}' is not a recognised version tag"))
    })?;
    if version > CURRENT_VERSION {
        return Err(GardenError::UnsupportedVersion(format!(
            "{version} is newer than {CURRENT_VERSION}"
        )));
    }
    if version < OLDEST_VERSION {
        return Err(GardenError::UnsupportedVersion(format!(
            "{version} predates {OLDEST_VERSION}"
        )));
    }

    // The crop section prefix must agree with the tag.
    for section in body.split(SECTION_DELIMITER) {
        let legacy = section.starts_with(LEGACY_CROP_PREFIX);
        let short = section.starts_with(CROP_PREFIX);
        if (legacy && version >= SHORT_PREFIX_SINCE) || (short && version < SHORT_PREFIX_SINCE) {
            let prefix = if legacy { LEGACY_CROP_PREFIX } else { CROP_PREFIX };
            return Err(GardenError::UnsupportedVersion(format!(
                "{version} tag disagrees with crop section prefix {prefix}"
            )));
        }
    }
    Ok(version)
}

/// Identifies the version of `raw` and upgrades it to [`CURRENT_VERSION`].
/// A code already in the current format is returned unchanged.
pub fn detect_and_convert(raw: &str) -> Result<Converted, GardenError> {
    let raw = raw.trim();
    let original_version = detect_version(raw)?;
    let (_, body) = split_tag(raw);

    let mut version = original_version;
    let mut body = body.to_string();
    let mut steps_applied = Vec::new();
    for step in UPGRADE_CHAIN {
        if step.from != version {
            continue;
        }
        debug!("upgrading save code {} -> {}: {}", step.from, step.to, step.description);
        body = (step.apply)(&body).map_err(|e| match e {
            err @ GardenError::Conversion { .. } => err,
            other => GardenError::Conversion {
                from: step.from.to_string(),
                reason: other.to_string(),
            },
        })?;
        version = step.to;
        steps_applied.push(step.description.to_string());
    }

    if version != CURRENT_VERSION {
        return Err(GardenError::UnsupportedVersion(format!(
            "no upgrade path from {version} to {CURRENT_VERSION}"
        )));
    }
    if !steps_applied.is_empty() {
        info!(
            "upgraded {original_version} save code to {CURRENT_VERSION} in {} step(s)",
            steps_applied.len()
        );
    }

    let code = if steps_applied.is_empty() {
        raw.to_string()
    } else {
        format!("{CURRENT_VERSION}{SECTION_DELIMITER}{body}")
    };
    Ok(Converted {
        code,
        original_version,
        steps_applied,
    })
}

/// Rewrites the sections that start with `prefix`, row by row.
fn map_section_rows(
    body: &str,
    prefix: &str,
    mut map_row: impl FnMut(&str) -> Result<String, GardenError>,
) -> Result<String, GardenError> {
    body.split(SECTION_DELIMITER)
        .map(|section| match section.strip_prefix(prefix) {
            Some(rows) => {
                let rows = rows
                    .split(ROW_DELIMITER)
                    .map(&mut map_row)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(format!("{prefix}{}", rows.join(&ROW_DELIMITER.to_string())))
            }
            None => Ok(section.to_string()),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(|sections| sections.join(&SECTION_DELIMITER.to_string()))
}

/// v0.1 → v0.2: fixed-width two-letter crop tokens become the variable-width alphabet.
fn upgrade_crop_alphabet(body: &str) -> Result<String, GardenError> {
    let conversion = |reason: String| GardenError::Conversion {
        from: "v0.1".to_string(),
        reason,
    };
    map_section_rows(body, LEGACY_CROP_PREFIX, |row| {
        let chars: Vec<char> = row.chars().collect();
        if chars.len() % 2 != 0 {
            return Err(conversion(format!(
                "crop row '{row}' does not split into two-letter tokens"
            )));
        }
        chars
            .chunks(2)
            .map(|pair| {
                let token: String = pair.iter().collect();
                if token == LEGACY_EMPTY_CODE {
                    return Ok(EMPTY_CODE);
                }
                get_crop_by_legacy_code(&token)
                    .map(|info| info.code)
                    .ok_or_else(|| conversion(format!("unknown legacy crop token '{token}'")))
            })
            .collect()
    })
}

/// v0.2 → v0.3: `CROPS-` becomes `CR-`.
fn shorten_crop_prefix(body: &str) -> Result<String, GardenError> {
    Ok(body
        .split(SECTION_DELIMITER)
        .map(|section| match section.strip_prefix(LEGACY_CROP_PREFIX) {
            Some(rows) => format!("{CROP_PREFIX}{rows}"),
            None => section.to_string(),
        })
        .collect::<Vec<_>>()
        .join(&SECTION_DELIMITER.to_string()))
}

/// v0.3 → v0.4: identity until a v0.3 code with a structural difference turns up.
fn normalise_v04(body: &str) -> Result<String, GardenError> {
    Ok(body.to_string())
}
