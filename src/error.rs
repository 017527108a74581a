//! Error taxonomy for detecting, converting, decoding and encoding save codes.
//!
//! Every failure is reported synchronously and names the offending section or
//! token; decoding never yields a partial result.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Part of a save code (or of the link carrying it) that an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Link,
    Version,
    PlotMask,
    Crops,
    Fertilizers,
    Unknown,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Section::Link => "link",
            Section::Version => "version",
            Section::PlotMask => "plot-activity",
            Section::Crops => "crop",
            Section::Fertilizers => "fertilizer",
            Section::Unknown => "unrecognised",
        })
    }
}

/// Which code table a token was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CodeTableKind {
    Crop,
    LegacyCrop,
    Fertilizer,
}

impl fmt::Display for CodeTableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CodeTableKind::Crop => "crop",
            CodeTableKind::LegacyCrop => "legacy crop",
            CodeTableKind::Fertilizer => "fertilizer",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GardenError {
    /// Version tag missing, unrecognised, or newer than this build supports.
    #[error("unsupported save code version: {0}")]
    UnsupportedVersion(String),

    /// A legacy token could not be mapped while upgrading an older save code.
    #[error("cannot upgrade {from} save code: {reason}")]
    Conversion { from: String, reason: String },

    /// Structural violation while decoding a current-format save code.
    #[error("malformed save code, {section} section: {reason}")]
    MalformedSaveCode { section: Section, reason: String },

    /// A token matched no entry of the table, neither as two characters nor as one.
    #[error("unknown {table} code '{code}'")]
    UnknownCode { table: CodeTableKind, code: String },

    #[error("unknown crop '{0}'")]
    UnknownCrop(String),

    #[error("unknown fertilizer '{0}'")]
    UnknownFertilizer(String),
}

impl GardenError {
    pub(crate) fn malformed(section: Section, reason: impl Into<String>) -> Self {
        GardenError::MalformedSaveCode {
            section,
            reason: reason.into(),
        }
    }
}
