use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::error::{GardenError, Section};

/// A save-code format version, written `v<major>.<minor>` at the head of every code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct SaveVersion {
    pub major: u8,
    pub minor: u8,
}

impl SaveVersion {
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for SaveVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}", self.major, self.minor)
    }
}

impl FromStr for SaveVersion {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GardenError::MalformedSaveCode {
            section: Section::Version,
            reason: format!("'{s}' is not a version tag"),
        };
        let (major, minor) = s
            .strip_prefix('v')
            .and_then(|rest| rest.split_once('.'))
            .ok_or_else(malformed)?;
        let version = Self {
            major: major.parse().map_err(|_| malformed())?,
            minor: minor.parse().map_err(|_| malformed())?,
        };
        // `u8::from_str` takes `+4` and `04`; only the canonical spelling is a tag.
        if version.to_string() != s {
            return Err(malformed());
        }
        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let v: SaveVersion = "v0.3".parse().unwrap();
        assert_eq!(v, SaveVersion::new(0, 3));
        assert_eq!(v.to_string(), "v0.3");
    }

    #[test]
    fn test_ordering_follows_minor() {
        assert!(SaveVersion::new(0, 1) < SaveVersion::new(0, 4));
        assert!(SaveVersion::new(1, 0) > SaveVersion::new(0, 9));
    }

    #[test]
    fn test_rejects_garbage() {
        for tag in ["", "0.4", "v0", "v.4", "vx.y", "v0.4.1", "v0.04", "v00.4", "v0.+4"] {
            assert!(tag.parse::<SaveVersion>().is_err(), "'{tag}' must not parse");
        }
    }

    #[test]
    fn test_serializes_as_tag_string() {
        let json = serde_json::to_string(&SaveVersion::new(0, 4)).unwrap();
        assert_eq!(json, "\"v0.4\"");
        let back: SaveVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SaveVersion::new(0, 4));
    }
}
