//! Target descriptors supplied by the build orchestrator.
//!
//! A [`TargetDescriptor`] is the entire input to plan resolution: the target
//! platform plus the host-engine version. It replaces the orchestrator's
//! ambient target context with an explicit immutable value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Platforms the orchestrator can build modules for.
///
/// Resolution is total over this enum: platforms without dedicated rules
/// take the default branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnginePlatform {
    Win64,
    Linux,
    LinuxArm64,
    Mac,
    Android,
    Ios,
}

impl EnginePlatform {
    /// All known platforms, in declaration order.
    pub const ALL: [EnginePlatform; 6] = [
        EnginePlatform::Win64,
        EnginePlatform::Linux,
        EnginePlatform::LinuxArm64,
        EnginePlatform::Mac,
        EnginePlatform::Android,
        EnginePlatform::Ios,
    ];

    /// Stable lowercase token, matching the serde encoding.
    pub fn as_str(self) -> &'static str {
        match self {
            EnginePlatform::Win64 => "win64",
            EnginePlatform::Linux => "linux",
            EnginePlatform::LinuxArm64 => "linux-arm64",
            EnginePlatform::Mac => "mac",
            EnginePlatform::Android => "android",
            EnginePlatform::Ios => "ios",
        }
    }

    pub fn is_win64(self) -> bool {
        matches!(self, EnginePlatform::Win64)
    }
}

impl fmt::Display for EnginePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a platform token.
#[derive(Debug, Clone, Error)]
#[error("unknown platform '{token}' (expected one of: win64, linux, linux-arm64, mac, android, ios)")]
pub struct ParsePlatformError {
    pub token: String,
}

impl FromStr for EnginePlatform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnginePlatform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParsePlatformError {
                token: s.to_string(),
            })
    }
}

/// Host-engine version as a two-part major/minor number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EngineVersion {
    pub major: u32,
    pub minor: u32,
}

impl EngineVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for EngineVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Error parsing an engine version string.
#[derive(Debug, Clone, Error)]
#[error("invalid engine version '{input}': expected <major>.<minor> (e.g. 5.3)")]
pub struct ParseEngineVersionError {
    pub input: String,
}

impl FromStr for EngineVersion {
    type Err = ParseEngineVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseEngineVersionError {
            input: s.to_string(),
        };
        let (major, minor) = s.split_once('.').ok_or_else(err)?;
        Ok(EngineVersion {
            major: major.parse().map_err(|_| err())?,
            minor: minor.parse().map_err(|_| err())?,
        })
    }
}

/// The resolver's input: target platform plus host-engine version.
///
/// Immutable; supplied per resolution call by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetDescriptor {
    pub platform: EnginePlatform,
    pub engine: EngineVersion,
}

impl TargetDescriptor {
    pub const fn new(platform: EnginePlatform, engine: EngineVersion) -> Self {
        Self { platform, engine }
    }
}

impl fmt::Display for TargetDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (engine {})", self.platform, self.engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn platform_tokens_round_trip() {
        for p in EnginePlatform::ALL {
            assert_eq!(p.as_str().parse::<EnginePlatform>().unwrap(), p);
        }
    }

    #[test]
    fn platform_rejects_unknown_token() {
        let err = "win32".parse::<EnginePlatform>().unwrap_err();
        assert!(err.to_string().contains("win32"));
    }

    #[test]
    fn engine_version_parses_and_displays() {
        let v: EngineVersion = "5.3".parse().unwrap();
        assert_eq!(v, EngineVersion::new(5, 3));
        assert_eq!(v.to_string(), "5.3");
    }

    #[test]
    fn engine_version_rejects_malformed_input() {
        for input in ["5", "5.", ".3", "5.x", "five.three", ""] {
            assert!(input.parse::<EngineVersion>().is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn engine_version_orders_by_major_then_minor() {
        assert!(EngineVersion::new(5, 4) < EngineVersion::new(5, 5));
        assert!(EngineVersion::new(5, 27) < EngineVersion::new(6, 0));
    }

    #[test]
    fn descriptor_display_names_platform_and_engine() {
        let t = TargetDescriptor::new(EnginePlatform::Win64, EngineVersion::new(5, 3));
        assert_eq!(t.to_string(), "win64 (engine 5.3)");
    }
}
