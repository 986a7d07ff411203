//! Configuration file loading for modplan.
//!
//! Discovers and loads `modplan.toml` from the working directory (or an
//! explicit path). Merges config file settings with CLI arguments (CLI takes
//! precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use modplan_domain::RulePolicy;
use modplan_types::target::{EnginePlatform, EngineVersion};
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "modplan.toml";

/// Top-level configuration from modplan.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModplanConfig {
    /// Default target settings.
    pub target: TargetConfig,

    /// Rule policy to resolve with.
    pub policy: Option<RulePolicy>,
}

/// Target section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Default platform token (e.g. "win64").
    pub platform: Option<String>,

    /// Default engine version (e.g. "5.3").
    pub engine_version: Option<String>,
}

/// Discover the modplan.toml config file in a directory.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a modplan.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<ModplanConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<ModplanConfig> {
    let config: ModplanConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from a directory, or return default if not found.
pub fn load_or_default(dir: &Utf8Path) -> anyhow::Result<ModplanConfig> {
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(ModplanConfig::default()),
    }
}

/// Fully-resolved settings for one `resolve` invocation.
///
/// CLI arguments take precedence over config file settings; platform and
/// engine version must come from at least one of the two.
#[derive(Debug, Clone)]
pub struct ResolveSettings {
    pub platform: EnginePlatform,
    pub engine: EngineVersion,
    pub policy: RulePolicy,
}

pub fn merge_resolve_settings(
    config: &ModplanConfig,
    cli_platform: Option<EnginePlatform>,
    cli_engine: Option<EngineVersion>,
    cli_policy: Option<RulePolicy>,
) -> anyhow::Result<ResolveSettings> {
    let platform = match cli_platform {
        Some(p) => p,
        None => config
            .target
            .platform
            .as_deref()
            .context("no target platform: pass --platform or set [target].platform in modplan.toml")?
            .parse()
            .context("parse [target].platform")?,
    };

    let engine = match cli_engine {
        Some(v) => v,
        None => config
            .target
            .engine_version
            .as_deref()
            .context(
                "no engine version: pass --engine-version or set [target].engine_version in modplan.toml",
            )?
            .parse()
            .context("parse [target].engine_version")?,
    };

    let policy = cli_policy.or(config.policy).unwrap_or_default();

    Ok(ResolveSettings {
        platform,
        engine,
        policy,
    })
}
