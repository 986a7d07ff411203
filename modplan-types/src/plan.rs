//! The resolved build plan value object.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A set of module names. Deduplicated; iteration order is deterministic.
pub type DependencySet = BTreeSet<String>;

/// Preprocessor definitions: symbol to textual value, keys unique.
pub type DefinitionMap = BTreeMap<String, String>;

/// Precompiled-header strategy for the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PchMode {
    #[default]
    NoPchs,
    UseSharedPchs,
    UseExplicitOrSharedPchs,
}

/// Everything the orchestrator needs to configure one module build.
///
/// Produced fresh per resolution; a plain value with no identity. Public
/// entries propagate to dependent modules, private entries are scoped to
/// this module's own compilation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildPlan {
    #[serde(default)]
    pub public_dependencies: DependencySet,

    #[serde(default)]
    pub private_dependencies: DependencySet,

    #[serde(default)]
    pub public_definitions: DefinitionMap,

    #[serde(default)]
    pub private_definitions: DefinitionMap,

    #[serde(default)]
    pub pch_mode: PchMode,
}

impl BuildPlan {
    pub fn add_public_dependency(&mut self, module: impl Into<String>) {
        self.public_dependencies.insert(module.into());
    }

    pub fn add_private_dependency(&mut self, module: impl Into<String>) {
        self.private_dependencies.insert(module.into());
    }

    pub fn define_public(&mut self, symbol: impl Into<String>, value: impl Into<String>) {
        self.public_definitions.insert(symbol.into(), value.into());
    }

    pub fn define_private(&mut self, symbol: impl Into<String>, value: impl Into<String>) {
        self.private_definitions.insert(symbol.into(), value.into());
    }

    pub fn has_private_dependency(&self, module: &str) -> bool {
        self.private_dependencies.contains(module)
    }

    pub fn public_definition(&self, symbol: &str) -> Option<&str> {
        self.public_definitions.get(symbol).map(String::as_str)
    }

    pub fn private_definition(&self, symbol: &str) -> Option<&str> {
        self.private_definitions.get(symbol).map(String::as_str)
    }
}
