use modplan_types::plan::BuildPlan;
use modplan_types::target::TargetDescriptor;
use tracing::debug;

use crate::rules::{self, Rule, RulePolicy};

/// Resolves target descriptors into module build plans.
///
/// Holds the ordered rule table for one policy. Resolution reads only the
/// descriptor and allocates a fresh plan, so a resolver can be shared across
/// threads freely.
pub struct Resolver {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Resolver for the canonical policy.
    pub fn new() -> Self {
        Self::for_policy(RulePolicy::Canonical)
    }

    pub fn for_policy(policy: RulePolicy) -> Self {
        Self {
            rules: rules::rules_for(policy),
        }
    }

    /// Resolver over an explicit rule table, in evaluation order.
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Produce the build plan for a target. Total and deterministic: never
    /// fails, and equal descriptors yield structurally equal plans.
    pub fn resolve(&self, target: &TargetDescriptor) -> BuildPlan {
        let mut plan = BuildPlan::default();
        for rule in &self.rules {
            rule.apply(target, &mut plan);
            debug!(
                rule = rule.id(),
                platform = %target.platform,
                engine = %target.engine,
                "applied rule"
            );
        }
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modplan_types::plan::PchMode;
    use modplan_types::target::{EnginePlatform, EngineVersion};
    use pretty_assertions::assert_eq;
    use std::collections::{BTreeMap, BTreeSet};

    fn deps(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn defs(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn win64_engine_5_3_gets_sdk_and_shims() {
        let target = TargetDescriptor::new(EnginePlatform::Win64, EngineVersion::new(5, 3));
        let plan = Resolver::new().resolve(&target);

        assert_eq!(
            plan.public_dependencies,
            deps(&["CoreRuntime", "CoreObjectModel", "EngineRuntime"])
        );
        assert_eq!(
            plan.private_dependencies,
            deps(&["OnlineSubsystemAbstraction", "Steamworks"])
        );
        assert_eq!(plan.private_definitions, defs(&[("WITH_STEAMWORKS", "1")]));
        assert_eq!(
            plan.public_definitions,
            defs(&[
                ("__has_feature(x)", "0"),
                ("__has_extension(x)", "0"),
                ("__is_identifier(x)", "0"),
            ])
        );
        assert_eq!(plan.pch_mode, PchMode::UseExplicitOrSharedPchs);
    }

    #[test]
    fn win64_engine_5_5_gets_sdk_without_shims() {
        let target = TargetDescriptor::new(EnginePlatform::Win64, EngineVersion::new(5, 5));
        let plan = Resolver::new().resolve(&target);

        assert_eq!(plan.private_definitions, defs(&[("WITH_STEAMWORKS", "1")]));
        assert!(plan.has_private_dependency("Steamworks"));
        assert!(plan.public_definitions.is_empty());
    }

    #[test]
    fn linux_engine_5_2_gets_guard_zero_only() {
        let target = TargetDescriptor::new(EnginePlatform::Linux, EngineVersion::new(5, 2));
        let plan = Resolver::new().resolve(&target);

        assert_eq!(plan.private_definitions, defs(&[("WITH_STEAMWORKS", "0")]));
        assert!(!plan.has_private_dependency("Steamworks"));
        assert!(plan.public_definitions.is_empty());
        assert_eq!(plan.pch_mode, PchMode::UseExplicitOrSharedPchs);
    }

    #[test]
    fn resolution_is_idempotent() {
        let resolver = Resolver::new();
        for platform in EnginePlatform::ALL {
            let target = TargetDescriptor::new(platform, EngineVersion::new(5, 4));
            assert_eq!(resolver.resolve(&target), resolver.resolve(&target));
        }
    }

    #[test]
    fn empty_rule_table_yields_default_plan() {
        let resolver = Resolver::with_rules(vec![]);
        let target = TargetDescriptor::new(EnginePlatform::Win64, EngineVersion::new(5, 3));
        assert_eq!(resolver.resolve(&target), BuildPlan::default());
    }
}
