use modplan_types::plan::{BuildPlan, PchMode};
use modplan_types::target::TargetDescriptor;

use super::Rule;

/// Public engine modules every target links against.
pub const BASE_PUBLIC_MODULES: [&str; 3] = ["CoreRuntime", "CoreObjectModel", "EngineRuntime"];

/// Private modules every target links against.
pub const BASE_PRIVATE_MODULES: [&str; 1] = ["OnlineSubsystemAbstraction"];

/// Unconditional base of the policy table: core engine dependencies and the
/// PCH strategy. Explicit-or-shared PCHs stay enabled so the orchestrator
/// may compile the module against the engine's shared precompiled header.
pub struct BaseModulesRule;

impl Rule for BaseModulesRule {
    fn id(&self) -> &'static str {
        "base-modules"
    }

    fn apply(&self, _target: &TargetDescriptor, plan: &mut BuildPlan) {
        for module in BASE_PUBLIC_MODULES {
            plan.add_public_dependency(module);
        }
        for module in BASE_PRIVATE_MODULES {
            plan.add_private_dependency(module);
        }
        plan.pch_mode = PchMode::UseExplicitOrSharedPchs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modplan_types::target::{EnginePlatform, EngineVersion};

    #[test]
    fn applies_identically_on_every_platform() {
        for platform in EnginePlatform::ALL {
            let target = TargetDescriptor::new(platform, EngineVersion::new(5, 3));
            let mut plan = BuildPlan::default();
            BaseModulesRule.apply(&target, &mut plan);

            for module in BASE_PUBLIC_MODULES {
                assert!(plan.public_dependencies.contains(module), "{platform}: {module}");
            }
            assert!(plan.has_private_dependency("OnlineSubsystemAbstraction"));
            assert_eq!(plan.pch_mode, PchMode::UseExplicitOrSharedPchs);
        }
    }

    #[test]
    fn adds_no_definitions() {
        let target = TargetDescriptor::new(EnginePlatform::Linux, EngineVersion::new(5, 0));
        let mut plan = BuildPlan::default();
        BaseModulesRule.apply(&target, &mut plan);
        assert!(plan.public_definitions.is_empty());
        assert!(plan.private_definitions.is_empty());
    }
}
