use modplan_types::plan::BuildPlan;
use modplan_types::target::TargetDescriptor;
use serde::{Deserialize, Serialize};

mod base_modules;
mod compiler_shims;
mod sdk_exposure;

pub use base_modules::{BASE_PRIVATE_MODULES, BASE_PUBLIC_MODULES, BaseModulesRule};
pub use compiler_shims::{CompilerShimsRule, SHIM_DEFINITIONS};
pub use sdk_exposure::{LegacySdkExposureRule, SDK_GUARD_SYMBOL, SDK_MODULE, SdkExposureRule};

/// One entry in the resolution policy table.
///
/// Rules are additive: a rule may insert dependencies and definitions or set
/// the PCH mode, but never removes anything an earlier rule contributed.
/// Rules are infallible and side-effect free, which keeps resolution total
/// and safe to run from any number of orchestrator threads.
pub trait Rule: Send + Sync {
    /// Stable identifier, used in logs and by `modplan explain`.
    fn id(&self) -> &'static str;

    /// Evaluate against the target and fold into the plan.
    fn apply(&self, target: &TargetDescriptor, plan: &mut BuildPlan);
}

/// Which snapshot of the policy to resolve with.
///
/// `Canonical` is the current policy: platform-gated SDK exposure plus the
/// version-gated compiler shims. `Legacy` reproduces an older, looser
/// snapshot that linked the SDK on every platform and never defined the
/// guard symbol off Win64; it exists for module trees that still build
/// against that behavior and should not be used for new targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulePolicy {
    #[default]
    Canonical,
    Legacy,
}

/// The ordered rule table for a policy. Evaluation order is part of the
/// contract: later rules may build on what earlier rules added.
pub fn rules_for(policy: RulePolicy) -> Vec<Box<dyn Rule>> {
    match policy {
        RulePolicy::Canonical => vec![
            Box::new(BaseModulesRule),
            Box::new(SdkExposureRule),
            Box::new(CompilerShimsRule),
        ],
        RulePolicy::Legacy => vec![Box::new(BaseModulesRule), Box::new(LegacySdkExposureRule)],
    }
}
