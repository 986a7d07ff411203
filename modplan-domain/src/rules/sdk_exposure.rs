use modplan_types::plan::BuildPlan;
use modplan_types::target::TargetDescriptor;

use super::Rule;

/// The platform-services SDK module, bundled with the engine.
pub const SDK_MODULE: &str = "Steamworks";

/// Guard symbol for SDK-dependent translation units. Always defined under
/// the canonical policy so `#if WITH_STEAMWORKS` never hits an undefined
/// symbol warning.
pub const SDK_GUARD_SYMBOL: &str = "WITH_STEAMWORKS";

/// Links the SDK and defines its guard on Win64; everywhere else the guard
/// is defined to 0 and the SDK is left out of the link set.
pub struct SdkExposureRule;

impl Rule for SdkExposureRule {
    fn id(&self) -> &'static str {
        "sdk-exposure"
    }

    fn apply(&self, target: &TargetDescriptor, plan: &mut BuildPlan) {
        if target.platform.is_win64() {
            plan.add_private_dependency(SDK_MODULE);
            plan.define_private(SDK_GUARD_SYMBOL, "1");
        } else {
            plan.define_private(SDK_GUARD_SYMBOL, "0");
        }
    }
}

/// Older snapshot of the SDK rule: links the SDK on every platform and only
/// defines the guard on Win64, leaving it undefined elsewhere. Kept for
/// module trees that still build against that behavior; prefer
/// [`SdkExposureRule`].
pub struct LegacySdkExposureRule;

impl Rule for LegacySdkExposureRule {
    fn id(&self) -> &'static str {
        "sdk-exposure-legacy"
    }

    fn apply(&self, target: &TargetDescriptor, plan: &mut BuildPlan) {
        plan.add_private_dependency(SDK_MODULE);
        if target.platform.is_win64() {
            plan.define_private(SDK_GUARD_SYMBOL, "1");
        }
    }
}
