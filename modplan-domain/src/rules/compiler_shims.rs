use modplan_types::plan::BuildPlan;
use modplan_types::target::TargetDescriptor;

use super::Rule;

/// Feature-probe macros defined to always evaluate to 0, argument ignored.
pub const SHIM_DEFINITIONS: [(&str, &str); 3] = [
    ("__has_feature(x)", "0"),
    ("__has_extension(x)", "0"),
    ("__is_identifier(x)", "0"),
];

/// Neutralizes Clang-style feature probes on Win64 for engine 5.0 through
/// 5.4. Engine shared-PCH content on that range references `__has_feature`
/// and friends, which the strict-mode MSVC preprocessor reports as
/// undefined; defining each probe to 0 makes `#if __has_feature(...)`
/// evaluate cleanly without altering any compiled logic path. Engine 5.5
/// and newer resolve the probes themselves, so the shims are not emitted
/// there.
pub struct CompilerShimsRule;

impl CompilerShimsRule {
    fn needs_shims(target: &TargetDescriptor) -> bool {
        target.platform.is_win64() && target.engine.major == 5 && target.engine.minor <= 4
    }
}

impl Rule for CompilerShimsRule {
    fn id(&self) -> &'static str {
        "compiler-shims"
    }

    fn apply(&self, target: &TargetDescriptor, plan: &mut BuildPlan) {
        if !Self::needs_shims(target) {
            return;
        }
        for (symbol, value) in SHIM_DEFINITIONS {
            plan.define_public(symbol, value);
        }
    }
}
