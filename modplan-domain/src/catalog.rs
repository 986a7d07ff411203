//! Rule catalog for the `modplan explain` and `modplan list-rules` commands.

use crate::rules::RulePolicy;

/// Static description of one policy rule.
#[derive(Debug, Clone)]
pub struct RuleExplanation {
    /// Stable rule identifier (matches `Rule::id`).
    pub id: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Policies whose rule table contains this rule.
    pub policies: &'static [RulePolicy],
    /// When the rule contributes to the plan.
    pub condition: &'static str,
    /// What the rule adds and why.
    pub description: &'static str,
}

/// Registry of all rules across both policies, in evaluation order.
pub static RULE_CATALOG: &[RuleExplanation] = &[
    RuleExplanation {
        id: "base-modules",
        title: "Base engine modules",
        policies: &[RulePolicy::Canonical, RulePolicy::Legacy],
        condition: "Always.",
        description: r#"Adds the public engine dependencies every target needs (CoreRuntime,
CoreObjectModel, EngineRuntime), the private OnlineSubsystemAbstraction
dependency, and enables explicit-or-shared precompiled headers so the
orchestrator may reuse the engine's shared PCH."#,
    },
    RuleExplanation {
        id: "sdk-exposure",
        title: "Platform-services SDK exposure",
        policies: &[RulePolicy::Canonical],
        condition: "Branches on the target platform.",
        description: r#"On Win64, links the engine's bundled Steamworks module privately and
defines WITH_STEAMWORKS=1 for this module's translation units. On every
other platform the SDK is left out of the link set and WITH_STEAMWORKS=0
is defined instead, so `#if WITH_STEAMWORKS` guards always see a value."#,
    },
    RuleExplanation {
        id: "compiler-shims",
        title: "Feature-probe compiler shims",
        policies: &[RulePolicy::Canonical],
        condition: "Win64 and engine version 5.0 through 5.4.",
        description: r#"Publicly defines __has_feature(x), __has_extension(x) and
__is_identifier(x) to 0. Engine shared-PCH content on 5.0-5.4 references
these Clang-style probes, which strict-mode MSVC preprocessing reports as
undefined; an always-0 expansion makes the probes evaluate cleanly without
changing any compiled logic path. Engine 5.5 and newer define the probes
themselves, so the shims are withheld there."#,
    },
    RuleExplanation {
        id: "sdk-exposure-legacy",
        title: "SDK exposure (legacy snapshot)",
        policies: &[RulePolicy::Legacy],
        condition: "Always links the SDK; guard definition branches on platform.",
        description: r#"Older form of the SDK rule: links Steamworks on every platform and only
defines WITH_STEAMWORKS (to 1) on Win64, leaving the guard undefined
elsewhere. Non-Win64 builds relying on `#if WITH_STEAMWORKS` therefore
depend on the preprocessor treating an undefined symbol as 0. Kept for
module trees that still build against this behavior; new targets should
use the canonical policy."#,
    },
];

/// Look up a rule explanation by id.
pub fn lookup_rule(id: &str) -> Option<&'static RuleExplanation> {
    RULE_CATALOG.iter().find(|r| r.id == id)
}

/// All catalogued rule ids, in registry order.
pub fn rule_ids() -> Vec<&'static str> {
    RULE_CATALOG.iter().map(|r| r.id).collect()
}
