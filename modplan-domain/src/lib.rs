//! Deterministic resolution of module build plans.
//!
//! The resolver maps a [`TargetDescriptor`] to a [`BuildPlan`] by evaluating
//! an ordered table of additive rules. Resolution is a pure total function:
//! no I/O, no errors, no shared state, and structurally equal output for
//! equal input. Unknown platform/version combinations simply skip the rules
//! that do not apply to them.
//!
//! [`TargetDescriptor`]: modplan_types::target::TargetDescriptor
//! [`BuildPlan`]: modplan_types::plan::BuildPlan

pub mod catalog;
pub mod resolver;
pub mod rules;

pub use resolver::Resolver;
pub use rules::{Rule, RulePolicy};
