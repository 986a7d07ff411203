//! Shared DTOs (schemas-as-code) for the modplan workspace.
//!
//! # Design constraints
//! - Plan artifacts are intended to be serialized to disk and consumed by a
//!   build orchestrator.
//! - Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.

pub mod artifact;
pub mod plan;
pub mod target;

/// Schema identifiers.
pub mod schema {
    pub const MODPLAN_PLAN_V1: &str = "modplan.plan.v1";
}
