//! On-disk envelope for resolved plans.

use serde::{Deserialize, Serialize};

use crate::plan::BuildPlan;
use crate::target::TargetDescriptor;

/// Identity of the tool that produced an artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A resolved plan together with the target it was resolved for.
///
/// This is what `modplan resolve` writes to `plan.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanArtifact {
    pub schema: String,
    pub tool: ToolInfo,
    pub target: TargetDescriptor,
    pub plan: BuildPlan,
}

impl PlanArtifact {
    pub fn new(tool: ToolInfo, target: TargetDescriptor, plan: BuildPlan) -> Self {
        Self {
            schema: crate::schema::MODPLAN_PLAN_V1.to_string(),
            tool,
            target,
            plan,
        }
    }
}
