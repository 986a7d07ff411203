//! Serialization contract tests for plan artifacts.

use modplan_types::artifact::{PlanArtifact, ToolInfo};
use modplan_types::plan::{BuildPlan, PchMode};
use modplan_types::target::{EnginePlatform, EngineVersion, TargetDescriptor};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn sample_artifact() -> PlanArtifact {
    let mut plan = BuildPlan::default();
    plan.add_public_dependency("CoreRuntime");
    plan.add_private_dependency("Steamworks");
    plan.define_private("WITH_STEAMWORKS", "1");
    plan.pch_mode = PchMode::UseExplicitOrSharedPchs;

    PlanArtifact::new(
        ToolInfo {
            name: "modplan".to_string(),
            version: Some("test".to_string()),
        },
        TargetDescriptor::new(EnginePlatform::Win64, EngineVersion::new(5, 3)),
        plan,
    )
}

#[test]
fn artifact_serializes_with_stable_field_names() {
    let value = serde_json::to_value(sample_artifact()).unwrap();

    assert_eq!(value["schema"], "modplan.plan.v1");
    assert_eq!(value["tool"]["name"], "modplan");
    assert_eq!(value["target"]["platform"], "win64");
    assert_eq!(value["target"]["engine"]["major"], 5);
    assert_eq!(value["target"]["engine"]["minor"], 3);
    assert_eq!(value["plan"]["pch_mode"], "use_explicit_or_shared_pchs");
    assert_eq!(
        value["plan"]["private_definitions"]["WITH_STEAMWORKS"],
        "1"
    );
}

#[test]
fn artifact_round_trips_through_json() {
    let artifact = sample_artifact();
    let json = serde_json::to_string(&artifact).unwrap();
    let back: PlanArtifact = serde_json::from_str(&json).unwrap();
    assert_eq!(back.plan, artifact.plan);
    assert_eq!(back.target, artifact.target);
    assert_eq!(back.schema, artifact.schema);
}

#[test]
fn plan_deserializes_with_missing_fields_as_defaults() {
    let plan: BuildPlan = serde_json::from_str("{}").unwrap();
    assert_eq!(plan, BuildPlan::default());
}

#[test]
fn platform_serde_matches_display_tokens() {
    for p in EnginePlatform::ALL {
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, format!("\"{}\"", p.as_str()));
    }
}

proptest! {
    #[test]
    fn engine_version_display_parse_round_trip(major in 0u32..100, minor in 0u32..100) {
        let v = EngineVersion::new(major, minor);
        let parsed: EngineVersion = v.to_string().parse().unwrap();
        prop_assert_eq!(parsed, v);
    }
}
