//! Rendering helpers (markdown) for human-readable plan artifacts.

use modplan_types::artifact::PlanArtifact;
use modplan_types::plan::{DefinitionMap, DependencySet, PchMode};

pub fn render_plan_md(artifact: &PlanArtifact) -> String {
    let mut out = String::new();
    out.push_str("# modplan plan\n\n");
    out.push_str(&format!("- Target: `{}`\n", artifact.target));
    out.push_str(&format!(
        "- PCH mode: `{}`\n",
        pch_label(artifact.plan.pch_mode)
    ));
    out.push_str(&format!("- Schema: `{}`\n\n", artifact.schema));

    render_dependencies(&mut out, "Public dependencies", &artifact.plan.public_dependencies);
    render_dependencies(&mut out, "Private dependencies", &artifact.plan.private_dependencies);
    render_definitions(&mut out, "Public definitions", &artifact.plan.public_definitions);
    render_definitions(&mut out, "Private definitions", &artifact.plan.private_definitions);

    out
}

fn render_dependencies(out: &mut String, heading: &str, deps: &DependencySet) {
    out.push_str(&format!("## {}\n\n", heading));
    if deps.is_empty() {
        out.push_str("_None._\n\n");
        return;
    }
    for module in deps {
        out.push_str(&format!("- `{}`\n", module));
    }
    out.push('\n');
}

fn render_definitions(out: &mut String, heading: &str, defs: &DefinitionMap) {
    out.push_str(&format!("## {}\n\n", heading));
    if defs.is_empty() {
        out.push_str("_None._\n\n");
        return;
    }
    for (symbol, value) in defs {
        out.push_str(&format!("- `{}={}`\n", symbol, value));
    }
    out.push('\n');
}

fn pch_label(mode: PchMode) -> &'static str {
    match mode {
        PchMode::NoPchs => "no_pchs",
        PchMode::UseSharedPchs => "use_shared_pchs",
        PchMode::UseExplicitOrSharedPchs => "use_explicit_or_shared_pchs",
    }
}
