mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use fs_err as fs;
use modplan_domain::catalog::{RULE_CATALOG, lookup_rule, rule_ids};
use modplan_domain::{Resolver, RulePolicy};
use modplan_render::render_plan_md;
use modplan_types::artifact::{PlanArtifact, ToolInfo};
use modplan_types::target::{EnginePlatform, EngineVersion, TargetDescriptor};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "modplan",
    version,
    about = "Deterministic build-plan resolver for engine platform-integration modules."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve a build plan for a target descriptor.
    Resolve(ResolveArgs),
    /// Explain a policy rule: when it fires and what it adds to the plan.
    Explain(ExplainArgs),
    /// List all policy rules with the policies they belong to.
    ListRules(ListRulesArgs),
}

#[derive(Debug, Parser)]
struct ResolveArgs {
    /// Target platform (win64, linux, linux-arm64, mac, android, ios).
    #[arg(long)]
    platform: Option<EnginePlatform>,

    /// Host engine version as <major>.<minor> (e.g. 5.3).
    #[arg(long)]
    engine_version: Option<EngineVersion>,

    /// Rule policy to resolve with.
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Directory to search for modplan.toml (default: current directory).
    #[arg(long, default_value = ".")]
    config_dir: Utf8PathBuf,

    /// Output directory for plan.json and plan.md. If omitted, the plan is
    /// printed to stdout as JSON.
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct ExplainArgs {
    /// Rule id to explain (e.g. "sdk-exposure", "compiler-shims").
    rule_id: String,
}

#[derive(Debug, Parser)]
struct ListRulesArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum PolicyArg {
    Canonical,
    Legacy,
}

impl From<PolicyArg> for RulePolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::Canonical => RulePolicy::Canonical,
            PolicyArg::Legacy => RulePolicy::Legacy,
        }
    }
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("error: {:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args),
        Command::Explain(args) => cmd_explain(args),
        Command::ListRules(args) => cmd_list_rules(args),
    }
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let file_config =
        config::load_or_default(&args.config_dir).context("load modplan.toml config")?;
    let settings = config::merge_resolve_settings(
        &file_config,
        args.platform,
        args.engine_version,
        args.policy.map(RulePolicy::from),
    )?;

    let target = TargetDescriptor::new(settings.platform, settings.engine);
    let resolver = Resolver::for_policy(settings.policy);
    let plan = resolver.resolve(&target);
    let artifact = PlanArtifact::new(tool_info(), target, plan);

    match args.out_dir {
        Some(out_dir) => {
            fs::create_dir_all(&out_dir).with_context(|| format!("create {}", out_dir))?;
            write_json(&out_dir.join("plan.json"), &artifact)?;
            fs::write(out_dir.join("plan.md"), render_plan_md(&artifact))?;
            info!("wrote plan for {} to {}", target, out_dir);
        }
        None => {
            let s = serde_json::to_string_pretty(&artifact).context("serialize plan")?;
            println!("{}", s);
        }
    }
    Ok(())
}

fn cmd_explain(args: ExplainArgs) -> anyhow::Result<()> {
    let Some(rule) = lookup_rule(&args.rule_id) else {
        let available = rule_ids().join(", ");
        anyhow::bail!(
            "Unknown rule id: '{}'\n\nAvailable rules: {}",
            args.rule_id,
            available
        );
    };

    println!("================================================================================");
    println!("RULE: {}", rule.title);
    println!("================================================================================");
    println!();
    println!("Id:       {}", rule.id);
    println!("Policies: {}", policies_label(rule.policies));
    println!("Fires:    {}", rule.condition);
    println!();
    println!("DESCRIPTION");
    println!("--------------------------------------------------------------------------------");
    println!("{}", rule.description);
    println!();

    Ok(())
}

fn cmd_list_rules(args: ListRulesArgs) -> anyhow::Result<()> {
    match args.format {
        OutputFormat::Text => {
            println!("Policy rules (evaluation order within each policy):\n");
            println!("  {:<22} {:<20} TITLE", "ID", "POLICIES");
            println!("  {:<22} {:<20} -----", "--", "--------");
            for rule in RULE_CATALOG {
                println!(
                    "  {:<22} {:<20} {}",
                    rule.id,
                    policies_label(rule.policies),
                    rule.title
                );
            }
            println!();
            println!("Use 'modplan explain <id>' for details.");
        }
        OutputFormat::Json => {
            let rules: Vec<_> = RULE_CATALOG
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "id": r.id,
                        "title": r.title,
                        "policies": r.policies,
                        "condition": r.condition,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rules)?);
        }
    }
    Ok(())
}

fn policies_label(policies: &[RulePolicy]) -> String {
    policies
        .iter()
        .map(|p| match p {
            RulePolicy::Canonical => "canonical",
            RulePolicy::Legacy => "legacy",
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_json<T: serde::Serialize>(path: &Utf8Path, v: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(v).context("serialize json")?;
    fs::write(path, s).with_context(|| format!("write {}", path))?;
    Ok(())
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "modplan".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}
