//! Command-line entry point: plan and verify a reflow profile for a BOM.
//!
//! Usage:
//!
//! ```text
//! plan-profile <bom.csv> <paste.json> [limits_db.json] [planner.toml] [report.md]
//! ```
//!
//! Without a limits database the built-in per-type table is used. The
//! markdown report is written to `report.md` (or the given path); the
//! process exits non-zero when verification fails.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};

use reflow_core::config::PlannerSettings;
use reflow_core::io::loaders::InputLoader;
use reflow_core::limits::builtin::BuiltinLimits;
use reflow_core::limits::repository::LimitsRepository;
use reflow_core::services::pipeline::{PipelineConfig, ProfilePipeline};
use reflow_core::services::report::render_markdown;

struct Args {
    bom: PathBuf,
    paste: PathBuf,
    limits_db: Option<PathBuf>,
    policy: Option<PathBuf>,
    report: PathBuf,
}

fn parse_args() -> Result<Args> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 || args.len() > 5 {
        bail!(
            "usage: plan-profile <bom.csv> <paste.json> [limits_db.json] [planner.toml] [report.md]"
        );
    }

    Ok(Args {
        bom: PathBuf::from(&args[0]),
        paste: PathBuf::from(&args[1]),
        limits_db: args.get(2).map(PathBuf::from),
        policy: args.get(3).map(PathBuf::from),
        report: args
            .get(4)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("report.md")),
    })
}

fn run(args: &Args) -> Result<bool> {
    let policy = match &args.policy {
        Some(path) => PlannerSettings::from_path(path)?.policy(),
        None => PlannerSettings::from_toml_str("")?.policy(),
    };
    let config = PipelineConfig { validate_inputs: true, policy };
    let pipeline = ProfilePipeline::with_config(config);

    let json_db;
    let builtin;
    let repository: &dyn LimitsRepository = match &args.limits_db {
        Some(path) => {
            json_db = InputLoader::load_limits_db(path)?;
            &json_db
        }
        None => {
            builtin = BuiltinLimits::new();
            &builtin
        }
    };

    let outcome = pipeline.process(&args.bom, &args.paste, repository)?;

    let report = render_markdown(&outcome.profile, &outcome.validation);
    fs::write(&args.report, &report)
        .with_context(|| format!("Failed to write report {}", args.report.display()))?;

    println!(
        "profile {}: {} ({} violations, {} warnings), report at {}",
        outcome.profile.profile_id,
        if outcome.validation.passed { "PASSED" } else { "FAILED" },
        outcome.validation.violations.len(),
        outcome.validation.warnings.len(),
        args.report.display()
    );
    for violation in &outcome.validation.violations {
        println!("  violation: {}", violation.message);
    }
    for warning in &outcome.validation.warnings {
        println!("  warning: {}", warning.message);
    }

    Ok(outcome.validation.passed)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
