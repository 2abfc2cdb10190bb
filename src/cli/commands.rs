use crate::error::ScaffoldError;
use crate::generator::{generate_project, plan_project, ProjectPlan, RenderReport};
use crate::model::load_test_config;
use crate::settings::{resolve_settings, SettingsOverrides};
use crate::validator::{validate, Violation};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface for the scaffold generator
#[derive(Parser, Debug)]
#[command(name = "apiscaffold-gen", version)]
#[command(about = "Generate Cucumber/RestAssured acceptance-test projects from a scenario document", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the document and generate the test project
    Generate {
        /// Path to the scenario document (JSON or YAML)
        #[arg(short, long)]
        input: PathBuf,

        /// Directory the project folder is created in (default: generated)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maven groupId; also the Java base package
        #[arg(long)]
        group_id: Option<String>,

        /// Maven artifactId; also the project folder name
        #[arg(long)]
        artifact_id: Option<String>,

        /// Path to the settings file (apiscaffold.toml)
        /// If not provided, will auto-detect alongside the input document
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Perform a dry run: show what would be written without writing files
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Validate the document only
    Validate {
        /// Path to the scenario document (JSON or YAML)
        #[arg(short, long)]
        input: PathBuf,
    },
}

/// Parse the process arguments and execute the command
///
/// # Errors
///
/// See [`run`].
pub fn run_cli() -> anyhow::Result<()> {
    run(Cli::parse())
}

/// Execute a parsed command
///
/// Violations, settings problems and per-file failures are printed to
/// stderr before the error is returned.
///
/// # Errors
///
/// Returns an error if:
/// - The settings or the document cannot be loaded
/// - The document has validation violations
/// - One or more generated files could not be written
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            input,
            output,
            group_id,
            artifact_id,
            config,
            dry_run,
        } => {
            let overrides = SettingsOverrides {
                group_id,
                artifact_id,
                output_path: output,
            };
            let settings = resolve_settings(&input, config.as_deref(), &overrides)?;

            if dry_run {
                let plan = plan_project(&settings).map_err(print_details)?;
                print_plan(&plan);
                return Ok(());
            }

            let generation = generate_project(&settings).map_err(print_details)?;
            print_report(&generation.report);
            let generation = generation
                .into_result()
                .map_err(|e| print_details(e.into()))?;
            println!(
                "✅ Generated {} at {} ({} written, {} kept)",
                settings.artifact_id,
                settings.project_root().display(),
                generation.report.written.len(),
                generation.report.skipped.len()
            );
            Ok(())
        }
        Commands::Validate { input } => {
            let document = load_test_config(&input)?;
            let report = validate(&document.config);
            if !report.is_valid() {
                return Err(print_details(
                    ScaffoldError::ValidationFailed {
                        violations: report.violations,
                    }
                    .into(),
                ));
            }
            println!(
                "✅ {} is valid: {} API(s), {} scenario(s), {} environment(s)",
                input.display(),
                report.config.len(),
                report.config.scenario_count(),
                report.config.environment_count()
            );
            Ok(())
        }
    }
}

fn print_violations(violations: &[Violation]) {
    for violation in violations {
        eprintln!("❌ {}", violation);
    }
}

/// Print the individual problems behind a [`ScaffoldError`], then hand the error back.
fn print_details(err: anyhow::Error) -> anyhow::Error {
    match err.downcast_ref::<ScaffoldError>() {
        Some(ScaffoldError::InvalidSettings { problems }) => {
            for problem in problems {
                eprintln!("❌ {}", problem);
            }
        }
        Some(ScaffoldError::ValidationFailed { violations }) => print_violations(violations),
        Some(ScaffoldError::GenerationIncomplete { failures }) => {
            for failure in failures {
                eprintln!("❌ {}", failure);
            }
        }
        None => {}
    }
    err
}

fn print_report(report: &RenderReport) {
    for path in &report.written {
        println!("✅ {}", path.display());
    }
    for path in &report.skipped {
        println!("⏭  {} (exists, kept)", path.display());
    }
}

fn print_plan(plan: &ProjectPlan) {
    println!("🔍 Dry run: nothing will be written");
    for artifact in &plan.artifacts {
        println!("  [{}] {}", artifact.policy, artifact.output_path.display());
    }
    for fixture in &plan.fixtures {
        println!("  [create-only] {}", fixture.path.display());
    }
    for copy in &plan.copies {
        println!("  [copy] {}", copy.destination.display());
    }
    for anomaly in &plan.anomalies {
        println!("⚠️  {}", anomaly);
    }
    println!(
        "{} file(s), {} runner(s)",
        plan.artifacts.len() + plan.fixtures.len() + plan.copies.len(),
        plan.runners.len()
    );
}
