//! # apiscaffold
//!
//! **apiscaffold** turns a declarative document of HTTP API test scenarios into
//! a ready-to-run Maven/Cucumber/TestNG/RestAssured acceptance-test project.
//!
//! ## Overview
//!
//! The input document maps API names to their scenarios (method, path,
//! content types, expected status, body flags) and the environments they run
//! against. From it the generator produces feature files, runner classes,
//! step definitions, per-environment settings, placeholder request/response
//! bodies, and the supporting build and report configuration.
//!
//! Regeneration is safe: framework files are rewritten identically, while
//! the step definition stubs and body fixtures a developer edits are only
//! ever created, never overwritten.
//!
//! ## Architecture
//!
//! - **[`model`]** - Document types and JSON/YAML loading
//! - **[`validator`]** - Defaulting and rule checks; collects every violation
//! - **[`generator`]** - Planning, template rendering and file writing
//! - **[`settings`]** - Group id, artifact id and output directory resolution
//! - **[`cli`]** - The `apiscaffold-gen` command line
//! - **[`logging`]** - `tracing` subscriber setup
//!
//! ```text
//! load → validate → plan → render/seed/copy → RenderReport
//!          │                                     │
//!          └─ violations abort, nothing written   └─ failures collected, run marked failed
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! apiscaffold-gen validate --input tests.json
//! apiscaffold-gen generate --input tests.json --group-id com.acme.it --artifact-id acme-it
//! ```
//!
//! ## Library Use
//!
//! ```rust,no_run
//! use apiscaffold::{generate_project, ScaffoldSettings};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut settings = ScaffoldSettings::new("tests.json");
//! settings.artifact_id = "acme-it".to_string();
//! let generation = generate_project(&settings)?.into_result()?;
//! for path in &generation.report.written {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod generator;
pub mod logging;
pub mod model;
pub mod settings;
pub mod validator;

pub use error::ScaffoldError;
pub use generator::{generate_project, plan_project, Generation, ProjectPlan, RenderReport};
pub use model::{load_test_config, TestConfig};
pub use settings::ScaffoldSettings;
pub use validator::{validate, ValidationReport, Violation};
