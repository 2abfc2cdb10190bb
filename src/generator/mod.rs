//! # Generator Module
//!
//! Turns a validated test configuration into a complete Cucumber/TestNG
//! acceptance-test project.
//!
//! ## Architecture
//!
//! ```text
//! Document → validate → ArtifactPlanner → Renderer + SeedWriter → Files
//! ```
//!
//! 1. **Planner** ([`ArtifactPlanner`]) - pure; lists every file as an
//!    [`Artifact`] (path, template id, context, overwrite policy), plus body
//!    [`Fixture`]s and [`DocumentCopy`]s
//! 2. **Renderer** ([`Renderer`]) - renders each artifact through a
//!    [`TemplateEngine`] and writes it, honouring its [`OverwritePolicy`]
//! 3. **Seed writer** ([`SeedWriter`]) - placeholder request/response bodies,
//!    written only when absent
//!
//! ## Generated Structure
//!
//! ```text
//! <output>/<artifact-id>/
//! ├── pom.xml, .gitignore, testng.xml
//! └── src/test/
//!     ├── java/<group/path>/
//!     │   ├── base/BaseStepdefs.java
//!     │   ├── config/Config.java
//!     │   ├── data/{Api,Environment,Pair,Scenario,TestConfig}.java
//!     │   ├── runner/RunCukeIT<Api><n>.java
//!     │   └── stepdefs/
//!     │       ├── <Api><n>Stepdefs.java          (create-only)
//!     │       ├── api/<Api>Stepdefs.java         (create-only)
//!     │       └── core/<api><n>/_<Api><n>Stepdefs.java
//!     └── resources/
//!         ├── logback.xml, klov.properties, extent-config.xml, extent.properties
//!         ├── test-config.json
//!         ├── features/<api><n>.feature
//!         └── config/
//!             ├── test-config.json
//!             ├── env/<api>/config-<env>.properties
//!             ├── request/<api><n>.{json,xml,txt}   (create-only)
//!             └── response/<api><n>.{json,xml,txt}  (create-only)
//! ```
//!
//! ## Regeneration
//!
//! Running the generator again rewrites every `Always` file byte-for-byte
//! identically and leaves create-only files (step definition stubs, body
//! fixtures) untouched, so hand edits survive.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use apiscaffold::generator::generate_project;
//! use apiscaffold::settings::ScaffoldSettings;
//!
//! # fn main() -> anyhow::Result<()> {
//! let settings = ScaffoldSettings::new("tests.json");
//! let generation = generate_project(&settings)?.into_result()?;
//! println!("{} files written", generation.report.written.len());
//! # Ok(())
//! # }
//! ```

mod naming;
mod plan;
mod project;
mod render;
mod seed;
mod templates;
mod write;

pub use naming::*;
pub use plan::*;
pub use project::*;
pub use render::*;
pub use seed::*;
pub use templates::*;
pub use write::{write_if_absent, write_replacing};
