//! # CLI Module
//!
//! Command-line front end for the scaffold generator, exposed as the
//! `apiscaffold-gen` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Validate a scenario document and write the acceptance-test project:
//!
//! ```bash
//! apiscaffold-gen generate --input tests.json --output generated
//! ```
//!
//! Options:
//! - `--input <FILE>` - Scenario document (`.json`, or `.yaml`/`.yml`)
//! - `--output <DIR>` - Parent directory of the project (default: `generated`)
//! - `--group-id <ID>` / `--artifact-id <ID>` - Maven coordinates of the project
//! - `--config <FILE>` - Settings file (default: `apiscaffold.toml` next to the input)
//! - `--dry-run` - Print the plan without writing anything
//!
//! ### `validate`
//!
//! Check a scenario document and print every violation:
//!
//! ```bash
//! apiscaffold-gen validate --input tests.json
//! ```
//!
//! Both commands return an error (exit status 1 from the binary) when the
//! document is invalid or any file could not be written.

mod commands;


pub use commands::{run, run_cli, Cli, Commands};
