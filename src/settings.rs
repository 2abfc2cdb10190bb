//! # Settings Module
//!
//! Generator settings: where the input document lives, where the project is
//! written, and the Maven coordinates of the generated project.
//!
//! ## Sources
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. Built-in defaults ([`ScaffoldSettings::new`])
//! 2. `apiscaffold.toml`, given explicitly or found next to the input document
//! 3. Command-line flags
//!
//! ```toml
//! # apiscaffold.toml
//! group_id = "com.acme.tests"
//! artifact_id = "orders-acceptance"
//! output_path = "build/generated"
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::model::DocumentFormat;

/// File name looked up next to the input document.
pub const SETTINGS_FILE_NAME: &str = "apiscaffold.toml";

pub const DEFAULT_GROUP_ID: &str = "com.example.apitests";
pub const DEFAULT_ARTIFACT_ID: &str = "api-acceptance-tests";
pub const DEFAULT_OUTPUT_PATH: &str = "generated";

/// Settings for one generator run.
///
/// Passed explicitly to the planner and the driver; nothing in the crate reads
/// process-wide state for these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSettings {
    /// Maven group id, also the base Java package
    pub group_id: String,
    /// Maven artifact id, also the project directory name
    pub artifact_id: String,
    /// Directory the project directory is created in
    pub output_path: PathBuf,
    /// The test configuration document
    pub input_path: PathBuf,
}

/// Optional overrides as they appear in `apiscaffold.toml` or on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsOverrides {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub artifact_id: Option<String>,
    #[serde(default)]
    pub output_path: Option<PathBuf>,
}

impl ScaffoldSettings {
    /// Defaults for the given input document.
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            group_id: DEFAULT_GROUP_ID.to_string(),
            artifact_id: DEFAULT_ARTIFACT_ID.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            input_path: input_path.into(),
        }
    }

    /// Apply overrides; `None` fields leave the current value alone.
    pub fn with_overrides(mut self, overrides: &SettingsOverrides) -> Self {
        if let Some(group_id) = &overrides.group_id {
            self.group_id = group_id.clone();
        }
        if let Some(artifact_id) = &overrides.artifact_id {
            self.artifact_id = artifact_id.clone();
        }
        if let Some(output_path) = &overrides.output_path {
            self.output_path = output_path.clone();
        }
        self
    }

    /// `output_path/artifact_id`
    pub fn project_root(&self) -> PathBuf {
        self.output_path.join(&self.artifact_id)
    }

    /// Group id as a directory path: `com.acme.tests` → `com/acme/tests`
    pub fn base_package_path(&self) -> String {
        self.group_id.replace('.', "/")
    }

    pub fn document_format(&self) -> DocumentFormat {
        DocumentFormat::from_path(&self.input_path)
    }

    /// Check the settings are usable before anything is read or written.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidSettings`] listing every problem found.
    pub fn validate(&self) -> Result<(), ScaffoldError> {
        let mut problems = Vec::new();

        if self.group_id.trim().is_empty() {
            problems.push("group id cannot be blank".to_string());
        } else if !self.group_id.split('.').all(is_java_identifier) {
            problems.push(format!(
                "group id must be a dotted Java package name: {}",
                self.group_id
            ));
        }

        if self.artifact_id.trim().is_empty() {
            problems.push("artifact id cannot be blank".to_string());
        } else if self.artifact_id.contains(['/', '\\']) || self.artifact_id == ".." {
            problems.push(format!(
                "artifact id cannot contain path separators: {}",
                self.artifact_id
            ));
        }

        if self.input_path.as_os_str().is_empty() {
            problems.push("input document path cannot be blank".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ScaffoldError::InvalidSettings { problems })
        }
    }
}

fn is_java_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Load overrides from a TOML settings file.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_settings_file(path: &Path) -> anyhow::Result<Option<SettingsOverrides>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
    let overrides: SettingsOverrides = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;
    Ok(Some(overrides))
}

/// Find the settings file to use.
///
/// An explicit path wins; otherwise `apiscaffold.toml` next to the input
/// document is used if present.
pub fn resolve_settings_path(explicit: Option<&Path>, input_path: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let candidate = input_path.parent()?.join(SETTINGS_FILE_NAME);
    candidate.exists().then_some(candidate)
}

/// Build the effective settings: defaults, then the settings file, then CLI overrides.
///
/// An explicitly named settings file that does not exist is an error; a
/// missing auto-detected one is not.
pub fn resolve_settings(
    input_path: &Path,
    settings_file: Option<&Path>,
    cli: &SettingsOverrides,
) -> anyhow::Result<ScaffoldSettings> {
    let mut settings = ScaffoldSettings::new(input_path);
    if let Some(path) = resolve_settings_path(settings_file, input_path) {
        match load_settings_file(&path)? {
            Some(file) => {
                tracing::debug!(path = %path.display(), "Loaded settings file");
                settings = settings.with_overrides(&file);
            }
            None => anyhow::bail!("Settings file not found: {}", path.display()),
        }
    }
    Ok(settings.with_overrides(cli))
}
