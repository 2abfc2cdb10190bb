use anyhow::Context;
use std::path::{Path, PathBuf};

use super::types::TestConfig;

/// Serialization format of the input document, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.yaml` / `.yml` are YAML, everything else is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DocumentFormat::Yaml
            }
            _ => DocumentFormat::Json,
        }
    }

    /// File extension used for the copies placed in the generated project.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Yaml => "yaml",
        }
    }
}

/// A parsed input document together with the bytes it was parsed from.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub path: PathBuf,
    pub format: DocumentFormat,
    pub raw: Vec<u8>,
    pub config: TestConfig,
}

/// Read and parse a test configuration document.
///
/// Only syntax and type errors are reported here. Semantic problems (blank
/// hosts, bad methods, ...) are left for [`crate::validator::validate`] so
/// that they can be reported all at once.
pub fn load_test_config(path: &Path) -> anyhow::Result<LoadedDocument> {
    let raw = std::fs::read(path)
        .with_context(|| format!("Failed to read input document: {}", path.display()))?;
    let format = DocumentFormat::from_path(path);
    let config = parse_test_config(&raw, format)
        .with_context(|| format!("Failed to parse input document: {}", path.display()))?;
    Ok(LoadedDocument {
        path: path.to_path_buf(),
        format,
        raw,
        config,
    })
}

/// Parse a document already held in memory.
pub fn parse_test_config(raw: &[u8], format: DocumentFormat) -> anyhow::Result<TestConfig> {
    let config = match format {
        DocumentFormat::Json => serde_json::from_slice(raw)?,
        DocumentFormat::Yaml => serde_yaml::from_slice(raw)?,
    };
    Ok(config)
}
