use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use super::plan::{Artifact, DocumentCopy, OverwritePolicy};
use super::templates::TemplateEngine;
use super::write::{write_if_absent, write_replacing};

/// What happened to one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Written,
    /// Left alone because it already existed and is create-only
    Skipped,
}

/// A file that could not be produced.
#[derive(Debug)]
pub struct RenderFailure {
    pub path: PathBuf,
    pub cause: anyhow::Error,
}

impl fmt::Display for RenderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:#}", self.path.display(), self.cause)
    }
}

/// Accumulated outcome of a generator run.
#[derive(Debug, Default)]
pub struct RenderReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub failures: Vec<RenderFailure>,
}

impl RenderReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Fold one result into the report, logging failures as they arrive.
    pub fn record(&mut self, path: &Path, result: Result<RenderOutcome, anyhow::Error>) {
        match result {
            Ok(RenderOutcome::Written) => self.written.push(path.to_path_buf()),
            Ok(RenderOutcome::Skipped) => self.skipped.push(path.to_path_buf()),
            Err(cause) => {
                error!(path = %path.display(), error = %format!("{cause:#}"), "Failed to generate file");
                self.failures.push(RenderFailure {
                    path: path.to_path_buf(),
                    cause,
                });
            }
        }
    }
}

/// Executes planned artifacts against the filesystem.
pub struct Renderer<'a> {
    engine: &'a dyn TemplateEngine,
}

impl<'a> Renderer<'a> {
    pub fn new(engine: &'a dyn TemplateEngine) -> Self {
        Self { engine }
    }

    /// Render and write one artifact according to its overwrite policy.
    ///
    /// Create-only artifacts that already exist are skipped without being
    /// rendered.
    pub fn render(&self, artifact: &Artifact) -> anyhow::Result<RenderOutcome> {
        let path = &artifact.output_path;
        match artifact.policy {
            OverwritePolicy::Always => {
                let rendered = self.engine.render(&artifact.template_id, &artifact.context)?;
                write_replacing(path, rendered.as_bytes())?;
                info!(path = %path.display(), template = %artifact.template_id, "Generated file");
                Ok(RenderOutcome::Written)
            }
            OverwritePolicy::CreateOnlyIfAbsent => {
                if path.exists() {
                    debug!(path = %path.display(), "Keeping existing file");
                    return Ok(RenderOutcome::Skipped);
                }
                let rendered = self.engine.render(&artifact.template_id, &artifact.context)?;
                if write_if_absent(path, rendered.as_bytes())? {
                    info!(path = %path.display(), template = %artifact.template_id, "Generated file");
                    Ok(RenderOutcome::Written)
                } else {
                    debug!(path = %path.display(), "Keeping existing file");
                    Ok(RenderOutcome::Skipped)
                }
            }
        }
    }

    /// Render every artifact; one failure does not stop the others.
    pub fn render_all(&self, artifacts: &[Artifact], report: &mut RenderReport) {
        for artifact in artifacts {
            report.record(&artifact.output_path, self.render(artifact));
        }
    }

    /// Place a byte-for-byte copy of the input document, replacing any previous copy.
    pub fn copy_document(&self, copy: &DocumentCopy, contents: &[u8]) -> anyhow::Result<RenderOutcome> {
        write_replacing(&copy.destination, contents)?;
        info!(
            path = %copy.destination.display(),
            source = %copy.source.display(),
            "Copied input document"
        );
        Ok(RenderOutcome::Written)
    }
}
