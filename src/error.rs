use std::fmt;

use crate::generator::RenderFailure;
use crate::validator::Violation;

/// Errors that abort a generator run.
///
/// Per-file write problems never surface as individual errors; they are
/// collected by the renderer and reported together as
/// [`ScaffoldError::GenerationIncomplete`].
#[derive(Debug)]
pub enum ScaffoldError {
    /// Generator settings are unusable (blank artifact id, malformed group id, ...)
    InvalidSettings {
        /// Every problem found in the settings
        problems: Vec<String>,
    },
    /// The input document broke one or more rules; nothing was written
    ValidationFailed {
        /// Every violation, in traversal order
        violations: Vec<Violation>,
    },
    /// Generation ran to the end but at least one file could not be written
    GenerationIncomplete {
        /// The files that failed, with their causes
        failures: Vec<RenderFailure>,
    },
}

impl fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldError::InvalidSettings { problems } => {
                write!(f, "invalid generator settings: {}", problems.join("; "))
            }
            ScaffoldError::ValidationFailed { violations } => {
                write!(
                    f,
                    "invalid input document: {} violation(s) found",
                    violations.len()
                )
            }
            ScaffoldError::GenerationIncomplete { failures } => {
                write!(f, "{} file(s) could not be generated", failures.len())
            }
        }
    }
}

impl std::error::Error for ScaffoldError {}
