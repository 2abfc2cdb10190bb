#![allow(dead_code)]

use apiscaffold::ScaffoldSettings;
use std::path::{Path, PathBuf};

/// Path of a document under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Settings that generate `fixture` into `output` with the default coordinates.
pub fn settings_for(name: &str, output: &Path) -> ScaffoldSettings {
    let mut settings = ScaffoldSettings::new(fixture(name));
    settings.output_path = output.to_path_buf();
    settings
}

/// Root of the generated Java sources for the default group id.
pub fn java_root(project: &Path) -> PathBuf {
    project.join("src/test/java/com/example/apitests")
}

pub fn resources_root(project: &Path) -> PathBuf {
    project.join("src/test/resources")
}
