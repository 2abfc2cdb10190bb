use serde_json::json;
use tracing::{debug, info};

use super::plan::{BodyKind, Fixture, FixtureFormat};
use super::render::RenderOutcome;
use super::write::write_if_absent;

/// Writes placeholder request/response bodies.
///
/// Fixtures are samples the test author is expected to replace, so an
/// existing file is never touched.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedWriter;

impl SeedWriter {
    pub fn new() -> Self {
        SeedWriter
    }

    pub fn write(&self, fixture: &Fixture) -> anyhow::Result<RenderOutcome> {
        let contents = placeholder(fixture.kind, fixture.format);
        if write_if_absent(&fixture.path, contents.as_bytes())? {
            info!(path = %fixture.path.display(), kind = fixture.kind.as_str(), "Seeded body fixture");
            Ok(RenderOutcome::Written)
        } else {
            debug!(path = %fixture.path.display(), "Keeping existing body fixture");
            Ok(RenderOutcome::Skipped)
        }
    }
}

/// Placeholder payload for a fixture of the given side and format.
pub fn placeholder(kind: BodyKind, format: FixtureFormat) -> String {
    let text = format!("Place your {} body here", kind.as_str());
    match format {
        FixtureFormat::Json => json!({ "message": text }).to_string(),
        FixtureFormat::Xml => format!("<xml>\n\t<value>{text}</value>\n</xml>"),
        FixtureFormat::Text => text,
    }
}
