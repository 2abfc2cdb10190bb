use tracing::info;

use super::plan::{ArtifactPlanner, ProjectPlan};
use super::render::{RenderReport, Renderer};
use super::seed::SeedWriter;
use super::templates::{EmbeddedTemplates, TemplateEngine};
use crate::error::ScaffoldError;
use crate::model::{load_test_config, LoadedDocument};
use crate::settings::ScaffoldSettings;
use crate::validator::validate;

/// Result of a generator run that got as far as writing files.
#[derive(Debug)]
pub struct Generation {
    pub plan: ProjectPlan,
    pub report: RenderReport,
}

impl Generation {
    /// Turn write failures into [`ScaffoldError::GenerationIncomplete`].
    pub fn into_result(self) -> Result<Generation, ScaffoldError> {
        if self.report.is_success() {
            Ok(self)
        } else {
            Err(ScaffoldError::GenerationIncomplete {
                failures: self.report.failures,
            })
        }
    }
}

/// Check settings, load and validate the document, and plan the project.
///
/// Nothing is written. Any validation violation aborts with
/// [`ScaffoldError::ValidationFailed`] carrying all of them.
pub fn prepare(settings: &ScaffoldSettings) -> anyhow::Result<(LoadedDocument, ProjectPlan)> {
    settings.validate()?;
    let document = load_test_config(&settings.input_path)?;
    let report = validate(&document.config);
    if !report.is_valid() {
        return Err(ScaffoldError::ValidationFailed {
            violations: report.violations,
        }
        .into());
    }
    info!(
        apis = report.config.len(),
        scenarios = report.config.scenario_count(),
        "Input document is valid"
    );
    let plan = ArtifactPlanner::new(settings).plan(&report.config)?;
    Ok((document, plan))
}

/// Plan without writing; used for dry runs.
pub fn plan_project(settings: &ScaffoldSettings) -> anyhow::Result<ProjectPlan> {
    prepare(settings).map(|(_, plan)| plan)
}

/// Generate the project with the embedded templates.
///
/// Returns `Ok` once every file has been attempted, even if some failed;
/// check [`RenderReport::is_success`] or call [`Generation::into_result`].
///
/// # Errors
///
/// Settings, load and validation problems abort before anything is written.
pub fn generate_project(settings: &ScaffoldSettings) -> anyhow::Result<Generation> {
    let engine = EmbeddedTemplates::new()?;
    generate_project_with_engine(settings, &engine)
}

/// [`generate_project`] with a caller-supplied template engine.
pub fn generate_project_with_engine(
    settings: &ScaffoldSettings,
    engine: &dyn TemplateEngine,
) -> anyhow::Result<Generation> {
    let (document, plan) = prepare(settings)?;
    let report = execute_plan(&plan, &document.raw, engine);
    info!(
        written = report.written.len(),
        skipped = report.skipped.len(),
        failed = report.failures.len(),
        root = %settings.project_root().display(),
        "Generation finished"
    );
    Ok(Generation { plan, report })
}

/// Write every planned file: artifacts, then body fixtures, then the document copies.
pub fn execute_plan(plan: &ProjectPlan, document: &[u8], engine: &dyn TemplateEngine) -> RenderReport {
    let renderer = Renderer::new(engine);
    let seeds = SeedWriter::new();
    let mut report = RenderReport::default();

    renderer.render_all(&plan.artifacts, &mut report);
    for fixture in &plan.fixtures {
        report.record(&fixture.path, seeds.write(fixture));
    }
    for copy in &plan.copies {
        report.record(&copy.destination, renderer.copy_document(copy, document));
    }
    report
}
