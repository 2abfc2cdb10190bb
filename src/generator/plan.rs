use serde_json::{json, Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::naming::{capitalize, core_package, runner_class, runner_name};
use super::templates::{ids, TemplateContext};
use crate::model::{Api, Environment, Scenario, TestConfig};
use crate::settings::ScaffoldSettings;

/// What to do when the output file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Regenerated on every run
    Always,
    /// Written once; later runs leave the file (and any hand edits) alone
    CreateOnlyIfAbsent,
}

impl fmt::Display for OverwritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverwritePolicy::Always => f.write_str("always"),
            OverwritePolicy::CreateOnlyIfAbsent => f.write_str("create-only"),
        }
    }
}

/// One planned output file rendered from a template.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub output_path: PathBuf,
    pub template_id: String,
    pub context: TemplateContext,
    pub policy: OverwritePolicy,
}

impl Artifact {
    fn new(output_path: PathBuf, template_id: &str, context: TemplateContext, policy: OverwritePolicy) -> Self {
        Self {
            output_path,
            template_id: template_id.to_string(),
            context,
            policy,
        }
    }
}

/// Request or response side of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Request,
    Response,
}

impl BodyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyKind::Request => "request",
            BodyKind::Response => "response",
        }
    }
}

/// Format of a placeholder body fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Json,
    Xml,
    Text,
}

impl FixtureFormat {
    /// Pick a format from a content type.
    ///
    /// `json` anywhere in the type wins, then `xml`; every other type gets a
    /// plain text placeholder. Matching is case-sensitive. A blank type has
    /// no format.
    pub fn for_content_type(content_type: &str) -> Option<Self> {
        if content_type.trim().is_empty() {
            None
        } else if content_type.contains("json") {
            Some(FixtureFormat::Json)
        } else if content_type.contains("xml") {
            Some(FixtureFormat::Xml)
        } else {
            Some(FixtureFormat::Text)
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FixtureFormat::Json => "json",
            FixtureFormat::Xml => "xml",
            FixtureFormat::Text => "txt",
        }
    }
}

/// A placeholder request/response body, written only if absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub path: PathBuf,
    pub kind: BodyKind,
    pub format: FixtureFormat,
}

/// A verbatim copy of the input document inside the generated project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCopy {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// A body flag with a blank content type, so no placeholder format. Not fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anomaly {
    pub api_name: String,
    pub scenario_number: i64,
    pub kind: BodyKind,
    pub content_type: String,
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self.kind {
            BodyKind::Request => "consumes",
            BodyKind::Response => "produces",
        };
        write!(
            f,
            "no {} body fixture for {}/scenario:{}: blank {field}",
            self.kind.as_str(),
            self.api_name,
            self.scenario_number
        )
    }
}

/// Everything one generator run will produce.
#[derive(Debug, Clone, Default)]
pub struct ProjectPlan {
    /// Template-rendered files, in generation order
    pub artifacts: Vec<Artifact>,
    pub fixtures: Vec<Fixture>,
    pub copies: Vec<DocumentCopy>,
    pub anomalies: Vec<Anomaly>,
    /// Runner identifiers (`Capitalize(api) + number`), one per scenario
    pub runners: Vec<String>,
}

/// Directory layout of the generated project.
struct Layout {
    root: PathBuf,
    java: PathBuf,
    resources: PathBuf,
}

impl Layout {
    fn new(settings: &ScaffoldSettings) -> Self {
        let root = settings.project_root();
        let test = root.join("src").join("test");
        let mut java = test.join("java");
        for segment in settings.group_id.split('.') {
            java.push(segment);
        }
        Self {
            resources: test.join("resources"),
            java,
            root,
        }
    }
}

/// Maps a validated [`TestConfig`] to the full list of files to produce.
///
/// Pure: reads nothing from disk and writes nothing.
pub struct ArtifactPlanner<'a> {
    settings: &'a ScaffoldSettings,
    layout: Layout,
}

impl<'a> ArtifactPlanner<'a> {
    pub fn new(settings: &'a ScaffoldSettings) -> Self {
        Self {
            settings,
            layout: Layout::new(settings),
        }
    }

    /// Plan every artifact, fixture and document copy for `config`.
    ///
    /// `config` must already have been through [`crate::validator::validate`];
    /// scenario numbers of `0` would produce clashing file names.
    ///
    /// # Errors
    ///
    /// Fails only if a model entity cannot be converted into template context.
    pub fn plan(&self, config: &TestConfig) -> anyhow::Result<ProjectPlan> {
        let mut plan = ProjectPlan {
            runners: config
                .iter()
                .flat_map(|(name, api)| {
                    api.scenarios
                        .iter()
                        .map(move |s| runner_name(name, s.scenario_number))
                })
                .collect(),
            ..ProjectPlan::default()
        };
        let base = self.base_context();
        let always = OverwritePolicy::Always;
        let root = &self.layout.root;
        let resources = &self.layout.resources;

        plan.artifacts.push(Artifact::new(root.join("pom.xml"), ids::POM, base.clone(), always));
        plan.artifacts.push(Artifact::new(root.join(".gitignore"), ids::GITIGNORE, base.clone(), always));
        for (file, id) in [
            ("logback.xml", ids::LOGBACK),
            ("klov.properties", ids::KLOV),
            ("extent-config.xml", ids::EXTENT_CONFIG),
            ("extent.properties", ids::EXTENT_PROPERTIES),
        ] {
            plan.artifacts.push(Artifact::new(resources.join(file), id, base.clone(), always));
        }

        let mut suite = base.clone();
        suite.insert("runners".into(), json!(plan.runners));
        plan.artifacts.push(Artifact::new(root.join("testng.xml"), ids::TESTNG, suite, always));

        for (name, api) in config.iter() {
            self.plan_api(&mut plan, &base, name, api)?;
        }

        let java = &self.layout.java;
        plan.artifacts.push(Artifact::new(
            java.join("base").join("BaseStepdefs.java"),
            ids::BASE_STEPDEFS,
            base.clone(),
            always,
        ));
        plan.artifacts.push(Artifact::new(
            java.join("config").join("Config.java"),
            ids::CONFIG_LOADER,
            base.clone(),
            always,
        ));
        for (class, id) in [
            ("Api", ids::DATA_API),
            ("Environment", ids::DATA_ENVIRONMENT),
            ("Pair", ids::DATA_PAIR),
            ("Scenario", ids::DATA_SCENARIO),
            ("TestConfig", ids::DATA_TEST_CONFIG),
        ] {
            plan.artifacts.push(Artifact::new(
                java.join("data").join(format!("{class}.java")),
                id,
                base.clone(),
                always,
            ));
        }

        plan.copies = self.document_copies();

        debug!(
            artifacts = plan.artifacts.len(),
            fixtures = plan.fixtures.len(),
            anomalies = plan.anomalies.len(),
            "Planned project"
        );
        Ok(plan)
    }

    fn plan_api(&self, plan: &mut ProjectPlan, base: &TemplateContext, name: &str, api: &Api) -> anyhow::Result<()> {
        let capitalized = capitalize(name);
        let mut api_context = base.clone();
        api_context.insert("api_name".into(), json!(name));
        api_context.insert("capitalized_api_name".into(), json!(capitalized));
        api_context.insert("api_name_lowercase".into(), json!(name.to_lowercase()));
        api_context.insert("api".into(), serde_json::to_value(api)?);

        let java = &self.layout.java;
        let resources = &self.layout.resources;

        for scenario in &api.scenarios {
            let number = scenario.scenario_number;
            let request = self.plan_fixture(plan, name, scenario, BodyKind::Request);
            let response = self.plan_fixture(plan, name, scenario, BodyKind::Response);
            let context = scenario_context(&api_context, name, scenario, request, response)?;

            plan.artifacts.push(Artifact::new(
                resources.join("features").join(format!("{name}{number}.feature")),
                ids::FEATURE,
                context.clone(),
                OverwritePolicy::Always,
            ));
            plan.artifacts.push(Artifact::new(
                java.join("stepdefs")
                    .join("core")
                    .join(core_package(name, number))
                    .join(format!("_{}Stepdefs.java", runner_name(name, number))),
                ids::CORE_STEPDEFS,
                context.clone(),
                OverwritePolicy::Always,
            ));
            plan.artifacts.push(Artifact::new(
                java.join("stepdefs")
                    .join(format!("{}Stepdefs.java", runner_name(name, number))),
                ids::SCENARIO_STEPDEFS,
                context.clone(),
                OverwritePolicy::CreateOnlyIfAbsent,
            ));
            plan.artifacts.push(Artifact::new(
                java.join("runner")
                    .join(format!("{}.java", runner_class(name, number))),
                ids::RUNNER,
                context,
                OverwritePolicy::Always,
            ));
        }

        plan.artifacts.push(Artifact::new(
            java.join("stepdefs")
                .join("api")
                .join(format!("{capitalized}Stepdefs.java")),
            ids::API_STEPDEFS,
            api_context,
            OverwritePolicy::CreateOnlyIfAbsent,
        ));

        for environment in &api.environments {
            plan.artifacts.push(Artifact::new(
                environment_config_path(resources, name, environment),
                ids::ENVIRONMENT_CONFIG,
                environment_context(name, environment)?,
                OverwritePolicy::Always,
            ));
        }
        Ok(())
    }

    /// Plan the body fixture for one side of a scenario, returning its path
    /// relative to the resources directory.
    fn plan_fixture(&self, plan: &mut ProjectPlan, api_name: &str, scenario: &Scenario, kind: BodyKind) -> Option<String> {
        let (has_body, content_type) = match kind {
            BodyKind::Request => (scenario.has_request_body, &scenario.consumes),
            BodyKind::Response => (scenario.has_response_body, &scenario.produces),
        };
        if !has_body {
            return None;
        }
        let Some(format) = FixtureFormat::for_content_type(content_type) else {
            let anomaly = Anomaly {
                api_name: api_name.to_string(),
                scenario_number: scenario.scenario_number,
                kind,
                content_type: content_type.clone(),
            };
            warn!(api = api_name, scenario = scenario.scenario_number, "{anomaly}");
            plan.anomalies.push(anomaly);
            return None;
        };

        let relative = format!(
            "config/{}/{api_name}{}.{}",
            kind.as_str(),
            scenario.scenario_number,
            format.extension()
        );
        plan.fixtures.push(Fixture {
            path: self.layout.resources.join(&relative),
            kind,
            format,
        });
        Some(relative)
    }

    fn base_context(&self) -> TemplateContext {
        let format = self.settings.document_format();
        let mut context = Map::new();
        context.insert("group_id".into(), json!(self.settings.group_id));
        context.insert("artifact_id".into(), json!(self.settings.artifact_id));
        context.insert("base_package".into(), json!(self.settings.group_id));
        context.insert("config_format".into(), json!(format.extension()));
        context.insert("config_file".into(), json!(config_file_name(format.extension())));
        context
    }

    /// Two copies: one in `config/` next to the environment files, one at the
    /// classpath root so the generated loader can find it as a resource.
    fn document_copies(&self) -> Vec<DocumentCopy> {
        let file = config_file_name(self.settings.document_format().extension());
        [
            self.layout.resources.join("config").join(&file),
            self.layout.resources.join(&file),
        ]
        .into_iter()
        .map(|destination| DocumentCopy {
            source: self.settings.input_path.clone(),
            destination,
        })
        .collect()
    }
}

fn config_file_name(extension: &str) -> String {
    format!("test-config.{extension}")
}

fn scenario_context(
    api_context: &TemplateContext,
    api_name: &str,
    scenario: &Scenario,
    request_fixture: Option<String>,
    response_fixture: Option<String>,
) -> anyhow::Result<TemplateContext> {
    let number = scenario.scenario_number;
    let mut context = api_context.clone();
    context.insert("scenario".into(), serde_json::to_value(scenario)?);
    context.insert("scenario_number".into(), json!(number));
    context.insert("request_method".into(), json!(scenario.request_method.to_ascii_uppercase()));
    context.insert("runner_name".into(), json!(runner_name(api_name, number)));
    context.insert("runner_class".into(), json!(runner_class(api_name, number)));
    context.insert("core_package".into(), json!(core_package(api_name, number)));
    context.insert("request_fixture".into(), request_fixture.map_or(Value::Null, Value::from));
    context.insert("response_fixture".into(), response_fixture.map_or(Value::Null, Value::from));
    Ok(context)
}

/// Only the API name and the one environment: sibling environments and
/// scenarios never leak into an environment's properties file.
fn environment_context(api_name: &str, environment: &Environment) -> anyhow::Result<TemplateContext> {
    let mut context = Map::new();
    context.insert("api_name".into(), json!(api_name));
    context.insert("environment".into(), serde_json::to_value(environment)?);
    Ok(context)
}

/// `config/env/<api>/config-<env>.properties`; per-API directories keep
/// APIs with identically named environments from overwriting each other.
fn environment_config_path(resources: &Path, api_name: &str, environment: &Environment) -> PathBuf {
    resources
        .join("config")
        .join("env")
        .join(api_name)
        .join(format!("config-{}.properties", environment.name))
}
