use anyhow::Context;
use minijinja::{AutoEscape, Environment};
use serde_json::{Map, Value};

/// Key-value context handed to a template.
pub type TemplateContext = Map<String, Value>;

/// Renders a template identified by id against a context.
///
/// The generator only depends on this trait; [`EmbeddedTemplates`] is the
/// implementation used by the CLI. Tests substitute their own engines to
/// exercise failure handling.
pub trait TemplateEngine {
    /// # Errors
    ///
    /// Returns an error for an unknown template id or a rendering failure.
    fn render(&self, template_id: &str, context: &TemplateContext) -> anyhow::Result<String>;
}

/// Template ids, named after the files they produce.
pub mod ids {
    pub const POM: &str = "pom.xml";
    pub const GITIGNORE: &str = "gitignore";
    pub const LOGBACK: &str = "resources/logback.xml";
    pub const KLOV: &str = "resources/klov.properties";
    pub const EXTENT_CONFIG: &str = "resources/extent-config.xml";
    pub const EXTENT_PROPERTIES: &str = "resources/extent.properties";
    pub const TESTNG: &str = "testng.xml";
    pub const FEATURE: &str = "resources/features/scenario.feature";
    pub const ENVIRONMENT_CONFIG: &str = "resources/config/env/config.properties";
    pub const BASE_STEPDEFS: &str = "java/base/BaseStepdefs.java";
    pub const CONFIG_LOADER: &str = "java/config/Config.java";
    pub const DATA_API: &str = "java/data/Api.java";
    pub const DATA_ENVIRONMENT: &str = "java/data/Environment.java";
    pub const DATA_PAIR: &str = "java/data/Pair.java";
    pub const DATA_SCENARIO: &str = "java/data/Scenario.java";
    pub const DATA_TEST_CONFIG: &str = "java/data/TestConfig.java";
    pub const API_STEPDEFS: &str = "java/stepdefs/ApiStepdefs.java";
    pub const CORE_STEPDEFS: &str = "java/stepdefs/core/CoreStepdefs.java";
    pub const SCENARIO_STEPDEFS: &str = "java/stepdefs/ScenarioStepdefs.java";
    pub const RUNNER: &str = "java/runner/RunCukeIT.java";
}

macro_rules! embedded {
    ($($id:path => $file:literal),* $(,)?) => {
        &[$(($id, include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $file)))),*]
    };
}

/// Every template compiled into the binary, by id.
pub const TEMPLATES: &[(&str, &str)] = embedded![
    ids::POM => "pom.xml.j2",
    ids::GITIGNORE => "gitignore.j2",
    ids::LOGBACK => "resources/logback.xml.j2",
    ids::KLOV => "resources/klov.properties.j2",
    ids::EXTENT_CONFIG => "resources/extent-config.xml.j2",
    ids::EXTENT_PROPERTIES => "resources/extent.properties.j2",
    ids::TESTNG => "testng.xml.j2",
    ids::FEATURE => "resources/features/scenario.feature.j2",
    ids::ENVIRONMENT_CONFIG => "resources/config/env/config.properties.j2",
    ids::BASE_STEPDEFS => "java/base/BaseStepdefs.java.j2",
    ids::CONFIG_LOADER => "java/config/Config.java.j2",
    ids::DATA_API => "java/data/Api.java.j2",
    ids::DATA_ENVIRONMENT => "java/data/Environment.java.j2",
    ids::DATA_PAIR => "java/data/Pair.java.j2",
    ids::DATA_SCENARIO => "java/data/Scenario.java.j2",
    ids::DATA_TEST_CONFIG => "java/data/TestConfig.java.j2",
    ids::API_STEPDEFS => "java/stepdefs/ApiStepdefs.java.j2",
    ids::CORE_STEPDEFS => "java/stepdefs/core/CoreStepdefs.java.j2",
    ids::SCENARIO_STEPDEFS => "java/stepdefs/ScenarioStepdefs.java.j2",
    ids::RUNNER => "java/runner/RunCukeIT.java.j2",
];

/// Templates from `templates/`, compiled into the binary and rendered with minijinja.
pub struct EmbeddedTemplates {
    env: Environment<'static>,
}

impl EmbeddedTemplates {
    /// Parse every embedded template.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first template with a syntax error.
    pub fn new() -> anyhow::Result<Self> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        // Output is Java, XML and properties; values are identifiers and
        // content types, never markup to escape.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        for &(id, source) in TEMPLATES {
            env.add_template(id, source)
                .with_context(|| format!("Failed to parse template {id}"))?;
        }
        Ok(Self { env })
    }

    /// Ids of all available templates.
    pub fn template_ids(&self) -> impl Iterator<Item = &'static str> {
        TEMPLATES.iter().map(|(id, _)| *id)
    }
}

impl TemplateEngine for EmbeddedTemplates {
    fn render(&self, template_id: &str, context: &TemplateContext) -> anyhow::Result<String> {
        let template = self
            .env
            .get_template(template_id)
            .with_context(|| format!("Unknown template: {template_id}"))?;
        template
            .render(context)
            .with_context(|| format!("Failed to render template {template_id}"))
    }
}
