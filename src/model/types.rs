use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One deployment target a set of scenarios can run against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Environment {
    pub name: String,
    pub protocol: String,
    pub host: String,
    /// Signed so that a negative port in the document reaches the validator
    pub port: i64,
}

/// One HTTP request/response test case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scenario {
    /// `0` means "not set"; validation assigns a sequential number per API
    pub scenario_number: i64,
    pub request_method: String,
    pub context_path: String,
    pub produces: String,
    pub consumes: String,
    pub response_status: i64,
    pub has_request_body: bool,
    pub has_response_body: bool,
}

/// A named group of scenarios sharing a set of environments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Api {
    /// Declaration order is generation order
    pub scenarios: Vec<Scenario>,
    pub environments: Vec<Environment>,
}

/// Root of the input document: API name to [`Api`], in document order.
///
/// Serialized as a plain map. The entries are kept in a `Vec` rather than a
/// hash map so that runner lists in the generated project follow the order
/// the author wrote the APIs in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestConfig {
    entries: Vec<(String, Api)>,
}

impl TestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an API. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, api: Api) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = api,
            None => self.entries.push((name, api)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Api> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, api)| api)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Api)> {
        self.entries.iter().map(|(name, api)| (name.as_str(), api))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Api)> {
        self.entries
            .iter_mut()
            .map(|(name, api)| (name.as_str(), api))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of scenarios across all APIs.
    pub fn scenario_count(&self) -> usize {
        self.entries.iter().map(|(_, api)| api.scenarios.len()).sum()
    }

    /// Total number of environments across all APIs.
    pub fn environment_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, api)| api.environments.len())
            .sum()
    }
}

impl FromIterator<(String, Api)> for TestConfig {
    fn from_iter<I: IntoIterator<Item = (String, Api)>>(iter: I) -> Self {
        let mut config = TestConfig::new();
        for (name, api) in iter {
            config.insert(name, api);
        }
        config
    }
}

impl Serialize for TestConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, api) in &self.entries {
            map.serialize_entry(name, api)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TestConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedApis;

        impl<'de> Visitor<'de> for OrderedApis {
            type Value = TestConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of API names to API definitions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<TestConfig, A::Error> {
                let mut config = TestConfig::new();
                while let Some((name, api)) = access.next_entry::<String, Api>()? {
                    config.insert(name, api);
                }
                Ok(config)
            }
        }

        deserializer.deserialize_map(OrderedApis)
    }
}
