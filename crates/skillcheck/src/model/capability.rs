use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One interface a discovered endpoint declares.
///
/// `fields` holds every top-level field besides `interface` and `properties`
/// (`type`, `version`, `proactivelyReported`, ...).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Capability {
    pub interface: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<CapabilityProperties>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Capability {
    #[must_use]
    pub fn new(interface: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            properties: None,
            fields: Map::new(),
        }
    }

    /// Names of the supported properties, empty when none are declared.
    pub fn supported_names(&self) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .flat_map(|properties| properties.supported.iter())
            .map(|property| property.name.as_str())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CapabilityProperties {
    #[serde(default)]
    pub supported: Vec<SupportedProperty>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SupportedProperty {
    pub name: String,
}
