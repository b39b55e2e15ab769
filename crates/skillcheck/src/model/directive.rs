use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_MESSAGE_ID: &str = "message-id";
pub const DEFAULT_CORRELATION_TOKEN: &str = "correlation-token";
pub const DEFAULT_PAYLOAD_VERSION: &str = "3";
/// Payload version of the legacy appliance schema.
pub const LEGACY_PAYLOAD_VERSION: &str = "2";
pub const DEFAULT_SCOPE_TYPE: &str = "BearerToken";
pub const DEFAULT_ACCESS_TOKEN: &str = "access-token-from-skill";

/// A complete directive as sent to the skill under test.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Directive {
    pub header: Header,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Endpoint>,
    #[serde(default)]
    pub payload: Map<String, Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub namespace: Option<String>,
    pub name: Option<String>,
    pub message_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_token: Option<String>,
    pub payload_version: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            namespace: None,
            name: None,
            message_id: DEFAULT_MESSAGE_ID.to_string(),
            correlation_token: Some(DEFAULT_CORRELATION_TOKEN.to_string()),
            payload_version: DEFAULT_PAYLOAD_VERSION.to_string(),
            extra: Map::new(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub endpoint_id: String,
    #[serde(default)]
    pub cookie: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Authorization scope attached to a directive.
///
/// Both fields are optional because a request may replace the default scope
/// with a partial one.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Scope {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub scope_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Scope {
    fn default() -> Self {
        Self {
            scope_type: Some(DEFAULT_SCOPE_TYPE.to_string()),
            token: Some(DEFAULT_ACCESS_TOKEN.to_string()),
            extra: Map::new(),
        }
    }
}

impl From<Scope> for Value {
    fn from(scope: Scope) -> Self {
        let mut object = Map::new();
        if let Some(scope_type) = scope.scope_type {
            object.insert("type".to_string(), Value::String(scope_type));
        }
        if let Some(token) = scope.token {
            object.insert("token".to_string(), Value::String(token));
        }
        object.extend(scope.extra);
        Value::Object(object)
    }
}

/// A partial directive. Every field left out keeps its template default.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DirectiveRequest {
    #[serde(default)]
    pub header: HeaderOverrides,
    #[serde(default)]
    pub endpoint: EndpointOverrides,
    #[serde(default)]
    pub payload: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeaderOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_version: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EndpointOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
