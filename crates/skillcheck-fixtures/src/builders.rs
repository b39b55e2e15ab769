//! Fluent builder APIs for constructing test fixtures.
//!
//! These builders reduce boilerplate when creating directive requests and
//! discovered devices in integration tests.
//!
//! # Example
//!
//! ```ignore
//! use skillcheck_fixtures::{ApplianceBuilder, DirectiveRequestBuilder};
//!
//! let request = DirectiveRequestBuilder::new("Alexa.ConnectedHome.Control", "TurnOnRequest")
//!     .payload_version("2")
//!     .endpoint_id("switch-1")
//!     .build();
//!
//! let appliance = ApplianceBuilder::new("switch-1")
//!     .actions(&["turnOn", "turnOff"])
//!     .appliance_types(&["SWITCH"])
//!     .build();
//! ```

use serde_json::{Map, Value};
use skillcheck::model::{
    Capability, CapabilityProperties, DirectiveRequest, Scope, SupportedProperty,
    DEFAULT_SCOPE_TYPE,
};

fn string_list(items: &[&str]) -> Value {
    Value::Array(items.iter().map(|item| Value::String((*item).to_string())).collect())
}

// ============================================================================
// DirectiveRequestBuilder
// ============================================================================

/// Fluent builder for [`DirectiveRequest`] objects.
///
/// Only the fields you set end up in the request; everything else keeps the
/// directive template default when the request is built into a directive.
#[derive(Debug, Clone, Default)]
pub struct DirectiveRequestBuilder {
    request: DirectiveRequest,
}

impl DirectiveRequestBuilder {
    #[must_use]
    pub fn new(namespace: &str, name: &str) -> Self {
        let mut request = DirectiveRequest::default();
        request.header.namespace = Some(namespace.to_string());
        request.header.name = Some(name.to_string());
        Self { request }
    }

    #[must_use]
    pub fn payload_version(mut self, version: &str) -> Self {
        self.request.header.payload_version = Some(version.to_string());
        self
    }

    #[must_use]
    pub fn message_id(mut self, message_id: &str) -> Self {
        self.request.header.message_id = Some(message_id.to_string());
        self
    }

    #[must_use]
    pub fn correlation_token(mut self, token: &str) -> Self {
        self.request.header.correlation_token = Some(token.to_string());
        self
    }

    #[must_use]
    pub fn endpoint_id(mut self, endpoint_id: &str) -> Self {
        self.request.endpoint.endpoint_id = Some(endpoint_id.to_string());
        self
    }

    /// Replace the default scope with a bearer token scope.
    #[must_use]
    pub fn token(mut self, token: &str) -> Self {
        self.request.endpoint.scope = Some(Scope {
            scope_type: Some(DEFAULT_SCOPE_TYPE.to_string()),
            token: Some(token.to_string()),
            extra: Map::new(),
        });
        self
    }

    #[must_use]
    pub fn cookie(mut self, key: &str, value: Value) -> Self {
        self.request
            .endpoint
            .cookie
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value);
        self
    }

    #[must_use]
    pub fn payload(mut self, key: &str, value: Value) -> Self {
        self.request.payload.insert(key.to_string(), value);
        self
    }

    #[must_use]
    pub fn build(self) -> DirectiveRequest {
        self.request
    }
}

// ============================================================================
// CapabilityBuilder
// ============================================================================

/// Fluent builder for [`Capability`] declarations.
///
/// Starts as an `AlexaInterface` at version `"3"` with no properties.
#[derive(Debug, Clone)]
pub struct CapabilityBuilder {
    capability: Capability,
}

impl CapabilityBuilder {
    #[must_use]
    pub fn new(interface: &str) -> Self {
        let mut capability = Capability::new(interface);
        capability
            .fields
            .insert("type".to_string(), Value::String("AlexaInterface".to_string()));
        capability
            .fields
            .insert("version".to_string(), Value::String("3".to_string()));
        Self { capability }
    }

    /// Declare supported properties, appending to any declared earlier.
    #[must_use]
    pub fn supported(mut self, names: &[&str]) -> Self {
        let properties = self
            .capability
            .properties
            .get_or_insert_with(CapabilityProperties::default);
        properties
            .supported
            .extend(names.iter().map(|name| SupportedProperty {
                name: (*name).to_string(),
            }));
        self
    }

    #[must_use]
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.capability.fields.insert(key.to_string(), value);
        self
    }

    #[must_use]
    pub fn build(self) -> Capability {
        self.capability
    }
}

// ============================================================================
// EndpointBuilder
// ============================================================================

/// Fluent builder for discovered endpoints (payload version 3) as JSON.
#[derive(Debug, Clone)]
pub struct EndpointBuilder {
    endpoint: Map<String, Value>,
    capabilities: Vec<Value>,
    cookie: Map<String, Value>,
}

impl EndpointBuilder {
    /// Defaults: friendly name equal to the id, no categories, no
    /// capabilities, empty cookie.
    #[must_use]
    pub fn new(endpoint_id: &str) -> Self {
        let mut endpoint = Map::new();
        endpoint.insert("endpointId".to_string(), Value::String(endpoint_id.to_string()));
        endpoint.insert("friendlyName".to_string(), Value::String(endpoint_id.to_string()));
        endpoint.insert("displayCategories".to_string(), Value::Array(Vec::new()));
        Self {
            endpoint,
            capabilities: Vec::new(),
            cookie: Map::new(),
        }
    }

    #[must_use]
    pub fn display_categories(mut self, categories: &[&str]) -> Self {
        self.endpoint
            .insert("displayCategories".to_string(), string_list(categories));
        self
    }

    #[must_use]
    pub fn capability(mut self, capability: Capability) -> Self {
        self.capabilities
            .push(serde_json::to_value(capability).expect("capability serializes"));
        self
    }

    /// Store `property_map` JSON-encoded under `cookie.propertyMap`.
    #[must_use]
    pub fn property_map(mut self, property_map: Value) -> Self {
        self.cookie.insert(
            "propertyMap".to_string(),
            Value::String(property_map.to_string()),
        );
        self
    }

    #[must_use]
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.endpoint.insert(key.to_string(), value);
        self
    }

    #[must_use]
    pub fn build(self) -> Value {
        let mut endpoint = self.endpoint;
        endpoint.insert("cookie".to_string(), Value::Object(self.cookie));
        endpoint.insert("capabilities".to_string(), Value::Array(self.capabilities));
        Value::Object(endpoint)
    }
}

// ============================================================================
// ApplianceBuilder
// ============================================================================

/// Fluent builder for discovered appliances (payload version 2) as JSON.
#[derive(Debug, Clone)]
pub struct ApplianceBuilder {
    appliance: Map<String, Value>,
    details: Map<String, Value>,
}

impl ApplianceBuilder {
    /// Defaults: reachable, friendly name equal to the id, no actions or
    /// types, empty details.
    #[must_use]
    pub fn new(appliance_id: &str) -> Self {
        let mut appliance = Map::new();
        appliance.insert("applianceId".to_string(), Value::String(appliance_id.to_string()));
        appliance.insert("friendlyName".to_string(), Value::String(appliance_id.to_string()));
        appliance.insert("isReachable".to_string(), Value::Bool(true));
        appliance.insert("actions".to_string(), Value::Array(Vec::new()));
        appliance.insert("applianceTypes".to_string(), Value::Array(Vec::new()));
        Self {
            appliance,
            details: Map::new(),
        }
    }

    #[must_use]
    pub fn actions(mut self, actions: &[&str]) -> Self {
        self.appliance
            .insert("actions".to_string(), string_list(actions));
        self
    }

    #[must_use]
    pub fn appliance_types(mut self, types: &[&str]) -> Self {
        self.appliance
            .insert("applianceTypes".to_string(), string_list(types));
        self
    }

    #[must_use]
    pub fn detail(mut self, key: &str, value: &str) -> Self {
        self.details
            .insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    #[must_use]
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.appliance.insert(key.to_string(), value);
        self
    }

    #[must_use]
    pub fn build(self) -> Value {
        let mut appliance = self.appliance;
        appliance.insert(
            "additionalApplianceDetails".to_string(),
            Value::Object(self.details),
        );
        Value::Object(appliance)
    }
}
