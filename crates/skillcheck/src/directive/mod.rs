//! Directive construction from partial requests.
//!
//! [`build_directive`] starts from a freshly allocated template on every call,
//! overlays the request group by group (header, endpoint, payload), then
//! normalizes the result for the requested payload version:
//!
//! - Version `"2"` moves the scope token into `payload.accessToken` and drops
//!   both `header.correlationToken` and `endpoint.scope`.
//! - Without an endpoint id the endpoint is dropped; a scope that survived the
//!   version step moves to `payload.scope`.
//!
//! The overlay is shallow. A supplied `scope` or `cookie` replaces the default
//! one wholesale instead of being merged into it.
//!
//! # Example
//!
//! ```no_run
//! use skillcheck::directive::build_directive;
//! use skillcheck::model::DirectiveRequest;
//!
//! let request: DirectiveRequest = serde_json::from_value(serde_json::json!({
//!     "header": { "namespace": "Alexa.PowerController", "name": "TurnOn" },
//!     "endpoint": { "endpointId": "endpoint-1" }
//! })).unwrap();
//! let directive = build_directive(&request);
//! assert_eq!(directive.endpoint.unwrap().endpoint_id, "endpoint-1");
//! ```

use crate::model::{
    Directive, DirectiveRequest, Endpoint, EndpointOverrides, Header, HeaderOverrides, Scope,
    LEGACY_PAYLOAD_VERSION,
};
use serde_json::{Map, Value};

/// Build a complete directive from a partial request.
///
/// Never fails: malformed requests pass through structurally and are left for
/// the assertion layer to judge.
#[must_use]
pub fn build_directive(request: &DirectiveRequest) -> Directive {
    let mut header = Header::default();
    overlay_header(&mut header, &request.header);

    let mut endpoint = EndpointDraft::default();
    overlay_endpoint(&mut endpoint, &request.endpoint);

    let mut payload = Map::new();
    payload.extend(request.payload.clone());

    if header.payload_version == LEGACY_PAYLOAD_VERSION {
        if let Some(token) = endpoint.scope.as_ref().and_then(|scope| scope.token.clone()) {
            payload.insert("accessToken".to_string(), Value::String(token));
        }
        header.correlation_token = None;
        endpoint.scope = None;
    }

    let endpoint = match endpoint.endpoint_id {
        Some(endpoint_id) => Some(Endpoint {
            endpoint_id,
            cookie: endpoint.cookie,
            scope: endpoint.scope,
            extra: endpoint.extra,
        }),
        None => {
            if let Some(scope) = endpoint.scope {
                payload.insert("scope".to_string(), Value::from(scope));
            }
            None
        }
    };

    tracing::debug!(
        namespace = header.namespace.as_deref().unwrap_or(""),
        name = header.name.as_deref().unwrap_or(""),
        payload_version = %header.payload_version,
        has_endpoint = endpoint.is_some(),
        "built directive"
    );

    Directive {
        header,
        endpoint,
        payload,
    }
}

impl Directive {
    /// Wrap the directive in the `{"directive": ...}` envelope a skill
    /// handler receives.
    #[must_use]
    pub fn to_event(&self) -> Value {
        serde_json::json!({ "directive": self })
    }
}

/// Endpoint section before the endpoint-id check decides whether it survives.
struct EndpointDraft {
    endpoint_id: Option<String>,
    cookie: Map<String, Value>,
    scope: Option<Scope>,
    extra: Map<String, Value>,
}

impl Default for EndpointDraft {
    fn default() -> Self {
        Self {
            endpoint_id: None,
            cookie: Map::new(),
            scope: Some(Scope::default()),
            extra: Map::new(),
        }
    }
}

fn overlay_header(header: &mut Header, overrides: &HeaderOverrides) {
    if let Some(namespace) = &overrides.namespace {
        header.namespace = Some(namespace.clone());
    }
    if let Some(name) = &overrides.name {
        header.name = Some(name.clone());
    }
    if let Some(message_id) = &overrides.message_id {
        header.message_id = message_id.clone();
    }
    if let Some(token) = &overrides.correlation_token {
        header.correlation_token = Some(token.clone());
    }
    if let Some(version) = &overrides.payload_version {
        header.payload_version = version.clone();
    }
    header.extra.extend(overrides.extra.clone());
}

fn overlay_endpoint(endpoint: &mut EndpointDraft, overrides: &EndpointOverrides) {
    if let Some(endpoint_id) = &overrides.endpoint_id {
        endpoint.endpoint_id = Some(endpoint_id.clone());
    }
    if let Some(cookie) = &overrides.cookie {
        endpoint.cookie = cookie.clone();
    }
    if let Some(scope) = &overrides.scope {
        endpoint.scope = Some(scope.clone());
    }
    endpoint.extra.extend(overrides.extra.clone());
}
