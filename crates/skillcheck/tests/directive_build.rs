// Test module - relaxed lint rules
#![allow(clippy::indexing_slicing)]
#![allow(clippy::panic)]
#![allow(clippy::manual_assert)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(missing_docs)]

//! Directive construction and version normalization.

use serde_json::{json, Value};
use skillcheck::directive::build_directive;
use skillcheck::model::{
    DirectiveRequest, DEFAULT_ACCESS_TOKEN, DEFAULT_CORRELATION_TOKEN, DEFAULT_MESSAGE_ID,
};

fn request(value: Value) -> DirectiveRequest {
    serde_json::from_value(value).expect("valid directive request")
}

#[test]
fn power_controller_turn_on_keeps_endpoint_and_scope() {
    let directive = build_directive(&request(json!({
        "header": {
            "namespace": "Alexa.PowerController",
            "name": "TurnOn",
            "payloadVersion": "3"
        },
        "endpoint": { "endpointId": "endpoint-1" },
        "payload": {}
    })));

    let endpoint = directive.endpoint.expect("endpoint should be present");
    assert_eq!(endpoint.endpoint_id, "endpoint-1");
    let scope = endpoint.scope.expect("scope should be present");
    assert_eq!(scope.token.as_deref(), Some("access-token-from-skill"));
    assert_eq!(scope.scope_type.as_deref(), Some("BearerToken"));
    assert_eq!(directive.header.namespace.as_deref(), Some("Alexa.PowerController"));
    assert_eq!(directive.header.name.as_deref(), Some("TurnOn"));
}

#[test]
fn version_three_keeps_correlation_token_and_no_access_token() {
    let directive = build_directive(&request(json!({
        "header": { "namespace": "Alexa", "name": "ReportState" },
        "endpoint": { "endpointId": "lamp" }
    })));

    assert_eq!(directive.header.payload_version, "3");
    assert_eq!(
        directive.header.correlation_token.as_deref(),
        Some(DEFAULT_CORRELATION_TOKEN)
    );
    assert_eq!(directive.header.message_id, DEFAULT_MESSAGE_ID);
    assert!(directive.payload.get("accessToken").is_none());
    assert!(directive.payload.get("scope").is_none());
}

#[test]
fn version_two_moves_token_into_payload() {
    let directive = build_directive(&request(json!({
        "header": {
            "namespace": "Alexa.ConnectedHome.Control",
            "name": "TurnOnRequest",
            "payloadVersion": "2"
        },
        "endpoint": {
            "endpointId": "switch-1",
            "scope": { "type": "BearerToken", "token": "legacy-token" }
        },
        "payload": { "appliance": { "applianceId": "switch-1" } }
    })));

    assert!(directive.header.correlation_token.is_none());
    let endpoint = directive.endpoint.expect("endpoint kept when id is set");
    assert!(endpoint.scope.is_none());
    assert_eq!(directive.payload["accessToken"], json!("legacy-token"));
    assert_eq!(directive.payload["appliance"], json!({ "applianceId": "switch-1" }));
}

#[test]
fn version_two_without_endpoint_id_leaves_no_scope_anywhere() {
    let directive = build_directive(&request(json!({
        "header": {
            "namespace": "Alexa.ConnectedHome.Discovery",
            "name": "DiscoverAppliancesRequest",
            "payloadVersion": "2"
        }
    })));

    assert!(directive.endpoint.is_none());
    assert!(directive.payload.get("scope").is_none());
    assert_eq!(directive.payload["accessToken"], json!(DEFAULT_ACCESS_TOKEN));
}

#[test]
fn missing_endpoint_id_moves_scope_into_payload() {
    let directive = build_directive(&request(json!({
        "header": { "namespace": "Alexa.Discovery", "name": "Discover" },
        "payload": {}
    })));

    assert!(directive.endpoint.is_none());
    assert_eq!(
        directive.payload["scope"],
        json!({ "type": "BearerToken", "token": "access-token-from-skill" })
    );
}

#[test]
fn supplied_scope_replaces_default_scope_wholesale() {
    let directive = build_directive(&request(json!({
        "header": { "namespace": "Alexa.Discovery", "name": "Discover" },
        "endpoint": { "scope": { "token": "custom" } }
    })));

    assert_eq!(directive.payload["scope"], json!({ "token": "custom" }));
}

#[test]
fn supplied_cookie_replaces_default_cookie() {
    let directive = build_directive(&request(json!({
        "endpoint": {
            "endpointId": "thermostat",
            "cookie": { "propertyMap": "{\"temperature\":\"t1\"}" }
        }
    })));

    let endpoint = directive.endpoint.expect("endpoint");
    assert_eq!(
        Value::Object(endpoint.cookie),
        json!({ "propertyMap": "{\"temperature\":\"t1\"}" })
    );
}

#[test]
fn every_call_starts_from_a_fresh_template() {
    let first = build_directive(&request(json!({
        "header": { "correlationToken": "first-token", "payloadVersion": "2" },
        "endpoint": { "endpointId": "a", "cookie": { "k": "v" } },
        "payload": { "extra": true }
    })));
    assert!(first.header.correlation_token.is_none());

    let second = build_directive(&request(json!({})));
    assert_eq!(
        second.header.correlation_token.as_deref(),
        Some(DEFAULT_CORRELATION_TOKEN)
    );
    assert_eq!(second.header.payload_version, "3");
    assert!(second.payload.get("extra").is_none());
    assert!(second.payload.get("accessToken").is_none());
    assert_eq!(
        second.payload["scope"],
        json!({ "type": "BearerToken", "token": DEFAULT_ACCESS_TOKEN })
    );
}

#[test]
fn unknown_header_and_endpoint_fields_pass_through() {
    let directive = build_directive(&request(json!({
        "header": { "namespace": "Alexa.ModeController", "name": "SetMode", "instance": "Wash.Mode" },
        "endpoint": { "endpointId": "washer", "region": "eu" }
    })));

    let value = serde_json::to_value(&directive).unwrap();
    assert_eq!(value["header"]["instance"], json!("Wash.Mode"));
    assert_eq!(value["endpoint"]["region"], json!("eu"));
}

#[test]
fn serialized_directive_uses_wire_field_names() {
    let directive = build_directive(&request(json!({
        "endpoint": { "endpointId": "endpoint-1" }
    })));

    let value = serde_json::to_value(&directive).unwrap();
    assert_eq!(
        value,
        json!({
            "header": {
                "namespace": null,
                "name": null,
                "messageId": "message-id",
                "correlationToken": "correlation-token",
                "payloadVersion": "3"
            },
            "endpoint": {
                "endpointId": "endpoint-1",
                "cookie": {},
                "scope": { "type": "BearerToken", "token": "access-token-from-skill" }
            },
            "payload": {}
        })
    );
}

#[test]
fn legacy_directive_serializes_without_correlation_token_or_endpoint() {
    let directive = build_directive(&request(json!({
        "header": { "payloadVersion": "2" }
    })));

    let value = serde_json::to_value(&directive).unwrap();
    assert!(value["header"].get("correlationToken").is_none());
    assert!(value.get("endpoint").is_none());
}

#[test]
fn event_envelope_wraps_directive() {
    let directive = build_directive(&request(json!({
        "header": { "namespace": "Alexa.PowerController", "name": "TurnOff" },
        "endpoint": { "endpointId": "endpoint-1" }
    })));

    let event = directive.to_event();
    assert_eq!(event["directive"]["header"]["name"], json!("TurnOff"));
    assert_eq!(event["directive"]["endpoint"]["endpointId"], json!("endpoint-1"));
}
