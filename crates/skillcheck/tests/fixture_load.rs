// Test module - relaxed lint rules
#![allow(clippy::indexing_slicing)]
#![allow(clippy::panic)]
#![allow(clippy::manual_assert)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(missing_docs)]

//! Fixture files and discovery response extraction.

use serde_json::{json, Value};
use skillcheck::fixture::{discovered_entities, load_directive_request, load_fixture_file};
use skillcheck::model::DiscoveryKind;
use skillcheck::{build_directive, ErrorCode};
use std::fs;

#[test]
fn loads_json_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expected.json");
    fs::write(&path, r#"{"endpoint-1": {"displayCategories": ["LIGHT"]}}"#).unwrap();

    let value: Value = load_fixture_file(&path).unwrap();
    assert_eq!(value["endpoint-1"]["displayCategories"], json!(["LIGHT"]));
}

#[test]
fn loads_yaml_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expected.yaml");
    fs::write(
        &path,
        "endpoint-1:\n  displayCategories:\n    - LIGHT\n  propertyMap:\n    power: item_power\n",
    )
    .unwrap();

    let value: Value = load_fixture_file(&path).unwrap();
    assert_eq!(value["endpoint-1"]["propertyMap"], json!({ "power": "item_power" }));
}

#[test]
fn directive_request_from_yaml_builds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("request.yml");
    fs::write(
        &path,
        "header:\n  namespace: Alexa.PowerController\n  name: TurnOn\n  payloadVersion: \"3\"\nendpoint:\n  endpointId: endpoint-1\n",
    )
    .unwrap();

    let request = load_directive_request(&path).unwrap();
    let directive = build_directive(&request);
    assert_eq!(directive.endpoint.unwrap().endpoint_id, "endpoint-1");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_fixture_file::<Value>(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::Io);
}

#[test]
fn malformed_json_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{").unwrap();

    let err = load_fixture_file::<Value>(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::Decode);
}

#[test]
fn endpoints_extracted_from_discovery_response() {
    let response = json!({
        "event": {
            "header": { "namespace": "Alexa.Discovery", "name": "Discover.Response" },
            "payload": { "endpoints": [{ "endpointId": "a" }, { "endpointId": "b" }] }
        }
    });

    let endpoints = discovered_entities(DiscoveryKind::Endpoints, &response).unwrap();
    assert_eq!(endpoints.len(), 2);
}

#[test]
fn appliances_extracted_from_legacy_response() {
    let response = json!({
        "header": { "name": "DiscoverAppliancesResponse" },
        "payload": { "discoveredAppliances": [{ "applianceId": "a" }] }
    });

    let appliances = discovered_entities(DiscoveryKind::Appliances, &response).unwrap();
    assert_eq!(appliances, vec![json!({ "applianceId": "a" })]);
}

#[test]
fn bare_list_is_taken_as_is() {
    let list = json!([{ "endpointId": "a" }]);
    assert_eq!(discovered_entities(DiscoveryKind::Endpoints, &list).unwrap().len(), 1);
}

#[test]
fn response_without_devices_is_decode_error() {
    let response = json!({ "event": { "payload": {} } });
    let err = discovered_entities(DiscoveryKind::Endpoints, &response).unwrap_err();
    assert_eq!(err.code, ErrorCode::Decode);
}
