//! Flat views over an endpoint's capability declarations.

use crate::model::Capability;
use serde_json::{Map, Value};

/// List the namespaces a capability list covers, in declaration order.
///
/// A capability with supported properties contributes one
/// `"<interface>.<property>"` entry per property; one without contributes its
/// bare interface name. Duplicates in the input stay duplicated.
#[must_use]
pub fn capability_namespaces(capabilities: &[Capability]) -> Vec<String> {
    let mut namespaces = Vec::new();
    for capability in capabilities {
        let before = namespaces.len();
        namespaces.extend(
            capability
                .supported_names()
                .map(|name| format!("{}.{name}", capability.interface)),
        );
        if namespaces.len() == before {
            namespaces.push(capability.interface.clone());
        }
    }
    namespaces
}

/// Map `"<interface>.<field>"` to the field's value for every top-level
/// capability field except `properties`.
///
/// `interface` itself is included. When two capabilities produce the same
/// key the later one wins.
#[must_use]
pub fn capability_parameters(capabilities: &[Capability]) -> Map<String, Value> {
    let mut parameters = Map::new();
    for capability in capabilities {
        let interface = &capability.interface;
        parameters.insert(
            format!("{interface}.interface"),
            Value::String(interface.clone()),
        );
        for (field, value) in &capability.fields {
            parameters.insert(format!("{interface}.{field}"), value.clone());
        }
    }
    parameters
}
