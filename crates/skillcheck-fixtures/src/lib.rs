//! Test utilities and fixtures for skillcheck integration tests.
//!
//! This crate provides fluent builders and file helpers that cut boilerplate
//! when writing directive and discovery tests:
//!
//! - [`DirectiveRequestBuilder`] - partial directive requests
//! - [`CapabilityBuilder`] - capability declarations
//! - [`EndpointBuilder`] / [`ApplianceBuilder`] - discovered devices as JSON
//! - [`temp_dir`] - unique temporary directories
//! - [`write_json`] - serialize fixtures to files for CLI tests
//!
//! # Example
//!
//! ```ignore
//! use skillcheck_fixtures::{CapabilityBuilder, EndpointBuilder, temp_dir, write_json};
//!
//! let dir = temp_dir("discovery");
//! let endpoint = EndpointBuilder::new("lamp-1")
//!     .display_categories(&["LIGHT"])
//!     .capability(CapabilityBuilder::new("Alexa.PowerController").supported(&["powerState"]).build())
//!     .property_map(serde_json::json!({ "powerState": "item_power" }))
//!     .build();
//! write_json(&dir.join("actual.json"), &vec![endpoint]);
//! ```

// Test fixtures crate - relaxed lints for test utilities
#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::missing_panics_doc)]

pub mod builders;
pub mod helpers;

pub use builders::{ApplianceBuilder, CapabilityBuilder, DirectiveRequestBuilder, EndpointBuilder};
pub use helpers::{temp_dir, write_json};
