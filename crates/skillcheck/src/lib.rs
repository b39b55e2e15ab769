//! Skillcheck: fixtures and assertions for smart-home skill tests.
//!
//! This crate prepares directive requests for a device-control skill and judges
//! the skill's responses against partial expected fixtures. It covers both
//! schema generations: the legacy appliance schema (payload version 2) and the
//! endpoint/capability schema (payload version 3).
//!
//! Comparisons are deliberately lenient where the fixtures are: expected
//! records describe the checks to run, and anything the actual value carries
//! beyond them is ignored.

#![forbid(unsafe_code)]

pub mod assertions;
pub mod capability;
pub mod compare;
pub mod directive;
pub mod error;
pub mod fixture;
pub mod model;

pub use crate::assertions::{
    assert_captured_calls, assert_captured_result, assert_discovered_appliances,
    assert_discovered_endpoints,
};
pub use crate::capability::{capability_namespaces, capability_parameters};
pub use crate::compare::{matches_exact, matches_partial};
pub use crate::directive::build_directive;
pub use crate::error::{CheckError, CheckResult, ErrorCode};
pub use crate::model::*;
