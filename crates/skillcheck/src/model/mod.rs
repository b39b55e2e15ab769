pub mod capability;
pub mod directive;

pub use capability::{Capability, CapabilityProperties, SupportedProperty};
pub use directive::*;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Expected records keyed by device id (`applianceId` or `endpointId`).
pub type ResultsById = Map<String, Value>;

/// Serializable projection of a [`crate::error::CheckError`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorInfo {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

/// Which schema generation a discovery response belongs to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryKind {
    /// Payload version 2: `discoveredAppliances`.
    Appliances,
    /// Payload version 3: `endpoints`.
    Endpoints,
}

impl DiscoveryKind {
    #[must_use]
    pub const fn id_field(self) -> &'static str {
        match self {
            Self::Appliances => "applianceId",
            Self::Endpoints => "endpointId",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Appliances => "appliances",
            Self::Endpoints => "endpoints",
        }
    }
}
