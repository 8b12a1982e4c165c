//! Agent descriptor type definitions.
//!
//! This module contains the descriptor records that describe one demo agent's
//! identity, endpoint and capabilities, together with their validation rules.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::capability::Capabilities;

static DID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^did:[a-z0-9]+:\S+$").expect("Invalid DID regex"));

const ENDPOINT_SCHEMES: [&str; 3] = ["http://", "https://", "ws://"];

/// Role of an agent within the multi-agent system.
///
/// Unknown role strings are kept verbatim in `Other` so they survive a
/// load/serialize cycle and can be reported when skipped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AgentType {
    /// Root agent that routes requests to specialists
    Orchestrator,
    /// Sub-agent keyed by its `capabilities["type"]`
    Specialist,
    /// Any other role tag
    Other(String),
}

impl AgentType {
    /// Returns a string representation of the agent type
    pub fn as_str(&self) -> &str {
        match self {
            AgentType::Orchestrator => "orchestrator",
            AgentType::Specialist => "specialist",
            AgentType::Other(tag) => tag,
        }
    }
}

impl From<String> for AgentType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "orchestrator" => AgentType::Orchestrator,
            "specialist" => AgentType::Specialist,
            _ => AgentType::Other(tag),
        }
    }
}

impl From<&str> for AgentType {
    fn from(tag: &str) -> Self {
        AgentType::from(tag.to_string())
    }
}

impl From<AgentType> for String {
    fn from(agent_type: AgentType) -> Self {
        agent_type.as_str().to_string()
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SAGE protocol settings advertised by an agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolConfig {
    pub protocol_version: String,
    pub signature_algorithm: String,
    pub verification_method: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub required_verification: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            protocol_version: "1.0.0".to_string(),
            signature_algorithm: "ed25519".to_string(),
            verification_method: "rfc9421".to_string(),
            required_verification: false,
        }
    }
}

/// Static description of a single agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDescriptor {
    pub name: String,
    pub did: String,
    pub description: String,
    pub version: String,
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    pub endpoint: String,
    #[serde(rename = "publicKey")]
    pub public_key: String,
    #[serde(default)]
    pub capabilities: Capabilities,
    #[serde(rename = "sage", default)]
    pub protocol: ProtocolConfig,
}

impl AgentDescriptor {
    /// Validate the descriptor's identity fields
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::InvalidName(
                "name cannot be empty".to_string(),
            ));
        }

        if self.name.chars().any(char::is_control) {
            return Err(ValidationError::InvalidName(format!(
                "{:?} contains control characters",
                self.name
            )));
        }

        if !DID_PATTERN.is_match(&self.did) {
            return Err(ValidationError::InvalidDid(format!(
                "'{}' for agent '{}' is not of the form did:<method>:<id>",
                self.did, self.name
            )));
        }

        if !ENDPOINT_SCHEMES
            .iter()
            .any(|scheme| self.endpoint.len() > scheme.len() && self.endpoint.starts_with(scheme))
        {
            return Err(ValidationError::InvalidEndpoint(format!(
                "'{}' for agent '{}' must be an http, https or ws URL",
                self.endpoint, self.name
            )));
        }

        if self.version.trim().is_empty() {
            return Err(ValidationError::InvalidVersion(format!(
                "version cannot be empty for agent '{}'",
                self.name
            )));
        }

        Ok(())
    }
}

/// Descriptor validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid agent name: {0}")]
    InvalidName(String),
    #[error("Invalid DID: {0}")]
    InvalidDid(String),
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("Invalid version: {0}")]
    InvalidVersion(String),
}
