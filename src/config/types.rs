//! Exported configuration types.
//!
//! These mirror the document consumed by the agent registration tooling:
//!
//! ```json
//! {
//!   "agents": { "<key>": { "did": "...", "key_file": "keys/<key>_agent.key", ... } },
//!   "network": { "chain": "ethereum", "confirmation_blocks": 3, "gas_limit": 500000 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::agent::keys::key_file_path;
use crate::agent::{AgentDescriptor, AgentType, Capabilities};

/// Configuration view of one agent, as exported under its agent key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedAgentConfig {
    pub did: String,
    pub name: String,
    pub description: String,
    pub endpoint: String,
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    pub capabilities: Capabilities,
    pub key_file: String,
}

impl ExportedAgentConfig {
    /// Build the exported view of `agent` under `agent_key`
    pub fn from_descriptor(agent: &AgentDescriptor, agent_key: &str) -> Self {
        Self {
            did: agent.did.clone(),
            name: agent.name.clone(),
            description: agent.description.clone(),
            endpoint: agent.endpoint.clone(),
            agent_type: agent.agent_type.clone(),
            capabilities: agent.capabilities.clone(),
            key_file: key_file_path(agent_key),
        }
    }
}

/// Chain settings shared by every registered agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSettings {
    pub chain: String,
    pub confirmation_blocks: u32,
    pub gas_limit: u64,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            chain: "ethereum".to_string(),
            confirmation_blocks: 3,
            gas_limit: 500_000,
        }
    }
}

/// Full exported configuration: agents keyed by agent key plus network block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfigSet {
    pub agents: BTreeMap<String, ExportedAgentConfig>,
    pub network: NetworkSettings,
}

impl AgentConfigSet {
    /// Empty set with the given network block
    pub fn new(network: NetworkSettings) -> Self {
        Self {
            agents: BTreeMap::new(),
            network,
        }
    }

    /// Look up an agent by key
    pub fn agent(&self, agent_key: &str) -> Option<&ExportedAgentConfig> {
        self.agents.get(agent_key)
    }

    /// Agent keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.agents.keys().map(String::as_str)
    }
}

impl Default for AgentConfigSet {
    fn default() -> Self {
        Self::new(NetworkSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::demo::planning_agent;

    #[test]
    fn test_default_network() {
        let network = NetworkSettings::default();
        assert_eq!(network.chain, "ethereum");
        assert_eq!(network.confirmation_blocks, 3);
        assert_eq!(network.gas_limit, 500000);
    }

    #[test]
    fn test_exported_view_copies_descriptor() {
        let agent = planning_agent();
        let exported = ExportedAgentConfig::from_descriptor(&agent, "planning");

        assert_eq!(exported.did, agent.did);
        assert_eq!(exported.endpoint, "http://localhost:8084");
        assert_eq!(exported.agent_type, AgentType::Specialist);
        assert_eq!(exported.capabilities, agent.capabilities);
        assert_eq!(exported.key_file, "keys/planning_agent.key");
    }

    #[test]
    fn test_exported_field_names() {
        let exported = ExportedAgentConfig::from_descriptor(&planning_agent(), "planning");
        let value = serde_json::to_value(&exported).unwrap();
        let object = value.as_object().unwrap();

        let mut fields: Vec<&str> = object.keys().map(String::as_str).collect();
        fields.sort_unstable();
        assert_eq!(
            fields,
            vec!["capabilities", "description", "did", "endpoint", "key_file", "name", "type"]
        );
        assert_eq!(object["type"], "specialist");
    }
}
