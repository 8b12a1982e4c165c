//! Agent configuration builder.
//!
//! Turns an ordered list of descriptors into an [`AgentConfigSet`]. The build
//! cannot fail: descriptors without an agent key are left out and a later
//! descriptor with the same key replaces an earlier one. Both cases are
//! logged and collected in the [`BuildReport`].

use log::{debug, warn};

use super::types::{AgentConfigSet, ExportedAgentConfig, NetworkSettings};
use crate::agent::keys::{derive_agent_key, SkipReason};
use crate::agent::AgentDescriptor;

/// A descriptor left out of the exported configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedAgent {
    /// Position of the descriptor in the input
    pub index: usize,
    pub name: String,
    pub reason: SkipReason,
}

/// Exported configuration plus what happened while building it
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub config: AgentConfigSet,
    pub skipped: Vec<SkippedAgent>,
    /// Keys that were written more than once, in the order the overwrite happened
    pub overwritten: Vec<String>,
}

impl BuildReport {
    /// True when every descriptor produced its own entry
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.overwritten.is_empty()
    }
}

/// Build the exported configuration with the default network block
pub fn generate_agent_config(agents: &[AgentDescriptor]) -> AgentConfigSet {
    generate_agent_config_with(agents, NetworkSettings::default())
}

/// Build the exported configuration with a custom network block
pub fn generate_agent_config_with(
    agents: &[AgentDescriptor],
    network: NetworkSettings,
) -> AgentConfigSet {
    generate_agent_config_report(agents, network).config
}

/// Build the exported configuration and report skipped and overwritten entries
pub fn generate_agent_config_report(
    agents: &[AgentDescriptor],
    network: NetworkSettings,
) -> BuildReport {
    let mut config = AgentConfigSet::new(network);
    let mut skipped = Vec::new();
    let mut overwritten = Vec::new();

    for (index, agent) in agents.iter().enumerate() {
        let agent_key = match derive_agent_key(agent) {
            Ok(key) => key,
            Err(reason) => {
                warn!("Skipping agent '{}' (#{}): {}", agent.name, index, reason);
                skipped.push(SkippedAgent {
                    index,
                    name: agent.name.clone(),
                    reason,
                });
                continue;
            }
        };

        debug!("Exporting agent '{}' as '{}'", agent.name, agent_key);
        let exported = ExportedAgentConfig::from_descriptor(agent, &agent_key);
        if let Some(previous) = config.agents.insert(agent_key.clone(), exported) {
            warn!(
                "Agent key '{}' already used by '{}'; replaced by '{}'",
                agent_key, previous.name, agent.name
            );
            overwritten.push(agent_key);
        }
    }

    BuildReport {
        config,
        skipped,
        overwritten,
    }
}
