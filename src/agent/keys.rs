//! Agent key derivation.
//!
//! An agent key indexes an agent's exported configuration and names its key
//! file. Only orchestrators and specialists get one.

use super::types::{AgentDescriptor, AgentType};

/// Key assigned to the orchestrator
pub const ROOT_AGENT_KEY: &str = "root";

/// Capability entry that names a specialist's key
pub const CAPABILITY_TYPE_FIELD: &str = "type";

/// Why a descriptor did not produce an agent key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("agent type '{0}' has no configuration key")]
    UnsupportedType(String),
    #[error("specialist has no capabilities.type entry")]
    MissingCapabilityType,
    #[error("specialist capabilities.type is a {0}, not a string")]
    NonStringCapabilityType(&'static str),
    #[error("specialist capabilities.type is empty")]
    EmptyCapabilityType,
}

/// Derive the configuration key for a descriptor.
///
/// - `orchestrator` -> `root`
/// - `specialist` -> the string at `capabilities["type"]`, unless empty
/// - anything else -> no key
pub fn derive_agent_key(agent: &AgentDescriptor) -> Result<String, SkipReason> {
    match &agent.agent_type {
        AgentType::Orchestrator => Ok(ROOT_AGENT_KEY.to_string()),
        AgentType::Specialist => match agent.capabilities.get(CAPABILITY_TYPE_FIELD) {
            Some(value) => match value.as_str() {
                Some("") => Err(SkipReason::EmptyCapabilityType),
                Some(key) => Ok(key.to_string()),
                None => Err(SkipReason::NonStringCapabilityType(value.kind())),
            },
            None => Err(SkipReason::MissingCapabilityType),
        },
        AgentType::Other(tag) => Err(SkipReason::UnsupportedType(tag.clone())),
    }
}

/// Path of the private key file for an agent key
pub fn key_file_path(agent_key: &str) -> String {
    format!("keys/{}_agent.key", agent_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::capability::CapabilityValue;
    use crate::agent::demo::{ordering_agent, root_orchestrator};

    #[test]
    fn test_orchestrator_key_ignores_capabilities() {
        let mut agent = root_orchestrator();
        agent.capabilities.insert("type".to_string(), "something_else".into());
        assert_eq!(derive_agent_key(&agent), Ok("root".to_string()));
    }

    #[test]
    fn test_specialist_key_from_capabilities() {
        assert_eq!(derive_agent_key(&ordering_agent()), Ok("ordering".to_string()));
    }

    #[test]
    fn test_specialist_without_string_type_is_skipped() {
        let mut agent = ordering_agent();
        agent.capabilities.remove("type");
        assert_eq!(derive_agent_key(&agent), Err(SkipReason::MissingCapabilityType));

        agent.capabilities.insert("type".to_string(), CapabilityValue::Integer(7));
        assert_eq!(
            derive_agent_key(&agent),
            Err(SkipReason::NonStringCapabilityType("integer"))
        );

        agent.capabilities.insert("type".to_string(), CapabilityValue::Null);
        assert_eq!(
            derive_agent_key(&agent),
            Err(SkipReason::NonStringCapabilityType("null"))
        );
    }

    #[test]
    fn test_empty_capability_type_is_skipped() {
        let mut agent = ordering_agent();
        agent.capabilities.insert("type".to_string(), "".into());
        assert_eq!(derive_agent_key(&agent), Err(SkipReason::EmptyCapabilityType));
    }

    #[test]
    fn test_other_types_are_skipped() {
        let mut agent = ordering_agent();
        agent.agent_type = AgentType::from("unknown");
        assert_eq!(
            derive_agent_key(&agent),
            Err(SkipReason::UnsupportedType("unknown".to_string()))
        );
    }

    #[test]
    fn test_key_file_path() {
        assert_eq!(key_file_path("root"), "keys/root_agent.key");
        assert_eq!(key_file_path("planning"), "keys/planning_agent.key");
    }
}
