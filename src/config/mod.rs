//! Exported agent configuration and the builder that produces it.

pub mod builder;
pub mod types;

pub use builder::{
    generate_agent_config, generate_agent_config_report, generate_agent_config_with,
    BuildReport, SkippedAgent,
};
pub use types::{AgentConfigSet, ExportedAgentConfig, NetworkSettings};
