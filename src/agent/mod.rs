//! Agent descriptors, capability values, key derivation and the demo catalog.

pub mod capability;
pub mod demo;
pub mod keys;
pub mod types;

pub use capability::{Capabilities, CapabilityValue};
pub use demo::demo_agents;
pub use keys::{derive_agent_key, key_file_path, SkipReason};
pub use types::{AgentDescriptor, AgentType, ProtocolConfig, ValidationError};
