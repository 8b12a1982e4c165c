//! # sage-demo-agents - Demo agent configuration for SAGE multi-agent setups
//!
//! This library generates the configuration and registration commands for
//! the demo agents of a SAGE multi-agent deployment: a root orchestrator
//! plus ordering and planning specialists.
//!
//! ## Architecture
//!
//! - `agent`: descriptors, capability values, agent key derivation and the
//!   compiled-in demo catalog
//! - `config`: exported configuration types and the builder that maps
//!   descriptors to them
//! - `config_loader`: loading descriptors from YAML/JSON files
//! - `registration`: shell commands for the external registration tool
//! - `output`: rendering/writing the configuration as JSON or YAML
//! - `utils`: shell quoting helpers
//!
//! ## Example Usage
//!
//! ```rust
//! use sage_demo_agents::agent::demo_agents;
//! use sage_demo_agents::config::generate_agent_config;
//!
//! let config = generate_agent_config(&demo_agents());
//! assert_eq!(config.agents["root"].key_file, "keys/root_agent.key");
//! ```
//!
//! ## Key Derivation
//!
//! Orchestrators are exported as `root`. Specialists are exported under the
//! string in their `capabilities.type` entry. Other descriptors, and
//! specialists without a string `capabilities.type`, are left out of the
//! configuration with a warning.
//!
//! ## Error Handling
//!
//! Typed errors (`ValidationError`, `SkipReason`) use `thiserror`. Functions
//! doing I/O or serialization return `color_eyre::Result` with context.

pub mod agent;
pub mod config;
pub mod config_loader;
pub mod output;
pub mod registration;
pub mod utils;
