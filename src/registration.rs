//! Registration command generation.
//!
//! Produces a shell script fragment that registers each agent with the
//! external registration tool. One block per descriptor, in input order:
//!
//! ```text
//! # Register SAGE Ordering Agent
//! go run cli/register/main.go \
//!   --did "did:sage:ethereum:0x2345..." \
//!   --name "SAGE Ordering Agent" \
//!   --endpoint "http://localhost:8083" \
//!   --public-key "0x04b7..." \
//!   --type "specialist" \
//!   --capabilities '{"currencies":["USD",...],...}'
//! ```
//!
//! Commands are emitted for every descriptor, including ones that have no
//! agent key in the exported configuration.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::fmt::Write;

use crate::agent::AgentDescriptor;
use crate::utils::shell::{comment_text, escape_double_quoted, escape_single_quoted};

/// Default program prefix for registration commands
pub const DEFAULT_REGISTER_COMMAND: &str = "go run cli/register/main.go";

/// Options controlling registration command output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationOptions {
    /// Program (and leading arguments) invoked for each agent
    pub command: String,
    /// Include the two-line script header
    pub header: bool,
}

impl Default for RegistrationOptions {
    fn default() -> Self {
        Self {
            command: DEFAULT_REGISTER_COMMAND.to_string(),
            header: true,
        }
    }
}

/// Render the registration command for a single agent, ending with a blank line
pub fn registration_command(agent: &AgentDescriptor, command: &str) -> Result<String> {
    let capabilities = serde_json::to_string(&agent.capabilities)
        .wrap_err_with(|| format!("Failed to serialize capabilities of '{}'", agent.name))?;

    let mut out = String::new();
    writeln!(out, "# Register {}", comment_text(&agent.name))?;
    writeln!(out, "{} \\", command)?;
    writeln!(out, "  --did \"{}\" \\", escape_double_quoted(&agent.did))?;
    writeln!(out, "  --name \"{}\" \\", escape_double_quoted(&agent.name))?;
    writeln!(out, "  --endpoint \"{}\" \\", escape_double_quoted(&agent.endpoint))?;
    writeln!(out, "  --public-key \"{}\" \\", escape_double_quoted(&agent.public_key))?;
    writeln!(out, "  --type \"{}\" \\", escape_double_quoted(agent.agent_type.as_str()))?;
    writeln!(out, "  --capabilities '{}'", escape_single_quoted(&capabilities))?;
    writeln!(out)?;
    Ok(out)
}

/// Render registration commands for all agents
pub fn registration_commands(
    agents: &[AgentDescriptor],
    options: &RegistrationOptions,
) -> Result<String> {
    let mut out = String::new();
    if options.header {
        writeln!(out, "# SAGE Agent Registration Commands")?;
        writeln!(out, "# Run these from the sage-multi-agent directory")?;
        writeln!(out)?;
    }

    for agent in agents {
        out.push_str(&registration_command(agent, &options.command)?);
    }

    Ok(out)
}
