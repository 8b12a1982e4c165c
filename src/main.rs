use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};
use std::fmt::Write;
use std::path::PathBuf;

use sage_demo_agents::agent::{demo_agents, AgentDescriptor};
use sage_demo_agents::config::{generate_agent_config_report, AgentConfigSet, NetworkSettings};
use sage_demo_agents::config_loader::load_descriptors;
use sage_demo_agents::output::{render_config, write_config, OutputFormat};
use sage_demo_agents::registration::{
    registration_commands, RegistrationOptions, DEFAULT_REGISTER_COMMAND,
};

/// Demo agent configuration and registration command generator for SAGE
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Descriptor file (YAML or JSON) to use instead of the built-in demo agents
    #[arg(short, long)]
    agents: Option<PathBuf>,

    /// Also write the agent configuration to this file (format from extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Format of the configuration printed to stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Program prefix used in registration commands
    #[arg(long, default_value = DEFAULT_REGISTER_COMMAND)]
    register_command: String,

    /// Chain name for the network block
    #[arg(long, default_value = "ethereum")]
    chain: String,

    /// Confirmation block count for the network block
    #[arg(long, default_value_t = 3)]
    confirmation_blocks: u32,

    /// Gas limit for the network block
    #[arg(long, default_value_t = 500000)]
    gas_limit: u64,

    /// Print only the agent configuration
    #[arg(long, conflicts_with = "commands_only")]
    config_only: bool,

    /// Print only the registration commands
    #[arg(long)]
    commands_only: bool,
}

impl Args {
    fn network(&self) -> NetworkSettings {
        NetworkSettings {
            chain: self.chain.clone(),
            confirmation_blocks: self.confirmation_blocks,
            gas_limit: self.gas_limit,
        }
    }

    fn registration_options(&self) -> RegistrationOptions {
        RegistrationOptions {
            command: self.register_command.clone(),
            header: true,
        }
    }
}

/// Build the exported configuration, logging skipped and overwritten agents
fn build_config(args: &Args, agents: &[AgentDescriptor]) -> AgentConfigSet {
    let report = generate_agent_config_report(agents, args.network());
    if !report.is_clean() {
        warn!(
            "{} descriptor(s) skipped, {} key(s) overwritten",
            report.skipped.len(),
            report.overwritten.len()
        );
    }
    info!(
        "Exported {} of {} agent(s)",
        report.config.agents.len(),
        agents.len()
    );
    report.config
}

/// Build the text written to stdout
fn render_report(
    args: &Args,
    agents: &[AgentDescriptor],
    config: &AgentConfigSet,
) -> Result<String> {
    let mut out = String::new();
    if args.config_only {
        out.push_str(&render_config(config, args.format)?);
        out.push('\n');
        return Ok(out);
    }
    if args.commands_only {
        out.push_str(&registration_commands(agents, &args.registration_options())?);
        return Ok(out);
    }

    writeln!(out, "Demo Agents Configuration Generator")?;
    writeln!(out, "====================================")?;
    writeln!(out)?;
    writeln!(out, "1. Agent Configuration (agent_config.yaml format):")?;
    writeln!(out, "{}", render_config(config, args.format)?)?;
    writeln!(out)?;
    writeln!(out, "2. Registration Commands:")?;
    out.push_str(&registration_commands(agents, &args.registration_options())?);
    writeln!(out)?;
    writeln!(out, "3. Demo Key Pairs have been defined (DO NOT USE IN PRODUCTION)")?;
    Ok(out)
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Logs go to stderr; stdout carries only the generated output
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting SAGE demo agent configuration generator");

    let agents = match &args.agents {
        Some(path) => load_descriptors(path)?,
        None => {
            info!("Using built-in demo agents");
            demo_agents()
        }
    };

    let config = build_config(&args, &agents);

    if let Some(path) = &args.output {
        write_config(&config, OutputFormat::from_path(path), path)?;
    }

    print!("{}", render_report(&args, &agents, &config)?);

    info!("Configuration generation completed successfully");
    Ok(())
}
