use crate::agent::AgentDescriptor;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use log::{info, warn};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// Accepted layouts for a descriptor file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DescriptorFile {
    List(Vec<AgentDescriptor>),
    Document { agents: Vec<AgentDescriptor> },
}

impl DescriptorFile {
    fn into_agents(self) -> Vec<AgentDescriptor> {
        match self {
            DescriptorFile::List(agents) => agents,
            DescriptorFile::Document { agents } => agents,
        }
    }
}

/// Load and validate agent descriptors from a YAML or JSON file.
///
/// The file holds either a plain list of descriptors or a mapping with an
/// `agents` list. JSON input is read through the YAML parser.
pub fn load_descriptors(path: &Path) -> Result<Vec<AgentDescriptor>> {
    info!("Loading agent descriptors from: {:?}", path);

    let file = File::open(path)
        .wrap_err_with(|| format!("Failed to open descriptor file '{}'", path.display()))?;

    let parsed: DescriptorFile = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse descriptor file '{}'", path.display()))?;

    let agents = parsed.into_agents();
    if agents.is_empty() {
        warn!("Descriptor file {:?} contains no agents", path);
    }

    validate_descriptors(&agents)?;

    info!("Loaded {} agent descriptor(s)", agents.len());
    Ok(agents)
}

/// Validate every descriptor, reporting the first failure with its position
pub fn validate_descriptors(agents: &[AgentDescriptor]) -> Result<()> {
    for (index, agent) in agents.iter().enumerate() {
        agent
            .validate()
            .map_err(|e| eyre!("Agent #{} ('{}') is invalid: {}", index, agent.name, e))?;
    }
    Ok(())
}
