//! Rendering and writing the exported configuration.

use clap::ValueEnum;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs;
use std::path::Path;

use crate::config::AgentConfigSet;

/// Text format of the exported configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON, two-space indent
    #[default]
    Json,
    /// YAML
    Yaml,
}

impl OutputFormat {
    /// Pick a format from a file extension; anything but `.yaml`/`.yml` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => OutputFormat::Yaml,
            _ => OutputFormat::Json,
        }
    }
}

/// Render the configuration in the given format
pub fn render_config(config: &AgentConfigSet, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)
            .wrap_err("Failed to serialize agent configuration to JSON")?,
        OutputFormat::Yaml => serde_yaml::to_string(config)
            .wrap_err("Failed to serialize agent configuration to YAML")?,
    };
    Ok(text)
}

/// Parse a configuration previously produced by [`render_config`]
pub fn parse_config(text: &str, format: OutputFormat) -> Result<AgentConfigSet> {
    let config = match format {
        OutputFormat::Json => {
            serde_json::from_str(text).wrap_err("Failed to parse agent configuration JSON")?
        }
        OutputFormat::Yaml => {
            serde_yaml::from_str(text).wrap_err("Failed to parse agent configuration YAML")?
        }
    };
    Ok(config)
}

/// Write the configuration to `path`, creating parent directories as needed
pub fn write_config(config: &AgentConfigSet, format: OutputFormat, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).wrap_err_with(|| {
                format!("Failed to create output directory '{}'", parent.display())
            })?;
        }
    }

    let text = render_config(config, format)?;
    fs::write(path, text)
        .wrap_err_with(|| format!("Failed to write agent configuration '{}'", path.display()))?;

    info!("Wrote agent configuration ({:?}) to {:?}", format, path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::demo_agents;
    use crate::config::generate_agent_config;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("agent_config.yaml")), OutputFormat::Yaml);
        assert_eq!(OutputFormat::from_path(Path::new("out/config.yml")), OutputFormat::Yaml);
        assert_eq!(OutputFormat::from_path(Path::new("config.json")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path(Path::new("config")), OutputFormat::Json);
    }

    #[test]
    fn test_json_uses_two_space_indent() {
        let config = generate_agent_config(&demo_agents());
        let json = render_config(&config, OutputFormat::Json).unwrap();
        assert!(json.starts_with("{\n  \"agents\": {\n    \"ordering\": {"));
        assert!(json.contains("\"key_file\": \"keys/root_agent.key\""));
        assert!(json.contains("\"gas_limit\": 500000"));
    }

    #[test]
    fn test_json_round_trip() {
        let config = generate_agent_config(&demo_agents());
        let json = render_config(&config, OutputFormat::Json).unwrap();
        assert_eq!(parse_config(&json, OutputFormat::Json).unwrap(), config);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = generate_agent_config(&demo_agents());
        let yaml = render_config(&config, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("chain: ethereum"));
        assert_eq!(parse_config(&yaml, OutputFormat::Yaml).unwrap(), config);
    }

    #[test]
    fn test_write_config_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("agent_config.yaml");
        let config = generate_agent_config(&demo_agents());

        write_config(&config, OutputFormat::from_path(&path), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(parse_config(&text, OutputFormat::Yaml).unwrap(), config);
    }
}
