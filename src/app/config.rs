use crate::app::cli::Cli;
use crate::app::models::RuntimeConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    log_file: Option<PathBuf>,
    prompt: Option<bool>,
}

fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("menagerie").join("config.toml"))
}

/// An explicit path must exist; the default location is optional.
fn load_config_file(explicit: Option<&Path>) -> Result<ConfigFile> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = default_config_path()?;
            if !path.exists() {
                return Ok(ConfigFile::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&config_path)
        .context(format!("Failed to read config at {:?}", config_path))?;

    toml::from_str(&content).context(format!("Failed to parse {:?}", config_path))
}

fn merge(file: ConfigFile, cli: &Cli) -> RuntimeConfig {
    let defaults = RuntimeConfig::default();
    RuntimeConfig {
        log_file: cli
            .log_file
            .clone()
            .or(file.log_file)
            .unwrap_or(defaults.log_file),
        prompt: !cli.no_prompt && file.prompt.unwrap_or(defaults.prompt),
    }
}

pub fn resolve_config(cli: &Cli) -> Result<RuntimeConfig> {
    let file = load_config_file(cli.config.as_deref())?;
    let config = merge(file, cli);
    log::debug!("Resolved configuration: {:?}", config);
    Ok(config)
}
