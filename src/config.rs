use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};

use anyhow::Context;
use directories_next::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::info;

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub address: IpAddr,
    pub port: u16,
    pub limits: Limits,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Limits {
    /// Largest accepted request body, in bytes.
    pub max_body_size: usize,
    /// Title length cap in characters. Unlimited when unset.
    pub max_title_length: Option<usize>,
    /// Content length cap in characters. Unlimited when unset.
    pub max_content_length: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
            limits: Limits::default(),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_body_size: 64 * 1024,
            max_title_length: None,
            max_content_length: None,
        }
    }
}

impl Config {
    /// Load the config from `path`, or from the platform config directory when
    /// no path is given. Falls back to defaults if neither exists.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => path.to_owned(),
            None => match default_path().filter(|p| p.is_file()) {
                Some(path) => path,
                None => {
                    info!("no config file found, using defaults");
                    return Ok(Config::default());
                }
            },
        };

        info!("reading config from {}", path.display());
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Config::parse(&source).context("failed to deserialize config")
    }

    pub fn parse(source: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pastebin").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
