use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::{fs, io::ErrorKind, path::Path};
use tracing::debug;
use vercmp::{
    platform::{EnvSource, RUNTIME_ENV},
    version::generic_version::DEFAULT_DELIMITERS,
};

use crate::{fl, println_with_prefix, println_with_prefix_and_fl};

pub const CONF_PATH: &str = "/etc/vercmp.conf";

fn default_delimiters() -> String {
    DEFAULT_DELIMITERS.to_owned()
}

fn default_runtime_env() -> String {
    RUNTIME_ENV.to_owned()
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(alias = "DELIMITERS", default = "default_delimiters")]
    pub delimiters: String,
    #[serde(alias = "RUNTIME_ENV", default = "default_runtime_env")]
    pub runtime_env: String,
    #[serde(alias = "MINIMUM", default)]
    pub minimum: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            delimiters: default_delimiters(),
            runtime_env: default_runtime_env(),
            minimum: None,
        }
    }
}

impl Config {
    /// Parse the content of a configuration file
    fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read the configuration file, falling back to defaults when it is missing
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(content) => {
                debug!("reading configuration from {}", path.display());
                Self::from_toml(&content).map_err(|e| {
                    anyhow!(fl!(
                        "err_conf_invalid",
                        conf_path = path.to_string_lossy(),
                        error = e.to_string()
                    ))
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} not found, using defaults", path.display());
                Ok(Config::default())
            }
            Err(e) => {
                println_with_prefix_and_fl!("conf_unreadable", conf_path = path.to_string_lossy());
                Err(e.into())
            }
        }
    }

    /// Where the platform runtime version is read from
    #[inline]
    pub fn runtime_source(&self) -> EnvSource {
        EnvSource::new(self.runtime_env.as_str())
    }
}
