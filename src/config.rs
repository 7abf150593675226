//! Optional `.hotenvrc.json` project configuration.

use std::fs;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::RunContext;

pub const CONFIG_FILE_NAME: &str = ".hotenvrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directories searched for .env*.local files when none are given on
    /// the command line.
    #[serde(default = "default_search_dirs")]
    pub search_dirs: Vec<String>,

    /// Suffix appended to backup copies when --backup is given without an
    /// explicit value.
    #[serde(default = "default_backup_suffix")]
    pub backup_suffix: String,
}

fn default_search_dirs() -> Vec<String> {
    vec!["env".to_string()]
}

fn default_backup_suffix() -> String {
    ".bak".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_dirs: default_search_dirs(),
            backup_suffix: default_backup_suffix(),
        }
    }
}

impl Config {
    /// Loads the config from the working directory. A missing file yields
    /// the defaults; a malformed file is an error.
    pub fn load(ctx: &RunContext) -> Result<Self> {
        let path = ctx.working_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}

pub fn default_config_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&Config::default())?)
}
