use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GitBumpError, Result};

/// Deployment configuration for git-bump.
///
/// Only deployment knobs live here: which filenames may carry the project
/// version (checked in list order, first match wins) and which remote to
/// push to. The change-type to increment mapping is fixed and not
/// configurable.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_version_files")]
    pub version_files: Vec<String>,

    #[serde(default = "default_remote")]
    pub remote: String,
}

/// Known version-file names, in priority order
fn default_version_files() -> Vec<String> {
    vec![
        "version.ts".to_string(),
        "package.json".to_string(),
        "pom.xml".to_string(),
    ]
}

fn default_remote() -> String {
    "origin".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version_files: default_version_files(),
            remote: default_remote(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `gitbump.toml` in the current directory
/// 3. `.gitbump.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitbump.toml").exists() {
        fs::read_to_string("./gitbump.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitbump.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str)
        .map_err(|e| GitBumpError::config(format!("Invalid configuration: {}", e)))
}
