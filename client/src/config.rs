//! Loader for the Solana CLI configuration document.
//!
//! The CLI writes its settings to `~/.config/solana/cli/config.yml`; the only
//! field the workflows consume is `keypair_path`.

use std::path::{
    Path,
    PathBuf,
};

use anyhow::Context;
use serde::Deserialize;

/// The subset of the CLI configuration the workflows read.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    /// Path to the caller's keypair file, in the JSON byte-array format.
    pub keypair_path: String,
}

/// Per-user location of the CLI configuration file.
///
/// `None` only when the home directory cannot be resolved.
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|mut path| {
        path.extend([".config", "solana", "cli", "config.yml"]);
        path
    })
}

impl CliConfig {
    pub fn load(config_file: &Path) -> anyhow::Result<Self> {
        let document = std::fs::read_to_string(config_file)
            .with_context(|| format!("Failed to read config file {}", config_file.display()))?;
        serde_yaml::from_str(&document)
            .with_context(|| format!("Malformed config file {}", config_file.display()))
    }

    pub fn load_default() -> anyhow::Result<Self> {
        let config_file =
            default_config_path().context("Could not resolve the user's home directory")?;
        Self::load(&config_file)
    }
}
