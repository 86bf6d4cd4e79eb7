//! Keypair file parsing.
//!
//! Keypair files hold the 64 secret-key bytes as a JSON array, the format
//! `solana-keygen` writes and the deploy tooling drops under `dist/program/`.

use std::path::{
    Path,
    PathBuf,
};

use anyhow::{
    anyhow,
    Context,
};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signer,
    },
};

use crate::config::CliConfig;

/// Directory the deploy step writes program keypairs into.
pub const PROGRAM_DEPLOY_DIR: &str = "dist/program";

/// Reads a keypair from a JSON byte-array file.
pub fn keypair_from_file(path: &Path) -> anyhow::Result<Keypair> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read keypair file {}", path.display()))?;
    let bytes: Vec<u8> = serde_json::from_str(&contents)
        .with_context(|| format!("Keypair file {} is not a JSON byte array", path.display()))?;
    Keypair::try_from(bytes.as_slice())
        .map_err(|e| anyhow!("Keypair file {} holds an invalid key: {e}", path.display()))
}

/// Reads the caller's keypair through the CLI configuration's `keypair_path`.
pub fn keypair_from_cli_config() -> anyhow::Result<Keypair> {
    let config = CliConfig::load_default()?;
    keypair_from_file(Path::new(&config.keypair_path))
}

/// Path of a deployed program's keypair file, keyed by program name.
pub fn program_keypair_path(program_name: &str) -> PathBuf {
    Path::new(PROGRAM_DEPLOY_DIR).join(format!("{program_name}-keypair.json"))
}

/// Loads a deployed program's address from its keypair file.
///
/// Only the public half is used; the program's secret key never signs
/// anything in these workflows.
pub fn program_id_from_file(program_name: &str) -> anyhow::Result<Pubkey> {
    let keypair = keypair_from_file(&program_keypair_path(program_name))?;
    Ok(keypair.pubkey())
}
