//! Client-side utilities for funding, provisioning, and pinging deployed programs.
//!
//! Includes the CLI config loader, keypair file parsing, seeded-address
//! provisioning, and transaction submission helpers.

pub mod config;
pub mod context;
pub mod keys;
pub mod logs;
pub mod provision;
pub mod transactions;

pub use context::PingContext;
pub use logs::LogColor;

/// RPC endpoint both workflows submit against.
pub const TESTNET_URL: &str = "https://api.testnet.solana.com";

/// Lamports per SOL at the network's fixed conversion rate.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
