//! Seeded-account ping against the square program.
//!
//! Loads the caller's identity from the Solana CLI config, derives a client
//! account address from a fixed seed, creates and funds that account on
//! first run, and submits one empty-payload instruction naming it. The
//! program squares the counter stored in the account.

use borsh::BorshSerialize;
use client::{
    keys,
    logs::{
        log_info,
        log_success,
    },
    provision::{
        ensure_seeded_account,
        Provisioned,
    },
    PingContext,
    LAMPORTS_PER_SOL,
    TESTNET_URL,
};
use solana_sdk::signature::Signer;

const PROGRAM_NAME: &str = "square";
const ACCOUNT_SEED: &str = "test2";

/// The record the square program keeps in the client account. The client
/// only ever serializes a zero value, to size the account allocation.
#[derive(BorshSerialize, Default)]
struct SquareRecord {
    square: u32,
}

/// Byte length of the program's record under borsh. Fixed for a single
/// `u32` field regardless of its value.
fn record_space() -> anyhow::Result<u64> {
    let serialized = borsh::to_vec(&SquareRecord::default())?;
    Ok(serialized.len() as u64)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log_info("Launching", "square client");

    let payer = keys::keypair_from_cli_config()?;
    let program_id = keys::program_id_from_file(PROGRAM_NAME)?;
    let ctx = PingContext::connect(TESTNET_URL, payer, program_id);

    log_info("Local account", ctx.payer.pubkey());
    ctx.fund_payer(LAMPORTS_PER_SOL).await?;

    log_info("Program", ctx.program_id);
    let space = record_space()?;
    let (client_address, provisioned) = ensure_seeded_account(
        &ctx.rpc,
        &ctx.payer,
        &ctx.program_id,
        ACCOUNT_SEED,
        LAMPORTS_PER_SOL,
        space,
    )
    .await?;

    log_info("Client account", client_address);
    match provisioned {
        Provisioned::Created(_) => log_success("Client account", "created"),
        Provisioned::Reused => log_info("Client account", "already exists, reusing it"),
    }

    log_info("Pinging program", ctx.program_id);
    ctx.ping(&client_address).await?;
    log_success("Ping", "confirmed");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_length_is_four_bytes() {
        assert_eq!(record_space().unwrap(), 4);
    }

    #[test]
    fn record_length_does_not_depend_on_the_value() {
        let zero = borsh::to_vec(&SquareRecord { square: 0 }).unwrap();
        let other = borsh::to_vec(&SquareRecord { square: 42 }).unwrap();
        assert_eq!(zero.len(), other.len());
    }
}
