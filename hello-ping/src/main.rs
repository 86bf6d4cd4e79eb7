//! Single-run ping: fund a throwaway keypair and hit the hello-solana
//! program with one empty-payload instruction.

use client::{
    keys,
    logs::{
        log_info,
        log_success,
    },
    PingContext,
    LAMPORTS_PER_SOL,
    TESTNET_URL,
};
use solana_sdk::signature::{
    Keypair,
    Signer,
};

const PROGRAM_NAME: &str = "hello-solana";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log_info("Launching", "hello-solana client");

    // The program keypair file is resolved before anything touches the
    // network, so a missing deploy fails immediately.
    let program_id = keys::program_id_from_file(PROGRAM_NAME)?;

    let trigger = Keypair::new();
    let ctx = PingContext::connect(TESTNET_URL, trigger, program_id);
    ctx.fund_payer(LAMPORTS_PER_SOL).await?;

    log_info("Pinging program", ctx.program_id);
    let target = ctx.payer.pubkey();
    ctx.ping(&target).await?;
    log_success("Ping", "confirmed");

    Ok(())
}
