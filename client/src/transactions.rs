//! Airdrop funding and single-transaction submission.

use anyhow::Context;
use solana_client::rpc_client::RpcClient;
use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_sdk::{
    message::Message,
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};

use crate::logs::{
    log_error,
    log_success,
};

const AIRDROP_POLL_ATTEMPTS: usize = 10;
const AIRDROP_POLL_INTERVAL_MS: u64 = 500;

/// Requests an airdrop for `recipient` and blocks until the grant confirms.
///
/// Test-network convenience only. Bails if the grant is still unconfirmed
/// after the polling window, so callers never proceed on unfunded keys.
pub async fn fund_account(
    rpc: &RpcClient,
    recipient: &Pubkey,
    lamports: u64,
) -> anyhow::Result<()> {
    let airdrop_signature = rpc
        .request_airdrop(recipient, lamports)
        .context("Failed to request airdrop")?;

    for _ in 0..AIRDROP_POLL_ATTEMPTS {
        if rpc
            .confirm_transaction(&airdrop_signature)
            .context("Couldn't query airdrop confirmation")?
        {
            return Ok(());
        }
        std::thread::sleep(std::time::Duration::from_millis(AIRDROP_POLL_INTERVAL_MS));
    }

    anyhow::bail!("Airdrop {airdrop_signature} was never confirmed")
}

/// Signs `instructions` with `payer` and submits them as one transaction,
/// blocking until the network confirms it.
pub async fn send_transaction(
    rpc: &RpcClient,
    payer: &Keypair,
    instructions: &[Instruction],
) -> anyhow::Result<Signature> {
    let blockhash = rpc
        .get_latest_blockhash()
        .context("Failed to fetch a recent blockhash")?;

    let msg = Message::new(instructions, Some(&payer.pubkey()));
    let mut tx = Transaction::new_unsigned(msg);
    tx.try_sign(&[payer], blockhash)
        .context("Failed to sign transaction")?;

    match rpc.send_and_confirm_transaction(&tx) {
        Ok(sig) => {
            log_success("Signature", sig);
            Ok(sig)
        }
        Err(error) => {
            log_error("Sender", payer.pubkey());
            Err(error).context("Failed transaction submission")
        }
    }
}

/// Builds the empty-payload ping instruction.
///
/// The target account is the only account reference, writable but not a
/// signer; the program receives no data.
pub fn ping_instruction(program_id: &Pubkey, target: &Pubkey) -> Instruction {
    Instruction::new_with_bytes(*program_id, &[], vec![AccountMeta::new(*target, false)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ping_instruction_shape() {
        let program_id = Pubkey::new_unique();
        let target = Pubkey::new_unique();

        let ix = ping_instruction(&program_id, &target);

        assert_eq!(ix.program_id, program_id);
        assert!(ix.data.is_empty());
        assert_eq!(ix.accounts.len(), 1);
        assert_eq!(ix.accounts[0].pubkey, target);
        assert!(ix.accounts[0].is_writable);
        assert!(!ix.accounts[0].is_signer);
    }
}
