//! Per-run state threaded through each workflow step.

use solana_client::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
};

use crate::{
    logs::log_info,
    transactions::{
        fund_account,
        ping_instruction,
        send_transaction,
    },
};

/// Everything a workflow run carries between steps: the RPC handle, the
/// paying identity, and the target program. Built once per process and
/// dropped at exit; there is no state shared across runs.
pub struct PingContext {
    pub rpc: RpcClient,
    pub payer: Keypair,
    pub program_id: Pubkey,
}

impl PingContext {
    /// Opens a connection at the confirmed commitment level.
    pub fn connect(url: &str, payer: Keypair, program_id: Pubkey) -> Self {
        let rpc = RpcClient::new_with_commitment(url.to_string(), CommitmentConfig::confirmed());
        log_info("Connected", url);
        Self {
            rpc,
            payer,
            program_id,
        }
    }

    /// Airdrops `lamports` to the payer and waits for the grant to confirm.
    pub async fn fund_payer(&self, lamports: u64) -> anyhow::Result<()> {
        fund_account(&self.rpc, &self.payer.pubkey(), lamports).await
    }

    /// Submits the empty-payload ping naming `target`, signed by the payer,
    /// and blocks until the network confirms it.
    pub async fn ping(&self, target: &Pubkey) -> anyhow::Result<Signature> {
        let ix = ping_instruction(&self.program_id, target);
        send_transaction(&self.rpc, &self.payer, &[ix]).await
    }
}
