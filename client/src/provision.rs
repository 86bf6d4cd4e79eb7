//! Seeded-address derivation and create-if-absent account provisioning.

use anyhow::Context;
use solana_account::Account;
use solana_client::rpc_client::RpcClient;
use solana_instruction::Instruction;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
};
use solana_system_interface::instruction as system_instruction;

use crate::transactions::send_transaction;

/// Derives the client account address from the owner, a seed string, and the
/// owning program. Pure and deterministic; the derived address has no
/// private key.
pub fn derive_client_address(
    owner: &Pubkey,
    seed: &str,
    program_id: &Pubkey,
) -> anyhow::Result<Pubkey> {
    Pubkey::create_with_seed(owner, seed, program_id)
        .with_context(|| format!("Failed to derive an address from seed {seed:?}"))
}

/// Result of looking an address up on chain.
pub enum AccountStatus {
    Absent,
    Present(Account),
}

impl From<Option<Account>> for AccountStatus {
    fn from(account: Option<Account>) -> Self {
        match account {
            Some(account) => Self::Present(account),
            None => Self::Absent,
        }
    }
}

/// Queries the network for an account at `address`.
pub fn account_status(rpc: &RpcClient, address: &Pubkey) -> anyhow::Result<AccountStatus> {
    let account = rpc
        .get_account_with_commitment(address, rpc.commitment())
        .with_context(|| format!("Failed to look up account {address}"))?
        .value;
    Ok(account.into())
}

/// Outcome of [`ensure_seeded_account`].
pub enum Provisioned {
    /// The account was created and funded by this run.
    Created(Signature),
    /// The account already existed and is reused as-is. Its current size and
    /// owner are NOT validated against `space` and the program; a mismatched
    /// pre-existing account fails later, inside the program.
    Reused,
}

/// The create instruction an absent account calls for. A present account
/// calls for nothing; it is reused as-is without shape validation.
fn required_create_instruction(
    status: &AccountStatus,
    owner: &Pubkey,
    client_address: &Pubkey,
    seed: &str,
    lamports: u64,
    space: u64,
    program_id: &Pubkey,
) -> Option<Instruction> {
    match status {
        AccountStatus::Present(_) => None,
        AccountStatus::Absent => Some(system_instruction::create_account_with_seed(
            owner,
            client_address,
            owner,
            seed,
            lamports,
            space,
            program_id,
        )),
    }
}

/// Creates the seed-derived account for `owner` under `program_id` if it does
/// not exist yet, funded with `lamports` and sized to `space` bytes. Returns
/// the derived address alongside what was done to it.
///
/// `space` is the owning program's expected record length and is always
/// supplied by the caller.
pub async fn ensure_seeded_account(
    rpc: &RpcClient,
    owner: &Keypair,
    program_id: &Pubkey,
    seed: &str,
    lamports: u64,
    space: u64,
) -> anyhow::Result<(Pubkey, Provisioned)> {
    let client_address = derive_client_address(&owner.pubkey(), seed, program_id)?;

    let status = account_status(rpc, &client_address)?;
    match required_create_instruction(
        &status,
        &owner.pubkey(),
        &client_address,
        seed,
        lamports,
        space,
        program_id,
    ) {
        None => Ok((client_address, Provisioned::Reused)),
        Some(create) => {
            let sig = send_transaction(rpc, owner, &[create]).await?;
            Ok((client_address, Provisioned::Created(sig)))
        }
    }
}

#[cfg(test)]
mod tests {
    use solana_system_interface::program as system_program;

    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let owner = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();

        let first = derive_client_address(&owner, "test2", &program_id).unwrap();
        let second = derive_client_address(&owner, "test2", &program_id).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn derivation_depends_on_every_input() {
        let owner = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let derived = derive_client_address(&owner, "test2", &program_id).unwrap();

        assert_ne!(
            derived,
            derive_client_address(&owner, "test3", &program_id).unwrap()
        );
        assert_ne!(
            derived,
            derive_client_address(&Pubkey::new_unique(), "test2", &program_id).unwrap()
        );
        assert_ne!(
            derived,
            derive_client_address(&owner, "test2", &Pubkey::new_unique()).unwrap()
        );
    }

    fn existing_account(owner: &Pubkey) -> Account {
        Account {
            lamports: crate::LAMPORTS_PER_SOL,
            data: vec![0; 4],
            owner: *owner,
            executable: false,
            rent_epoch: 0,
        }
    }

    #[test]
    fn lookup_result_maps_to_account_status() {
        let program_id = Pubkey::new_unique();

        let status = AccountStatus::from(Some(existing_account(&program_id)));
        assert!(matches!(status, AccountStatus::Present(_)));

        let status = AccountStatus::from(None);
        assert!(matches!(status, AccountStatus::Absent));
    }

    #[test]
    fn present_account_is_reused_without_a_create() {
        let owner = Keypair::new();
        let program_id = Pubkey::new_unique();
        let client_address =
            derive_client_address(&owner.pubkey(), "test2", &program_id).unwrap();

        let status = AccountStatus::Present(existing_account(&program_id));
        let create = required_create_instruction(
            &status,
            &owner.pubkey(),
            &client_address,
            "test2",
            crate::LAMPORTS_PER_SOL,
            4,
            &program_id,
        );

        assert!(create.is_none());
    }

    #[test]
    fn absent_account_gets_a_create_with_seed() {
        let owner = Keypair::new();
        let program_id = Pubkey::new_unique();
        let client_address =
            derive_client_address(&owner.pubkey(), "test2", &program_id).unwrap();

        let ix = required_create_instruction(
            &AccountStatus::Absent,
            &owner.pubkey(),
            &client_address,
            "test2",
            crate::LAMPORTS_PER_SOL,
            4,
            &program_id,
        )
        .unwrap();

        assert_eq!(ix.program_id, system_program::ID);
        assert!(ix.accounts.iter().any(|meta| meta.pubkey == client_address));
        assert!(ix
            .accounts
            .iter()
            .any(|meta| meta.pubkey == owner.pubkey() && meta.is_signer));
        assert!(!ix.data.is_empty());
    }
}
