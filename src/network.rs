use log::{debug, info};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_program::{instruction::Instruction, pubkey::Pubkey};
use solana_sdk::{
    account::Account,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};

use crate::error::{Result, ReviewClientError};

/// The cluster a transaction is sent to.
///
/// Implementations sign with `payer` against a fresh blockhash and wait
/// for confirmation. Retry policy, if any, belongs to the implementation.
#[allow(async_fn_in_trait)]
pub trait Network {
    async fn submit(&self, instructions: &[Instruction], payer: &Keypair) -> Result<Signature>;

    /// The account at `address`, or `None` when it does not exist.
    async fn account(&self, address: &Pubkey) -> Result<Option<Account>>;
}

fn rejected(e: impl std::fmt::Display) -> ReviewClientError {
    ReviewClientError::SubmissionRejected(e.to_string())
}

impl Network for RpcClient {
    async fn submit(&self, instructions: &[Instruction], payer: &Keypair) -> Result<Signature> {
        let blockhash = self.get_latest_blockhash().await.map_err(rejected)?;
        debug!(
            "signing {} instruction(s) against blockhash {blockhash}",
            instructions.len()
        );

        let mut transaction = Transaction::new_with_payer(instructions, Some(&payer.pubkey()));
        transaction.try_sign(&[payer], blockhash).map_err(rejected)?;

        let signature = self
            .send_and_confirm_transaction(&transaction)
            .await
            .map_err(rejected)?;
        info!("confirmed transaction {signature}");
        Ok(signature)
    }

    async fn account(&self, address: &Pubkey) -> Result<Option<Account>> {
        let response = self
            .get_account_with_commitment(address, self.commitment())
            .await
            .map_err(|e| ReviewClientError::AccountFetch {
                address: address.to_string(),
                reason: e.to_string(),
            })?;
        Ok(response.value)
    }
}
