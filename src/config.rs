use std::{fmt, str::FromStr};

use clap::ValueEnum;
use solana_program::pubkey::Pubkey;

use crate::error::{Result, ReviewClientError};

// Movie review program deployment used when no --program-id is given
pub const DEFAULT_PROGRAM_ID: &str = "Fm4FXYj8mbBzHnwq1V7Yh5cP9TqrGJSqYdHZ3u2KLxRV";

// Airdrop requested for generated keypairs (0.01 SOL)
pub const AIRDROP_LAMPORTS: u64 = 10_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Cluster {
    #[default]
    Devnet,
    Testnet,
    MainnetBeta,
    Localnet,
}

impl Cluster {
    pub fn rpc_url(&self) -> &'static str {
        match self {
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Localnet => "http://127.0.0.1:8899",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Localnet => "localnet",
        }
    }

    /// Airdrops are only served by test clusters.
    pub fn supports_airdrop(&self) -> bool {
        !matches!(self, Cluster::MainnetBeta)
    }

    pub fn explorer_url(&self, signature: &impl fmt::Display) -> String {
        match self {
            Cluster::MainnetBeta => format!("https://explorer.solana.com/tx/{signature}"),
            Cluster::Localnet => format!(
                "https://explorer.solana.com/tx/{signature}?cluster=custom&customUrl={}",
                self.rpc_url()
            ),
            _ => format!("https://explorer.solana.com/tx/{signature}?cluster={}", self.name()),
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn parse_program_id(value: &str) -> Result<Pubkey> {
    Pubkey::from_str(value)
        .map_err(|e| ReviewClientError::InvalidProgramId(format!("{value:?}: {e}")))
}
