// Tests for the static cluster and program id configuration

use movie_review_client::{
    ReviewClientError,
    config::{Cluster, DEFAULT_PROGRAM_ID, parse_program_id},
};
use solana_program::pubkey::Pubkey;
use std::str::FromStr;

const SIGNATURE: &str = "5VERv8NMvzbJMEkV8xnrLkEaWRtSz9CosKDYjCJjBRnbJLgp8uirBgmQpjKhoR4t";

#[test]
fn test_explorer_url_per_cluster() {
    assert_eq!(
        Cluster::Devnet.explorer_url(&SIGNATURE),
        format!("https://explorer.solana.com/tx/{SIGNATURE}?cluster=devnet")
    );
    assert_eq!(
        Cluster::Testnet.explorer_url(&SIGNATURE),
        format!("https://explorer.solana.com/tx/{SIGNATURE}?cluster=testnet")
    );
    assert_eq!(
        Cluster::MainnetBeta.explorer_url(&SIGNATURE),
        format!("https://explorer.solana.com/tx/{SIGNATURE}")
    );
    assert_eq!(
        Cluster::Localnet.explorer_url(&SIGNATURE),
        format!(
            "https://explorer.solana.com/tx/{SIGNATURE}?cluster=custom&customUrl={}",
            "http://127.0.0.1:8899"
        )
    );
}

#[test]
fn test_cluster_defaults_and_names() {
    assert_eq!(Cluster::default(), Cluster::Devnet);
    assert_eq!(Cluster::Devnet.rpc_url(), "https://api.devnet.solana.com");
    assert_eq!(Cluster::MainnetBeta.to_string(), "mainnet-beta");
    assert!(Cluster::Localnet.supports_airdrop());
    assert!(!Cluster::MainnetBeta.supports_airdrop());
}

#[test]
fn test_parse_default_program_id() {
    let program_id = parse_program_id(DEFAULT_PROGRAM_ID).unwrap();
    assert_eq!(program_id, Pubkey::from_str(DEFAULT_PROGRAM_ID).unwrap());
}

#[test]
fn test_parse_invalid_program_id() {
    let too_long = "1".repeat(64);
    for value in ["", "not-a-pubkey", "0OIl", too_long.as_str()] {
        let result = parse_program_id(value);
        assert!(
            matches!(result, Err(ReviewClientError::InvalidProgramId(_))),
            "{value:?} gave {result:?}"
        );
    }
}
