use std::{
    path::{Path, PathBuf},
    process::ExitCode,
    time::Duration,
};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use log::{error, info, warn};
use movie_review_client::{
    Wallet,
    config::{AIRDROP_LAMPORTS, Cluster, DEFAULT_PROGRAM_ID, parse_program_id},
    instruction::{MAX_RATING, MIN_RATING},
    transactions::{add_comment, add_review, fetch_review, update_review},
};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::signature::{Keypair, Signer};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Submit reviews and comments to the movie review program",
    long_about = None
)]
struct Args {
    /// Cluster to send transactions to
    #[arg(long, value_enum, default_value_t = Cluster::Devnet)]
    cluster: Cluster,

    #[arg(long, default_value = DEFAULT_PROGRAM_ID)]
    program_id: String,

    /// JSON keypair file; a funded throwaway keypair is used when omitted
    #[arg(long)]
    keypair: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    AddReview {
        title: String,
        #[arg(value_parser = rating_parser())]
        rating: u8,
        description: String,
    },
    UpdateReview {
        title: String,
        #[arg(value_parser = rating_parser())]
        rating: u8,
        description: String,
    },
    AddComment {
        title: String,
        comment: String,
    },
    ShowReview {
        title: String,
    },
}

fn rating_parser() -> clap::builder::RangedI64ValueParser<u8> {
    clap::value_parser!(u8).range(i64::from(MIN_RATING)..=i64::from(MAX_RATING))
}

fn load_keypair(path: &Path) -> anyhow::Result<Keypair> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read keypair file {}", path.display()))?;
    let bytes: Vec<u8> =
        serde_json::from_str(&contents).context("Keypair file is not a JSON byte array")?;
    Keypair::try_from(bytes.as_slice()).context("Keypair file does not hold a valid keypair")
}

async fn fund_keypair(rpc: &RpcClient, cluster: Cluster) -> anyhow::Result<Keypair> {
    if !cluster.supports_airdrop() {
        bail!("{cluster} does not serve airdrops, pass --keypair");
    }
    let payer = Keypair::new();
    info!("requesting airdrop for generated keypair {}", payer.pubkey());

    let airdrop_signature = rpc
        .request_airdrop(&payer.pubkey(), AIRDROP_LAMPORTS)
        .await
        .context("Failed to request airdrop")?;

    // Wait for airdrop confirmation.
    for _ in 0..10 {
        if rpc
            .confirm_transaction(&airdrop_signature)
            .await
            .context("Couldn't confirm airdrop")?
        {
            return Ok(payer);
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
    }
    warn!("airdrop {airdrop_signature} not confirmed yet, continuing");
    Ok(payer)
}

async fn run(args: Args) -> anyhow::Result<()> {
    let program_id = parse_program_id(&args.program_id)?;
    let rpc = RpcClient::new(args.cluster.rpc_url().to_string());
    let keypair = match &args.keypair {
        Some(path) => load_keypair(path)?,
        None => fund_keypair(&rpc, args.cluster).await?,
    };
    let wallet = Wallet::new(rpc, keypair);
    info!("using {} on {} (program {program_id})", wallet.pubkey(), args.cluster);

    let signature = match args.cmd {
        Cmd::AddReview { title, rating, description } => {
            add_review(&wallet, &program_id, &title, rating, &description).await?
        }
        Cmd::UpdateReview { title, rating, description } => {
            update_review(&wallet, &program_id, &title, rating, &description).await?
        }
        Cmd::AddComment { title, comment } => {
            add_comment(&wallet, &program_id, &title, &comment).await?
        }
        Cmd::ShowReview { title } => {
            match fetch_review(&wallet, &program_id, &title).await? {
                Some(review) => info!(
                    "{} ({}/5): {} [initialized: {}]",
                    review.title, review.rating, review.description, review.is_initialized
                ),
                None => warn!("no review titled {title:?} for {}", wallet.pubkey()),
            }
            return Ok(());
        }
    };

    info!(
        "You can view your transaction on Solana Explorer at:\n{}",
        args.cluster.explorer_url(&signature)
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    solana_logger::setup_with_default("info");

    match run(Args::parse()).await {
        Ok(()) => {
            info!("Finished successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
