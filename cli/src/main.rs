//! ChainLens CLI. Resolves explorer search input against chain and asset
//! snapshots and normalizes Cosmos transaction results.
//!
//! # Commands
//! ```text
//! chainlens classify <INPUT>
//! chainlens chain    <KEY> [--loose]
//! chainlens link     <CHAIN> <block|address|contract|tx> <VALUE>
//! chainlens asset    <KEY> [--its]
//! chainlens events   --file <tx.json|-> [--type <T>] [--base64]
//! chainlens bytes    <VALUE>
//! chainlens info
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::debug;

mod cmd_events;
mod cmd_resolve;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(
    name = "chainlens",
    about = "Chain & asset resolution for multi-chain explorers",
    long_about = "
ChainLens CLI: classify search input, resolve chain / asset keys against
API snapshots, build explorer links, and normalize Cosmos tx events.

ENVIRONMENT VARIABLES:
  CHAINLENS_CHAINS            Chains snapshot (JSON)
  CHAINLENS_ASSETS            Assets snapshot (JSON)
  CHAINLENS_ITS_ASSETS        ITS assets snapshot (JSON)
  CHAINLENS_HOME_PREFIX       Home chain bech32 prefix (default: axelar)
  CHAINLENS_VALIDATOR_PREFIX  Validator operator prefix (default: axelarvaloper)
  CHAINLENS_LOG               Log level (default: warn)
  CHAINLENS_LOG_JSON          Emit JSON logs (true/false)
",
    version
)]
struct Cli {
    /// YAML config file (default: ./chainlens.yaml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Chains snapshot, overrides config and environment
    #[arg(long, global = true)]
    chains: Option<PathBuf>,

    /// Assets snapshot, overrides config and environment
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    /// ITS assets snapshot, overrides config and environment
    #[arg(long, global = true)]
    its_assets: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a search string (tx hash, address, block height, …)
    Classify {
        input: String,
    },

    /// Resolve a chain key (id, alias, chain id, name) to its descriptor
    Chain {
        key: String,
        /// Fall back to address / chain-id prefix matching
        #[arg(long)]
        loose: bool,
    },

    /// Build an explorer link for a chain
    Link {
        chain: String,
        kind: LinkArg,
        value: String,
    },

    /// Resolve an asset by denom, symbol or address
    Asset {
        key: String,
        /// Look up Interchain Token Service assets instead
        #[arg(long)]
        its: bool,
    },

    /// Normalize the events of a Cosmos transaction result
    Events {
        /// Transaction JSON file, or `-` for stdin
        #[arg(short, long)]
        file: String,
        /// Only show events of this type
        #[arg(long = "type")]
        event_type: Option<String>,
        /// Attribute keys / values are base64 (Tendermint < 0.37)
        #[arg(long)]
        base64: bool,
    },

    /// Decode a byte payload (hex, base64, JSON array or keyed object)
    Bytes {
        value: String,
    },

    /// Show loaded directories and ambiguous keys
    Info,
}

#[derive(Clone, Copy, ValueEnum)]
enum LinkArg {
    Block,
    Address,
    Contract,
    Tx,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = CliConfig::load(cli.config.as_deref())?;
    cfg.apply_env(|k| std::env::var(k).ok());
    if let Some(p) = cli.chains {
        cfg.chains = Some(p);
    }
    if let Some(p) = cli.assets {
        cfg.assets = Some(p);
    }
    if let Some(p) = cli.its_assets {
        cfg.its_assets = Some(p);
    }
    if cli.verbose {
        cfg.log.level = "debug".into();
    }
    // a subscriber installed by an embedding process wins
    let _ = chainlens_observability::init_tracing(&cfg.log);
    if let Some(path) = &cfg.source {
        debug!("Loaded config from {}", path.display());
    }

    match cli.command {
        Commands::Classify { input } => cmd_resolve::classify(&cfg, &input, cli.json),
        Commands::Chain { key, loose } => cmd_resolve::chain(&cfg, &key, loose, cli.json),
        Commands::Link { chain, kind, value } => {
            let kind = match kind {
                LinkArg::Block => chainlens_core::LinkKind::Block,
                LinkArg::Address => chainlens_core::LinkKind::Address,
                LinkArg::Contract => chainlens_core::LinkKind::Contract,
                LinkArg::Tx => chainlens_core::LinkKind::Transaction,
            };
            cmd_resolve::link(&cfg, &chain, kind, &value)
        }
        Commands::Asset { key, its } => cmd_resolve::asset(&cfg, &key, its, cli.json),
        Commands::Events { file, event_type, base64 } => {
            cmd_events::run(&file, event_type.as_deref(), base64, cli.json)
        }
        Commands::Bytes { value } => cmd_bytes(&value, cli.json),
        Commands::Info => cmd_resolve::info(&cfg),
    }
}

fn cmd_bytes(value: &str, as_json: bool) -> Result<()> {
    let bytes = chainlens_core::decode_bytes(value)
        .ok_or_else(|| anyhow::anyhow!("not a recognizable byte payload"))?;
    if as_json {
        println!("{}", serde_json::to_string(&bytes)?);
    } else {
        println!("0x{}", hex::encode(&bytes));
        println!("{} bytes", bytes.len());
    }
    Ok(())
}
