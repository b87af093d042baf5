//! `chainlens classify | chain | link | asset | info`

use crate::config::CliConfig;
use anyhow::{anyhow, Result};
use chainlens_core::LinkKind;
use chainlens_directory::{Classifier, Match};

pub fn classify(cfg: &CliConfig, input: &str, as_json: bool) -> Result<()> {
    let chains = cfg.chain_directory()?;
    let classifier = Classifier::with_config(&chains, cfg.classifier.clone());
    let classified = classifier
        .classify(input)
        .ok_or_else(|| anyhow!("empty input"))?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&classified)?);
    } else {
        println!("Input: {}", classified.input);
        println!("Kind:  {:?}", classified.kind);
    }
    Ok(())
}

pub fn chain(cfg: &CliConfig, key: &str, loose: bool, as_json: bool) -> Result<()> {
    let chains = cfg.chain_directory()?;
    let mode = if loose { Match::Loose } else { Match::Exact };
    let id = chains
        .chain_key(key, mode)
        .ok_or_else(|| anyhow!("empty chain key"))?;

    match chains.get(&id) {
        Some(chain) if as_json => println!("{}", serde_json::to_string_pretty(chain)?),
        Some(chain) => {
            println!("✓ '{key}' → {}", chain.id);
            if let Some(name) = &chain.name {
                println!("  Name:       {name}");
            }
            if let Some(chain_id) = &chain.chain_id {
                println!("  Chain ID:   {chain_id}");
            }
            println!("  Type:       {}", chain.chain_type);
            if let Some(prefix) = &chain.prefix_address {
                println!("  Prefix:     {prefix}");
            }
            if !chain.aliases.is_empty() {
                println!("  Aliases:    {}", chain.aliases.join(", "));
            }
            if let Some(url) = &chain.explorer.url {
                println!("  Explorer:   {url}");
            }
        }
        None => {
            eprintln!("✗ '{key}' not found (pseudo-id: {id})");
            std::process::exit(1);
        }
    }
    Ok(())
}

pub fn link(cfg: &CliConfig, chain: &str, kind: LinkKind, value: &str) -> Result<()> {
    let chains = cfg.chain_directory()?;
    let descriptor = chains
        .chain_data(chain, Match::Exact)
        .ok_or_else(|| anyhow!("chain '{chain}' not found"))?;
    let url = descriptor
        .explorer_link(kind, value)
        .ok_or_else(|| anyhow!("chain '{}' has no explorer configured", descriptor.id))?;
    println!("{url}");
    Ok(())
}

pub fn asset(cfg: &CliConfig, key: &str, its: bool, as_json: bool) -> Result<()> {
    if its {
        let dir = cfg.its_asset_directory()?;
        let Some(asset) = dir.its_asset_data(key) else {
            eprintln!("✗ ITS asset '{key}' not found");
            std::process::exit(1);
        };
        if as_json {
            println!("{}", serde_json::to_string_pretty(asset)?);
        } else {
            println!("✓ '{key}' → {}", asset.id);
            println!("  Symbol:   {}", asset.symbol.as_deref().unwrap_or("-"));
            for (chain, token) in &asset.chains {
                println!(
                    "    - {chain}: {}",
                    token.token_address.as_deref().unwrap_or("-")
                );
            }
        }
        return Ok(());
    }

    let dir = cfg.asset_directory()?;
    let Some(asset) = dir.asset_data(key) else {
        eprintln!("✗ asset '{key}' not found");
        std::process::exit(1);
    };
    if as_json {
        println!("{}", serde_json::to_string_pretty(asset)?);
    } else {
        println!("✓ '{key}' → {}", asset.id);
        println!("  Symbol:   {}", asset.symbol.as_deref().unwrap_or("-"));
        if let Some(decimals) = asset.decimals {
            println!("  Decimals: {decimals}");
        }
        for (chain, addr) in &asset.addresses {
            let shown = addr
                .address
                .as_deref()
                .or(addr.ibc_denom.as_deref())
                .unwrap_or("-");
            println!("    - {chain}: {shown}");
        }
    }
    Ok(())
}

pub fn info(cfg: &CliConfig) -> Result<()> {
    let chains = cfg.chain_directory()?;
    let assets = cfg.asset_directory()?;
    let its = cfg.its_asset_directory()?;

    println!("ChainLens v{}", env!("CARGO_PKG_VERSION"));
    println!("  Chains:     {}", chains.len());
    println!("  Assets:     {}", assets.len());
    println!("  ITS assets: {}", its.len());
    println!(
        "  Prefixes:   home={} validator={}",
        cfg.classifier.home_prefix, cfg.classifier.validator_prefix
    );

    let ambiguities = chains.ambiguities();
    if !ambiguities.is_empty() {
        println!("  Ambiguous chain keys (first listed wins):");
        for a in ambiguities {
            println!("    - {:?} '{}': {}", a.kind, a.value, a.chains.join(", "));
        }
    }
    Ok(())
}
