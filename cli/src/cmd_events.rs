//! `chainlens events`: normalize a Cosmos transaction result.

use anyhow::{Context, Result};
use chainlens_cosmos::{
    decode_base64_attributes, events_by_type, get_msg_index_from_event, normalize_events,
    TxResponse,
};
use std::io::Read;

pub fn run(file: &str, event_type: Option<&str>, base64: bool, as_json: bool) -> Result<()> {
    let content = if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading transaction from stdin")?;
        buf
    } else {
        std::fs::read_to_string(file).with_context(|| format!("reading '{file}'"))?
    };

    let mut tx = TxResponse::from_json_str(&content)?;
    if base64 {
        tx.events = decode_base64_attributes(&tx.events);
        for log in &mut tx.logs {
            log.events = decode_base64_attributes(&log.events);
        }
    }

    let events = normalize_events(&tx);
    let selected: Vec<_> = match event_type {
        Some(t) => events_by_type(&events, t).collect(),
        None => events.iter().collect(),
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    if let Some(hash) = &tx.txhash {
        println!("Tx:     {hash}");
    }
    println!("Events: {}", selected.len());
    for event in selected {
        let idx = get_msg_index_from_event(event)
            .map(|i| i.to_string())
            .unwrap_or_else(|| "-".into());
        println!("  [{idx}] {}", event.event_type);
        for attr in &event.attributes {
            println!("      {} = {}", attr.key, attr.value);
        }
    }
    Ok(())
}
