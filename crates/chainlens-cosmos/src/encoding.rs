//! Base64 attribute decoding.
//!
//! Tendermint before 0.37 base64-encodes every attribute key and value in
//! `DeliverTx` / `block_results` events. Callers decode those results once
//! before handing them to [`normalize_events`](crate::normalize_events).

use crate::types::{EventAttribute, TxEvent};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;

/// Decode base64 keys and values. A key or value that is not valid base64
/// of UTF-8 text is kept verbatim.
pub fn decode_base64_attributes(events: &[TxEvent]) -> Vec<TxEvent> {
    let mut undecodable = 0usize;
    let decoded = events
        .iter()
        .map(|event| TxEvent {
            event_type: event.event_type.clone(),
            attributes: event
                .attributes
                .iter()
                .map(|a| {
                    let key = decode_text(&a.key);
                    let value = if a.value.is_empty() {
                        Some(String::new())
                    } else {
                        decode_text(&a.value)
                    };
                    if key.is_none() || value.is_none() {
                        undecodable += 1;
                    }
                    EventAttribute {
                        key: key.unwrap_or_else(|| a.key.clone()),
                        value: value.unwrap_or_else(|| a.value.clone()),
                        index: a.index,
                    }
                })
                .collect(),
        })
        .collect();
    if undecodable > 0 {
        debug!("{} attributes were not base64 and were kept as-is", undecodable);
    }
    decoded
}

fn decode_text(s: &str) -> Option<String> {
    let bytes = STANDARD.decode(s).ok()?;
    String::from_utf8(bytes).ok()
}
