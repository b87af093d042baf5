//! Event unification and attribute decoding.

use crate::types::{EventAttribute, TxEvent, TxResponse, TxResultShape};
use chainlens_core::{
    bytes::{decode_bytes, normalize_recovery_bytes},
    json::parse_json_like,
    text::remove_double_quote,
};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;
use tracing::trace;

/// Attribute key linking an event to the message that emitted it.
pub const MSG_INDEX_KEY: &str = "msg_index";

/// Flatten a transaction result into one event list.
///
/// - modern `events` are returned borrowed, untouched
/// - legacy `logs` are flattened in order; every event without a
///   `msg_index` attribute gets one appended, taken from its log (or the
///   log's position when the log omits it)
/// - otherwise the list is empty
pub fn normalize_events(tx: &TxResponse) -> Cow<'_, [TxEvent]> {
    match tx.shape() {
        TxResultShape::Modern(events) => Cow::Borrowed(events),
        TxResultShape::Legacy(logs) => {
            let mut out = Vec::with_capacity(logs.iter().map(|l| l.events.len()).sum());
            for (position, log) in logs.iter().enumerate() {
                let msg_index = log.msg_index.unwrap_or(position as u64);
                for event in &log.events {
                    let mut event = event.clone();
                    if event.attribute(MSG_INDEX_KEY).is_none() {
                        event
                            .attributes
                            .push(EventAttribute::new(MSG_INDEX_KEY, msg_index.to_string()));
                    }
                    out.push(event);
                }
            }
            trace!("Flattened {} legacy logs into {} events", logs.len(), out.len());
            Cow::Owned(out)
        }
        TxResultShape::Empty => Cow::Borrowed(&[]),
    }
}

/// A decoded attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// The value held a JSON object or array.
    Json(Value),
    /// Anything else, with one pair of wrapping double quotes removed.
    Text(String),
}

impl AttributeValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            AttributeValue::Json(_) => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            AttributeValue::Json(v) => Some(v),
            AttributeValue::Text(_) => None,
        }
    }

    /// Interpret the value as a byte payload: a JSON byte array or
    /// numeric-keyed object, or hex / base64 text.
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        match self {
            AttributeValue::Json(v) => normalize_recovery_bytes(v).map(Cow::into_owned),
            AttributeValue::Text(s) => decode_bytes(s),
        }
    }
}

/// Decode the first attribute named `key`. `None` if there is none.
///
/// Structured JSON (objects and arrays) is returned as [`AttributeValue::Json`];
/// scalars stay text so `"100"` and `100` both read as `"100"`.
pub fn get_attribute_value(attributes: &[EventAttribute], key: &str) -> Option<AttributeValue> {
    let raw = &attributes.iter().find(|a| a.key == key)?.value;
    match parse_json_like(raw) {
        Some(v @ (Value::Object(_) | Value::Array(_))) => Some(AttributeValue::Json(v)),
        _ => Some(AttributeValue::Text(remove_double_quote(raw.trim()).to_string())),
    }
}

/// The event's `msg_index`, if present and a valid non-negative integer.
pub fn get_msg_index_from_event(event: &TxEvent) -> Option<u64> {
    let raw = &event.attribute(MSG_INDEX_KEY)?.value;
    remove_double_quote(raw.trim()).parse().ok()
}

/// Events of one type, in order.
pub fn events_by_type<'a>(
    events: &'a [TxEvent],
    event_type: &'a str,
) -> impl Iterator<Item = &'a TxEvent> + 'a {
    events.iter().filter(move |e| e.event_type == event_type)
}

/// Group events by `msg_index`; events without one are left out.
pub fn group_by_msg_index(events: &[TxEvent]) -> BTreeMap<u64, Vec<&TxEvent>> {
    let mut groups: BTreeMap<u64, Vec<&TxEvent>> = BTreeMap::new();
    for event in events {
        if let Some(idx) = get_msg_index_from_event(event) {
            groups.entry(idx).or_default().push(event);
        }
    }
    groups
}
