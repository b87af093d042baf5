//! # chainlens-cosmos
//!
//! Normalization of Cosmos SDK transaction results.
//!
//! ## Result shapes
//! Cosmos SDK has shipped two layouts for a transaction's events:
//! - **modern** (SDK ≥ 0.50): a flat top-level `events` list; each event
//!   carries its own `msg_index` attribute
//! - **legacy**: `logs`, one entry per message with a `msg_index` and that
//!   message's `events`
//!
//! [`TxResponse::shape`] tells the two apart and [`normalize_events`] folds
//! both into the modern layout, appending a `msg_index` attribute to legacy
//! events so downstream code can group by message either way.
//!
//! ## Attribute values
//! Values are strings on the wire but often carry JSON (coins, packet data),
//! quoted strings, or byte payloads. [`get_attribute_value`] decodes the
//! first two; [`AttributeValue::to_bytes`] handles the last.

pub mod encoding;
pub mod events;
pub mod types;

pub use encoding::decode_base64_attributes;
pub use events::{
    events_by_type, get_attribute_value, get_msg_index_from_event, group_by_msg_index,
    normalize_events, AttributeValue, MSG_INDEX_KEY,
};
pub use types::{EventAttribute, TxEvent, TxLog, TxResponse, TxResultShape};
