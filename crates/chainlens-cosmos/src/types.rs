//! Transaction result types as served by a Cosmos LCD / RPC gateway.

use chainlens_core::error::DecodeError;
use chainlens_core::serde_helpers::{default_on_null, lenient_u64, string_or_null};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One `key = value` pair of an ABCI event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttribute {
    #[serde(deserialize_with = "string_or_null")]
    pub key: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<bool>,
}

impl EventAttribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            index: None,
        }
    }
}

/// An ABCI event; attribute order is source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default, deserialize_with = "default_on_null")]
    pub attributes: Vec<EventAttribute>,
}

impl TxEvent {
    pub fn new(event_type: impl Into<String>, attributes: Vec<EventAttribute>) -> Self {
        Self {
            event_type: event_type.into(),
            attributes,
        }
    }

    /// First attribute with `key`.
    pub fn attribute(&self, key: &str) -> Option<&EventAttribute> {
        self.attributes.iter().find(|a| a.key == key)
    }
}

/// Legacy per-message log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxLog {
    /// Proto JSON drops zero values, so the first message's index is often
    /// missing.
    #[serde(default, deserialize_with = "lenient_u64", skip_serializing_if = "Option::is_none")]
    pub msg_index: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
    #[serde(default, deserialize_with = "default_on_null")]
    pub events: Vec<TxEvent>,
}

/// A transaction result in either layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txhash: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64", skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64", skip_serializing_if = "Option::is_none")]
    pub code: Option<u64>,
    #[serde(default, deserialize_with = "default_on_null")]
    pub events: Vec<TxEvent>,
    #[serde(default, deserialize_with = "default_on_null")]
    pub logs: Vec<TxLog>,
}

/// Which layout a [`TxResponse`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxResultShape<'a> {
    Modern(&'a [TxEvent]),
    Legacy(&'a [TxLog]),
    Empty,
}

impl TxResponse {
    /// Modern `events` win whenever non-empty.
    pub fn shape(&self) -> TxResultShape<'_> {
        if !self.events.is_empty() {
            TxResultShape::Modern(&self.events)
        } else if !self.logs.is_empty() {
            TxResultShape::Legacy(&self.logs)
        } else {
            TxResultShape::Empty
        }
    }

    /// Decode an LCD `GetTx` body (`{"tx_response": {...}}`) or a bare
    /// transaction result.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let inner = value.get("tx_response").unwrap_or(value);
        if !inner.is_object() {
            return Err(DecodeError::UnexpectedShape {
                reason: format!("expected a JSON object, got {}", json_kind(inner)),
            });
        }
        Ok(Self::deserialize(inner)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(&value)
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
