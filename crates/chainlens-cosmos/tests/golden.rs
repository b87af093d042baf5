//! Golden fixture integration tests.
//!
//! Each test loads an LCD `GetTx` response or a bare transaction result from
//! `fixtures/cosmos/` and checks the unified event list.

use chainlens_cosmos::{
    decode_base64_attributes, events_by_type, get_attribute_value, get_msg_index_from_event,
    group_by_msg_index, normalize_events, AttributeValue, TxResponse, TxResultShape,
};
use serde_json::json;
use std::borrow::Cow;
use std::path::PathBuf;

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// The fixtures live two levels above the crate root.
fn fixture_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.pop();
    p.pop();
    p.push("fixtures");
    p.push("cosmos");
    p.push(name);
    p
}

fn load_tx(name: &str) -> TxResponse {
    let path = fixture_path(name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    TxResponse::from_json_str(&content)
        .unwrap_or_else(|e| panic!("cannot parse {}: {e}", path.display()))
}

fn types(events: &[chainlens_cosmos::TxEvent]) -> Vec<&str> {
    events.iter().map(|e| e.event_type.as_str()).collect()
}

// ─── Legacy logs ──────────────────────────────────────────────────────────────

#[test]
fn legacy_logs_flatten_in_order() {
    let tx = load_tx("legacy_tx.json");
    assert_eq!(tx.height, Some(9_876_543));
    assert_eq!(tx.code, Some(0));
    assert!(matches!(tx.shape(), TxResultShape::Legacy(logs) if logs.len() == 2));

    let events = normalize_events(&tx);
    assert!(matches!(events, Cow::Owned(_)));
    assert_eq!(types(&events), ["message", "link", "transfer"]);
}

#[test]
fn legacy_events_carry_their_log_index() {
    let tx = load_tx("legacy_tx.json");
    let events = normalize_events(&tx);

    // the first log omits msg_index (proto JSON drops zero values)
    let indexes: Vec<Option<u64>> = events.iter().map(get_msg_index_from_event).collect();
    assert_eq!(indexes, [Some(0), Some(0), Some(1)]);

    // appended last, after the original attributes
    let transfer = &events[2];
    assert_eq!(transfer.attributes.len(), 3);
    assert_eq!(transfer.attributes[2].key, "msg_index");
    assert_eq!(transfer.attributes[2].value, "1");

    let groups = group_by_msg_index(&events);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[&0].len(), 2);
    assert_eq!(groups[&1][0].event_type, "transfer");
}

#[test]
fn legacy_attribute_values_decode() {
    let tx = load_tx("legacy_tx.json");
    let events = normalize_events(&tx);
    let link = events_by_type(&events, "link").next().expect("link event");

    assert_eq!(
        get_attribute_value(&link.attributes, "deposit_address"),
        Some(AttributeValue::Text("axelar1deposit".into()))
    );
    assert_eq!(
        get_attribute_value(&link.attributes, "asset"),
        Some(AttributeValue::Json(json!({"denom": "uaxl", "amount": "5"})))
    );
    assert_eq!(get_attribute_value(&link.attributes, "missing"), None);
}

// ─── Modern events ────────────────────────────────────────────────────────────

#[test]
fn modern_events_pass_through_untouched() {
    let tx = load_tx("modern_tx.json");
    assert_eq!(tx.height, Some(12_000_000));

    let events = normalize_events(&tx);
    assert!(matches!(events, Cow::Borrowed(_)));
    assert_eq!(
        types(&events),
        ["tx", "message", "axelar.evm.v1beta1.ContractCallApproved"]
    );
    assert_eq!(events.as_ref(), tx.events.as_slice());
    assert_eq!(events[0].attributes[0].index, Some(true));
}

#[test]
fn modern_events_group_by_message() {
    let tx = load_tx("modern_tx.json");
    let events = normalize_events(&tx);

    assert_eq!(get_msg_index_from_event(&events[0]), None);
    let groups = group_by_msg_index(&events);
    assert_eq!(groups.len(), 1);
    assert_eq!(
        groups[&0].iter().map(|e| e.event_type.as_str()).collect::<Vec<_>>(),
        ["message", "axelar.evm.v1beta1.ContractCallApproved"]
    );
}

#[test]
fn payload_attributes_decode_to_bytes() {
    let tx = load_tx("modern_tx.json");
    let events = normalize_events(&tx);
    let approved = events_by_type(&events, "axelar.evm.v1beta1.ContractCallApproved")
        .next()
        .expect("approval event");

    // numeric-keyed object from a JS Uint8Array
    let payload = get_attribute_value(&approved.attributes, "payload").unwrap();
    assert!(payload.as_json().is_some());
    assert_eq!(payload.to_bytes(), Some(vec![1, 2, 3]));

    let hash = get_attribute_value(&approved.attributes, "payload_hash").unwrap();
    assert_eq!(hash.as_text(), Some("0x0a0b0c"));
    assert_eq!(hash.to_bytes(), Some(vec![0x0a, 0x0b, 0x0c]));
}

#[test]
fn normalizing_twice_changes_nothing() {
    for name in ["legacy_tx.json", "modern_tx.json"] {
        let tx = load_tx(name);
        let once = normalize_events(&tx).into_owned();
        let again = TxResponse {
            events: once.clone(),
            ..TxResponse::default()
        };
        assert_eq!(normalize_events(&again).as_ref(), once.as_slice(), "{name}");
    }
}

// ─── Base64 attributes ────────────────────────────────────────────────────────

#[test]
fn base64_attributes_decode_before_normalizing() {
    let mut tx = load_tx("base64_tx.json");
    assert_eq!(tx.height, Some(4_500_000));
    assert_eq!(get_attribute_value(&tx.events[0].attributes, "amount"), None);

    tx.events = decode_base64_attributes(&tx.events);
    let events = normalize_events(&tx);
    let transfer = &events[0];
    assert_eq!(
        get_attribute_value(&transfer.attributes, "recipient"),
        Some(AttributeValue::Text("axelar1recipient".into()))
    );
    assert_eq!(
        get_attribute_value(&transfer.attributes, "amount"),
        Some(AttributeValue::Text("1000000uaxl".into()))
    );
    assert_eq!(get_msg_index_from_event(transfer), Some(0));
    assert_eq!(transfer.attributes[0].index, Some(true));
}

// ─── Shapes ───────────────────────────────────────────────────────────────────

#[test]
fn bare_and_wrapped_results_parse_alike() {
    let wrapped = load_tx("modern_tx.json");
    let bare = serde_json::to_value(&wrapped).unwrap();
    assert_eq!(TxResponse::from_value(&bare).unwrap(), wrapped);
}

#[test]
fn null_events_fall_back_to_logs() {
    let tx = TxResponse::from_json_str(
        r#"{"events":null,"logs":[{"msg_index":0,"events":[{"type":"t","attributes":[{"key":"a","value":1}]}]}]}"#,
    )
    .unwrap();
    let events = normalize_events(&tx);
    assert_eq!(types(&events), ["t"]);
    assert_eq!(
        get_attribute_value(&events[0].attributes, "a"),
        Some(AttributeValue::Text("1".into()))
    );
    assert_eq!(get_msg_index_from_event(&events[0]), Some(0));
}

#[test]
fn empty_and_malformed_results() {
    let tx = TxResponse::from_value(&json!({"txhash": "AB", "height": "-1"})).unwrap();
    assert_eq!(tx.shape(), TxResultShape::Empty);
    assert_eq!(tx.height, None);
    assert!(normalize_events(&tx).is_empty());

    assert!(TxResponse::from_value(&json!([1, 2, 3])).is_err());
    assert!(TxResponse::from_json_str("{not json").is_err());
}
