//! Ledger event feed ingestion.
//!
//! The ledger collaborator delivers contract events as JSON messages with
//! an `event` kind (`Order`, `Cancel`, `Trade`) and an `args` payload whose
//! numeric fields arrive as decimal strings. This module parses those
//! messages into typed records and appends them to an [`EventLog`].

use serde::{Deserialize, Deserializer, de};
use tracing::{debug, warn};

use crate::Result;
use crate::error::DexlensError;
use crate::events::EventLog;
use crate::models::Address;
use crate::models::order::{Cancellation, Fill, Order, wei_str};

/// A parsed ledger event.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerEvent {
    Order(Order),
    Cancel(Cancellation),
    Trade(Fill),
}

/// Payload of an `Order` event.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderArgs {
    #[serde(deserialize_with = "u64_from_dec")]
    id: u64,
    user: Address,
    token_get: Address,
    #[serde(deserialize_with = "wei_str::deserialize")]
    amount_get: u128,
    token_give: Address,
    #[serde(deserialize_with = "wei_str::deserialize")]
    amount_give: u128,
    #[serde(deserialize_with = "u64_from_dec")]
    timestamp: u64,
}

/// Payload of a `Cancel` event. The ledger echoes the full order field
/// set; only the id and timestamp matter here.
#[derive(Debug, Deserialize)]
struct CancelArgs {
    #[serde(deserialize_with = "u64_from_dec")]
    id: u64,
    #[serde(deserialize_with = "u64_from_dec")]
    timestamp: u64,
}

/// Payload of a `Trade` event.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TradeArgs {
    #[serde(deserialize_with = "u64_from_dec")]
    id: u64,
    user_fill: Address,
    #[serde(deserialize_with = "u64_from_dec")]
    timestamp: u64,
}

/// Parses one feed message into a typed event.
///
/// Returns `Ok(None)` for event kinds this engine does not consume (the
/// contract also emits deposit/withdrawal events); those are logged and
/// skipped rather than treated as errors.
///
/// # Errors
///
/// Returns [`DexlensError::MalformedEvent`] if the message has no `event`
/// kind, and [`DexlensError::Json`] if the `args` payload does not match
/// the kind's expected shape.
pub fn parse_event(raw: &str) -> Result<Option<LedgerEvent>> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    parse_value(value)
}

/// Parses an already-deserialized feed message into a typed event.
///
/// # Errors
///
/// Same conditions as [`parse_event`].
pub fn parse_value(value: serde_json::Value) -> Result<Option<LedgerEvent>> {
    let kind = value
        .get("event")
        .and_then(|e| e.as_str())
        .map(String::from)
        .ok_or_else(|| DexlensError::MalformedEvent("missing event kind".to_string()))?;
    let args = value
        .get("args")
        .cloned()
        .ok_or_else(|| DexlensError::MalformedEvent(format!("{kind} event has no args")))?;

    match kind.as_str() {
        "Order" => {
            let args: OrderArgs = serde_json::from_value(args)?;
            Ok(Some(LedgerEvent::Order(Order {
                id: args.id,
                user: args.user,
                token_get: args.token_get,
                amount_get: args.amount_get,
                token_give: args.token_give,
                amount_give: args.amount_give,
                timestamp: args.timestamp,
            })))
        }
        "Cancel" => {
            let args: CancelArgs = serde_json::from_value(args)?;
            Ok(Some(LedgerEvent::Cancel(Cancellation {
                order_id: args.id,
                timestamp: args.timestamp,
            })))
        }
        "Trade" => {
            let args: TradeArgs = serde_json::from_value(args)?;
            Ok(Some(LedgerEvent::Trade(Fill {
                order_id: args.id,
                filling_user: args.user_fill,
                timestamp: args.timestamp,
            })))
        }
        other => {
            debug!(event = other, "skipping unconsumed ledger event");
            Ok(None)
        }
    }
}

/// Appends a parsed event to the log.
pub fn apply_event(log: &mut EventLog, event: LedgerEvent) {
    match event {
        LedgerEvent::Order(order) => log.append_order(order),
        LedgerEvent::Cancel(cancellation) => log.append_cancellation(cancellation),
        LedgerEvent::Trade(fill) => log.append_fill(fill),
    }
}

/// Parses one feed message and appends it to the log.
///
/// # Errors
///
/// Propagates the errors of [`parse_event`].
pub fn apply_json(log: &mut EventLog, raw: &str) -> Result<()> {
    if let Some(event) = parse_event(raw)? {
        apply_event(log, event);
    }
    Ok(())
}

/// Parses a JSON array of feed messages and appends each to the log.
///
/// Malformed elements are logged and skipped so one bad event cannot stall
/// the feed. Returns the number of events applied.
///
/// # Errors
///
/// Returns [`DexlensError::Json`] if `raw` is not a JSON array.
pub fn apply_batch(log: &mut EventLog, raw: &str) -> Result<usize> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw)?;

    let mut applied = 0;
    for value in values {
        match parse_value(value) {
            Ok(Some(event)) => {
                apply_event(log, event);
                applied += 1;
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "skipping malformed ledger event"),
        }
    }
    Ok(applied)
}

/// Deserializes a `u64` delivered as a decimal string.
fn u64_from_dec<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u64, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse()
        .map_err(|e| de::Error::custom(format!("invalid integer {raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER_JSON: &str = r#"{
        "event": "Order",
        "args": {
            "id": "1",
            "user": "0xAAA0000000000000000000000000000000000aaa",
            "tokenGet": "0x1110000000000000000000000000000000000111",
            "amountGet": "100000000000000000000",
            "tokenGive": "0x0000000000000000000000000000000000000000",
            "amountGive": "1000000000000000000",
            "timestamp": "1700000000"
        }
    }"#;

    #[test]
    fn parses_order_event() {
        let event = parse_event(ORDER_JSON).unwrap().unwrap();
        let LedgerEvent::Order(order) = event else {
            panic!("expected an order event");
        };
        assert_eq!(order.id, 1);
        assert_eq!(order.amount_get, 100_000_000_000_000_000_000);
        assert!(order.token_give.is_ether());
        // Address normalized to lowercase
        assert_eq!(order.user.as_str(), "0xaaa0000000000000000000000000000000000aaa");
    }

    #[test]
    fn parses_cancel_event() {
        let raw = r#"{"event": "Cancel", "args": {"id": "7", "timestamp": "1700000100"}}"#;
        let event = parse_event(raw).unwrap().unwrap();
        assert_eq!(
            event,
            LedgerEvent::Cancel(Cancellation {
                order_id: 7,
                timestamp: 1_700_000_100,
            })
        );
    }

    #[test]
    fn parses_trade_event() {
        let raw = r#"{
            "event": "Trade",
            "args": {
                "id": "3",
                "userFill": "0xBBB0000000000000000000000000000000000bbb",
                "timestamp": "1700000200"
            }
        }"#;
        let event = parse_event(raw).unwrap().unwrap();
        let LedgerEvent::Trade(fill) = event else {
            panic!("expected a trade event");
        };
        assert_eq!(fill.order_id, 3);
        assert_eq!(fill.timestamp, 1_700_000_200);
    }

    #[test]
    fn unconsumed_events_are_skipped() {
        let raw = r#"{"event": "Deposit", "args": {"user": "0x0", "amount": "1"}}"#;
        assert_eq!(parse_event(raw).unwrap(), None);
    }

    #[test]
    fn missing_event_kind_is_an_error() {
        let err = parse_event(r#"{"args": {}}"#).unwrap_err();
        assert!(matches!(err, DexlensError::MalformedEvent(_)));
    }

    #[test]
    fn malformed_args_are_an_error() {
        let raw = r#"{"event": "Cancel", "args": {"id": "not-a-number", "timestamp": "0"}}"#;
        assert!(matches!(
            parse_event(raw).unwrap_err(),
            DexlensError::Json(_)
        ));
    }

    #[test]
    fn apply_json_appends_to_log() {
        let mut log = EventLog::new();
        apply_json(&mut log, ORDER_JSON).unwrap();
        assert_eq!(log.orders().len(), 1);
        assert_eq!(log.version(), 1);
    }

    #[test]
    fn parse_value_matches_parse_event() {
        let value: serde_json::Value = serde_json::from_str(ORDER_JSON).unwrap();
        let from_value = parse_value(value).unwrap();
        let from_str = parse_event(ORDER_JSON).unwrap();
        assert_eq!(from_value, from_str);
    }

    #[test]
    fn apply_batch_skips_bad_elements() {
        let raw = r#"[
            {"event": "Cancel", "args": {"id": "1", "timestamp": "10"}},
            {"event": "Cancel", "args": {"id": "oops", "timestamp": "10"}},
            {"event": "Cancel", "args": {"id": "2", "timestamp": "20"}}
        ]"#;
        let mut log = EventLog::new();
        let applied = apply_batch(&mut log, raw).unwrap();
        assert_eq!(applied, 2);
        assert_eq!(log.cancellations().len(), 2);
    }
}
