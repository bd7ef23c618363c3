// src/specs/mirror.rs
//! Mirror datasets (Senate/House stock-watcher JSON) → candidate trades.
//!
//! Each dataset is an array of flat objects. Field names are renamed onto the
//! canonical ones:
//!
//! | mirror key                     | canonical          |
//! |--------------------------------|--------------------|
//! | `disclosure_date`              | `filing_date`      |
//! | `senator` / `representative`   | `name`             |
//! | `asset_description`            | `company`          |
//! | `ticker`, `type`, `transaction_date` | unchanged    |
//!
//! Missing keys, nulls and non-object elements read as empty strings.

use serde_json::{Map, Value};

use crate::model::RawTrade;

/// Map a mirror payload. Anything that isn't an array yields nothing.
pub fn map_dataset(value: &Value) -> Vec<RawTrade> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(Value::as_object)
        .map(map_object)
        .collect()
}

pub fn map_object(obj: &Map<String, Value>) -> RawTrade {
    let name = Some(text(obj, "senator"))
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| text(obj, "representative"));

    RawTrade {
        ticker: text(obj, "ticker"),
        name,
        company: text(obj, "asset_description"),
        kind: text(obj, "type"),
        filing_date: text(obj, "disclosure_date"),
        transaction_date: text(obj, "transaction_date"),
    }
}

fn text(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => s!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn senate_row_renamed() {
        let v = json!([{
            "transaction_date": "01/02/2024",
            "disclosure_date": "01/05/2024",
            "senator": "Jane Doe",
            "ticker": "AAPL",
            "asset_description": "Apple Inc.",
            "type": "Purchase"
        }]);
        let rows = map_dataset(&v);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Jane Doe");
        assert_eq!(rows[0].company, "Apple Inc.");
        assert_eq!(rows[0].filing_date, "01/05/2024");
        assert_eq!(rows[0].kind, "Purchase");
    }

    #[test]
    fn house_row_uses_representative() {
        let v = json!([{ "representative": "Hon. John Roe", "ticker": "MSFT", "type": "sale_full" }]);
        let rows = map_dataset(&v);
        assert_eq!(rows[0].name, "Hon. John Roe");
        assert_eq!(rows[0].filing_date, "");
    }

    #[test]
    fn tolerates_missing_and_odd_values() {
        let v = json!([{ "ticker": null, "type": 7 }, "not an object", {}]);
        let rows = map_dataset(&v);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].ticker, "");
        assert_eq!(rows[0].kind, "7");
        assert_eq!(rows[1], RawTrade::default());
    }

    #[test]
    fn non_array_payload_is_empty() {
        assert!(map_dataset(&json!({"error": "nope"})).is_empty());
    }
}
