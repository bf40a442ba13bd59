//! Ledger ingestion.
//!
//! Parses loose JSON rows into transaction records. Schema violations
//! (missing required fields) are fatal and reported before any analysis
//! starts; rows with empty endpoint identifiers are skipped and counted.
//! Malformed numeric or time fields never block analysis.

use serde_json::Value;

use super::types::{AnalysisError, TransactionRecord};

/// Fields every ledger row must carry.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "transaction_id",
    "sender_id",
    "receiver_id",
    "amount",
    "timestamp",
];

/// Outcome of parsing one ledger.
#[derive(Debug, Clone, Default)]
pub struct ParsedLedger {
    pub records: Vec<TransactionRecord>,
    /// Rows dropped for empty sender or receiver identifiers.
    pub skipped_rows: usize,
}

/// Parse loose JSON rows into transaction records.
///
/// Fails fast with a schema error if any row is not an object or lacks a
/// required field, without producing partial output. Rows whose sender or
/// receiver id is empty (or not a string) are skipped and counted.
pub fn parse_records(rows: &[Value]) -> Result<ParsedLedger, AnalysisError> {
    // Validate the whole ledger before materializing anything.
    for (index, row) in rows.iter().enumerate() {
        let object = row
            .as_object()
            .ok_or(AnalysisError::NotAnObject { index })?;
        for field in REQUIRED_FIELDS {
            if !object.contains_key(field) {
                return Err(AnalysisError::Schema { index, field });
            }
        }
    }

    let mut ledger = ParsedLedger::default();

    for row in rows {
        let sender_id = row.get("sender_id").and_then(Value::as_str).unwrap_or("");
        let receiver_id = row.get("receiver_id").and_then(Value::as_str).unwrap_or("");

        if sender_id.is_empty() || receiver_id.is_empty() {
            ledger.skipped_rows += 1;
            continue;
        }

        ledger.records.push(TransactionRecord {
            transaction_id: string_field(row, "transaction_id"),
            sender_id: sender_id.to_string(),
            receiver_id: receiver_id.to_string(),
            amount: amount_field(row),
            timestamp: string_field(row, "timestamp"),
        });
    }

    if ledger.skipped_rows > 0 {
        log::warn!(
            "Skipped {} ledger rows with empty sender or receiver ids",
            ledger.skipped_rows
        );
    }

    Ok(ledger)
}

/// String field, tolerating non-string JSON values.
fn string_field(row: &Value, field: &str) -> String {
    match row.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// Amount as f64, tolerating numeric strings. Defaults to 0.0; the score
/// formula never reads it, so a bad amount must not reject the row.
fn amount_field(row: &Value) -> f64 {
    match row.get("amount") {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_well_formed_rows() {
        let rows = vec![json!({
            "transaction_id": "TX_001",
            "sender_id": "A",
            "receiver_id": "B",
            "amount": 250.5,
            "timestamp": "2024-01-01T10:00:00Z",
        })];

        let ledger = parse_records(&rows).unwrap();
        assert_eq!(ledger.records.len(), 1);
        assert_eq!(ledger.skipped_rows, 0);

        let record = &ledger.records[0];
        assert_eq!(record.transaction_id, "TX_001");
        assert_eq!(record.sender_id, "A");
        assert_eq!(record.receiver_id, "B");
        assert_eq!(record.amount, 250.5);
    }

    #[test]
    fn test_missing_field_is_schema_error() {
        let rows = vec![
            json!({
                "transaction_id": "TX_001",
                "sender_id": "A",
                "receiver_id": "B",
                "amount": 1.0,
                "timestamp": "2024-01-01T10:00:00Z",
            }),
            json!({
                "transaction_id": "TX_002",
                "sender_id": "B",
                "receiver_id": "C",
                "amount": 1.0,
            }),
        ];

        let err = parse_records(&rows).unwrap_err();
        match err {
            AnalysisError::Schema { index, field } => {
                assert_eq!(index, 1);
                assert_eq!(field, "timestamp");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_object_row_rejected() {
        let rows = vec![json!("not a record")];
        assert!(matches!(
            parse_records(&rows),
            Err(AnalysisError::NotAnObject { index: 0 })
        ));
    }

    #[test]
    fn test_empty_endpoints_skipped_not_fatal() {
        let rows = vec![
            json!({
                "transaction_id": "TX_001",
                "sender_id": "",
                "receiver_id": "B",
                "amount": 1.0,
                "timestamp": "2024-01-01T10:00:00Z",
            }),
            json!({
                "transaction_id": "TX_002",
                "sender_id": "A",
                "receiver_id": "B",
                "amount": 1.0,
                "timestamp": "2024-01-01T10:00:00Z",
            }),
        ];

        let ledger = parse_records(&rows).unwrap();
        assert_eq!(ledger.records.len(), 1);
        assert_eq!(ledger.skipped_rows, 1);
    }

    #[test]
    fn test_malformed_amount_and_timestamp_tolerated() {
        let rows = vec![json!({
            "transaction_id": "TX_001",
            "sender_id": "A",
            "receiver_id": "B",
            "amount": "not-a-number",
            "timestamp": 1704067200,
        })];

        let ledger = parse_records(&rows).unwrap();
        assert_eq!(ledger.records.len(), 1);
        assert_eq!(ledger.records[0].amount, 0.0);
        assert_eq!(ledger.records[0].timestamp, "1704067200");
    }
}
