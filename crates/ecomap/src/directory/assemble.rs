use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use super::store::RawRow;
use crate::schema::aliases::{self, ID_SENTINEL, PHONE, TIMESTAMP_SENTINELS};
use crate::schema::normalize;

/// Build one output row for the record store, resolving every destination
/// header against the submitted fields. Output ordering follows the
/// destination header order, never the input's.
pub fn assemble_row(headers: &[String], data: &RawRow, now: DateTime<Utc>) -> Vec<Value> {
    headers
        .iter()
        .map(|header| resolve_cell(header, data, now))
        .collect()
}

/// Resolve a single destination header. Precedence, applied identically on
/// every path that assembles a record:
///
/// 1. `id` header: submitted id, or a fresh UUID.
/// 2. timestamp headers: the current server time.
/// 3. alias-table hit against the canonical fields of `data` (phone values
///    get a leading apostrophe so the sheet keeps them as literal text).
/// 4. direct scan over `data`'s own keys, compared normalized.
/// 5. empty string. Unknown headers degrade, they never error.
pub(crate) fn resolve_cell(header: &str, data: &RawRow, now: DateTime<Utc>) -> Value {
    let clean_header = normalize(header);

    if clean_header == ID_SENTINEL {
        return match data.get("id") {
            Some(Value::String(id)) if !id.is_empty() => Value::String(id.clone()),
            Some(value) if !value.is_null() && !matches!(value, Value::String(_)) => value.clone(),
            _ => Value::String(Uuid::new_v4().to_string()),
        };
    }

    if TIMESTAMP_SENTINELS.contains(&clean_header.as_str()) {
        return Value::String(now.to_rfc3339());
    }

    if let Some(key) = aliases::canonical_key_for(&clean_header) {
        if let Some(value) = data.get(key) {
            if key == PHONE {
                return Value::String(format!("'{}", value_as_text(value)));
            }
            return value.clone();
        }
    }

    for (property, value) in data {
        if normalize(property) == clean_header {
            return value.clone();
        }
    }

    Value::String(String::new())
}

fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn raw(pairs: &[(&str, Value)]) -> RawRow {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).single().expect("valid timestamp")
    }

    #[test]
    fn phone_cells_keep_leading_zeros_via_text_marker() {
        let data = raw(&[("phone", json!("01012345678"))]);
        let cell = resolve_cell("Phone", &data, now());
        assert_eq!(cell, json!("'01012345678"));

        let text = cell.as_str().expect("phone stays a string");
        assert!(text.trim_start_matches('\'').starts_with('0'));
        assert_eq!(text.trim_start_matches('\''), "01012345678");
    }

    #[test]
    fn id_header_uses_submitted_id_when_present() {
        let data = raw(&[("id", json!("startup-7"))]);
        assert_eq!(resolve_cell("ID", &data, now()), json!("startup-7"));
    }

    #[test]
    fn id_header_generates_uuid_when_absent_or_empty() {
        for data in [raw(&[]), raw(&[("id", json!(""))])] {
            let cell = resolve_cell("ID", &data, now());
            let generated = cell.as_str().expect("string id");
            assert!(
                Uuid::parse_str(generated).is_ok(),
                "generated id must be a UUID, got {generated:?}"
            );
        }
    }

    #[test]
    fn timestamp_headers_take_the_server_clock() {
        let data = raw(&[("lastUpdate", json!("should be ignored"))]);
        let stamp = now();
        assert_eq!(
            resolve_cell("Timestamp", &data, stamp),
            json!(stamp.to_rfc3339())
        );
        assert_eq!(
            resolve_cell("Last updating Date for Data", &data, stamp),
            json!(stamp.to_rfc3339())
        );
    }

    #[test]
    fn alias_hit_beats_direct_property_scan() {
        let data = raw(&[
            ("name", json!("Canonical Name")),
            ("Startup Name", json!("Literal Name")),
        ]);
        assert_eq!(
            resolve_cell("Startup Name", &data, now()),
            json!("Canonical Name")
        );
    }

    #[test]
    fn direct_scan_matches_normalized_property_names() {
        let data = raw(&[("  Custom  Column ", json!("kept"))]);
        assert_eq!(resolve_cell("custom column", &data, now()), json!("kept"));
    }

    #[test]
    fn unknown_headers_resolve_to_empty_string() {
        let data = raw(&[("name", json!("Acme"))]);
        assert_eq!(resolve_cell("Satellite Uplink", &data, now()), json!(""));
    }

    #[test]
    fn rows_follow_destination_header_order() {
        let headers = vec![
            "Phone".to_string(),
            "Startup Name".to_string(),
            "Unmapped".to_string(),
        ];
        let data = raw(&[
            ("name", json!("Acme")),
            ("phone", json!("0100000000")),
        ]);

        let row = assemble_row(&headers, &data, now());
        assert_eq!(row, vec![json!("'0100000000"), json!("Acme"), json!("")]);
    }

    #[test]
    fn numeric_canonical_values_pass_through_unchanged() {
        let data = raw(&[("employees", json!(12))]);
        assert_eq!(resolve_cell("Employees", &data, now()), json!(12));
    }
}
