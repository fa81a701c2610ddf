use serde_json::Value;
use uuid::Uuid;

use super::domain::StartupRecord;
use super::store::RawRow;
use crate::schema::aliases;
use crate::schema::{normalize, translate_label};

/// Map one raw sheet row (keyed by literal header text) onto the canonical
/// record used for display. Categorical fields are run through the bilingual
/// label table; unrecognized labels pass through. The input is not mutated.
pub fn display_record(raw: &RawRow) -> StartupRecord {
    StartupRecord {
        id: text(raw, "id").unwrap_or_else(|| Uuid::new_v4().to_string()),
        name: text(raw, "name").unwrap_or_default(),
        ceo_name: text(raw, "ceoName").unwrap_or_default(),
        ceo_gender: translated(raw, "ceoGender"),
        industry: translated(raw, "industry"),
        governorate: translated(raw, "governorate"),
        phone: text(raw, "phone")
            .map(|value| strip_text_marker(&value))
            .unwrap_or_default(),
        email: text(raw, "email").unwrap_or_default(),
        employees: count(raw, "employees"),
        revenue: number(raw, "revenue"),
        profitability: translated(raw, "profitability"),
        description: text(raw, "description").unwrap_or_default(),
        startup_type: translated(raw, "startupType"),
        website: text(raw, "website").unwrap_or_default(),
        open_closed: translated(raw, "openClosed"),
        founding_date: text(raw, "foundingDate").unwrap_or_default(),
        legal_status: translated(raw, "legalStatus"),
        team_size: count(raw, "teamSize"),
        female_founders: count(raw, "femaleFounders"),
        male_founders: count(raw, "maleFounders"),
        freelancers_count: count(raw, "freelancersCount"),
        has_dedicated_place: translated(raw, "hasDedicatedPlace"),
        workplace_type: translated(raw, "workplaceType"),
        funding_entity: text(raw, "fundingEntity").unwrap_or_default(),
        funding_raised: text(raw, "fundingRaised").unwrap_or_default(),
        monthly_income: text(raw, "monthlyIncome").unwrap_or_default(),
        service_provider: translated(raw, "serviceProvider"),
        last_funding_date: text(raw, "lastFundingDate").unwrap_or_default(),
        logo: text(raw, "logo").unwrap_or_default(),
        last_update: text(raw, "lastUpdate").unwrap_or_default(),
    }
}

/// Find the first alias of `key` present in the row with a non-empty value.
/// Alias order encodes which historical spelling wins when several columns
/// coexist in one export.
fn resolve_value<'a>(raw: &'a RawRow, key: &str) -> Option<&'a Value> {
    for alias in aliases::aliases_for(key) {
        let wanted = normalize(alias);
        for (property, value) in raw {
            if normalize(property) == wanted && !is_blank(value) {
                return Some(value);
            }
        }
    }
    // The canonical key itself may appear as a property, e.g. on re-imported
    // API payloads.
    raw.get(key).filter(|value| !is_blank(value))
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

fn text(raw: &RawRow, key: &str) -> Option<String> {
    resolve_value(raw, key).map(|value| match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    })
}

fn translated(raw: &RawRow, key: &str) -> String {
    text(raw, key).map(|value| translate_label(&value)).unwrap_or_default()
}

fn number(raw: &RawRow, key: &str) -> f64 {
    resolve_value(raw, key).map(parse_number).unwrap_or(0.0)
}

fn count(raw: &RawRow, key: &str) -> u32 {
    let parsed = number(raw, key);
    if parsed.is_finite() && parsed > 0.0 {
        parsed.floor() as u32
    } else {
        0
    }
}

/// Numeric coercion shared with the import path: keep digits and dots,
/// parse, default to zero on failure.
pub(crate) fn parse_number(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().map(f64::floor).unwrap_or(0.0),
        Value::String(text) => {
            let cleaned: String = text
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            cleaned.parse::<f64>().unwrap_or(0.0)
        }
        _ => 0.0,
    }
}

/// The sheet stores phone numbers behind a leading apostrophe so they stay
/// literal text; the marker is a store directive, not data.
fn strip_text_marker(value: &str) -> String {
    value.strip_prefix('\'').unwrap_or(value).to_string()
}

/// Sorted distinct non-empty values, for filter dropdowns.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut collected: Vec<String> = values
        .filter(|value| !value.trim().is_empty())
        .map(|value| value.to_string())
        .collect();
    collected.sort();
    collected.dedup();
    collected
}

pub fn distinct_industries(records: &[StartupRecord]) -> Vec<String> {
    distinct(records.iter().map(|record| record.industry.as_str()))
}

pub fn distinct_governorates(records: &[StartupRecord]) -> Vec<String> {
    distinct(records.iter().map(|record| record.governorate.as_str()))
}

pub fn distinct_service_providers(records: &[StartupRecord]) -> Vec<String> {
    distinct(records.iter().map(|record| record.service_provider.as_str()))
}

pub fn distinct_funding_entities(records: &[StartupRecord]) -> Vec<String> {
    distinct(records.iter().map(|record| record.funding_entity.as_str()))
}
