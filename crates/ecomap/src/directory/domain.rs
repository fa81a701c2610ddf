use serde::{Deserialize, Serialize};

use crate::schema::normalize;

/// Sentinel accepted in `funding_raised` to mean "intentionally no funding",
/// as opposed to a missing value.
pub const NO_FUNDING_SENTINEL: &str = "None";

/// Sentinel used for `last_funding_date` when the date is not public.
pub const UNKNOWN_FUNDING_DATE: &str = "Unknown / Not Disclosed";

/// The canonical startup/MSME record. Field names mirror the canonical keys
/// in the alias table; the serialized form is what the HTTP contract calls
/// `canonicalFields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StartupRecord {
    pub id: String,
    pub name: String,
    pub ceo_name: String,
    pub ceo_gender: String,
    pub industry: String,
    pub governorate: String,
    /// Kept as text end to end; the sheet store would otherwise strip the
    /// leading zero of Egyptian mobile numbers.
    pub phone: String,
    pub email: String,
    pub employees: u32,
    pub revenue: f64,
    pub profitability: String,
    pub description: String,
    pub startup_type: String,
    pub website: String,
    pub open_closed: String,
    pub founding_date: String,
    pub legal_status: String,
    pub team_size: u32,
    pub female_founders: u32,
    pub male_founders: u32,
    pub freelancers_count: u32,
    pub has_dedicated_place: String,
    pub workplace_type: String,
    pub funding_entity: String,
    pub funding_raised: String,
    pub monthly_income: String,
    pub service_provider: String,
    pub last_funding_date: String,
    pub logo: String,
    pub last_update: String,
}

impl StartupRecord {
    /// Whether the record claims actual funding, i.e. `funding_raised` is
    /// present and not one of the "no funding" sentinels. Drives the
    /// funding-entity cross-field rule.
    pub fn declares_funding(&self) -> bool {
        declares_funding(&self.funding_raised)
    }
}

pub(crate) fn declares_funding(funding_raised: &str) -> bool {
    let normalized = normalize(funding_raised);
    !normalized.is_empty() && !matches!(normalized.as_str(), "none" | "0" | "no")
}

/// Payload appended to the secondary request log when a POST body carries no
/// recognized `action`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeetingRequest {
    pub startup_name: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub note: String,
}
