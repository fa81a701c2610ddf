use std::io::Read;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use super::display::parse_number;
use super::domain::{declares_funding, StartupRecord};
use super::store::RawRow;
use crate::schema::normalize;

/// Fixed alias list per field used by the bulk-import path. Narrower than
/// the historical table on purpose: uploads are expected to come from the
/// published template, plus the handful of legacy spellings below.
const IMPORT_ALIASES: &[(&str, &[&str])] = &[
    (
        "name",
        &[
            "Startup Name",
            "اسم الشركة",
            "أسم الشركة",
            "Name",
            "Company Name",
            "Business Name",
            "الشركة",
            "startupName",
        ],
    ),
    ("ceoName", &["CEO Name", "اسم المؤسس", "Founder", "ceoName"]),
    ("phone", &["Phone", "الهاتف", "Mobile", "phone"]),
    ("email", &["Email", "البريد الالكتروني", "email"]),
    (
        "industry",
        &["Industry", "قطاع المشروع الصناعة", "Sector", "industry"],
    ),
    (
        "governorate",
        &["Governerate", "Governorate", "المحافظة", "governorate"],
    ),
    (
        "revenue",
        &[
            "Revenue (Total) (Yearly)",
            "الايرادات سنوي",
            "Revenue",
            "Total Revenue",
            "revenue",
        ],
    ),
    (
        "profitability",
        &[
            "profitability",
            "مرحلة المشروع",
            "Stage",
            "Current Stage",
            "الربحية",
        ],
    ),
    ("ceoGender", &["CEO Gender", "النوع", "Gender", "ceoGender"]),
    (
        "description",
        &[
            "Description",
            "الوصف",
            "وصف مختصر للشركة",
            "Brief",
            "description",
        ],
    ),
    (
        "startupType",
        &[
            "Startup type",
            "نوع الشركة",
            "Startup Type",
            "startupType",
            "نوع المشروع",
        ],
    ),
    (
        "website",
        &[
            "Website/ app links/ social media",
            "التطبيق /رابط الموقع",
            "Website",
            "website",
            "روابط",
        ],
    ),
    (
        "openClosed",
        &[
            "Open/Closed",
            "Operational status",
            "Status",
            "حالة العمل",
            "openClosed",
        ],
    ),
    (
        "foundingDate",
        &[
            "Date of company stabilished",
            "تاريخ التأسيس",
            "Date of establishment",
            "Founding Date",
            "foundingDate",
        ],
    ),
    (
        "legalStatus",
        &[
            "Legal Status",
            "هل المشروع مسجل",
            "الوضع القانوني",
            "legalStatus",
        ],
    ),
    (
        "teamSize",
        &[
            "Founding team size",
            "عدد المؤسسين",
            "Team Size",
            "عدد فريق التأسيس",
            "teamSize",
        ],
    ),
    (
        "femaleFounders",
        &[
            "Female founders",
            "عدد المؤسسات الإناث",
            "Female Founders",
            "عدد الإناث المؤسسات",
            "femaleFounders",
        ],
    ),
    (
        "maleFounders",
        &[
            "male founders",
            "عدد المؤسسين الذكور",
            "Male Founders",
            "عدد الذكور المؤسسين",
            "maleFounders",
        ],
    ),
    (
        "freelancersCount",
        &[
            "Number of freelancers",
            "عدد المتدرّبين/الفريلانسرز",
            "Freelancers",
            "عدد الفريلانسرز",
            "freelancersCount",
        ],
    ),
    (
        "employees",
        &[
            "Nu. of employees",
            "عدد الموظفين كلهم بدون المؤسسين",
            "Employees",
            "Staff",
            "عدد الموظفين",
            "employees",
        ],
    ),
    (
        "hasDedicatedPlace",
        &[
            "Do you have a dedicated place",
            "مكان مخصص",
            "Has Dedicated Place",
            "hasDedicatedPlace",
        ],
    ),
    (
        "workplaceType",
        &[
            "own or rent a workplace",
            "نوع مكان العمل",
            "Workplace Type",
            "workplaceType",
        ],
    ),
    (
        "fundingEntity",
        &["What is the Funding entity?", "جهة التمويل", "fundingEntity"],
    ),
    (
        "fundingRaised",
        &[
            "Funding raised",
            "قيمة تمويل",
            "Total Funding",
            "Funding Raised",
            "fundingRaised",
            "تمويل",
        ],
    ),
    (
        "monthlyIncome",
        &[
            "How much is your monthly income from the project?",
            "الدخل الشهري",
            "Monthly Income",
            "monthlyIncome",
        ],
    ),
    (
        "serviceProvider",
        &["Service Provider", "Incubator", "مقدم الخدمة", "serviceProvider"],
    ),
];

/// Fields that must be present for a row to import.
const REQUIRED_FIELDS: &[&str] = &[
    "name",
    "ceoName",
    "phone",
    "email",
    "industry",
    "governorate",
    "fundingRaised",
];

/// One field-level validation failure, kept structured so the caller can
/// render a fix-and-resubmit list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// One analyzed upload row: the coerced record (kept even when invalid, so
/// previews can show what was understood) plus its errors.
#[derive(Debug, Clone, Serialize)]
pub struct ImportRow {
    /// Spreadsheet row number (header row is 1).
    pub row_number: usize,
    pub record: StartupRecord,
    pub errors: Vec<FieldError>,
}

impl ImportRow {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Outcome of analyzing an upload.
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub rows: Vec<ImportRow>,
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    /// Template example rows left in place by the uploader; excluded before
    /// validation and counted here.
    pub skipped_examples: usize,
}

impl ImportReport {
    pub fn valid_records(&self) -> Vec<StartupRecord> {
        self.rows
            .iter()
            .filter(|row| row.is_valid())
            .map(|row| row.record.clone())
            .collect()
    }
}

/// Parse an uploaded CSV into raw rows keyed by literal header text.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<RawRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut raw = RawRow::new();
        for (index, header) in headers.iter().enumerate() {
            let cell = record.get(index).unwrap_or_default();
            raw.insert(header.to_string(), Value::String(cell.to_string()));
        }
        rows.push(raw);
    }

    Ok(rows)
}

/// Analyze loosely-typed upload rows: filter template example rows, coerce
/// each remaining row onto the canonical record, and validate it.
pub fn analyze_rows(rows: &[RawRow]) -> ImportReport {
    let mut report = ImportReport {
        rows: Vec::new(),
        total: rows.len(),
        valid: 0,
        invalid: 0,
        skipped_examples: 0,
    };

    for (index, raw) in rows.iter().enumerate() {
        let record = map_row(raw);
        if normalize(&record.name).starts_with("example") {
            report.skipped_examples += 1;
            continue;
        }

        let errors = validate_record(&record);
        if errors.is_empty() {
            report.valid += 1;
        } else {
            report.invalid += 1;
        }
        report.rows.push(ImportRow {
            row_number: index + 2,
            record,
            errors,
        });
    }

    report
}

/// Coerce one raw upload row onto the canonical record using the fixed
/// import alias lists. Missing fields become empty strings or zero; nothing
/// here rejects.
pub fn map_row(raw: &RawRow) -> StartupRecord {
    StartupRecord {
        id: String::new(),
        name: text(raw, "name"),
        ceo_name: text(raw, "ceoName"),
        ceo_gender: text(raw, "ceoGender"),
        industry: text(raw, "industry"),
        governorate: text(raw, "governorate"),
        phone: text(raw, "phone"),
        email: text(raw, "email"),
        employees: count(raw, "employees"),
        revenue: numeric(raw, "revenue"),
        profitability: text(raw, "profitability"),
        description: text(raw, "description"),
        startup_type: text(raw, "startupType"),
        website: text(raw, "website"),
        open_closed: text(raw, "openClosed"),
        founding_date: text(raw, "foundingDate"),
        legal_status: text(raw, "legalStatus"),
        team_size: count(raw, "teamSize"),
        female_founders: count(raw, "femaleFounders"),
        male_founders: count(raw, "maleFounders"),
        freelancers_count: count(raw, "freelancersCount"),
        has_dedicated_place: text(raw, "hasDedicatedPlace"),
        workplace_type: text(raw, "workplaceType"),
        funding_entity: text(raw, "fundingEntity"),
        funding_raised: text(raw, "fundingRaised"),
        monthly_income: text(raw, "monthlyIncome"),
        service_provider: text(raw, "serviceProvider"),
        last_funding_date: String::new(),
        logo: String::new(),
        last_update: String::new(),
    }
}

fn validate_record(record: &StartupRecord) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for field in REQUIRED_FIELDS {
        let value = match *field {
            "name" => &record.name,
            "ceoName" => &record.ceo_name,
            "phone" => &record.phone,
            "email" => &record.email,
            "industry" => &record.industry,
            "governorate" => &record.governorate,
            "fundingRaised" => &record.funding_raised,
            _ => continue,
        };
        if value.trim().is_empty() {
            errors.push(FieldError {
                field,
                message: "required".to_string(),
            });
        }
    }

    if declares_funding(&record.funding_raised) && record.funding_entity.trim().is_empty() {
        errors.push(FieldError {
            field: "fundingEntity",
            message: "required when funding raised is declared".to_string(),
        });
    }

    errors
}

/// First import alias whose key is present in the row, compared normalized.
/// Key presence wins even when the value is empty, matching the portal's
/// historical behavior.
fn raw_value<'a>(raw: &'a RawRow, key: &str) -> Option<&'a Value> {
    let aliases = IMPORT_ALIASES
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, aliases)| *aliases)?;

    for alias in aliases {
        let wanted = normalize(alias);
        for (property, value) in raw {
            if normalize(property) == wanted {
                return Some(value);
            }
        }
    }
    None
}

fn text(raw: &RawRow, key: &str) -> String {
    match raw_value(raw, key) {
        Some(Value::String(value)) => value.trim().to_string(),
        Some(Value::Number(value)) => value.to_string(),
        Some(Value::Bool(value)) => value.to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn numeric(raw: &RawRow, key: &str) -> f64 {
    raw_value(raw, key).map(parse_number).unwrap_or(0.0)
}

fn count(raw: &RawRow, key: &str) -> u32 {
    let parsed = numeric(raw, key);
    if parsed.is_finite() && parsed > 0.0 {
        parsed.floor() as u32
    } else {
        0
    }
}

/// Error surfaced by a submission sink for one record.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("remote submission failed: {0}")]
    Remote(String),
}

/// Where sequentially-submitted records go; lets the loop be tested without
/// a network.
pub trait SubmitSink {
    fn submit(&self, record: &StartupRecord) -> Result<(), SubmitError>;
}

/// Counted outcome of a sequential submission run. Failures are not rolled
/// back and not retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Submits validated records one at a time with a fixed pause between
/// requests, so a large upload does not overwhelm the backend quota.
pub struct BulkSubmitter {
    delay: Duration,
}

impl BulkSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn submit_all<S: SubmitSink>(
        &self,
        sink: &S,
        records: &[StartupRecord],
    ) -> SubmissionOutcome {
        let mut outcome = SubmissionOutcome {
            total: records.len(),
            succeeded: 0,
            failed: 0,
        };

        for (index, record) in records.iter().enumerate() {
            match sink.submit(record) {
                Ok(()) => outcome.succeeded += 1,
                Err(err) => {
                    outcome.failed += 1;
                    warn!(row = index + 1, name = %record.name, error = %err, "bulk submission row failed");
                }
            }

            if index + 1 < records.len() && !self.delay.is_zero() {
                std::thread::sleep(self.delay);
            }
        }

        outcome
    }
}
