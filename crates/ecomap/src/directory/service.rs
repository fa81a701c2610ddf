use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, warn};

use super::assemble::assemble_row;
use super::display::{
    display_record, distinct_funding_entities, distinct_industries, distinct_service_providers,
};
use super::domain::{MeetingRequest, StartupRecord};
use super::import::{SubmitError, SubmitSink};
use super::logo::{parse_data_url, LogoStore};
use super::store::{RawRow, RecordStore, RequestLog, StoreError};
use super::template::TemplateOptions;

/// Result of a single create: the durable logo URL when the inline payload
/// was exchanged for one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateOutcome {
    pub logo_url: Option<String>,
}

/// Error raised by the directory service.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Service composing the record store, request log, and logo storage. All
/// record assembly funnels through the one alias-resolution path.
pub struct DirectoryService<S, L> {
    store: Arc<S>,
    logos: Arc<L>,
}

impl<S, L> DirectoryService<S, L>
where
    S: RecordStore + RequestLog + 'static,
    L: LogoStore + 'static,
{
    pub fn new(store: Arc<S>, logos: Arc<L>) -> Self {
        Self { store, logos }
    }

    /// Raw rows keyed by literal sheet headers, as the GET contract returns
    /// them.
    pub fn list(&self) -> Result<Vec<RawRow>, DirectoryError> {
        Ok(self.store.read_all()?)
    }

    /// Canonical display records, for callers that want mapped data.
    pub fn list_records(&self) -> Result<Vec<StartupRecord>, DirectoryError> {
        Ok(self.list()?.iter().map(display_record).collect())
    }

    /// Create one record from canonical fields. An inline logo is exchanged
    /// for a durable URL first; if that exchange fails the inline payload is
    /// kept rather than failing the create.
    pub fn create(&self, mut fields: RawRow) -> Result<CreateOutcome, DirectoryError> {
        let logo_url = self.exchange_logo(&mut fields);

        let headers = self.store.headers()?;
        let row = assemble_row(&headers, &fields, Utc::now());
        self.store.append_one(row)?;

        Ok(CreateOutcome { logo_url })
    }

    /// Create many records in one store write; returns the appended count.
    pub fn bulk_create(&self, startups: Vec<RawRow>) -> Result<usize, DirectoryError> {
        let headers = self.store.headers()?;
        let now = Utc::now();
        let rows: Vec<Vec<Value>> = startups
            .iter()
            .map(|fields| assemble_row(&headers, fields, now))
            .collect();
        Ok(self.store.append_many(rows)?)
    }

    /// Append a meeting/contact request to the secondary log.
    pub fn meeting_request(&self, request: &MeetingRequest) -> Result<(), DirectoryError> {
        debug!(startup = %request.startup_name, "logging meeting request");
        self.store.append_request(Utc::now(), request)?;
        Ok(())
    }

    /// Live option lists for the bulk-upload template.
    pub fn template_options(&self) -> Result<TemplateOptions, DirectoryError> {
        let records = self.list_records()?;
        Ok(TemplateOptions {
            industries: distinct_industries(&records),
            service_providers: distinct_service_providers(&records),
            funding_entities: distinct_funding_entities(&records),
        })
    }

    fn exchange_logo(&self, fields: &mut RawRow) -> Option<String> {
        let raw_logo = match fields.get("logo") {
            Some(Value::String(raw)) => raw.clone(),
            _ => return None,
        };
        let image = parse_data_url(&raw_logo)?;

        let file_name = logo_file_name(fields, &image.mime_type);
        match self.logos.store(&file_name, &image) {
            Ok(url) => {
                fields.insert("logo".to_string(), Value::String(url.clone()));
                Some(url)
            }
            Err(err) => {
                // Keep the inline payload; losing the logo beats losing the
                // record.
                warn!(error = %err, "logo upload failed, storing inline data");
                None
            }
        }
    }
}

/// Lets the sequential bulk submitter drive the service directly.
impl<S, L> SubmitSink for DirectoryService<S, L>
where
    S: RecordStore + RequestLog + 'static,
    L: LogoStore + 'static,
{
    fn submit(&self, record: &StartupRecord) -> Result<(), SubmitError> {
        let fields = match serde_json::to_value(record) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => return Err(SubmitError::Remote("record not serializable".to_string())),
        };
        self.create(fields)
            .map(|_| ())
            .map_err(|err| SubmitError::Remote(err.to_string()))
    }
}

fn logo_file_name(fields: &RawRow, mime_type: &str) -> String {
    let base = fields
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or("startup")
        .trim()
        .replace(char::is_whitespace, "-");
    let extension = mime_type.strip_prefix("image/").unwrap_or("png");
    format!("{base}-logo.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn logo_file_names_derive_from_the_startup_name() {
        let mut fields = RawRow::new();
        fields.insert("name".to_string(), json!("Acme Corp"));
        assert_eq!(logo_file_name(&fields, "image/png"), "Acme-Corp-logo.png");

        let empty = RawRow::new();
        assert_eq!(logo_file_name(&empty, "image/jpeg"), "startup-logo.jpeg");
    }
}
