use std::sync::{Arc, Mutex};

use axum::response::Response;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::directory::domain::MeetingRequest;
use crate::directory::logo::{InlineImage, LogoError, LogoStore};
use crate::directory::service::DirectoryService;
use crate::directory::store::{MemorySheet, RawRow, RecordStore, RequestLog, StoreError};

pub(super) fn sheet_headers() -> Vec<String> {
    [
        "ID",
        "Startup Name",
        "CEO Name",
        "Phone",
        "Email",
        "Company logo",
        "Timestamp",
    ]
    .iter()
    .map(|header| header.to_string())
    .collect()
}

pub(super) fn memory_sheet() -> Arc<MemorySheet> {
    Arc::new(MemorySheet::with_headers(sheet_headers()))
}

pub(super) fn build_service() -> (
    Arc<DirectoryService<MemorySheet, RecordingLogoStore>>,
    Arc<MemorySheet>,
    Arc<RecordingLogoStore>,
) {
    let sheet = memory_sheet();
    let logos = Arc::new(RecordingLogoStore::default());
    let service = Arc::new(DirectoryService::new(sheet.clone(), logos.clone()));
    (service, sheet, logos)
}

pub(super) fn canonical_fields(name: &str, phone: &str) -> RawRow {
    let mut fields = RawRow::new();
    fields.insert("name".to_string(), json!(name));
    fields.insert("ceoName".to_string(), json!("Jane"));
    fields.insert("phone".to_string(), json!(phone));
    fields.insert("email".to_string(), json!("jane@acme.example"));
    fields
}

pub(super) fn inline_png() -> String {
    format!(
        "data:image/png;base64,{}",
        BASE64.encode([0x89, b'P', b'N', b'G', 0x0d, 0x0a])
    )
}

/// Logo store double that hands out predictable URLs.
#[derive(Default)]
pub(super) struct RecordingLogoStore {
    stored: Mutex<Vec<String>>,
}

impl RecordingLogoStore {
    pub(super) fn stored(&self) -> Vec<String> {
        self.stored.lock().expect("logo mutex poisoned").clone()
    }
}

impl LogoStore for RecordingLogoStore {
    fn store(&self, file_name: &str, _image: &InlineImage) -> Result<String, LogoError> {
        let mut stored = self.stored.lock().expect("logo mutex poisoned");
        stored.push(file_name.to_string());
        Ok(format!("https://cdn.example/logos/{}", stored.len()))
    }
}

/// Logo store double that always fails, to exercise the inline fallback.
pub(super) struct FailingLogoStore;

impl LogoStore for FailingLogoStore {
    fn store(&self, _file_name: &str, _image: &InlineImage) -> Result<String, LogoError> {
        Err(LogoError::Backend("drive quota exhausted".to_string()))
    }
}

/// Record store double that is always down.
pub(super) struct UnavailableStore;

impl RecordStore for UnavailableStore {
    fn headers(&self) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Unavailable("sheet offline".to_string()))
    }

    fn read_all(&self) -> Result<Vec<RawRow>, StoreError> {
        Err(StoreError::Unavailable("sheet offline".to_string()))
    }

    fn append_one(&self, _row: Vec<Value>) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("sheet offline".to_string()))
    }

    fn append_many(&self, _rows: Vec<Vec<Value>>) -> Result<usize, StoreError> {
        Err(StoreError::Unavailable("sheet offline".to_string()))
    }
}

impl RequestLog for UnavailableStore {
    fn append_request(
        &self,
        _at: DateTime<Utc>,
        _request: &MeetingRequest,
    ) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("sheet offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
