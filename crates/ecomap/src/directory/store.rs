use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::domain::MeetingRequest;

/// A raw sheet row: cell values keyed by the literal header text, exactly as
/// the record store returns them. Canonical mapping happens later.
pub type RawRow = serde_json::Map<String, Value>;

/// Error enumeration for record-store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),
    #[error("record store has no header row")]
    MissingHeaders,
}

/// Storage abstraction over the startup sheet so the directory service can
/// be exercised without any spreadsheet or network dependency.
pub trait RecordStore: Send + Sync {
    /// The destination header row, in sheet column order.
    fn headers(&self) -> Result<Vec<String>, StoreError>;
    /// All data rows keyed by literal header text.
    fn read_all(&self) -> Result<Vec<RawRow>, StoreError>;
    /// Append one row; cells must be in `headers()` order.
    fn append_one(&self, row: Vec<Value>) -> Result<(), StoreError>;
    /// Append many rows at once, returning how many were written.
    fn append_many(&self, rows: Vec<Vec<Value>>) -> Result<usize, StoreError>;
}

/// Secondary log for meeting/contact requests, kept apart from the startup
/// sheet the way the source kept a separate "Requests" tab.
pub trait RequestLog: Send + Sync {
    fn append_request(&self, at: DateTime<Utc>, request: &MeetingRequest)
        -> Result<(), StoreError>;
}

/// In-memory sheet backing tests and the default server deployment.
pub struct MemorySheet {
    headers: Vec<String>,
    rows: Mutex<Vec<Vec<Value>>>,
    requests: Mutex<Vec<(DateTime<Utc>, MeetingRequest)>>,
}

impl MemorySheet {
    pub fn with_headers(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the raw cell rows, mainly for assertions.
    pub fn rows(&self) -> Vec<Vec<Value>> {
        self.rows.lock().expect("sheet mutex poisoned").clone()
    }

    pub fn logged_requests(&self) -> Vec<(DateTime<Utc>, MeetingRequest)> {
        self.requests
            .lock()
            .expect("request mutex poisoned")
            .clone()
    }

    fn is_row_empty(row: &[Value]) -> bool {
        row.iter().all(|cell| match cell {
            Value::Null => true,
            Value::String(text) => text.is_empty(),
            _ => false,
        })
    }
}

impl RecordStore for MemorySheet {
    fn headers(&self) -> Result<Vec<String>, StoreError> {
        if self.headers.is_empty() {
            return Err(StoreError::MissingHeaders);
        }
        Ok(self.headers.clone())
    }

    fn read_all(&self) -> Result<Vec<RawRow>, StoreError> {
        let rows = self.rows.lock().expect("sheet mutex poisoned");
        Ok(rows
            .iter()
            .filter(|row| !Self::is_row_empty(row))
            .map(|row| {
                let mut raw = RawRow::new();
                for (index, header) in self.headers.iter().enumerate() {
                    let cell = row.get(index).cloned().unwrap_or(Value::Null);
                    raw.insert(header.clone(), cell);
                }
                raw
            })
            .collect())
    }

    fn append_one(&self, row: Vec<Value>) -> Result<(), StoreError> {
        self.rows.lock().expect("sheet mutex poisoned").push(row);
        Ok(())
    }

    fn append_many(&self, rows: Vec<Vec<Value>>) -> Result<usize, StoreError> {
        let count = rows.len();
        self.rows
            .lock()
            .expect("sheet mutex poisoned")
            .extend(rows);
        Ok(count)
    }
}

impl RequestLog for MemorySheet {
    fn append_request(
        &self,
        at: DateTime<Utc>,
        request: &MeetingRequest,
    ) -> Result<(), StoreError> {
        self.requests
            .lock()
            .expect("request mutex poisoned")
            .push((at, request.clone()));
        Ok(())
    }
}
