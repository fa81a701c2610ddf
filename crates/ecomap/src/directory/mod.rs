//! The startup directory: canonical record assembly, the record-store seam,
//! bulk import, and the HTTP surface over them.

pub mod assemble;
pub mod display;
pub mod domain;
pub mod drive;
pub mod import;
pub mod logo;
pub mod router;
pub mod service;
pub mod store;
pub mod template;

#[cfg(test)]
mod tests;

pub use assemble::assemble_row;
pub use display::{
    display_record, distinct_funding_entities, distinct_governorates, distinct_industries,
    distinct_service_providers,
};
pub use domain::{MeetingRequest, StartupRecord, NO_FUNDING_SENTINEL, UNKNOWN_FUNDING_DATE};
pub use import::{
    analyze_rows, parse_csv, BulkSubmitter, FieldError, ImportReport, ImportRow, SubmissionOutcome,
    SubmitError, SubmitSink,
};
pub use logo::{parse_data_url, DisabledLogoStore, InlineImage, LogoError, LogoStore};
pub use router::directory_router;
pub use service::{CreateOutcome, DirectoryError, DirectoryService};
pub use store::{MemorySheet, RawRow, RecordStore, RequestLog, StoreError};
pub use template::{build_template, data_entry_headers, default_sheet_headers, TemplateOptions};
