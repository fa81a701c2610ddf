use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use uuid::Uuid;

use super::common::*;
use crate::directory::domain::{MeetingRequest, StartupRecord};
use crate::directory::import::BulkSubmitter;
use crate::directory::service::{DirectoryError, DirectoryService};

#[test]
fn create_appends_a_row_in_header_order() {
    let (service, sheet, _) = build_service();

    let outcome = service
        .create(canonical_fields("Acme", "01012345678"))
        .expect("create succeeds");
    assert_eq!(outcome.logo_url, None);

    let rows = sheet.rows();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];

    // ID generated, phone marked as literal text, timestamp server-set.
    let id = row[0].as_str().expect("id cell");
    assert!(Uuid::parse_str(id).is_ok());
    assert_eq!(row[1], json!("Acme"));
    assert_eq!(row[2], json!("Jane"));
    assert_eq!(row[3], json!("'01012345678"));
    assert!(row[6].as_str().expect("timestamp cell").contains('T'));
}

#[test]
fn create_exchanges_inline_logos_for_urls() {
    let (service, sheet, logos) = build_service();

    let mut fields = canonical_fields("Acme", "01012345678");
    fields.insert("logo".to_string(), json!(inline_png()));

    let outcome = service.create(fields).expect("create succeeds");
    let url = outcome.logo_url.expect("logo url produced");
    assert!(url.starts_with("https://cdn.example/logos/"));

    // The stored row carries the URL, not the inline payload.
    assert_eq!(sheet.rows()[0][5], json!(url));
    assert_eq!(logos.stored(), vec!["Acme-logo.png".to_string()]);
}

#[test]
fn create_keeps_inline_logo_when_storage_fails() {
    let sheet = memory_sheet();
    let service = DirectoryService::new(sheet.clone(), Arc::new(FailingLogoStore));

    let inline = inline_png();
    let mut fields = canonical_fields("Acme", "01012345678");
    fields.insert("logo".to_string(), json!(inline.clone()));

    let outcome = service.create(fields).expect("create still succeeds");
    assert_eq!(outcome.logo_url, None);
    assert_eq!(sheet.rows()[0][5], json!(inline));
}

#[test]
fn non_inline_logo_values_pass_through_untouched() {
    let (service, sheet, logos) = build_service();

    let mut fields = canonical_fields("Acme", "01012345678");
    fields.insert("logo".to_string(), json!("https://example.com/logo.png"));

    service.create(fields).expect("create succeeds");
    assert_eq!(sheet.rows()[0][5], json!("https://example.com/logo.png"));
    assert!(logos.stored().is_empty());
}

#[test]
fn bulk_create_appends_all_rows_and_reports_the_count() {
    let (service, sheet, _) = build_service();

    let startups = vec![
        canonical_fields("Acme", "01000000001"),
        canonical_fields("Beta", "01000000002"),
        canonical_fields("Gamma", "01000000003"),
    ];
    let count = service.bulk_create(startups).expect("bulk create succeeds");

    assert_eq!(count, 3);
    let rows = sheet.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1][1], json!("Beta"));
    assert_eq!(rows[2][3], json!("'01000000003"));
}

#[test]
fn store_failures_surface_as_directory_errors() {
    let service = DirectoryService::new(Arc::new(UnavailableStore), Arc::new(FailingLogoStore));
    let result = service.create(canonical_fields("Acme", "01012345678"));
    assert!(matches!(result, Err(DirectoryError::Store(_))));
}

#[test]
fn meeting_requests_land_in_the_secondary_log() {
    let (service, sheet, _) = build_service();

    let request = MeetingRequest {
        startup_name: "Acme".to_string(),
        name: "Visitor".to_string(),
        role: "Investor".to_string(),
        email: "visitor@example.com".to_string(),
        phone: "01099999999".to_string(),
        note: "Intro call".to_string(),
    };
    service.meeting_request(&request).expect("request logged");

    let logged = sheet.logged_requests();
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].1, request);
    // Startup rows untouched.
    assert!(sheet.rows().is_empty());
}

#[test]
fn list_returns_rows_keyed_by_literal_headers() {
    let (service, _, _) = build_service();
    service
        .create(canonical_fields("Acme", "01012345678"))
        .expect("create succeeds");

    let rows = service.list().expect("list succeeds");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["Startup Name"], json!("Acme"));
    assert!(rows[0].contains_key("Timestamp"));
}

#[test]
fn list_records_maps_rows_back_to_canonical_fields() {
    let (service, _, _) = build_service();
    service
        .create(canonical_fields("Acme", "01012345678"))
        .expect("create succeeds");

    let records = service.list_records().expect("records map");
    assert_eq!(records[0].name, "Acme");
    // The text marker stays in the store, never in display output.
    assert_eq!(records[0].phone, "01012345678");
}

#[test]
fn sequential_submitter_reports_partial_success_against_a_failing_store() {
    let (service, sheet, _) = build_service();

    let records: Vec<StartupRecord> = (1..=3)
        .map(|i| StartupRecord {
            name: format!("startup-{i}"),
            phone: format!("0100000000{i}"),
            ..StartupRecord::default()
        })
        .collect();

    let outcome = BulkSubmitter::new(Duration::ZERO).submit_all(service.as_ref(), &records);
    assert_eq!(outcome.total, 3);
    assert_eq!(outcome.succeeded, 3);
    assert_eq!(outcome.failed, 0);
    assert_eq!(sheet.rows().len(), 3);

    // A dead store fails every row but never aborts the loop.
    let offline = DirectoryService::new(Arc::new(UnavailableStore), Arc::new(FailingLogoStore));
    let outcome = BulkSubmitter::new(Duration::ZERO).submit_all(&offline, &records);
    assert_eq!(outcome.succeeded, 0);
    assert_eq!(outcome.failed, 3);
}

#[test]
fn template_options_reflect_the_live_directory() {
    let sheet = Arc::new(crate::directory::store::MemorySheet::with_headers(
        ["ID", "Startup Name", "Industry", "Service Provider", "Timestamp"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
    ));
    let service = DirectoryService::new(sheet, Arc::new(FailingLogoStore));

    for (name, industry, provider) in [
        ("Acme", "Robotics", "Delta Hub"),
        ("Beta", "Agriculture", "Delta Hub"),
    ] {
        let mut fields = canonical_fields(name, "01012345678");
        fields.insert("industry".to_string(), json!(industry));
        fields.insert("serviceProvider".to_string(), json!(provider));
        service.create(fields).expect("create succeeds");
    }

    let options = service.template_options().expect("options build");
    assert_eq!(options.industries, vec!["Agriculture", "Robotics"]);
    assert_eq!(options.service_providers, vec!["Delta Hub"]);
}
