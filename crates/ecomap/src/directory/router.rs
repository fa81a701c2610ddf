use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tracing::debug;

use super::domain::MeetingRequest;
use super::logo::LogoStore;
use super::service::DirectoryService;
use super::store::{RawRow, RecordStore, RequestLog};

/// Router builder exposing the record-store HTTP contract. The upstream
/// spreadsheet gateway answered everything on one path with HTTP 200 and a
/// `status` discriminator; callers depend on that shape, so it is preserved.
pub fn directory_router<S, L>(service: Arc<DirectoryService<S, L>>) -> Router
where
    S: RecordStore + RequestLog + 'static,
    L: LogoStore + 'static,
{
    Router::new()
        .route("/", get(list_handler::<S, L>).post(post_handler::<S, L>))
        .with_state(service)
}

pub(crate) async fn list_handler<S, L>(
    State(service): State<Arc<DirectoryService<S, L>>>,
) -> Response
where
    S: RecordStore + RequestLog + 'static,
    L: LogoStore + 'static,
{
    match service.list() {
        Ok(startups) => success(json!({ "status": "success", "startups": startups })),
        Err(err) => error_payload(err.to_string()),
    }
}

pub(crate) async fn post_handler<S, L>(
    State(service): State<Arc<DirectoryService<S, L>>>,
    body: String,
) -> Response
where
    S: RecordStore + RequestLog + 'static,
    L: LogoStore + 'static,
{
    let value: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(err) => return error_payload(format!("invalid JSON body: {err}")),
    };
    let Value::Object(object) = value else {
        return error_payload("request body must be a JSON object".to_string());
    };

    let action = object
        .get("action")
        .and_then(Value::as_str)
        .map(str::to_owned);
    match action.as_deref() {
        Some("create_startup") => create_startup(&service, object),
        Some("bulk_create_startups") => bulk_create_startups(&service, &object),
        _ => meeting_request(&service, object),
    }
}

fn create_startup<S, L>(service: &DirectoryService<S, L>, mut fields: RawRow) -> Response
where
    S: RecordStore + RequestLog + 'static,
    L: LogoStore + 'static,
{
    fields.remove("action");
    debug!(field_count = fields.len(), "create_startup received");

    match service.create(fields) {
        Ok(outcome) => {
            let mut payload = json!({ "status": "success" });
            if let Some(url) = outcome.logo_url {
                payload["logoUrl"] = Value::String(url);
            }
            success(payload)
        }
        Err(err) => error_payload(err.to_string()),
    }
}

fn bulk_create_startups<S, L>(service: &DirectoryService<S, L>, object: &RawRow) -> Response
where
    S: RecordStore + RequestLog + 'static,
    L: LogoStore + 'static,
{
    let startups: Vec<RawRow> = match object.get("startups").and_then(Value::as_array) {
        Some(entries) => entries
            .iter()
            .filter_map(|entry| entry.as_object().cloned())
            .collect(),
        None => {
            return error_payload("bulk_create_startups requires a startups array".to_string())
        }
    };
    debug!(count = startups.len(), "bulk_create_startups received");

    match service.bulk_create(startups) {
        Ok(count) => success(json!({ "status": "success", "count": count })),
        Err(err) => error_payload(err.to_string()),
    }
}

fn meeting_request<S, L>(service: &DirectoryService<S, L>, object: RawRow) -> Response
where
    S: RecordStore + RequestLog + 'static,
    L: LogoStore + 'static,
{
    // Every field defaults, so any JSON object qualifies as a request.
    let request: MeetingRequest = match serde_json::from_value(Value::Object(object)) {
        Ok(request) => request,
        Err(err) => return error_payload(err.to_string()),
    };

    match service.meeting_request(&request) {
        Ok(()) => success(json!({ "status": "success" })),
        Err(err) => error_payload(err.to_string()),
    }
}

fn success(payload: Value) -> Response {
    (StatusCode::OK, axum::Json(payload)).into_response()
}

fn error_payload(message: String) -> Response {
    (
        StatusCode::OK,
        axum::Json(json!({ "status": "error", "message": message })),
    )
        .into_response()
}
