// File: src/app.rs
// Purpose: Router, shared state and request handlers

use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use maud::Markup;
use mtable::{render, Config, FieldErrors, FormData, FormRuleSet, QueryParams, TableResult};
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::form_context::FormContext;
use crate::views;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    rules: Arc<FormRuleSet>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            rules: Arc::new(FormRuleSet::standard()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/table", post(submit_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /`: the form, or a table generated from `?rStart=..&rEnd=..&cStart=..&cEnd=..`.
/// Query input skips the form rules and goes straight to the range
/// validator.
async fn index_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> Response {
    let query = QueryParams::parse(raw.as_deref().unwrap_or_default());
    let wants_json = accepts_json(&headers);

    if !query.has_range() && !wants_json {
        return render_page(&state, &FormContext::empty(), None, None, StatusCode::OK);
    }

    let input = match query.range_input() {
        Ok(input) => input,
        Err(e) => {
            warn!(error = %e, "query input rejected");
            return rejection(&state, wants_json, "input", &e.to_string());
        }
    };

    match mtable::build_table(&input) {
        Ok(table) => {
            info!(title = %table.title, "table generated from query");
            if wants_json {
                return Json(table).into_response();
            }
            let panel = render::table_panel(&table);
            render_page(&state, &FormContext::from_input(&input), None, Some(panel), StatusCode::OK)
        }
        Err(e) => {
            warn!(kind = e.kind(), ?input, "query range rejected");
            rejection(&state, wants_json, e.kind(), &e.to_string())
        }
    }
}

/// `POST /table`: form submission, urlencoded or JSON. Form rules run
/// first, then the range validator.
async fn submit_handler(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let form = form_from_body(&headers, &body);
    let wants_json = accepts_json(&headers);
    let htmx = is_htmx(&headers);

    let input = match state.rules.check_form(&form) {
        Ok(input) => input,
        Err(errors) => {
            info!(fields = ?errors.keys().collect::<Vec<_>>(), "form rules rejected submission");
            if wants_json {
                return field_errors_json(&errors);
            }
            let ctx = FormContext::from_field_errors(&errors, &form);
            if htmx {
                return Html(views::error_list(&ctx).into_string()).into_response();
            }
            return render_page(&state, &ctx, None, None, StatusCode::UNPROCESSABLE_ENTITY);
        }
    };

    match mtable::build_table(&input) {
        Ok(table) => {
            info!(title = %table.title, "table generated from form");
            if wants_json {
                Json(table).into_response()
            } else if htmx {
                Html(render::table_panel(&table).into_string()).into_response()
            } else {
                table_page(&state, &input, &table)
            }
        }
        Err(e) => {
            warn!(kind = e.kind(), ?input, "form range rejected");
            rejection(&state, wants_json, e.kind(), &e.to_string())
        }
    }
}

async fn not_found_handler(uri: Uri) -> Response {
    let html = views::error_page(404, "Page Not Found", &format!("Route '{}' not found", uri.path()));
    (StatusCode::NOT_FOUND, Html(html.into_string())).into_response()
}

fn form_from_body(headers: &HeaderMap, body: &Bytes) -> FormData {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .unwrap_or_default();

    if content_type.contains("application/json") {
        serde_json::from_slice::<JsonValue>(body)
            .map(|json| FormData::from_json(&json))
            .unwrap_or_else(|_| FormData::new())
    } else if content_type.contains("application/x-www-form-urlencoded") {
        FormData::from_urlencoded(&String::from_utf8_lossy(body))
    } else {
        FormData::new()
    }
}

/// Check if request accepts JSON
fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|accept| accept.to_str().ok())
        .map(|accept| accept.contains("application/json"))
        .unwrap_or(false)
}

/// Check if this is an HTMX request
fn is_htmx(headers: &HeaderMap) -> bool {
    headers.contains_key("hx-request")
}

fn render_page(
    state: &AppState,
    ctx: &FormContext,
    message: Option<&str>,
    panel: Option<Markup>,
    status: StatusCode,
) -> Response {
    let markup = views::page(&state.config.project.title, &state.rules, ctx, message, panel);
    (status, Html(markup.into_string())).into_response()
}

fn table_page(state: &AppState, input: &mtable::RangeInput, table: &TableResult) -> Response {
    let panel = render::table_panel(table);
    render_page(state, &FormContext::from_input(input), None, Some(panel), StatusCode::OK)
}

/// Page (or JSON body) carrying a single validator or parse message
fn rejection(state: &AppState, wants_json: bool, kind: &str, message: &str) -> Response {
    if wants_json {
        let body = json!({ "error": kind, "message": message });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response();
    }
    render_page(
        state,
        &FormContext::empty(),
        Some(message),
        None,
        StatusCode::UNPROCESSABLE_ENTITY,
    )
}

fn field_errors_json(errors: &FieldErrors) -> Response {
    let fields: serde_json::Map<String, JsonValue> = errors
        .iter()
        .map(|(field, msg)| (field.name().to_string(), JsonValue::String(msg.clone())))
        .collect();
    let body = json!({ "error": "fields", "errors": fields });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
}
