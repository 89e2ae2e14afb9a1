//! Route handlers.
//!
//! Request bodies are read tolerantly: malformed JSON is treated as an empty
//! object, optional fields fall back to their defaults, and only the fields
//! the route genuinely requires produce a 400. The repository mutex is never
//! held across an await point.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Html;
use axum::Json;
use chrono::Utc;
use parking_lot::Mutex;
use serde_json::{json, Value};
use tracing::info;

use autopost_broadcast::{BroadcastDispatcher, BroadcastRecord, MessageSender, TargetId};
use autopost_store::{OpenEvent, StateRepository};
use autopost_verify::verify_init_data;

use crate::domain::config::GatewayConfig;
use crate::domain::error::ApiError;
use crate::middleware::require_admin;
use crate::page::MINI_APP_PAGE;

/// Application state shared across handlers.
///
/// Everything a handler touches is injected here; there is no process-global
/// store or credential.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub repository: Arc<Mutex<StateRepository>>,
    pub sender: Arc<dyn MessageSender>,
}

/// GET `/` and `/index.html` - the static mini-app page.
pub async fn serve_page() -> Html<&'static str> {
    Html(MINI_APP_PAGE)
}

/// GET `/health`
pub async fn health() -> Json<Value> {
    Json(json!({ "ok": true, "msg": "gateway alive" }))
}

/// GET `/api/history` - the bounded broadcast log.
pub async fn get_history(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let history = state.repository.lock().history()?;
    Ok(Json(json!({ "ok": true, "history": history })))
}

/// POST `/api/add_target` - admin-only append to the recipient list.
pub async fn add_target(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<Value>, ApiError> {
    require_admin(&headers, state.config.admin_key.as_deref())?;

    let body = parse_body(&body);
    let id: TargetId = body
        .get("id")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .ok_or(ApiError::MissingField("id"))?;
    if matches!(&id, TargetId::Text(t) if t.is_empty()) {
        return Err(ApiError::MissingField("id"));
    }

    let targets = state.repository.lock().add_target(id)?;
    Ok(Json(json!({ "ok": true, "targets": targets })))
}

/// POST `/api/post` - broadcast a message.
///
/// Body: `{message?, delay?, targets?}`. `message` defaults to empty,
/// `delay` (milliseconds between sends) to zero, and an absent or empty
/// `targets` list falls back to the persisted recipient list.
pub async fn post_broadcast(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<Value>, ApiError> {
    if state.config.bot_token.as_deref().map_or(true, str::is_empty) {
        return Err(ApiError::MissingBotToken);
    }

    let body = parse_body(&body);
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let delay = Duration::from_millis(body.get("delay").and_then(Value::as_u64).unwrap_or(0));

    let requested: Option<Vec<TargetId>> = body
        .get("targets")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .filter(|list: &Vec<TargetId>| !list.is_empty());
    let targets = match requested {
        Some(list) => list,
        None => state.repository.lock().targets()?,
    };

    info!(targets = targets.len(), delay_ms = delay.as_millis() as u64, "dispatching broadcast");
    let dispatcher = BroadcastDispatcher::new(Arc::clone(&state.sender));
    let results = dispatcher.dispatch(&targets, &message, delay).await;

    let record = BroadcastRecord {
        at: Utc::now(),
        message,
        targets,
        results: results.clone(),
    };
    state.repository.lock().record_broadcast(&record)?;

    Ok(Json(json!({ "ok": true, "results": results })))
}

/// POST `/api/track_open` - append the raw body to the open-event log.
pub async fn track_open(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<Value>, ApiError> {
    let data = parse_body(&body);
    state.repository.lock().record_open(&OpenEvent {
        at: Utc::now(),
        data,
    })?;
    Ok(Json(json!({ "ok": true })))
}

/// POST `/api/verify_init` - check a WebApp initData signature.
///
/// Verification failure is data (`valid: false`), never an error status.
pub async fn verify_init(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<Value>, ApiError> {
    let token = state
        .config
        .bot_token
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::MissingBotToken)?;

    let body = parse_body(&body);
    let init_data = body
        .get("initData")
        .and_then(Value::as_str)
        .ok_or(ApiError::MissingField("initData"))?;

    let valid = verify_init_data(init_data, token);
    Ok(Json(json!({ "ok": true, "valid": valid })))
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

fn parse_body(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| json!({}))
}
