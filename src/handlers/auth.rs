use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use std::net::SocketAddr;
use tracing::error;

use crate::audit::logger::AuditLogger;
use crate::audit::types::AuditKind;
use crate::models::CredentialsRequest;
use crate::AppState;

pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<StatusCode, StatusCode> {
    let user = payload.username();
    let ip = AuditLogger::client_ip(&headers, peer.map(|ConnectInfo(addr)| addr));

    // Unconditional: re-registration overwrites the stored password.
    state.store.register(user, payload.password());

    state
        .audit
        .record(AuditKind::Register, user, &ip)
        .await
        .map_err(|e| {
            error!("Failed to record audit entry: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(StatusCode::OK)
}

pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<StatusCode, StatusCode> {
    let user = payload.username();
    let ip = AuditLogger::client_ip(&headers, peer.map(|ConnectInfo(addr)| addr));

    let kind = if state.store.verify(user, payload.password()) {
        AuditKind::LoginSuccess
    } else {
        AuditKind::LoginFail
    };

    state.audit.record(kind, user, &ip).await.map_err(|e| {
        error!("Failed to record audit entry: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    match kind {
        AuditKind::LoginSuccess => Ok(StatusCode::OK),
        _ => Ok(StatusCode::UNAUTHORIZED),
    }
}
