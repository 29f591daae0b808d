//! REST API over a shared calculator session.
//!
//! - `GET /devices` returns the registry snapshot
//! - `PATCH /devices/{index}` edits one device
//! - `POST /calculate` runs the aggregation with optional new parameters
//! - `GET /result` returns the last calculation
//! - `POST /reset` restores presets and clears the last result

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::Router;
use axum::routing::{get, patch, post};

use crate::session::Session;

pub use types::{CalculateRequest, CalculateResponse, DevicePatch, ErrorResponse};

/// Application state shared across all request handlers.
///
/// Every core operation is synchronous and short, so a plain mutex
/// serializes requests against the single session.
pub struct AppState {
    session: Mutex<Session>,
    /// Currency label used in summary lines.
    pub currency: String,
}

impl AppState {
    pub fn new(session: Session, currency: &str) -> Arc<Self> {
        Arc::new(Self {
            session: Mutex::new(session),
            currency: currency.to_string(),
        })
    }

    /// Locks the session. A panic in another handler cannot leave the
    /// registry half-edited, so a poisoned lock is still usable.
    pub fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/devices", get(handlers::list_devices))
        .route("/devices/{index}", patch(handlers::edit_device))
        .route("/calculate", post(handlers::calculate))
        .route("/result", get(handlers::last_result))
        .route("/reset", post(handlers::reset))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    tracing::info!(%addr, "API server listening");
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
