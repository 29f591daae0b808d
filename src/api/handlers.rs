//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{CalculateRequest, CalculateResponse, DevicePatch, ErrorResponse};
use crate::devices::DeviceRecord;
use crate::format::SummaryLines;

fn not_found(error: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse { error }))
}

/// `GET /devices` → 200 + `Vec<DeviceRecord>` JSON
pub async fn list_devices(State(state): State<Arc<AppState>>) -> Json<Vec<DeviceRecord>> {
    Json(state.session().snapshot().to_vec())
}

/// Applies a partial update to one device.
///
/// `PATCH /devices/{index}` → 200 + updated `DeviceRecord`
/// `PATCH /devices/{index}` with an index past the end → 404 + `ErrorResponse`
pub async fn edit_device(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
    Json(patch): Json<DevicePatch>,
) -> impl IntoResponse {
    let mut session = state.session();
    let len = session.registry().len();
    if index >= len {
        return Err(not_found(format!(
            "device index {index} out of range (registry has {len} devices)"
        )));
    }

    for edit in patch.into_edits(index) {
        session.apply(&edit);
    }

    session
        .registry()
        .get(index)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(format!("device index {index} out of range")))
}

/// Runs a calculation over the current registry.
///
/// `POST /calculate` with `{}` → current parameters
/// `POST /calculate` with `{"unit_cost": "0.7"}` → coerced new unit cost
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CalculateRequest>,
) -> Json<CalculateResponse> {
    let mut session = state.session();
    let params = req.merge(session.params());
    session.set_parameters(params);
    let result = session.calculate().clone();
    let summary = SummaryLines::from_result(Some(&result), &state.currency)
        .as_array()
        .map(str::to_string)
        .to_vec();

    Json(CalculateResponse {
        params,
        result,
        summary,
    })
}

/// `GET /result` → 200 + last `AggregationResult`, or 404 before any
/// calculation and after a reset.
pub async fn last_result(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state
        .session()
        .last_result()
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("no calculation yet".to_string()))
}

/// `POST /reset` → 200 + restored `Vec<DeviceRecord>`
pub async fn reset(State(state): State<Arc<AppState>>) -> Json<Vec<DeviceRecord>> {
    let mut session = state.session();
    session.reset();
    Json(session.snapshot().to_vec())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, header};
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;
    use crate::session::Session;

    fn make_test_state() -> Arc<AppState> {
        AppState::new(Session::new(), "COP")
    }

    async fn send(
        state: &Arc<AppState>,
        method: &str,
        uri: &str,
        body: &str,
    ) -> (StatusCode, serde_json::Value) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let resp = router(state.clone()).oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn devices_returns_presets() {
        let state = make_test_state();
        let (status, json) = send(&state, "GET", "/devices", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().map(Vec::len), Some(20));
        assert_eq!(json[0]["id"], "led");
        assert_eq!(json[0]["enabled"], false);
    }

    #[tokio::test]
    async fn patch_updates_device() {
        let state = make_test_state();
        let body = r#"{"watts": "abc", "enabled": false}"#;
        let (status, json) = send(&state, "PATCH", "/devices/1", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["watts"], 0.0);
        assert_eq!(json["enabled"], false);
        assert_eq!(state.session().snapshot()[1].watts, 0.0);
    }

    #[tokio::test]
    async fn patch_out_of_range_returns_404() {
        let state = make_test_state();
        let before = state.session().snapshot().to_vec();
        let (status, json) =
            send(&state, "PATCH", "/devices/99", r#"{"enabled": true}"#).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(json["error"].as_str().is_some());
        assert_eq!(state.session().snapshot(), before.as_slice());
    }

    #[tokio::test]
    async fn result_is_404_until_calculated() {
        let state = make_test_state();
        let (status, _) = send(&state, "GET", "/result", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, json) = send(&state, "POST", "/calculate", r#"{"unit_cost": 0.5}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["params"]["unit_cost"], 0.5);
        assert_eq!(json["params"]["billing_days_per_month"], 30.0);
        assert_eq!(json["summary"].as_array().map(Vec::len), Some(4));

        let (status, json) = send(&state, "GET", "/result", "").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["total_yearly_cost"].as_f64().is_some());
    }

    #[tokio::test]
    async fn reset_clears_result() {
        let state = make_test_state();
        send(&state, "PATCH", "/devices/0", r#"{"enabled": true}"#).await;
        send(&state, "POST", "/calculate", "{}").await;

        let (status, json) = send(&state, "POST", "/reset", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json[0]["enabled"], false);

        let (status, _) = send(&state, "GET", "/result", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
