//! HTTP request handlers for the Vacation Alert Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::{MAX_ALERT_WINDOW_DAYS, analyze};
use crate::error::{AlertError, AlertResult};
use crate::ingest::{
    CLIENTS_SHEET, VACATIONS_SHEET, parse_clients, parse_vacations, parse_workbook,
};
use crate::models::AnalysisResult;

use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Query parameters for the `/analyze-vacations` endpoint.
#[derive(Debug, Deserialize)]
struct AnalyzeQuery {
    /// Alert window size in days; falls back to the configured default.
    alert_window_days: Option<i64>,
}

/// Creates the API router with all endpoints.
///
/// The router applies a permissive CORS policy (the endpoint is called
/// straight from browser uploads) and caps the request body at the
/// configured maximum upload size.
pub fn create_router(state: AppState) -> Router {
    let max_upload_bytes = state.config().max_upload_bytes;
    Router::new()
        .route("/analyze-vacations", post(analyze_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handler for POST /analyze-vacations endpoint.
///
/// Accepts a multipart workbook upload plus an optional `alert_window_days`
/// query parameter and returns the enriched alert records with metrics.
async fn analyze_handler(
    State(state): State<AppState>,
    query: Result<Query<AnalyzeQuery>, QueryRejection>,
    mut multipart: Multipart,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing vacation analysis request");

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection,
                "Query string rejected"
            );
            return ApiErrorResponse::bad_request(ApiError::invalid_query(rejection.body_text()))
                .into_response();
        }
    };

    let window_days = query
        .alert_window_days
        .unwrap_or(state.config().default_alert_window_days);
    if !(0..=MAX_ALERT_WINDOW_DAYS).contains(&window_days) {
        warn!(
            correlation_id = %correlation_id,
            window_days,
            "Alert window out of range"
        );
        return ApiErrorResponse::from(AlertError::InvalidWindow {
            days: window_days,
            max: MAX_ALERT_WINDOW_DAYS,
        })
        .into_response();
    }

    let workbook_text = match read_workbook_field(&mut multipart).await {
        Ok(Some(text)) => text,
        Ok(None) => {
            warn!(correlation_id = %correlation_id, "Upload had no 'file' field");
            return ApiErrorResponse::bad_request(ApiError::missing_file()).into_response();
        }
        Err(message) => {
            warn!(correlation_id = %correlation_id, error = %message, "Upload could not be read");
            return ApiErrorResponse::bad_request(ApiError::invalid_upload(message))
                .into_response();
        }
    };

    // "Now" is resolved once at this boundary and threaded into the core,
    // which keeps the transformation itself deterministic.
    let now = Local::now().date_naive();

    let start_time = Instant::now();
    match run_analysis(&workbook_text, window_days, now) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                alert_count = result.metrics.alert_count,
                window_days,
                duration_us = start_time.elapsed().as_micros(),
                "Analysis completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Analysis failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Reads the workbook text from the multipart field named `file`.
///
/// Unrelated form fields are skipped. Returns `Ok(None)` when the form has
/// no `file` field; a transport or encoding failure (including non-UTF-8
/// content) is returned as a message for the client.
async fn read_workbook_field(multipart: &mut Multipart) -> Result<Option<String>, String> {
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() == Some("file") {
                    return field.text().await.map(Some).map_err(|err| err.to_string());
                }
            }
            Ok(None) => return Ok(None),
            Err(err) => return Err(err.to_string()),
        }
    }
}

/// Parses the workbook and runs the core analysis.
fn run_analysis(
    workbook_text: &str,
    alert_window_days: i64,
    now: NaiveDate,
) -> AlertResult<AnalysisResult> {
    let workbook = parse_workbook(workbook_text)?;
    let clients = parse_clients(workbook.sheet(CLIENTS_SHEET)?)?;
    let vacations = parse_vacations(workbook.sheet(VACATIONS_SHEET)?)?;
    Ok(analyze(&clients, &vacations, alert_window_days, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::Duration;
    use serde_json::Value;
    use tower::ServiceExt;

    const BOUNDARY: &str = "workbook-test-boundary";

    fn create_test_router() -> Router {
        create_router(AppState::new(AppConfig::default()))
    }

    fn multipart_body(field_name: &str, content: &str) -> String {
        format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"{f}\"; filename=\"workbook.csv\"\r\nContent-Type: text/csv\r\n\r\n{c}\r\n--{b}--\r\n",
            b = BOUNDARY,
            f = field_name,
            c = content,
        )
    }

    async fn post_workbook(router: Router, uri: &str, body: String) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(
                        "Content-Type",
                        format!("multipart/form-data; boundary={}", BOUNDARY),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body_bytes).unwrap();

        (status, json)
    }

    fn sample_workbook() -> String {
        let due = (Local::now().date_naive() + Duration::days(10))
            .format("%Y-%m-%d")
            .to_string();
        format!(
            "[clients]\nclient_id,name\n1,Acme\n\n[vacations]\nclient_id,entitlement_days,days_taken,due_by_date\n1,30,10,{due}\n"
        )
    }

    #[tokio::test]
    async fn test_valid_upload_returns_200() {
        let router = create_test_router();
        let body = multipart_body("file", &sample_workbook());

        let (status, json) = post_workbook(router, "/analyze-vacations", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["metrics"]["alert_count"], 1);
        assert_eq!(json["data"][0]["company_name"], "Acme");
        assert_eq!(json["data"][0]["remaining_days"], 20);
    }

    #[tokio::test]
    async fn test_missing_file_field_returns_400() {
        let router = create_test_router();
        let body = multipart_body("attachment", &sample_workbook());

        let (status, json) = post_workbook(router, "/analyze-vacations", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MISSING_FILE");
    }

    #[tokio::test]
    async fn test_negative_window_returns_400() {
        let router = create_test_router();
        let body = multipart_body("file", &sample_workbook());

        let (status, json) =
            post_workbook(router, "/analyze-vacations?alert_window_days=-10", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_WINDOW");
    }

    #[tokio::test]
    async fn test_oversized_window_returns_400() {
        let router = create_test_router();
        let body = multipart_body("file", &sample_workbook());

        let (status, json) = post_workbook(
            router,
            &format!("/analyze-vacations?alert_window_days={}", i64::MAX),
            body,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_WINDOW");
    }

    #[tokio::test]
    async fn test_window_beyond_calendar_range_returns_400() {
        let router = create_test_router();
        let body = multipart_body("file", &sample_workbook());

        let (status, json) = post_workbook(
            router,
            "/analyze-vacations?alert_window_days=100000000000",
            body,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_WINDOW");
    }

    #[tokio::test]
    async fn test_non_numeric_window_returns_400() {
        let router = create_test_router();
        let body = multipart_body("file", &sample_workbook());

        let (status, json) =
            post_workbook(router, "/analyze-vacations?alert_window_days=soon", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_QUERY");
    }

    #[tokio::test]
    async fn test_narrow_window_excludes_record() {
        let router = create_test_router();
        let body = multipart_body("file", &sample_workbook());

        // Record is due in 10 days; a 5-day window must exclude it.
        let (status, json) =
            post_workbook(router, "/analyze-vacations?alert_window_days=5", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["metrics"]["alert_count"], 0);
        assert!(json["metrics"]["average_remaining_days"].is_null());
    }
}
