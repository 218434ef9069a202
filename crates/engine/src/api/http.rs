//! HTTP routes.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::dto::AdRequest;
use crate::app::App;
use crate::use_cases::ads::{AdOutput, AdsError};

const CSV_CONTENT_TYPE: &str = "text/csv";
const VOWELS_DISPOSITION: &str = "attachment; filename=vowels.csv";

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/health", get(health))
        .route("/ads", get(list_ads).post(submit_ad))
        .route("/ads/vowels", get(vowel_report))
}

/// Routes mounted under `context_path` (e.g. `/api`) with state attached.
pub fn router(app: Arc<App>, context_path: Option<&str>) -> Router {
    let routes = match context_path {
        Some(path) => Router::new().nest(path, routes()),
        None => routes(),
    };
    routes.with_state(app)
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Ads
// =============================================================================

async fn submit_ad(
    State(app): State<Arc<App>>,
    payload: Result<Json<AdRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let input = request.into_input()?;

    let created = app.use_cases.ads.submit.execute(input).await?;
    Ok(if created {
        StatusCode::CREATED
    } else {
        StatusCode::CONFLICT
    })
}

/// JSON listing, or the CSV vowel report when the client asks for `text/csv`.
async fn list_ads(
    State(app): State<Arc<App>>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    if prefers_csv(&headers) {
        return vowel_report(State(app)).await;
    }

    // Repeated keys count separately.
    if params.len() > 1 {
        return Err(ApiError::BadRequest(
            "At most one filter parameter is supported".to_string(),
        ));
    }

    let ads: Vec<AdOutput> = app
        .use_cases
        .ads
        .list
        .execute(params.into_iter().next())
        .await?;
    Ok(Json(ads).into_response())
}

async fn vowel_report(State(app): State<Arc<App>>) -> Result<Response, ApiError> {
    let csv = app.use_cases.ads.vowel_report.execute().await?;
    Ok((
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, VOWELS_DISPOSITION),
        ],
        csv,
    )
        .into_response())
}

/// First media range naming either representation decides (`text/*` means CSV);
/// JSON otherwise.
fn prefers_csv(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(|range| range.split(';').next().unwrap_or_default().trim())
        .find_map(|media| {
            if media.eq_ignore_ascii_case(CSV_CONTENT_TYPE)
                || media.eq_ignore_ascii_case("text/*")
            {
                Some(true)
            } else if media.eq_ignore_ascii_case("application/json")
                || media.eq_ignore_ascii_case("application/*")
                || media == "*/*"
            {
                Some(false)
            } else {
                None
            }
        })
        .unwrap_or(false)
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// The request names a capability the service does not offer (unknown filter).
    NotImplemented(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::NotImplemented(msg) => (StatusCode::NOT_IMPLEMENTED, msg).into_response(),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<AdsError> for ApiError {
    fn from(e: AdsError) -> Self {
        match e {
            AdsError::UnsupportedFilterKey(key) => {
                tracing::warn!(error = %key, "Rejected list request");
                ApiError::NotImplemented(key.to_string())
            }
            AdsError::Repo(_) | AdsError::Csv(_) => ApiError::Internal(e.to_string()),
        }
    }
}
