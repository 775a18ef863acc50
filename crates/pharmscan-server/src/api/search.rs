use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    Json,
};
use pharmscan_core::AggregateResponse;
use serde::Deserialize;
use tracing::Instrument;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct SearchRequest {
    #[serde(default)]
    query: String,
}

/// `POST /api/v1/search`: runs one aggregation across all three sources.
///
/// The aggregation itself is infallible (per-source failures collapse to
/// empty lists), so the only error surfaces here are a missing/empty query
/// and a truly unexpected panic inside the aggregation task.
pub(super) async fn search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<SearchRequest>,
) -> Result<Json<ApiResponse<AggregateResponse>>, ApiError> {
    let query = body.query.trim().to_owned();
    if query.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            "no search term provided",
        ));
    }

    let span = tracing::info_span!("search", request_id = %req_id.0, query = %query);
    let aggregator = Arc::clone(&state.aggregator);
    let outcome =
        tokio::spawn(async move { aggregator.aggregate(&query).await }.instrument(span)).await;

    match outcome {
        Ok(data) => Ok(Json(ApiResponse {
            data,
            meta: ResponseMeta::new(req_id.0),
        })),
        Err(join_error) => {
            tracing::error!(error = %join_error, "search aggregation task failed unexpectedly");
            Err(ApiError::new(
                req_id.0,
                "internal_error",
                "search aggregation failed unexpectedly",
            ))
        }
    }
}
