use axum::{
    routing::get,
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde_json::Value;
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use std::time::Instant;

use crate::error::{Result, AppError};
use crate::api::models::{PredictQuery, Prediction};
use crate::api::response::{self, HealthResponse};
use crate::form::{self, FormState};
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(form_handler))
        .route("/api/predict", get(predict_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

/// `GET /api/predict?url=...`: relays the predictor's JSON for `url`.
async fn predict_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<(StatusCode, Json<Value>)> {
    let query = PredictQuery::from_pairs(pairs);
    let target = query.target().ok_or(AppError::MissingParameter("URL"))?;
    tracing::info!("Processing prediction request for URL: {target}");
    let start_time = Instant::now();

    let body = state.predictor.predict(target).await?;

    tracing::info!("Prediction for {target} relayed in {:?}", start_time.elapsed());
    Ok(response::success(body))
}

/// `GET /`: the form page. With a `url` it submits the form and renders the outcome.
async fn form_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Html<String> {
    let query = PredictQuery::from_pairs(pairs);
    let input = query.url.as_deref().unwrap_or_default();
    let mut form_state = FormState::default();

    if let Some(target) = query.target() {
        form_state.submit();
        let result = state
            .predictor
            .predict(target)
            .await
            .map(|body| Prediction::from_body(&body));
        if let Err(err) = &result {
            tracing::error!("Form prediction for {target} failed: {err}");
        }
        form_state.resolve(result, form::draw_score());
    }

    Html(form::render_page(input, &form_state))
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
