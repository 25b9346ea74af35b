use axum::{
    extract::{Path, State},
    Json,
    http::StatusCode,
};
use serde::Serialize;
use crate::server::AppState;
use crate::storage::DbStats;
use crate::{Error, NewQuestion, QuestionWithChoices};
use std::sync::Arc;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(e: Error) -> ApiError {
    match e {
        Error::QuestionNotFound(_) => (StatusCode::NOT_FOUND, Json(ErrorResponse { error: e.to_string() })),
        _ => {
            tracing::error!("Request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { error: "internal error".to_string() }),
            )
        }
    }
}

/// Persist a question and its choices atomically
pub async fn create_question(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewQuestion>,
) -> Result<(StatusCode, Json<QuestionWithChoices>), ApiError> {
    let created = state
        .db
        .run(move |session| session.create_question(&new))
        .await
        .map_err(api_error)?;

    tracing::info!(
        "Created question {} with {} choices",
        created.question.id,
        created.choices.len()
    );
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<QuestionWithChoices>, ApiError> {
    let question = state
        .db
        .run(move |session| session.require_question(id))
        .await
        .map_err(api_error)?;

    Ok(Json(question))
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Result<Json<DbStats>, ApiError> {
    let stats = state.db.run(|session| session.stats()).await.map_err(api_error)?;
    Ok(Json(stats))
}
