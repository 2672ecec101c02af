//! Mistake endpoints

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::db::MistakeRepo;
use crate::http::error::ApiError;
use crate::models::{Mistake, NewMistake};
use crate::state::AppState;

/// GET /mistakes - list every record in ascending id order
async fn list_mistakes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Mistake>>, ApiError> {
    let mistakes = MistakeRepo::new(state.pool()).list_all().await?;
    Ok(Json(mistakes))
}

/// POST /mistakes - insert one record
///
/// The body is extracted as a Result so a malformed payload surfaces its
/// parse message as a 400 instead of axum's default rejection body.
async fn create_mistake(
    State(state): State<AppState>,
    payload: Result<Json<NewMistake>, JsonRejection>,
) -> Result<(StatusCode, Json<Mistake>), ApiError> {
    let Json(new) = payload?;
    new.validate()?;

    let mistake = MistakeRepo::new(state.pool()).create(new).await?;
    tracing::info!(id = mistake.id, "created mistake");

    Ok((StatusCode::CREATED, Json(mistake)))
}

/// Mistake routes
pub fn router() -> Router<AppState> {
    Router::new().route("/mistakes", get(list_mistakes).post(create_mistake))
}
