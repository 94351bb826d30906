//! Handlers for the `/pessoas` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pessoas_core::person::PersonDto;
use pessoas_core::types::DbId;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /pessoas
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<PersonDto>,
) -> AppResult<(StatusCode, Json<PersonDto>)> {
    let person = state.people.create(input).await?;
    tracing::info!(person_id = person.id, "Person created");
    Ok((StatusCode::CREATED, Json(person)))
}

/// GET /pessoas
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PersonDto>>> {
    let people = state.people.list_all().await?;
    Ok(Json(people))
}

/// GET /pessoas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PersonDto>> {
    let person = state.people.find_by_id(id).await?;
    Ok(Json(person))
}

/// PUT /pessoas/{id}
///
/// Replaces all mutable fields. Only the request-level checks apply.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<PersonDto>,
) -> AppResult<Json<PersonDto>> {
    let person = state.people.update(id, input).await?;
    tracing::info!(person_id = id, "Person updated");
    Ok(Json(person))
}

/// DELETE /pessoas/{id}
///
/// Always 204, whether or not the id existed.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.people.delete(id).await?;
    tracing::info!(person_id = id, "Person deleted");
    Ok(StatusCode::NO_CONTENT)
}
