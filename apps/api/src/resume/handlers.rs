use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::resume::models::Record;
use crate::state::AppState;
use crate::validation::{require_object, validate_create, validate_update};

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: u64,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse<T> {
    pub message: String,
    pub deleted: T,
}

/// Unwraps a JSON body, folding every extractor rejection into "no data".
pub(crate) fn read_body(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Map<String, Value>, AppError> {
    let body = match payload {
        Ok(Json(value)) => Some(value),
        Err(rejection) => {
            debug!("Unreadable request body: {rejection}");
            None
        }
    };
    require_object(body)
}

/// A path id that is not a non-negative integer cannot name any record.
fn record_id<T: Record>(id: Result<Path<u64>, PathRejection>) -> Result<u64, AppError> {
    id.map(|Path(id)| id)
        .map_err(|_| AppError::NotFound(T::LABEL.to_string()))
}

/// GET /resume/{kind}
pub async fn list_records<T: Record>(State(state): State<AppState>) -> Json<Vec<T>> {
    Json(T::collection(&state.store).list().await)
}

/// POST /resume/{kind}
pub async fn create_record<T: Record>(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let body = read_body(payload)?;
    let fields = validate_create(&T::SCHEMA, &body).map_err(|err| {
        debug!(kind = T::KIND, "Rejected create: {err}");
        err
    })?;

    let record = T::collection(&state.store)
        .insert_with(|id| T::from_fields(id, fields))
        .await;
    info!(kind = T::KIND, id = record.id(), "Record created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: record.id() })))
}

/// GET /resume/{kind}/:id
pub async fn get_record<T: Record>(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<T>, AppError> {
    let id = record_id::<T>(id)?;
    T::collection(&state.store)
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(T::LABEL.to_string()))
}

/// PUT /resume/{kind}/:id
pub async fn update_record<T: Record>(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<T>, AppError> {
    let id = record_id::<T>(id)?;
    let body = read_body(payload)?;
    let fields = validate_update(&T::SCHEMA, &body).map_err(|err| {
        debug!(kind = T::KIND, id, "Rejected update: {err}");
        err
    })?;

    let changed = fields.names();
    let record = T::collection(&state.store)
        .update_with(id, |record| record.apply(fields))
        .await
        .ok_or_else(|| AppError::NotFound(T::LABEL.to_string()))?;
    info!(kind = T::KIND, id, ?changed, "Record updated");

    Ok(Json(record))
}

/// DELETE /resume/{kind}/:id
pub async fn delete_record<T: Record>(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<DeletedResponse<T>>, AppError> {
    let id = record_id::<T>(id)?;
    let deleted = T::collection(&state.store)
        .remove(id)
        .await
        .ok_or_else(|| AppError::NotFound(T::LABEL.to_string()))?;
    info!(kind = T::KIND, id, "Record deleted");

    Ok(Json(DeletedResponse {
        message: format!("{} with id {id} deleted.", T::LABEL),
        deleted,
    }))
}
