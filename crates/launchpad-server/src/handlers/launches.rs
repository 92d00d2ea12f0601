//! Launch handlers (create, list, get, update, delete).
//!
//! Bodies are taken as raw bytes and decoded here so that malformed JSON maps
//! to a 400 regardless of the request's `Content-Type`.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use launchpad_core::{Launch, LaunchCreateRequest, LaunchId};

use crate::error::ApiError;
use crate::schema::launches::DeleteLaunchResponse;
use crate::state::AppState;

/// Creates a launch.
///
/// `POST /launches`
pub async fn create_launch(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Launch>), ApiError> {
    let req: LaunchCreateRequest = serde_json::from_slice(&body)
        .map_err(|_| ApiError::BadRequest("invalid request payload".to_string()))?;
    let mut service = state.service.lock().await;
    let created = service.create_launch(req)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Lists all launches.
///
/// `GET /launches`
pub async fn list_launches(State(state): State<AppState>) -> Result<Json<Vec<Launch>>, ApiError> {
    let service = state.service.lock().await;
    let launches = service.list_launches()?;
    Ok(Json(launches))
}

/// `GET /launches/{id}`
pub async fn get_launch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Launch>, ApiError> {
    let service = state.service.lock().await;
    let launch = service.get_launch(&LaunchId::from(id))?;
    Ok(Json(launch))
}

/// Partially updates a launch. An empty body changes nothing and returns
/// the current record.
///
/// `PUT /launches/{id}`
pub async fn update_launch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Launch>, ApiError> {
    let req = if body.is_empty() {
        None
    } else {
        let req: LaunchCreateRequest = serde_json::from_slice(&body)
            .map_err(|_| ApiError::BadRequest("invalid JSON".to_string()))?;
        Some(req)
    };
    let mut service = state.service.lock().await;
    let updated = service.update_launch(&LaunchId::from(id), req)?;
    Ok(Json(updated))
}

/// `DELETE /launches/{id}`
pub async fn delete_launch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteLaunchResponse>, ApiError> {
    let mut service = state.service.lock().await;
    service.delete_launch(&LaunchId::from(id))?;
    Ok(Json(DeleteLaunchResponse::deleted()))
}
