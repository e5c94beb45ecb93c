use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use super::AppState;
use crate::error::TaskdError;
use crate::models::{CreateTask, Task, TaskFilter, UpdateTask};
use crate::store::task_repo;
use crate::validate;

pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<TaskFilter>,
) -> Result<Json<Vec<Task>>, TaskdError> {
    validate::validate_filter(&filter)?;
    let tasks = task_repo::list_tasks(&state.store, &filter).await?;
    info!(count = tasks.len(), filtered = !filter.is_empty(), "retrieved tasks");
    Ok(Json(tasks))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, TaskdError> {
    validate::validate_id(&id)?;
    let task = task_repo::get_task_by_id(&state.store, &id).await?;
    Ok(Json(task))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateTask>,
) -> Result<(StatusCode, Json<Task>), TaskdError> {
    validate::validate_create(&payload)?;
    let task = task_repo::create_task(&state.store, &payload).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTask>,
) -> Result<Json<Task>, TaskdError> {
    validate::validate_id(&id)?;
    validate::validate_update(&payload)?;
    let task = task_repo::update_task(&state.store, &id, &payload).await?;
    Ok(Json(task))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, TaskdError> {
    validate::validate_id(&id)?;
    let task = task_repo::delete_task(&state.store, &id).await?;
    Ok(Json(task))
}
