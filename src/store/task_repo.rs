use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use super::file::TaskStore;
use crate::error::TaskdError;
use crate::models::{CreateTask, Task, TaskFilter, TaskStatus, UpdateTask};

/// List tasks in on-disk insertion order, narrowed by the filter when one is
/// supplied. Every supplied filter field must match.
pub async fn list_tasks(store: &TaskStore, filter: &TaskFilter) -> Result<Vec<Task>, TaskdError> {
    let tasks = store.load_all().await?;
    if filter.is_empty() {
        return Ok(tasks);
    }
    Ok(tasks
        .into_iter()
        .filter(|t| matches_filter(t, filter))
        .collect())
}

pub async fn get_task_by_id(store: &TaskStore, id: &str) -> Result<Task, TaskdError> {
    let tasks = store.load_all().await?;
    tasks.into_iter().find(|t| t.id == id).ok_or_else(|| {
        tracing::warn!(%id, "task not found");
        TaskdError::task_not_found(id)
    })
}

/// Payloads are validated before they reach here; a fresh id and creation
/// timestamp are stamped by this operation.
pub async fn create_task(store: &TaskStore, payload: &CreateTask) -> Result<Task, TaskdError> {
    let mut tasks = store.load_all().await?;

    let task = Task {
        id: Uuid::new_v4().to_string(),
        title: payload.title.clone().unwrap_or_default(),
        description: payload.description.clone().unwrap_or_default(),
        status: payload
            .status
            .as_deref()
            .and_then(TaskStatus::from_str)
            .unwrap_or(TaskStatus::Pending),
        created_at: now_timestamp(),
    };

    tasks.push(task.clone());
    store.save_all(&tasks).await?;
    tracing::info!(id = %task.id, title = %task.title, "task created");
    Ok(task)
}

/// Overlay only the supplied fields onto the stored record. `id` and
/// `createdAt` are never touched; an empty payload is a no-op.
pub async fn update_task(
    store: &TaskStore,
    id: &str,
    payload: &UpdateTask,
) -> Result<Task, TaskdError> {
    let mut tasks = store.load_all().await?;
    let index = tasks.iter().position(|t| t.id == id).ok_or_else(|| {
        tracing::warn!(%id, "task not found");
        TaskdError::task_not_found(id)
    })?;

    let task = &mut tasks[index];
    if let Some(title) = &payload.title {
        task.title = title.clone();
    }
    if let Some(description) = &payload.description {
        task.description = description.clone();
    }
    if let Some(status) = payload.status.as_deref().and_then(TaskStatus::from_str) {
        task.status = status;
    }
    let updated = task.clone();

    store.save_all(&tasks).await?;
    tracing::info!(%id, "task updated");
    Ok(updated)
}

pub async fn delete_task(store: &TaskStore, id: &str) -> Result<Task, TaskdError> {
    let mut tasks = store.load_all().await?;
    let index = tasks.iter().position(|t| t.id == id).ok_or_else(|| {
        tracing::warn!(%id, "task not found");
        TaskdError::task_not_found(id)
    })?;

    let removed = tasks.remove(index);
    store.save_all(&tasks).await?;
    tracing::info!(%id, "task deleted");
    Ok(removed)
}

fn matches_filter(task: &Task, filter: &TaskFilter) -> bool {
    let title_ok = filter
        .title
        .as_deref()
        .is_none_or(|t| task.title.to_lowercase().contains(&t.to_lowercase()));
    let description_ok = filter.description.as_deref().is_none_or(|d| {
        task.description
            .to_lowercase()
            .contains(&d.to_lowercase())
    });
    let status_ok = filter
        .status
        .as_deref()
        .is_none_or(|s| task.status.as_str() == s);
    title_ok && description_ok && status_ok
}

fn now_timestamp() -> String {
    // Millisecond precision with a Z suffix, e.g. 2026-08-06T12:34:56.789Z.
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
