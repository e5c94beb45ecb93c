use uuid::Uuid;

use crate::error::TaskdError;
use crate::models::{CreateTask, TaskFilter, TaskStatus, UpdateTask};

/// Path identifiers must be UUID-shaped before they reach the repository.
pub fn validate_id(id: &str) -> Result<(), TaskdError> {
    Uuid::parse_str(id)
        .map(|_| ())
        .map_err(|_| TaskdError::invalid_identifier(id))
}

pub fn validate_create(payload: &CreateTask) -> Result<(), TaskdError> {
    let mut errors = Vec::new();

    match payload.title.as_deref() {
        Some(title) => check_title(title, &mut errors),
        None => errors.push("Title must not be empty".into()),
    }
    match payload.description.as_deref() {
        Some(description) => check_description(description, &mut errors),
        None => errors.push("Description must not be empty".into()),
    }
    if let Some(status) = payload.status.as_deref() {
        check_status(status, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(TaskdError::validation(&errors))
    }
}

/// All fields optional; an empty payload is a legal no-op update.
pub fn validate_update(payload: &UpdateTask) -> Result<(), TaskdError> {
    let mut errors = Vec::new();

    if let Some(title) = payload.title.as_deref() {
        check_title(title, &mut errors);
    }
    if let Some(description) = payload.description.as_deref() {
        check_description(description, &mut errors);
    }
    if let Some(status) = payload.status.as_deref() {
        check_status(status, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(TaskdError::validation(&errors))
    }
}

pub fn validate_filter(filter: &TaskFilter) -> Result<(), TaskdError> {
    let mut errors = Vec::new();
    if let Some(status) = filter.status.as_deref() {
        check_status(status, &mut errors);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(TaskdError::validation(&errors))
    }
}

fn check_title(title: &str, errors: &mut Vec<String>) {
    if title.is_empty() {
        errors.push("Title must not be empty".into());
        return;
    }
    let len = title.chars().count();
    if !(3..=100).contains(&len) {
        errors.push("Title must be between 3 and 100 characters".into());
    }
}

fn check_description(description: &str, errors: &mut Vec<String>) {
    if description.is_empty() {
        errors.push("Description must not be empty".into());
        return;
    }
    if description.chars().count() > 500 {
        errors.push("Description must not exceed 500 characters".into());
    }
}

fn check_status(status: &str, errors: &mut Vec<String>) {
    if TaskStatus::from_str(status).is_none() {
        errors.push("Status must be either \"PENDING\" or \"COMPLETED\"".into());
    }
}
