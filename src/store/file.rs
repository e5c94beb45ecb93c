use std::path::{Path, PathBuf};

use tokio::fs;

use crate::config::Config;
use crate::error::TaskdError;
use crate::models::Task;

/// File-backed store owning the canonical task collection.
///
/// Every operation reads or replaces the whole collection. Acceptable at the
/// intended scale; this is the first bottleneck if the service ever grows
/// past it. Concurrent writers are not coordinated.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.tasks_file(),
        }
    }

    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the data directory and seed an empty collection if the file
    /// does not exist yet.
    pub async fn init(&self) -> Result<(), TaskdError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                TaskdError::storage_write(format!(
                    "Failed to create {}: {e}",
                    parent.display()
                ))
            })?;
        }
        if fs::metadata(&self.path).await.is_err() {
            self.save_all(&[]).await?;
        }
        Ok(())
    }

    pub async fn load_all(&self) -> Result<Vec<Task>, TaskdError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "failed to read tasks file");
            TaskdError::storage_read("Failed to read tasks")
        })?;
        serde_json::from_str(&content).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "tasks file is not a valid task array");
            TaskdError::storage_read("Failed to read tasks")
        })
    }

    /// Full replace of the persisted collection. Writes a temporary sibling
    /// and renames it into place, so a failed persist leaves the previous
    /// on-disk state intact.
    pub async fn save_all(&self, tasks: &[Task]) -> Result<(), TaskdError> {
        let content = serde_json::to_string_pretty(tasks)
            .map_err(|e| TaskdError::storage_write(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).await.map_err(|e| {
            tracing::error!(path = %tmp.display(), error = %e, "failed to write tasks file");
            TaskdError::storage_write("Failed to write tasks")
        })?;
        fs::rename(&tmp, &self.path).await.map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "failed to replace tasks file");
            TaskdError::storage_write("Failed to write tasks")
        })
    }
}
