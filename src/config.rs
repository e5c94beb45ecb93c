use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Runtime configuration, built once in `main` and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind: SocketAddr,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn new(bind: SocketAddr, data_dir: impl AsRef<Path>) -> Self {
        Self {
            bind,
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Path to the persisted task collection.
    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir.join("tasks.json")
    }
}
