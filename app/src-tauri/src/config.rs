//! FILENAME: app/src-tauri/src/config.rs
// PURPOSE: Where the data file and log file live, and how verbose logging is.
// CONTEXT: No command-line flags or environment variables are read.

use std::path::PathBuf;

use log::LevelFilter;
use tauri::{AppHandle, Manager, Runtime};

/// Default values
pub mod defaults {
    use log::LevelFilter;

    pub const DATABASE_FILE: &str = persistence::DEFAULT_DATABASE_FILE;
    pub const LOG_FILE: &str = "containers.log";

    #[cfg(debug_assertions)]
    pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;
    #[cfg(not(debug_assertions))]
    pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub database_file: String,
    pub log_file: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Defaults rooted at `data_dir`.
    pub fn for_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        AppConfig {
            data_dir: data_dir.into(),
            database_file: defaults::DATABASE_FILE.to_string(),
            log_file: defaults::LOG_FILE.to_string(),
            log_level: defaults::LOG_LEVEL,
        }
    }

    /// Use the platform app data directory, or the working directory when
    /// the platform cannot provide one.
    pub fn resolve<R: Runtime>(app: &AppHandle<R>) -> Self {
        let data_dir = match app.path().app_data_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("[CONFIG] No app data dir ({}), using current directory", e);
                std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
            }
        };
        Self::for_data_dir(data_dir)
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_file)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(&self.log_file)
    }
}
