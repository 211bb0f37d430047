use crate::infrastructure::{DuckDbStore, FileStore, KeyValueStore};
use anyhow::Result;
use clap::ValueEnum;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StorageBackend {
    /// One JSON file per storage key
    #[default]
    File,
    /// A DuckDB database file
    #[value(name = "duckdb")]
    DuckDb,
}

impl StorageBackend {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "file" => Some(Self::File),
            "duckdb" => Some(Self::DuckDb),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub backend: StorageBackend,
    pub theme: String,
    pub export_dir: PathBuf,
    pub log_level: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup("EDITION_DATES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::data_local_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("edition-dates")
            });

        let backend = lookup("EDITION_DATES_BACKEND")
            .and_then(|name| StorageBackend::parse(&name))
            .unwrap_or_default();

        let theme = lookup("EDITION_DATES_THEME").unwrap_or_else(|| "dark".to_string());

        let export_dir = lookup("EDITION_DATES_EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let log_level = lookup("EDITION_DATES_LOG");

        Self {
            data_dir,
            backend,
            theme,
            export_dir,
            log_level,
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        backend: Option<StorageBackend>,
    ) -> Self {
        if let Some(data_dir) = data_dir {
            self.data_dir = data_dir;
        }
        if let Some(backend) = backend {
            self.backend = backend;
        }
        self
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("edition-dates.log")
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("edition-dates.db")
    }

    pub fn open_store(&self) -> Result<Box<dyn KeyValueStore>> {
        let store: Box<dyn KeyValueStore> = match self.backend {
            StorageBackend::File => Box::new(FileStore::new(self.data_dir.clone())),
            StorageBackend::DuckDb => Box::new(DuckDbStore::new(self.database_path())?),
        };
        log::debug!("Using {}", store.backend_info());
        Ok(store)
    }
}
