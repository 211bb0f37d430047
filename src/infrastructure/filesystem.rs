use crate::infrastructure::KeyValueStore;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Stores each key as `<dir>/<key>.json`.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = std::fs::read(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        match String::from_utf8(bytes) {
            Ok(text) => Ok(Some(text)),
            Err(e) => {
                // Read as empty; the next write replaces it
                log::error!("Ignoring {}, it is not valid UTF-8: {e}", path.display());
                Ok(None)
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);

        std::fs::create_dir_all(&self.data_dir).with_context(|| {
            format!("Failed to create data directory {}", self.data_dir.display())
        })?;

        // Write beside the target and rename over it so readers never see half a blob
        let mut file = NamedTempFile::new_in(&self.data_dir)
            .context("Failed to create temporary storage file")?;
        file.write_all(value.as_bytes())
            .context("Failed to write temporary storage file")?;
        file.persist(&path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        Ok(())
    }

    fn backend_info(&self) -> &str {
        "File Storage Backend"
    }
}
