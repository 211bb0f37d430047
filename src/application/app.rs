use crate::application::{Config, Notice};
use crate::domain::{DateSetError, DateWindow, SavedDateSet};
use crate::infrastructure::{
    SavedSetRepository, SpreadsheetExporter, UpsertOutcome, default_export_filename,
};
use anyhow::Result;
use chrono::{Local, Utc};
use std::path::{Path, PathBuf};

/// Today's date as a day 1 input.
pub fn today_anchor() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn selected(selection: Option<&str>) -> Result<&str, DateSetError> {
    selection
        .filter(|id| !id.is_empty())
        .ok_or(DateSetError::NoSelection)
}

/// The user-facing operations. Each validates its input before touching storage.
pub struct DateSetApp {
    repository: SavedSetRepository,
    exporter: SpreadsheetExporter,
    export_dir: PathBuf,
}

impl DateSetApp {
    pub fn new(config: &Config) -> Result<Self> {
        let repository = SavedSetRepository::new(config.open_store()?);
        Ok(Self::with_repository(repository, config.export_dir.clone()))
    }

    pub fn with_repository(repository: SavedSetRepository, export_dir: PathBuf) -> Self {
        Self {
            repository,
            exporter: SpreadsheetExporter::new(),
            export_dir,
        }
    }

    pub fn calculate(&self, anchor: &str) -> Result<DateWindow, DateSetError> {
        let window = DateWindow::calculate(anchor)?;
        log::debug!("Calculated {} dates around {}", window.len(), window.anchor_raw());
        Ok(window)
    }

    pub fn save(&self, window: Option<&DateWindow>) -> Result<Notice> {
        let window = window
            .filter(|w| !w.is_empty())
            .ok_or(DateSetError::NothingToSave)?;

        let outcome = self
            .repository
            .upsert(SavedDateSet::snapshot(window, Utc::now()))?;
        log::info!("Saved date set {} ({outcome:?})", window.anchor_raw());

        Ok(match outcome {
            UpsertOutcome::Inserted => Notice::success("Dates saved"),
            UpsertOutcome::Updated => Notice::success("Dates updated"),
        })
    }

    pub fn load(&self, selection: Option<&str>) -> Result<(DateWindow, Notice)> {
        let id = selected(selection)?;

        let set = self
            .repository
            .find(id)?
            .ok_or_else(|| DateSetError::NotFound { id: id.to_string() })?;
        let window = set.to_window()?;

        Ok((window, Notice::info("Dates loaded")))
    }

    pub fn delete(&self, selection: Option<&str>) -> Result<Notice> {
        let id = selected(selection)?;

        if !self.repository.delete(id)? {
            log::warn!("Delete requested for unknown date set {id}");
        }

        Ok(Notice::danger("Saved date set deleted"))
    }

    /// Writes the spreadsheet to `output`, or to the export directory under
    /// today's default file name.
    pub fn export(
        &self,
        window: Option<&DateWindow>,
        output: Option<&Path>,
    ) -> Result<(PathBuf, Notice)> {
        let window = window
            .filter(|w| !w.is_empty())
            .ok_or(DateSetError::NothingToExport)?;

        let path = match output {
            Some(path) => path.to_path_buf(),
            None => self
                .export_dir
                .join(default_export_filename(Local::now().date_naive())),
        };

        self.exporter.export(window.entries(), &path)?;
        Ok((path, Notice::info("Spreadsheet exported")))
    }

    pub fn saved_sets(&self) -> Result<Vec<SavedDateSet>> {
        self.repository.list_sorted_by_recency()
    }
}
