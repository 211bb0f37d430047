use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

/// Map `-v` counts to a level: none is warn, then info, debug, trace.
pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logger that appends every record to a file.
///
/// The interactive view owns the terminal, so nothing goes to stderr.
pub struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl FileLogger {
    pub fn open(path: &Path, level: LevelFilter) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        Ok(Self {
            level,
            file: Mutex::new(file),
        })
    }

    /// Install as the global logger
    pub fn install(self) -> Result<()> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self)).context("A logger is already installed")?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "[{}] {:<5} {} - {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}
