use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::{env, str::FromStr};

use directories::BaseDirs;
use log::{LevelFilter, Log, Metadata, Record};

pub const LOG_ENV: &str = "HOLYHELL_LOG";
const LOG_FILE: &str = "holyhell.log";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("logger already initialised: {0}")]
    AlreadySet(#[from] log::SetLoggerError),
}

/// `log` sink writing timestamped lines to the local data directory, or to
/// stderr when no log file can be created.
pub struct FileLogger {
    level: LevelFilter,
    out: Mutex<Box<dyn Write + Send>>,
}

impl FileLogger {
    pub fn new(level: LevelFilter) -> Self {
        let out: Box<dyn Write + Send> = match Self::open_first(Self::log_paths()) {
            Some(file) => Box::new(file),
            None => Box::new(io::stderr()),
        };
        Self::with_writer(level, out)
    }

    pub fn with_writer(level: LevelFilter, out: Box<dyn Write + Send>) -> Self {
        Self {
            level,
            out: Mutex::new(out),
        }
    }

    /// Installs the logger globally, with the level read from `HOLYHELL_LOG`.
    pub fn init() -> Result<(), LoggingError> {
        let level = Self::level_from_env();
        log::set_boxed_logger(Box::new(Self::new(level)))?;
        log::set_max_level(level);
        Ok(())
    }

    pub fn level_from_env() -> LevelFilter {
        parse_level(env::var(LOG_ENV).ok().as_deref())
    }

    /// Data directory first, then the working directory.
    fn log_paths() -> Vec<PathBuf> {
        let data_dir = BaseDirs::new().and_then(|base_dirs| {
            let dir = base_dirs.data_local_dir().join("HolyHell");
            fs::create_dir_all(&dir).ok().map(|_| dir.join(LOG_FILE))
        });
        let cwd = env::current_dir().ok().map(|dir| dir.join(LOG_FILE));
        [data_dir, cwd].into_iter().flatten().collect()
    }

    /// Creates the first path that can be opened for writing.
    fn open_first(paths: impl IntoIterator<Item = PathBuf>) -> Option<File> {
        paths.into_iter().find_map(|path| File::create(path).ok())
    }
}

/// Unset or unrecognised values fall back to `info`.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let time = chrono::Local::now();
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(
                out,
                "[{}] [{}] {}: {}",
                time.format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.flush();
        }
    }
}
