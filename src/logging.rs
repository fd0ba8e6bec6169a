//! Tracing output for the app: stdout plus one file per launch in
//! `.toxcheck/logs`, keeping the newest few launches.

use std::{
    fs::{self, File},
    path::{Path, PathBuf},
    sync::OnceLock,
};

use time::{
    OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem, macros::format_description,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{self, ConfigError};

const KEEP_LAUNCH_LOGS: usize = 10;
const LOG_PREFIX: &str = "toxcheck_";
const LOG_SUFFIX: &str = ".log";
const DEFAULT_FILTER: &str = "info";

/// Launch files are named by start time, so name order is launch order.
const FILE_STAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
const LINE_STAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

static FILE_WRITER: OnceLock<WorkerGuard> = OnceLock::new();

/// Why logging could not be set up. The app keeps running without file logs.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The logs directory could not be resolved or created.
    #[error("Log directory unavailable: {0}")]
    Dir(#[from] ConfigError),
    /// Creating, listing or removing a log file failed.
    #[error("Log file error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to format log file time: {0}")]
    FormatTime(#[from] time::error::Format),
    #[error("Another tracing subscriber is already installed: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global subscriber. Calling it again is a no-op.
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init() -> Result<(), LoggingError> {
    if FILE_WRITER.get().is_some() {
        return Ok(());
    }

    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let dir = config::logs_dir()?;
    let path = dir.join(launch_log_name(OffsetDateTime::now_utc().to_offset(offset))?);
    let file = File::create(&path).map_err(io_error(&path))?;
    let pruned = prune_launch_logs(&dir, KEEP_LAUNCH_LOGS)?;

    let (file_writer, guard) = tracing_appender::non_blocking(file);
    let timer = fmt::time::OffsetTime::new(offset, LINE_STAMP);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_timer(timer.clone()))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_timer(timer)
                .with_writer(file_writer),
        );
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = FILE_WRITER.set(guard);

    tracing::info!(pruned, "Writing log to {}", path.display());
    Ok(())
}

fn launch_log_name(started: OffsetDateTime) -> Result<String, LoggingError> {
    Ok(format!("{LOG_PREFIX}{}{LOG_SUFFIX}", started.format(FILE_STAMP)?))
}

fn is_launch_log(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(LOG_PREFIX) && name.ends_with(LOG_SUFFIX))
}

/// Delete all but the newest `keep` launch logs; returns how many were removed.
fn prune_launch_logs(dir: &Path, keep: usize) -> Result<usize, LoggingError> {
    let mut logs: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(io_error(dir))?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| is_launch_log(path))
        .collect();
    logs.sort();
    let excess = logs.len().saturating_sub(keep);
    for path in &logs[..excess] {
        fs::remove_file(path).map_err(io_error(path))?;
    }
    Ok(excess)
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> LoggingError + '_ {
    move |source| LoggingError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").unwrap();
    }

    fn names_in(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn launch_log_name_uses_start_time() {
        let started = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        assert_eq!(
            launch_log_name(started).unwrap(),
            "toxcheck_2023-11-14_22-13-20.log"
        );
    }

    #[test]
    fn prune_removes_oldest_launches_only() {
        let dir = tempdir().unwrap();
        for day in 1..=4 {
            touch(dir.path(), &format!("toxcheck_2024-03-0{day}_08-00-00.log"));
        }
        touch(dir.path(), "config.toml");
        touch(dir.path(), "other.log");

        assert_eq!(prune_launch_logs(dir.path(), 2).unwrap(), 2);
        assert_eq!(
            names_in(dir.path()),
            [
                "config.toml",
                "other.log",
                "toxcheck_2024-03-03_08-00-00.log",
                "toxcheck_2024-03-04_08-00-00.log",
            ]
        );
    }

    #[test]
    fn prune_under_limit_keeps_everything() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "toxcheck_2024-03-01_08-00-00.log");
        assert_eq!(prune_launch_logs(dir.path(), KEEP_LAUNCH_LOGS).unwrap(), 0);
        assert_eq!(names_in(dir.path()).len(), 1);
    }

    #[test]
    fn missing_log_dir_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = prune_launch_logs(&dir.path().join("absent"), 1).unwrap_err();
        assert!(matches!(err, LoggingError::Io { .. }), "{err}");
    }
}
