//! Rolling file logger for Tauri applications.
//!
//! One log file per day, named `{app}-{YYYY-MM-DD}.log`, with the oldest
//! files pruned at startup. On Android everything goes to logcat instead.
//! Installing the subscriber also bridges the `log` macros.

use std::io;
use std::path::PathBuf;

#[cfg(not(target_os = "android"))]
use std::fs;
#[cfg(not(target_os = "android"))]
use std::path::Path;

/// Number of daily log files kept on disk
#[cfg(not(target_os = "android"))]
const KEEP_FILES: usize = 7;

/// Initialize global logging, writing to a daily file under `log_dir`.
///
/// Must be called at most once; later calls fail when a subscriber is
/// already installed.
#[cfg(not(target_os = "android"))]
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> io::Result<()> {
    fs::create_dir_all(&log_dir)?;
    prune_old_logs(&log_dir, app_name, KEEP_FILES)?;

    let file_name = log_file_name(app_name, chrono::Local::now().date_naive());
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(file_name))?;

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e.to_string()))?;

    Ok(())
}

/// Initialize logging to logcat
#[cfg(target_os = "android")]
pub fn init_logger(_log_dir: PathBuf, app_name: &str) -> io::Result<()> {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag(app_name),
    );
    Ok(())
}

/// Log an info-level message
pub fn info(msg: &str) {
    tracing::info!("{}", msg);
}

/// Log a warn-level message
pub fn warn(msg: &str) {
    tracing::warn!("{}", msg);
}

/// Log an error-level message
pub fn error(msg: &str) {
    tracing::error!("{}", msg);
}

#[cfg(not(target_os = "android"))]
fn log_file_name(app_name: &str, date: chrono::NaiveDate) -> String {
    format!("{}-{}.log", app_name, date.format("%Y-%m-%d"))
}

/// Delete the oldest `{app}-*.log` files beyond `keep`.
///
/// Date-stamped names sort lexicographically, so a name sort is a date
/// sort.
#[cfg(not(target_os = "android"))]
fn prune_old_logs(log_dir: &Path, app_name: &str, keep: usize) -> io::Result<()> {
    let prefix = format!("{}-", app_name);

    let mut logs: Vec<PathBuf> = fs::read_dir(log_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with(&prefix) && n.ends_with(".log"))
                .unwrap_or(false)
        })
        .collect();

    logs.sort();

    if logs.len() > keep {
        for stale in &logs[..logs.len() - keep] {
            fs::remove_file(stale)?;
        }
    }

    Ok(())
}
