//! File logging setup.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::paths;

/// Rotate the previous log and start writing to `log_path`.
///
/// The terminal belongs to the prompts, so logs only go to the file.
pub fn init(log_path: &Path, level: LevelFilter) -> io::Result<()> {
    if let Some(dir) = log_path.parent() {
        fs::create_dir_all(dir)?;
    }
    paths::rotate_logs(log_path);

    let log_file = File::create(log_path)?;
    WriteLogger::init(level, Config::default(), log_file)
        .map_err(|e| io::Error::other(e.to_string()))
}
