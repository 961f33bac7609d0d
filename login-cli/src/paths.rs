//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "formstate";
const APPLICATION: &str = "login";

/// Name of the log file written by the current run.
pub const LATEST_LOG: &str = "latest.log";

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 10;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory, where logs live.
///
/// - Linux: `$XDG_CACHE_HOME/login` or `~/.cache/login`
/// - macOS: `~/Library/Caches/dev.formstate.login`
/// - Windows: `C:\Users\<User>\AppData\Local\formstate\login\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the default path of the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive `log_path` under a timestamped name and prune old archives.
///
/// `latest.log` is archived as `latest.<timestamp>.log`. Only archives that
/// share the log's stem are pruned, so other files in the directory are left
/// alone. Call this at startup before creating the new log file.
pub fn rotate_logs(log_path: &Path) {
    let Some(dir) = log_path.parent() else { return };
    let Some(stem) = log_path.file_stem().and_then(|s| s.to_str()) else {
        return;
    };

    if log_path.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archived = dir.join(format!("{}.{}.log", stem, timestamp));
        let _ = fs::rename(log_path, &archived);
    }

    cleanup_old_logs(dir, stem, log_path);
}

/// Remove old archives of `stem`, keeping only the most recent MAX_OLD_LOGS.
fn cleanup_old_logs(dir: &Path, stem: &str, current: &Path) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    let prefix = format!("{}.", stem);

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let path = e.path();
            let is_archive = e
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(&prefix) && name.ends_with(".log"));
            is_archive && path != current
        })
        .collect();

    // Oldest first
    logs.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());

    if logs.len() > MAX_OLD_LOGS {
        for entry in logs.iter().take(logs.len() - MAX_OLD_LOGS) {
            let _ = fs::remove_file(entry.path());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("login-paths-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter_map(|e| e.file_name().into_string().ok())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_rotate_archives_latest() {
        let dir = scratch_dir("rotate");
        let latest = dir.join(LATEST_LOG);
        fs::write(&latest, "old run").unwrap();

        rotate_logs(&latest);

        assert!(!latest.exists());
        let archived = file_names(&dir);
        assert_eq!(archived.len(), 1);
        assert!(archived[0].starts_with("latest."));
        assert!(archived[0].ends_with(".log"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_cleanup_keeps_newest() {
        let dir = scratch_dir("cleanup");
        for i in 0..(MAX_OLD_LOGS + 3) {
            fs::write(dir.join(format!("latest.202401{i:02}_000000.log")), "").unwrap();
        }
        fs::write(dir.join("notes.txt"), "").unwrap();

        cleanup_old_logs(&dir, "latest", &dir.join(LATEST_LOG));

        let logs = file_names(&dir)
            .into_iter()
            .filter(|name| name.ends_with(".log"))
            .count();
        assert_eq!(logs, MAX_OLD_LOGS);
        assert!(dir.join("notes.txt").exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_rotation_leaves_other_logs_alone() {
        let dir = scratch_dir("shared");
        for i in 0..(MAX_OLD_LOGS + 2) {
            fs::write(dir.join(format!("otherapp-{i}.log")), "").unwrap();
        }
        fs::write(dir.join("login.log"), "previous run").unwrap();

        rotate_logs(&dir.join("login.log"));

        let names = file_names(&dir);
        let foreign = names.iter().filter(|n| n.starts_with("otherapp-")).count();
        assert_eq!(foreign, MAX_OLD_LOGS + 2);
        assert!(!dir.join("login.log").exists());
        assert_eq!(names.iter().filter(|n| n.starts_with("login.")).count(), 1);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_rotate_without_existing_log() {
        let dir = scratch_dir("fresh");
        rotate_logs(&dir.join(LATEST_LOG));
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
        let _ = fs::remove_dir_all(&dir);
    }
}
