#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

use logfile_manager::clock::FixedClock;
use logfile_manager::config::{LogSettings, MemoryStore};

/// Creates a temporary directory holding one log file path:
///
/// ```
/// temp_dir/
/// └── app.log   (not created yet)
/// ```
pub fn setup_log_dir() -> Result<(TempDir, PathBuf), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let log_path = temp_dir.path().join("app.log");
    Ok((temp_dir, log_path))
}

/// 2024-03-05 09:05:03 local time
pub fn march_fifth() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(9, 5, 3)
        .unwrap()
}

pub fn fixed_clock() -> FixedClock {
    FixedClock(march_fifth())
}

/// In-memory store with both log keys set
pub fn store_with<P: AsRef<Path>>(activated: bool, path: P) -> MemoryStore {
    let mut store = MemoryStore::new();
    LogSettings::new(activated, path.as_ref().to_string_lossy()).save(&mut store);
    store
}

/// Helper function to create a test file with specific content
pub fn create_test_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    fs::write(path, content)?;
    Ok(())
}

/// Lines of a text file, without terminators
pub fn read_lines<P: AsRef<Path>>(path: P) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| l.to_string())
        .collect()
}

/// Sorted listing of a directory, used to prove nothing was created
pub fn list_dir<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    paths.sort();
    paths
}

/// True when `line` looks like `[M/D/YYYY, H:M:S] message`
pub fn is_entry_line(line: &str, message: &str) -> bool {
    let Some(rest) = line.strip_prefix('[') else {
        return false;
    };
    let Some((stamp, msg)) = rest.split_once("] ") else {
        return false;
    };
    let Some((date, time)) = stamp.split_once(", ") else {
        return false;
    };
    let numeric = |part: &str, n: usize, sep: char| {
        let fields: Vec<&str> = part.split(sep).collect();
        fields.len() == n
            && fields
                .iter()
                .all(|f| !f.is_empty() && f.chars().all(|c| c.is_ascii_digit()))
    };
    numeric(date, 3, '/') && numeric(time, 3, ':') && msg == message
}
