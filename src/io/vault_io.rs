use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::model::settings::Settings;
use crate::model::status::StatusRegistry;
use crate::model::task::{Task, TaskLocation};

/// Error type for vault file operations
#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("line {line} is out of range: {path} has {count} lines")]
    LineOutOfRange {
        path: PathBuf,
        line: usize,
        count: usize,
    },
}

/// Read a vault file into lines (line endings stripped).
pub fn read_lines(path: &Path) -> Result<Vec<String>, VaultError> {
    let text = fs::read_to_string(path).map_err(|e| VaultError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(text.lines().map(|l| l.to_string()).collect())
}

/// Write a vault file atomically: a temp file in the same directory is
/// written and then renamed over the original, so a crash mid-write never
/// truncates the vault file.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), VaultError> {
    let write_err = |e: std::io::Error| VaultError::WriteError {
        path: path.to_path_buf(),
        source: e,
    };

    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    for line in lines {
        writeln!(tmp, "{}", line).map_err(write_err)?;
    }
    tmp.persist(path)
        .map_err(|e| write_err(e.error))
        .map(|_| ())
}

/// Collect all tasks in a file, in order. Each task gets a stable ordinal
/// (its index among the file's tasks, not its line number).
pub fn collect_tasks(
    path: &str,
    lines: &[String],
    registry: &StatusRegistry,
    settings: &Settings,
) -> Vec<Task> {
    let mut tasks = Vec::new();
    for line in lines {
        let location = TaskLocation::new(path, tasks.len());
        if let Some(task) = Task::from_line(line, location, registry, settings) {
            tasks.push(task);
        }
    }
    tasks
}

/// Bounds-check a 1-based line number against a file's lines.
pub fn check_line_number(path: &Path, lines: &[String], line: usize) -> Result<usize, VaultError> {
    if line == 0 || line > lines.len() {
        return Err(VaultError::LineOutOfRange {
            path: path.to_path_buf(),
            line,
            count: lines.len(),
        });
    }
    Ok(line - 1)
}
