//! Filesystem collaborators used by a deploy cycle
//!
//! Every failure is reported as [`DeployError::Io`] carrying the operation
//! name and the path involved.

use cordeploy_core::{DeployError, DeployResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn walk_error(operation: &'static str, root: &Path, err: walkdir::Error) -> DeployError {
    let path = err.path().unwrap_or(root).to_path_buf();
    DeployError::io(operation, path, io::Error::from(err))
}

/// Remove `dir` and everything below it. A missing directory is not an error.
pub fn clear_dir(dir: &Path) -> DeployResult<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {
            tracing::debug!(path = %dir.display(), "Cleared directory");
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(DeployError::io("clear_dir", dir, err)),
    }
}

/// Copy the tree under `source` into `destination`, overwriting existing files.
///
/// Files already in `destination` that are absent from `source` are left
/// alone. Returns the number of files copied.
pub fn copy_dir(source: &Path, destination: &Path) -> DeployResult<usize> {
    let mut copied = 0;
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|err| walk_error("copy_dir.walk", source, err))?;
        let relative = entry.path().strip_prefix(source).map_err(|_| {
            DeployError::Internal(format!(
                "{} is outside {}",
                entry.path().display(),
                source.display()
            ))
        })?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .map_err(|err| DeployError::io("copy_dir.create_dir", &target, err))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .map_err(|err| DeployError::io("copy_dir.create_dir", parent, err))?;
            }
            fs::copy(entry.path(), &target)
                .map_err(|err| DeployError::io("copy_dir.copy", &target, err))?;
            copied += 1;
        }
    }

    tracing::debug!(
        from = %source.display(),
        to = %destination.display(),
        files = copied,
        "Copied directory"
    );
    Ok(copied)
}

/// Entries directly inside `dir`, as `dir.join(name)`, sorted.
///
/// A missing directory lists as empty.
pub fn list_dir(dir: &Path) -> DeployResult<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(DeployError::io("list_dir", dir, err)),
    };

    let mut listed = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| DeployError::io("list_dir.entry", dir, err))?;
        listed.push(dir.join(entry.file_name()));
    }
    listed.sort();
    Ok(listed)
}

/// Every regular file below `dir`, hidden ones included, as `/`-separated
/// paths relative to `dir`. Directories are not listed.
pub fn list_files_recursive(dir: &Path) -> DeployResult<Vec<String>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|err| walk_error("list_files.walk", dir, err))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(dir) else {
            continue;
        };
        let parts: Vec<_> = relative
            .components()
            .map(|part| part.as_os_str().to_string_lossy().into_owned())
            .collect();
        files.push(parts.join("/"));
    }
    Ok(files)
}
