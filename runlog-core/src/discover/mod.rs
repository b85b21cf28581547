//! Directory wrappers around [`read_log`].
//!
//! Experiments are laid out either as one directory of run logs (one file per
//! problem instance or run) or as one directory per configuration, each with
//! its own run logs.

#[cfg(test)]
mod tests;

use crate::codec::read_log;
use crate::error::Error;
use crate::table::Table;
use glob::{Pattern, glob};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Discovers files matching a glob pattern below `root`.
///
/// Returns the matching regular files in sorted order. Unreadable paths and
/// directories are filtered out.
///
/// # Errors
///
/// Returns `Error::Glob` if the pattern is malformed.
pub fn discover(root: &Path, glob_pattern: &str) -> Result<Vec<PathBuf>, Error> {
    let mut paths: Vec<_> = matches(root, glob_pattern)?
        .into_iter()
        .filter(|p| p.is_file())
        .collect();
    paths.sort();
    Ok(paths)
}

/// Lists the immediate subdirectories of `root`, sorted.
pub fn discover_dirs(root: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut paths: Vec<_> = matches(root, "*")?
        .into_iter()
        .filter(|p| p.is_dir())
        .collect();
    paths.sort();
    Ok(paths)
}

fn matches(root: &Path, glob_pattern: &str) -> Result<Vec<PathBuf>, Error> {
    let pattern = &resolve_glob(root, glob_pattern);
    Ok(glob(pattern)
        .map_err(|e| Error::Glob {
            pattern: pattern.to_string(),
            source: e,
        })?
        .filter_map(Result::ok)
        .collect())
}

/// Joins `pattern` onto `root`, escaping any glob syntax in the root itself.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    let root = Pattern::escape(&root.to_string_lossy());
    Path::new(&root).join(pattern).to_string_lossy().into_owned()
}

/// Reads every log with the given extension in `dir`.
///
/// The map is keyed by file name. `extension` may be given with or without
/// the leading dot.
pub fn read_log_dir(
    dir: impl AsRef<Path>,
    extension: &str,
) -> Result<BTreeMap<String, Table>, Error> {
    let dir = dir.as_ref();
    let extension = extension.trim_start_matches('.');

    let mut logs = BTreeMap::new();
    for path in discover(dir, &format!("*.{extension}"))? {
        let table = read_log(&path)?;
        logs.insert(file_name(&path), table);
    }

    info!(dir = %dir.display(), logs = logs.len(), "Read log directory");
    Ok(logs)
}

/// Reads a nested experiment layout: one subdirectory per configuration,
/// each holding run logs.
///
/// Subdirectories without matching logs map to an empty set.
pub fn read_experiment_dir(
    dir: impl AsRef<Path>,
    extension: &str,
) -> Result<BTreeMap<String, BTreeMap<String, Table>>, Error> {
    let mut experiments = BTreeMap::new();
    for sub in discover_dirs(dir.as_ref())? {
        let logs = read_log_dir(&sub, extension)?;
        experiments.insert(file_name(&sub), logs);
    }
    Ok(experiments)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
