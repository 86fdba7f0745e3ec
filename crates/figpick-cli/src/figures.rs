//! Figure file discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Collect figure files directly under `dir` (non-recursive), sorted by path.
///
/// A file counts as a figure when its extension matches one of `extensions`
/// case-insensitively.
pub fn figure_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)));
        if matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Label shown in the picker for a figure file: its file stem.
pub fn label(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().to_string())
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn svg_only() -> Vec<String> {
        vec!["svg".to_string()]
    }

    #[test]
    fn finds_only_matching_extensions() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("plot.svg"), "").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();
        std::fs::write(dir.path().join("chart.SVG"), "").unwrap();

        let files = figure_files(dir.path(), &svg_only()).unwrap();
        let labels: Vec<String> = files.iter().map(|p| label(p)).collect();
        assert_eq!(labels, vec!["chart".to_string(), "plot".to_string()]);
    }

    #[test]
    fn subdirectories_are_not_descended() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("deep.svg"), "").unwrap();

        let files = figure_files(dir.path(), &svg_only()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nowhere");
        assert!(figure_files(&missing, &svg_only()).is_err());
    }

    #[test]
    fn label_is_the_file_stem() {
        assert_eq!(label(Path::new("figures/free-body-diagram.svg")), "free-body-diagram");
    }
}
