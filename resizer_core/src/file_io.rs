//! # File I/O Module
//!
//! Persists the panel layout between runs.
//!
//! ## File Format
//!
//! A small JSON document:
//!
//! ```text
//! { "version": "0.1.0", "sidebar": { "sidebar_width": 360.0, "min_width": 200.0, "max_width": 800.0 } }
//! ```
//!
//! Saves are atomic: the JSON goes to `<name>.tmp` and is renamed over the
//! target once synced.
//!
//! ## Example
//!
//! ```rust,no_run
//! use resizer_core::file_io::{load_layout, save_layout};
//! use resizer_core::layout::PanelLayout;
//! use std::path::Path;
//!
//! let path = Path::new("layout.json");
//! save_layout(&PanelLayout::default(), path)?;
//! let layout = load_layout(path)?;
//! # Ok::<(), resizer_core::errors::ResizeError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ResizeError, ResizeResult};
use crate::layout::PanelLayout;

/// Current schema version for layout files
pub const SCHEMA_VERSION: &str = "0.1.0";

#[derive(Debug, Serialize, Deserialize)]
struct LayoutFile {
    version: String,
    sidebar: PanelLayout,
}

/// Save a layout with atomic write semantics.
pub fn save_layout(layout: &PanelLayout, path: &Path) -> ResizeResult<()> {
    let file = LayoutFile {
        version: SCHEMA_VERSION.to_string(),
        sidebar: *layout,
    };
    let json = serde_json::to_string_pretty(&file)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            ResizeError::file_error("create directory", parent.display().to_string(), e.to_string())
        })?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        ResizeError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        ResizeError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        ResizeError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        ResizeError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::debug!(path = %path.display(), width = layout.sidebar_width, "layout saved");
    Ok(())
}

/// Load a layout, sanitising out-of-range values.
///
/// # Returns
///
/// * `Err(ResizeError::FileError)` - I/O error
/// * `Err(ResizeError::SerializationError)` - Invalid JSON
/// * `Err(ResizeError::VersionMismatch)` - Incompatible schema major version
pub fn load_layout(path: &Path) -> ResizeResult<PanelLayout> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ResizeError::file_error("read", path.display().to_string(), e.to_string()))?;

    let file: LayoutFile = serde_json::from_str(&contents).map_err(|e| ResizeError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    validate_version(&file.version)?;

    let mut layout = file.sidebar;
    layout.sanitize();
    Ok(layout)
}

/// Major version must match.
fn validate_version(file_version: &str) -> ResizeResult<()> {
    let major = |v: &str| v.split('.').next().and_then(|p| p.parse::<u32>().ok());

    match (major(file_version), major(SCHEMA_VERSION)) {
        (Some(file_major), Some(current_major)) if file_major == current_major => Ok(()),
        _ => Err(ResizeError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("layout.json");

        let layout = PanelLayout::new(420.0, 150.0, 700.0).unwrap();
        save_layout(&layout, &path).unwrap();

        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(load_layout(&path).unwrap(), layout);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_layout(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_corrupted_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_layout(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_load_sanitizes_width() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        fs::write(
            &path,
            r#"{"version":"0.3.1","sidebar":{"sidebar_width":9000.0,"min_width":100.0,"max_width":500.0}}"#,
        )
        .unwrap();

        assert_eq!(load_layout(&path).unwrap().sidebar_width, 500.0);
    }

    #[test]
    fn test_version_mismatch() {
        assert!(validate_version("0.9.0").is_ok());
        assert!(matches!(validate_version("1.0.0"), Err(ResizeError::VersionMismatch { .. })));
        assert!(validate_version("garbage").is_err());
    }
}
