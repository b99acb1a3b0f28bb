//! Layout file I/O service.
//!
//! This module centralizes all board header operations, providing a consistent
//! interface for loading and saving layouts inside `BoardConfig.h` files.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::{
    models::Layout,
    parser::{self, MacroNames, ParseReport},
};

/// Service for managing board header I/O operations.
///
/// This service centralizes all header operations to ensure consistent
/// handling of file paths, error messages, and file system operations.
pub struct LayoutService;

impl LayoutService {
    /// Loads a layout from a board header.
    ///
    /// Malformed entries do not fail the load; they are listed in the
    /// returned report.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use gplayout::parser::MacroNames;
    /// use gplayout::services::LayoutService;
    ///
    /// let report = LayoutService::load(Path::new("BoardConfig.h"), &MacroNames::default())?;
    /// println!("{} elements", report.layout.len());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path, names: &MacroNames) -> Result<ParseReport> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to load layout from {}", path.display()))?;

        let report = parser::parse_with_report(&text, names);
        tracing::debug!(
            "Loaded {} elements from {} ({} skipped)",
            report.layout.len(),
            path.display(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// Saves a layout to a board header.
    ///
    /// When the file exists its layout blocks are rewritten in place and the
    /// rest of the header is kept. Otherwise a header holding only the two
    /// blocks is created.
    ///
    /// This performs an atomic write using a temp file + rename pattern to ensure
    /// the file is never left in a corrupted state.
    pub fn save(layout: &Layout, path: &Path, names: &MacroNames) -> Result<()> {
        let content = if path.exists() {
            let existing = fs::read_to_string(path)
                .with_context(|| format!("Failed to read existing header {}", path.display()))?;
            parser::splice(&existing, layout, names)
        } else {
            let mut fresh = parser::serialize_with(layout, names);
            fresh.push('\n');
            fresh
        };

        Self::write_text(path, &content)
            .with_context(|| format!("Failed to save layout to {}", path.display()))?;

        tracing::info!("Saved {} elements to {}", layout.len(), path.display());
        Ok(())
    }

    /// Writes header text atomically, creating parent directories.
    pub fn write_text(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let mut temp_name = path.file_name().context("Layout path has no file name")?.to_os_string();
        temp_name.push(".tmp");
        let temp_path = path.with_file_name(temp_name);

        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp file {}", temp_path.display()))?;
        fs::rename(&temp_path, path).with_context(|| {
            format!(
                "Failed to rename temp file {} to {}",
                temp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}
