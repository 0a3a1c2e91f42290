// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Configuration for a migration run
//!
//! Paths are fixed constants; there is no config file. Tests and embedders
//! inject their own directories through [`MigrateConfig::with_dirs`].

use std::path::{Path, PathBuf};

use crate::{MigrateError, Result};

/// Media root scanned for `I-*` folders
pub const ROOT_DIR: &str = "/home/dani/backup-mediator/backup/backend/media";

/// Output root receiving the padded-prefix folders
pub const OUTPUT_DIR: &str = "/home/dani/backup-mediator/backup/backend/shopbilder";

/// Folder name marker gating eligibility
pub const FOLDER_MARKER: &str = "I-";

/// Image extensions, matched against the lowercased filename
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Width of the zero-padded destination folder name
pub const PAD_WIDTH: usize = 6;

/// Migration configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateConfig {
    /// Directory whose immediate children are scanned
    pub root_dir: PathBuf,

    /// Directory receiving one folder per padded prefix
    pub output_dir: PathBuf,

    /// Required folder name prefix
    pub folder_marker: String,

    /// Accepted extensions, lowercase, without the dot
    pub image_extensions: Vec<String>,

    /// Minimum width of the destination folder name
    pub pad_width: usize,
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from(ROOT_DIR),
            output_dir: PathBuf::from(OUTPUT_DIR),
            folder_marker: FOLDER_MARKER.to_string(),
            image_extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            pad_width: PAD_WIDTH,
        }
    }
}

impl MigrateConfig {
    /// Default configuration with different root and output directories
    pub fn with_dirs(root_dir: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Self {
        Self {
            root_dir: root_dir.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Reject configurations that could never match or name a folder.
    ///
    /// Directory existence is not checked here; missing directories surface
    /// as filesystem errors during the run.
    pub fn validate(&self) -> Result<()> {
        if self.folder_marker.is_empty() {
            return Err(MigrateError::Config("folder marker must not be empty".to_string()));
        }
        if self.image_extensions.is_empty() {
            return Err(MigrateError::Config("at least one image extension is required".to_string()));
        }
        if let Some(ext) = self.image_extensions.iter().find(|e| e.is_empty() || e.starts_with('.')) {
            return Err(MigrateError::Config(format!(
                "image extension {:?} must be non-empty and given without a leading dot",
                ext
            )));
        }
        if self.pad_width == 0 {
            return Err(MigrateError::Config("pad width must be at least 1".to_string()));
        }
        Ok(())
    }
}
