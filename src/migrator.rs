// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Folder-by-folder migration into padded-prefix directories

use filetime::{set_file_times, FileTime};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use crate::events::{MigrationEvent, Reporter};
use crate::prefix::{pad_prefix, shared_prefix, SharedPrefix};
use crate::report::MigrationSummary;
use crate::scanner::{source_folders, SourceFolder};
use crate::{MigrateConfig, MigrateError, Result};

/// What happened to one source folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderOutcome {
    /// Nothing was created or copied
    Skipped,
    /// Destination ensured and every image handled
    Migrated {
        padded_prefix: String,
        copied: u64,
        existing: u64,
    },
}

/// Runs the migration for one configuration
#[derive(Debug, Clone)]
pub struct Migrator {
    config: MigrateConfig,
}

impl Migrator {
    pub fn new(config: MigrateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MigrateConfig {
        &self.config
    }

    /// Process every marker folder under the root, then emit `Finished`.
    ///
    /// Each folder is listed and copied before the next one is opened. The
    /// first filesystem error aborts the run; files copied before it stay in
    /// place.
    pub fn run<R: Reporter + ?Sized>(&self, reporter: &mut R) -> Result<MigrationSummary> {
        self.config.validate()?;

        info!(
            "Migrating {:?} -> {:?}",
            self.config.root_dir, self.config.output_dir
        );

        let folders = source_folders(&self.config.root_dir, &self.config.folder_marker)?;

        let mut summary = MigrationSummary::default();

        for marked in folders {
            summary.folders_scanned += 1;
            let folder = marked.scan(&self.config.image_extensions)?;
            match self.migrate_folder(&folder, reporter)? {
                FolderOutcome::Skipped => summary.folders_skipped += 1,
                FolderOutcome::Migrated { copied, existing, .. } => {
                    summary.folders_migrated += 1;
                    summary.files_copied += copied;
                    summary.files_existing += existing;
                }
            }
        }

        reporter.report(&MigrationEvent::Finished);
        Ok(summary)
    }

    /// Validate one folder's prefix and copy its images
    pub fn migrate_folder<R: Reporter + ?Sized>(
        &self,
        folder: &SourceFolder,
        reporter: &mut R,
    ) -> Result<FolderOutcome> {
        let prefix = match shared_prefix(&folder.images) {
            SharedPrefix::Numeric(prefix) => prefix,
            SharedPrefix::Empty => {
                reporter.report(&MigrationEvent::NoImages {
                    folder: folder.name.clone(),
                });
                return Ok(FolderOutcome::Skipped);
            }
            SharedPrefix::Multiple(prefixes) => {
                reporter.report(&MigrationEvent::MultiplePrefixes {
                    folder: folder.name.clone(),
                    prefixes,
                });
                return Ok(FolderOutcome::Skipped);
            }
            SharedPrefix::NotNumeric(prefix) => {
                reporter.report(&MigrationEvent::NonNumericPrefix {
                    folder: folder.name.clone(),
                    prefix,
                });
                return Ok(FolderOutcome::Skipped);
            }
        };

        let padded_prefix = pad_prefix(&prefix, self.config.pad_width);
        let dest_dir = self.config.output_dir.join(&padded_prefix);

        fs::create_dir_all(&dest_dir).map_err(|e| MigrateError::at(&dest_dir, e))?;
        debug!("Destination ready: {:?}", dest_dir);

        let mut copied = 0;
        let mut existing = 0;

        for image in &folder.images {
            let destination = dest_dir.join(&image.file_name);

            if destination.exists() {
                reporter.report(&MigrationEvent::AlreadyExists { destination });
                existing += 1;
                continue;
            }

            let bytes = copy_with_metadata(&image.path, &destination).map_err(|source| {
                MigrateError::Copy {
                    source_path: image.path.clone(),
                    destination: destination.clone(),
                    source,
                }
            })?;
            copied += 1;

            reporter.report(&MigrationEvent::FileCopied {
                source: image.path.clone(),
                destination,
                bytes,
            });
        }

        reporter.report(&MigrationEvent::FolderMigrated {
            folder: folder.name.clone(),
            padded_prefix: padded_prefix.clone(),
        });

        Ok(FolderOutcome::Migrated {
            padded_prefix,
            copied,
            existing,
        })
    }
}

/// Copy file contents, then carry over permissions and access/modify times
pub fn copy_with_metadata(src: &Path, dst: &Path) -> io::Result<u64> {
    let bytes = fs::copy(src, dst)?;

    let meta = fs::metadata(src)?;
    let atime = FileTime::from_last_access_time(&meta);
    let mtime = FileTime::from_last_modification_time(&meta);

    // Windows rejects set_file_times on a read-only target
    set_file_times(dst, atime, mtime)?;
    fs::set_permissions(dst, meta.permissions())?;

    Ok(bytes)
}
