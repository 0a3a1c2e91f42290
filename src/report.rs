// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Counters for one migration run

use std::fmt;

/// Aggregate counts collected by [`crate::Migrator::run`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MigrationSummary {
    /// Marker-named folders examined
    pub folders_scanned: u64,
    /// Folders whose images were handled
    pub folders_migrated: u64,
    /// Folders skipped for empty or invalid prefixes
    pub folders_skipped: u64,
    /// Images copied
    pub files_copied: u64,
    /// Images left alone because the destination existed
    pub files_existing: u64,
}

impl MigrationSummary {
    /// Total images handled, copied or not
    pub fn files_seen(&self) -> u64 {
        self.files_copied + self.files_existing
    }
}

impl fmt::Display for MigrationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "folders scanned={} migrated={} skipped={}, files copied={} existing={}",
            self.folders_scanned,
            self.folders_migrated,
            self.folders_skipped,
            self.files_copied,
            self.files_existing
        )
    }
}
