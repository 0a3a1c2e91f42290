// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Events emitted while migrating, and the sinks that receive them

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::prefix::format_prefix_set;

/// One decision taken by the migrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationEvent {
    /// Folder has no matching images
    NoImages { folder: String },
    /// Folder images disagree on their prefix
    MultiplePrefixes {
        folder: String,
        prefixes: BTreeSet<String>,
    },
    /// Folder prefix contains non-digits
    NonNumericPrefix { folder: String, prefix: String },
    /// Destination file was already present, copy skipped
    AlreadyExists { destination: PathBuf },
    /// A single image was copied
    FileCopied {
        source: PathBuf,
        destination: PathBuf,
        bytes: u64,
    },
    /// All images of a folder were handled
    FolderMigrated {
        folder: String,
        padded_prefix: String,
    },
    /// The run completed
    Finished,
}

impl MigrationEvent {
    /// Whether this event skips a whole folder
    pub fn is_folder_skip(&self) -> bool {
        matches!(
            self,
            Self::NoImages { .. } | Self::MultiplePrefixes { .. } | Self::NonNumericPrefix { .. }
        )
    }
}

impl fmt::Display for MigrationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoImages { folder } => {
                write!(f, "Skipping '{}' (no images found)", folder)
            }
            Self::MultiplePrefixes { folder, prefixes } => write!(
                f,
                "Skipping '{}' (multiple prefixes found: {})",
                folder,
                format_prefix_set(prefixes)
            ),
            Self::NonNumericPrefix { folder, prefix } => {
                write!(f, "Skipping '{}' (prefix is not numeric: '{}')", folder, prefix)
            }
            Self::AlreadyExists { destination } => {
                write!(f, "Skipping copy (already exists): {}", destination.display())
            }
            Self::FileCopied {
                source,
                destination,
                bytes,
            } => write!(
                f,
                "Copied {} -> {} ({} bytes)",
                source.display(),
                destination.display(),
                bytes
            ),
            Self::FolderMigrated {
                folder,
                padded_prefix,
            } => write!(f, "Copied images from '{}' → '{}'", folder, padded_prefix),
            Self::Finished => write!(f, "Done."),
        }
    }
}

/// Sink for migration events
pub trait Reporter {
    fn report(&mut self, event: &MigrationEvent);
}

impl<F> Reporter for F
where
    F: FnMut(&MigrationEvent),
{
    fn report(&mut self, event: &MigrationEvent) {
        self(event)
    }
}

/// Logs every event through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, event: &MigrationEvent) {
        match event {
            MigrationEvent::FileCopied { .. } => debug!("{}", event),
            _ => info!("{}", event),
        }
    }
}

/// Keeps every event in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    events: Vec<MigrationEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[MigrationEvent] {
        &self.events
    }

    /// Rendered event lines, in emission order
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(|e| e.to_string()).collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: &MigrationEvent) {
        self.events.push(event.clone());
    }
}
