// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! mediamigrate: numbered image folder migration
//!
//! Scans `I-*` folders under a media root, checks that every image in a
//! folder shares one numeric filename prefix, and copies the images into an
//! output folder named by that prefix padded to six digits.

pub mod config;
pub mod error;
pub mod events;
pub mod migrator;
pub mod prefix;
pub mod report;
pub mod scanner;

pub use config::MigrateConfig;
pub use error::{MigrateError, Result};
pub use events::{MigrationEvent, RecordingReporter, Reporter, TracingReporter};
pub use migrator::{FolderOutcome, Migrator};
pub use report::MigrationSummary;
