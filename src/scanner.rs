// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Discovery of eligible source folders and their images

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::prefix::extract_prefix;
use crate::{MigrateError, Result};

/// An image inside a source folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Original filename, copied verbatim
    pub file_name: OsString,
    /// Full source path
    pub path: PathBuf,
    /// Substring of the filename before the first `-`
    pub prefix: String,
}

impl ImageFile {
    /// Build from a path, deriving the filename and prefix
    pub fn new(path: PathBuf) -> Self {
        let file_name = path.file_name().map(OsString::from).unwrap_or_default();
        let prefix = extract_prefix(&file_name.to_string_lossy()).to_string();
        Self {
            file_name,
            path,
            prefix,
        }
    }
}

/// A marker-named directory directly under the root, not yet listed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedFolder {
    /// Folder name; non UTF-8 bytes are replaced for display only
    pub name: String,
    pub path: PathBuf,
}

impl MarkedFolder {
    /// List this folder's images
    pub fn scan(self, extensions: &[String]) -> Result<SourceFolder> {
        let images = list_images(&self.path, extensions)?;
        Ok(SourceFolder {
            name: self.name,
            path: self.path,
            images,
        })
    }
}

/// A marker-named directory with its images
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFolder {
    pub name: String,
    pub path: PathBuf,
    pub images: Vec<ImageFile>,
}

/// Check if a filename carries one of the accepted extensions.
///
/// Matching is a suffix test on the lowercased name, so `.PNG` and `.Jpeg` count.
pub fn is_image_name(name: &str, extensions: &[String]) -> bool {
    let lower = name.to_lowercase();
    extensions
        .iter()
        .any(|ext| lower.ends_with(&format!(".{}", ext.to_lowercase())))
}

/// Immediate children of `dir`, sorted by name
fn sorted_entries(dir: &Path) -> Result<Vec<(OsString, PathBuf)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| MigrateError::at(dir, e))? {
        let entry = entry.map_err(|e| MigrateError::at(dir, e))?;
        entries.push((entry.file_name(), entry.path()));
    }
    entries.sort();
    Ok(entries)
}

/// List the regular files in `folder` whose names match `extensions`
pub fn list_images(folder: &Path, extensions: &[String]) -> Result<Vec<ImageFile>> {
    let mut images = Vec::new();

    for (name, path) in sorted_entries(folder)? {
        let name = name.to_string_lossy();
        if !is_image_name(&name, extensions) {
            continue;
        }
        // Follows symlinks; a dangling link is not a regular file
        if !path.is_file() {
            debug!("Ignoring non-file entry: {:?}", path);
            continue;
        }
        images.push(ImageFile::new(path));
    }

    Ok(images)
}

/// Check if a raw directory name starts with `marker`
pub fn has_marker(name: &OsStr, marker: &str) -> bool {
    name.as_encoded_bytes().starts_with(marker.as_bytes())
}

/// Enumerate marker-named directories under `root`.
///
/// Plain files and directories without the marker are passed over without
/// looking inside them. Images are listed later, one folder at a time.
pub fn source_folders(root: &Path, marker: &str) -> Result<Vec<MarkedFolder>> {
    let mut folders = Vec::new();

    for (name, path) in sorted_entries(root)? {
        if !path.is_dir() {
            continue;
        }

        if !has_marker(&name, marker) {
            debug!("Ignoring folder without marker {:?}: {:?}", marker, name);
            continue;
        }

        folders.push(MarkedFolder {
            name: name.to_string_lossy().into_owned(),
            path,
        });
    }

    Ok(folders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exts() -> Vec<String> {
        vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()]
    }

    #[test]
    fn test_is_image_name() {
        assert!(is_image_name("42-a.jpg", &exts()));
        assert!(is_image_name("42-a.JPG", &exts()));
        assert!(is_image_name("42-a.Jpeg", &exts()));
        assert!(is_image_name("42-a.png", &exts()));
        assert!(!is_image_name("42-a.gif", &exts()));
        assert!(!is_image_name("42-a.jpg.txt", &exts()));
        assert!(!is_image_name("jpg", &exts()));
    }

    #[test]
    fn test_image_file_prefix() {
        let image = ImageFile::new(PathBuf::from("/media/I-7/7-front.png"));
        assert_eq!(image.file_name, OsString::from("7-front.png"));
        assert_eq!(image.prefix, "7");
    }

    #[test]
    fn test_list_images_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("5-b.png"), b"b").unwrap();
        fs::write(dir.path().join("5-a.JPG"), b"a").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        fs::create_dir(dir.path().join("5-dir.jpg")).unwrap();

        let images = list_images(dir.path(), &exts()).unwrap();
        let names: Vec<_> = images.iter().map(|i| i.file_name.clone()).collect();
        assert_eq!(names, vec![OsString::from("5-a.JPG"), OsString::from("5-b.png")]);
    }

    #[test]
    fn test_source_folders_requires_marker_and_directory() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("I-1")).unwrap();
        fs::create_dir(root.path().join("X-2")).unwrap();
        fs::create_dir(root.path().join("i-3")).unwrap();
        fs::write(root.path().join("I-file.jpg"), b"x").unwrap();
        fs::write(root.path().join("I-1").join("1-a.jpg"), b"x").unwrap();

        let folders = source_folders(root.path(), "I-").unwrap();
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].name, "I-1");

        let folder = folders[0].clone().scan(&exts()).unwrap();
        assert_eq!(folder.images.len(), 1);
    }

    #[test]
    fn test_source_folders_missing_root_is_error() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("nope");
        let err = source_folders(&missing, "I-").unwrap_err();
        assert!(matches!(err, MigrateError::Path { .. }));
    }

    #[test]
    fn test_source_folders_returns_unlisted_folders() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("I-1")).unwrap();
        fs::write(root.path().join("I-1").join("1-a.jpg"), b"x").unwrap();

        let folders = source_folders(root.path(), "I-").unwrap();
        assert_eq!(
            folders,
            vec![MarkedFolder {
                name: "I-1".to_string(),
                path: root.path().join("I-1"),
            }]
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_marker_matches_non_utf8_name() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"I-\xff");
        assert!(has_marker(name, "I-"));
        assert!(!has_marker(OsStr::from_bytes(b"X-\xff"), "I-"));

        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join(name)).unwrap();

        let folders = source_folders(root.path(), "I-").unwrap();
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].name, "I-\u{fffd}");
        assert_eq!(folders[0].path, root.path().join(name));
    }
}
