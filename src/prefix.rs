// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Filename prefix extraction and validation

use std::collections::BTreeSet;

use crate::scanner::ImageFile;

/// Delimiter ending the prefix in an image filename
pub const PREFIX_DELIMITER: char = '-';

/// Result of checking the prefixes of one folder's images
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SharedPrefix {
    /// One prefix, all ASCII digits
    Numeric(String),
    /// More than one distinct prefix
    Multiple(BTreeSet<String>),
    /// One prefix containing a non-digit (or empty)
    NotNumeric(String),
    /// No images to derive a prefix from
    Empty,
}

/// Substring before the first `-`, or the whole name if there is none.
///
/// `"123.jpg"` therefore yields `"123.jpg"`, which later fails the numeric check.
pub fn extract_prefix(file_name: &str) -> &str {
    match file_name.find(PREFIX_DELIMITER) {
        Some(idx) => &file_name[..idx],
        None => file_name,
    }
}

/// True for a non-empty string of ASCII decimal digits.
///
/// Unicode digits such as `"١٢"` are rejected, unlike Python's `str.isdigit`.
pub fn is_numeric(prefix: &str) -> bool {
    !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit())
}

/// Collapse the prefixes of a folder's images into a single verdict
pub fn shared_prefix(images: &[ImageFile]) -> SharedPrefix {
    let mut prefixes: BTreeSet<String> = images.iter().map(|i| i.prefix.clone()).collect();

    if prefixes.len() > 1 {
        return SharedPrefix::Multiple(prefixes);
    }

    match prefixes.pop_first() {
        None => SharedPrefix::Empty,
        Some(prefix) if is_numeric(&prefix) => SharedPrefix::Numeric(prefix),
        Some(prefix) => SharedPrefix::NotNumeric(prefix),
    }
}

/// Left-pad with zeros to `width`; longer prefixes are returned unchanged
pub fn pad_prefix(prefix: &str, width: usize) -> String {
    format!("{:0>width$}", prefix, width = width)
}

/// Render a prefix set as `{'a', 'b'}` for skip messages
pub fn format_prefix_set(prefixes: &BTreeSet<String>) -> String {
    let inner = prefixes
        .iter()
        .map(|p| format!("'{}'", p))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn image(name: &str) -> ImageFile {
        ImageFile::new(PathBuf::from("/media/I-1").join(name))
    }

    #[test]
    fn test_extract_prefix() {
        assert_eq!(extract_prefix("42-a.jpg"), "42");
        assert_eq!(extract_prefix("42-a-b.jpg"), "42");
        assert_eq!(extract_prefix("42.jpg"), "42.jpg");
        assert_eq!(extract_prefix("-a.jpg"), "");
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("007"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("12a"));
        assert!(!is_numeric("١٢"));
    }

    #[test]
    fn test_pad_prefix() {
        assert_eq!(pad_prefix("42", 6), "000042");
        assert_eq!(pad_prefix("123456", 6), "123456");
        assert_eq!(pad_prefix("1234567", 6), "1234567");
        assert_eq!(pad_prefix("0", 6), "000000");
    }

    #[test]
    fn test_shared_prefix_numeric() {
        let images = vec![image("42-a.jpg"), image("42-b.png")];
        assert_eq!(shared_prefix(&images), SharedPrefix::Numeric("42".to_string()));
    }

    #[test]
    fn test_shared_prefix_multiple() {
        let images = vec![image("42-a.jpg"), image("99-b.jpg")];
        match shared_prefix(&images) {
            SharedPrefix::Multiple(set) => {
                assert_eq!(format_prefix_set(&set), "{'42', '99'}");
            }
            other => panic!("Expected Multiple, got {:?}", other),
        }
    }

    #[test]
    fn test_shared_prefix_not_numeric() {
        let images = vec![image("abc-a.jpg")];
        assert_eq!(shared_prefix(&images), SharedPrefix::NotNumeric("abc".to_string()));

        let images = vec![image("123.jpg")];
        assert_eq!(shared_prefix(&images), SharedPrefix::NotNumeric("123.jpg".to_string()));
    }

    #[test]
    fn test_shared_prefix_empty() {
        assert_eq!(shared_prefix(&[]), SharedPrefix::Empty);
    }
}
