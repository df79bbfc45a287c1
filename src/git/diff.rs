//! Tree diff records
//!
//! Parses the NUL-separated output of `git diff-tree -r -z --name-status`.
//! Each record is a status token followed by one path, or by two paths
//! (source then destination) for renames and copies.

use crate::error::{DetectorError, Result};

/// Kind of change a diff entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    Added,
    Copied,
    Deleted,
    Modified,
    Renamed,
    TypeChanged,
    Unmerged,
    Unknown,
}

impl ChangeType {
    /// Map the leading status letter of a `--name-status` record
    fn from_status(status: &str) -> Option<Self> {
        match status.chars().next()? {
            'A' => Some(ChangeType::Added),
            'C' => Some(ChangeType::Copied),
            'D' => Some(ChangeType::Deleted),
            'M' => Some(ChangeType::Modified),
            'R' => Some(ChangeType::Renamed),
            'T' => Some(ChangeType::TypeChanged),
            'U' => Some(ChangeType::Unmerged),
            'X' => Some(ChangeType::Unknown),
            _ => None,
        }
    }

    fn has_source_path(self) -> bool {
        matches!(self, ChangeType::Renamed | ChangeType::Copied)
    }
}

/// A single file-level change between two commits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    pub change_type: ChangeType,
    /// Path before the change (None for additions)
    pub a_path: Option<String>,
    /// Path after the change (None for deletions)
    pub b_path: Option<String>,
}

impl DiffEntry {
    /// Whether this entry adds a brand-new file
    pub fn is_added(&self) -> bool {
        self.change_type == ChangeType::Added
    }
}

/// Parse `git diff-tree -z --name-status` output into diff entries
pub fn parse_name_status(output: &str) -> Result<Vec<DiffEntry>> {
    let mut tokens = output.split('\0').filter(|t| !t.is_empty());
    let mut entries = Vec::new();

    while let Some(status) = tokens.next() {
        let change_type = ChangeType::from_status(status).ok_or_else(|| {
            DetectorError::MalformedGitOutput(format!("unknown diff status '{}'", status))
        })?;

        let mut next_path = || {
            tokens.next().map(str::to_string).ok_or_else(|| {
                DetectorError::MalformedGitOutput(format!(
                    "diff record '{}' is missing a path",
                    status
                ))
            })
        };

        let entry = if change_type.has_source_path() {
            let from = next_path()?;
            let to = next_path()?;
            DiffEntry {
                change_type,
                a_path: Some(from),
                b_path: Some(to),
            }
        } else {
            let path = next_path()?;
            match change_type {
                ChangeType::Added => DiffEntry {
                    change_type,
                    a_path: None,
                    b_path: Some(path),
                },
                ChangeType::Deleted => DiffEntry {
                    change_type,
                    a_path: Some(path),
                    b_path: None,
                },
                _ => DiffEntry {
                    change_type,
                    a_path: Some(path.clone()),
                    b_path: Some(path),
                },
            }
        };
        entries.push(entry);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_name_status("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_mixed_records() {
        let raw = "M\0b.txt\0R100\0a.py\0c.py\0A\0n.py\0D\0old.py\0";
        let entries = parse_name_status(raw).unwrap();

        assert_eq!(
            entries,
            vec![
                DiffEntry {
                    change_type: ChangeType::Modified,
                    a_path: Some("b.txt".to_string()),
                    b_path: Some("b.txt".to_string()),
                },
                DiffEntry {
                    change_type: ChangeType::Renamed,
                    a_path: Some("a.py".to_string()),
                    b_path: Some("c.py".to_string()),
                },
                DiffEntry {
                    change_type: ChangeType::Added,
                    a_path: None,
                    b_path: Some("n.py".to_string()),
                },
                DiffEntry {
                    change_type: ChangeType::Deleted,
                    a_path: Some("old.py".to_string()),
                    b_path: None,
                },
            ]
        );
    }

    #[test]
    fn test_parse_copy_keeps_both_paths() {
        let entries = parse_name_status("C075\0src/a.py\0src/b.py\0").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].change_type, ChangeType::Copied);
        assert_eq!(entries[0].a_path.as_deref(), Some("src/a.py"));
        assert_eq!(entries[0].b_path.as_deref(), Some("src/b.py"));
        assert!(!entries[0].is_added());
    }

    #[test]
    fn test_parse_paths_with_spaces() {
        let entries = parse_name_status("A\0dir with space/new file.py\0").unwrap();
        assert_eq!(
            entries[0].b_path.as_deref(),
            Some("dir with space/new file.py")
        );
        assert!(entries[0].is_added());
    }

    #[test]
    fn test_parse_truncated_rename() {
        let result = parse_name_status("R090\0only_source.py\0");
        assert!(matches!(result, Err(DetectorError::MalformedGitOutput(_))));
    }

    #[test]
    fn test_parse_unknown_status() {
        let result = parse_name_status("Z\0file.py\0");
        assert!(matches!(result, Err(DetectorError::MalformedGitOutput(_))));
    }
}
