//! JSON series library file.
//!
//! The file holds a single JSON array of series objects with camelCase
//! keys, as exported by the media server's series endpoint.

use crate::model::error::InputError;
use crate::model::Series;
use std::path::Path;

/// Load and decode a series library file.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist,
/// `InputError::Malformed` if it is not a JSON array of series, and
/// `InputError::Io` for other read failures.
pub fn load_series_file(path: impl AsRef<Path>) -> Result<Vec<Series>, InputError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    parse_series_json(&contents, path)
}

/// Decode library contents. `path` is only used for error context.
pub fn parse_series_json(contents: &str, path: &Path) -> Result<Vec<Series>, InputError> {
    serde_json::from_str(contents).map_err(|e| InputError::Malformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_file_is_file_not_found() {
        let path = PathBuf::from("/nonexistent/sidx/series.json");
        let err = load_series_file(&path).unwrap_err();
        assert!(matches!(err, InputError::FileNotFound { path: p } if p == path));
    }

    #[test]
    fn object_instead_of_array_is_malformed() {
        let err = parse_series_json(r#"{"id": 1}"#, Path::new("lib.json")).unwrap_err();
        match err {
            InputError::Malformed { path, reason } => {
                assert_eq!(path, PathBuf::from("lib.json"));
                assert!(!reason.is_empty());
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn empty_array_is_valid() {
        let items = parse_series_json("[]", Path::new("lib.json")).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn preserves_file_order() {
        let items = parse_series_json(
            r#"[{"id": 3, "title": "Zed", "sortTitle": "zed"}, {"id": 1, "title": "Ace", "sortTitle": "ace"}]"#,
            Path::new("lib.json"),
        )
        .unwrap();
        let ids: Vec<u32> = items.iter().map(|s| s.id.get()).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
