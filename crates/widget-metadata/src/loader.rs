//! Metadata document loading.

use crate::model::Model;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use thiserror::Error;

/// An error that occurred while loading the metadata document.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The metadata file could not be read.
    #[error("failed to read metadata file {path}: {source}")]
    Read {
        /// The file that failed to read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The metadata file is not a valid model document.
    #[error("failed to parse metadata file {path}: {source}")]
    Parse {
        /// The file that failed to parse.
        path: Utf8PathBuf,
        /// The underlying deserialization error.
        source: serde_json::Error,
    },
}

impl Model {
    /// Loads a model from a JSON metadata file.
    pub fn from_path(path: &Utf8Path) -> Result<Self, MetadataError> {
        let content = fs::read_to_string(path).map_err(|source| MetadataError::Read {
            path: path.to_owned(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| MetadataError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Parses a model from an in-memory JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().join("metadata.json")).unwrap();
        fs::write(
            &path,
            r#"{ "widgets": [{ "name": "dxButton" }], "customTypes": [] }"#,
        )
        .unwrap();

        let model = Model::from_path(&path).unwrap();
        assert_eq!(model.widgets.len(), 1);
        assert_eq!(model.widgets[0].name, "dxButton");
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = Model::from_path(Utf8Path::new("/nonexistent/metadata.json")).unwrap_err();
        assert!(matches!(err, MetadataError::Read { .. }));
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().join("metadata.json")).unwrap();
        fs::write(&path, "not json").unwrap();

        let err = Model::from_path(&path).unwrap_err();
        assert!(matches!(err, MetadataError::Parse { .. }));
    }
}
