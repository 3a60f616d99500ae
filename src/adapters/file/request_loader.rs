//! File-based request loader
//!
//! Reads an evaluation request from a YAML file. JSON is a subset of YAML,
//! so `.json` request files load through the same path.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::EvaluationRequest;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Loads evaluation requests from a file
#[derive(Debug, Clone)]
pub struct FileRequestLoader {
    path: PathBuf,
}

impl FileRequestLoader {
    /// Create a loader for a request file
    ///
    /// # Example
    /// ```ignore
    /// let request = FileRequestLoader::new("shoes.yaml").load()?;
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path the loader reads from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the request
    ///
    /// # Errors
    /// - `InputUnreadable` if the file cannot be read
    /// - `InvalidFormat` if the contents are not a valid request
    pub fn load(&self) -> Result<EvaluationRequest, DomainError> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            DomainError::new(
                ErrorCode::InputUnreadable,
                format!("Failed to read request file: {}", e),
            )
            .with_detail("path", self.path.display().to_string())
        })?;

        let request: EvaluationRequest = serde_yaml::from_str(&contents).map_err(|e| {
            DomainError::new(
                ErrorCode::InvalidFormat,
                format!("Failed to parse request file: {}", e),
            )
            .with_detail("path", self.path.display().to_string())
        })?;

        debug!(
            path = %self.path.display(),
            criteria = request.criteria.len(),
            alternatives = request.alternatives.len(),
            "Loaded evaluation request"
        );

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::ScoringMethod;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_yaml_request() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "request.yaml",
            r#"
criteria:
  - { id: grip, name: Grip, type: benefit }
  - { id: mass, name: Mass, type: cost }
alternatives:
  - { id: a, name: Alpha }
values:
  - { alternative_id: a, criterion_id: grip, value: 4 }
  - { alternative_id: a, criterion_id: mass, value: 210.5 }
comparisons:
  - { criterion_i: grip, criterion_j: mass, value: 2 }
method: inverse_gap
"#,
        );

        let request = FileRequestLoader::new(&path).load().unwrap();
        assert_eq!(request.criteria.len(), 2);
        assert!(request.criteria[1].is_cost());
        assert_eq!(request.values[1].value, 210.5);
        assert_eq!(request.method, Some(ScoringMethod::InverseGap));
    }

    #[test]
    fn test_load_json_request() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "request.json",
            r#"{
  "criteria": [{ "id": "grip", "name": "Grip", "type": "benefit" }],
  "alternatives": [{ "id": "a", "name": "Alpha", "brand": "Acme" }],
  "values": [{ "alternative_id": "a", "criterion_id": "grip", "value": 4 }]
}"#,
        );

        let request = FileRequestLoader::new(&path).load().unwrap();
        assert_eq!(request.alternatives[0].brand.as_deref(), Some("Acme"));
        assert!(request.comparisons.is_empty());
        assert_eq!(request.method, None);
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let loader = FileRequestLoader::new(dir.path().join("absent.yaml"));

        let err = loader.load().unwrap_err();
        assert_eq!(err.code, ErrorCode::InputUnreadable);
        assert!(err.details.contains_key("path"));
    }

    #[test]
    fn test_malformed_file_is_invalid_format() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "request.yaml", "criteria: [unclosed");

        let err = FileRequestLoader::new(&path).load().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_unknown_criterion_type_is_invalid_format() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "request.yaml",
            "criteria:\n  - { id: grip, name: Grip, type: neutral }\nalternatives: []\n",
        );

        let err = FileRequestLoader::new(&path).load().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }
}
