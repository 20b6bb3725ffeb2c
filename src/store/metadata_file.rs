// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::StoreError;
use crate::model::Metadata;

/// A JSON metadata document on disk (`countryId`, `parameters`, `parameterTree`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataFile {
    path: PathBuf,
}

impl MetadataFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Metadata, StoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let metadata: Metadata = serde_json::from_str(&raw).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        info!(
            path = %self.path.display(),
            country = %metadata.country_id,
            parameters = metadata.parameters.len(),
            "loaded metadata"
        );
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::MetadataFile;
    use crate::model::demo_metadata;
    use crate::store::StoreError;

    #[test]
    fn loads_serialized_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metadata.json");
        let metadata = demo_metadata();
        std::fs::write(&path, serde_json::to_string_pretty(&metadata).unwrap()).unwrap();

        let loaded = MetadataFile::new(&path).load().expect("load metadata");
        assert_eq!(loaded, metadata);
    }

    #[test]
    fn reports_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = MetadataFile::new(dir.path().join("missing.json"));
        assert!(matches!(missing.load(), Err(StoreError::Io { .. })));

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"countryId\": \"uk\"").unwrap();
        let err = MetadataFile::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
