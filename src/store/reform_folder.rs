// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::StoreError;
use crate::model::{Reform, ReformData, ReformDocument, ReformId};

const REFORM_FILE_PREFIX: &str = "reform-";
const REFORM_FILE_SUFFIX: &str = ".json";

/// A directory of reform documents, one `reform-<id>.json` per reform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReformFolder {
    dir: PathBuf,
}

impl ReformFolder {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn reform_path(&self, reform_id: &ReformId) -> PathBuf {
        self.dir
            .join(format!("{REFORM_FILE_PREFIX}{reform_id}{REFORM_FILE_SUFFIX}"))
    }

    /// Loads a reform. A reform that was never saved loads as an empty one.
    pub fn load(&self, reform_id: &ReformId) -> Result<Reform, StoreError> {
        let path = self.reform_path(reform_id);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(reform = %reform_id, "no stored reform, starting empty");
                return Ok(Reform::loaded(reform_id.clone(), ReformData::new()));
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let document: ReformDocument = serde_json::from_str(&raw)
            .map_err(|source| StoreError::Json { path: path.clone(), source })?;
        if &document.id != reform_id {
            return Err(StoreError::ReformIdMismatch {
                path,
                expected: reform_id.clone(),
                found: document.id,
            });
        }
        info!(reform = %reform_id, parameters = document.data.len(), "loaded reform");
        Ok(document.into())
    }

    /// Writes the reform atomically (temp file + rename). Unloaded reforms are not written.
    pub fn save(&self, reform: &Reform) -> Result<(), StoreError> {
        let (Some(reform_id), Some(data)) = (reform.id(), reform.data()) else {
            return Ok(());
        };

        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let document = ReformDocument {
            id: reform_id.clone(),
            data: data.clone(),
        };
        let path = self.reform_path(reform_id);
        let json = serde_json::to_vec_pretty(&document)
            .map_err(|source| StoreError::Json { path: path.clone(), source })?;
        write_atomic(&path, &json)?;
        info!(reform = %reform_id, path = %path.display(), "saved reform");
        Ok(())
    }
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let tmp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&tmp_path).map_err(io_error(&tmp_path))?;
    file.write_all(contents).map_err(io_error(&tmp_path))?;
    file.flush().map_err(io_error(&tmp_path))?;
    drop(file);
    fs::rename(&tmp_path, path).map_err(|source| {
        let _ = fs::remove_file(&tmp_path);
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> StoreError {
    let path = path.to_path_buf();
    move |source| StoreError::Io { path, source }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use serde_json::json;
    use tempfile::TempDir;

    use super::ReformFolder;
    use crate::model::{Reform, ReformData, ReformId};
    use crate::store::StoreError;

    struct Ctx {
        _tmp: TempDir,
        folder: ReformFolder,
    }

    #[fixture]
    fn ctx() -> Ctx {
        let tmp = tempfile::tempdir().unwrap();
        let folder = ReformFolder::new(tmp.path().join("reforms"));
        Ctx { _tmp: tmp, folder }
    }

    fn rid(value: &str) -> ReformId {
        ReformId::new(value).expect("reform id")
    }

    #[rstest]
    fn unknown_reform_loads_empty(ctx: Ctx) {
        let reform = ctx.folder.load(&rid("1")).expect("load");
        assert_eq!(reform.id(), Some(&rid("1")));
        assert_eq!(reform.data(), Some(&ReformData::new()));
    }

    #[rstest]
    fn saved_reform_loads_back(ctx: Ctx) {
        let mut data = ReformData::new();
        data.insert("gov.hmrc.income_tax.basic_rate".to_owned(), json!(0.21));
        let reform = Reform::loaded(rid("7"), data);

        ctx.folder.save(&reform).expect("save");
        assert!(ctx.folder.reform_path(&rid("7")).ends_with("reform-7.json"));
        assert_eq!(ctx.folder.load(&rid("7")).expect("load"), reform);
    }

    #[rstest]
    fn unloaded_reform_is_not_written(ctx: Ctx) {
        ctx.folder.save(&Reform::default()).expect("save");
        assert!(!ctx.folder.dir().exists());
    }

    #[rstest]
    fn mismatched_id_is_rejected(ctx: Ctx) {
        std::fs::create_dir_all(ctx.folder.dir()).unwrap();
        std::fs::write(
            ctx.folder.reform_path(&rid("3")),
            r#"{"id": "4", "data": {}}"#,
        )
        .unwrap();
        let err = ctx.folder.load(&rid("3")).unwrap_err();
        assert!(matches!(err, StoreError::ReformIdMismatch { .. }));
    }
}
