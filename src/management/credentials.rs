use std::path::{Path, PathBuf};

use crate::{error::StoreError, types::TokenRecord};

/// Single-file cache for the OAuth token record.
///
/// Nothing else reads or writes the file. One process at a time is assumed;
/// no locking is done.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored record.
    ///
    /// A missing, unreadable or malformed file all come back as
    /// [`StoreError::NotFound`].
    pub async fn load(&self) -> Result<TokenRecord, StoreError> {
        let content = async_fs::read_to_string(&self.path)
            .await
            .map_err(|_| StoreError::NotFound)?;
        serde_json::from_str(&content).map_err(|_| StoreError::NotFound)
    }

    /// Replaces the stored record as a whole.
    ///
    /// The JSON goes to a sibling temporary file first and is renamed over
    /// the target, so readers never see a half-written record.
    pub async fn save(&self, record: &TokenRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(record)?;
        let tmp = self.tmp_path();
        async_fs::write(&tmp, json).await?;
        if let Err(e) = async_fs::rename(&tmp, &self.path).await {
            let _ = async_fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "token.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
