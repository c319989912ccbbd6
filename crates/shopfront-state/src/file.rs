use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use tokio::{io::AsyncWriteExt, sync::Mutex};
use tracing::debug;

use crate::{SessionStore, StoreError, StoreKey};

/// Session storage persisted to a JSON file.
///
/// The file holds a flat object keyed by the persisted key names (`accessToken`, `refreshToken`,
/// `user`, `cartId`). Every mutation rewrites a temporary sibling file and renames it over the
/// target, so a crash never leaves a partially written session behind. Reads are served from
/// memory; the file is only read once, when the store is opened.
pub struct FileSessionStore {
    path: PathBuf,
    values: Mutex<BTreeMap<StoreKey, String>>,
}

impl FileSessionStore {
    /// Open the store at `path`, loading any session persisted there. A missing file yields an
    /// empty store; the file is created on the first write.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let values = match tokio::fs::read(&path).await {
            Ok(bytes) => parse(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), keys = values.len(), "Opened session file");

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, values: &BTreeMap<StoreKey, String>) -> Result<(), StoreError> {
        let object: serde_json::Map<String, serde_json::Value> = values
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), serde_json::Value::String(v.clone())))
            .collect();
        let contents = serde_json::to_vec_pretty(&object)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);
        let mut file = options.open(&tmp).await?;

        // A temp file left behind by an earlier crash keeps the mode it was created with.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))
                .await?;
        }

        file.write_all(&contents).await?;
        file.sync_all().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Apply `mutate` to a copy of the current values, persist the copy, and only then make it
    /// visible. A failed write leaves the in-memory state untouched.
    async fn update<F>(&self, mutate: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut BTreeMap<StoreKey, String>),
    {
        let mut values = self.values.lock().await;
        let mut next = values.clone();
        mutate(&mut next);
        self.persist(&next).await?;
        *values = next;
        Ok(())
    }
}

fn parse(bytes: &[u8]) -> Result<BTreeMap<StoreKey, String>, StoreError> {
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(bytes)?;

    let mut values = BTreeMap::new();
    for (name, value) in object {
        let Some(key) = StoreKey::parse(&name) else {
            tracing::warn!(name = %name, "Ignoring unknown key in session file");
            continue;
        };
        match value {
            serde_json::Value::String(s) => {
                values.insert(key, s);
            }
            serde_json::Value::Null => {}
            other => {
                return Err(StoreError::Internal(format!(
                    "expected a string for {key}, found {other}"
                )));
            }
        }
    }
    Ok(values)
}

#[async_trait::async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        Ok(self.values.lock().await.get(&key).cloned())
    }

    async fn set(&self, key: StoreKey, value: String) -> Result<(), StoreError> {
        self.update(|values| {
            values.insert(key, value);
        })
        .await
    }

    async fn remove(&self, key: StoreKey) -> Result<(), StoreError> {
        self.update(|values| {
            values.remove(&key);
        })
        .await
    }

    /// Unlike the other writes, the values are dropped from memory even when the file can't be
    /// rewritten, so a failed teardown never leaves the tokens in use.
    async fn clear(&self) -> Result<(), StoreError> {
        let mut values = self.values.lock().await;
        values.clear();
        self.persist(&values).await
    }

    async fn set_many(&self, entries: Vec<(StoreKey, Option<String>)>) -> Result<(), StoreError> {
        self.update(|values| {
            for (key, value) in entries {
                match value {
                    Some(value) => values.insert(key, value),
                    None => values.remove(&key),
                };
            }
        })
        .await
    }
}
