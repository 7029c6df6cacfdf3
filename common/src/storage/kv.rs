use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::{path::Path as ObjPath, ObjectStore, PutPayload};
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::warn;

use crate::error::AppError;
use crate::utils::config::{AppConfig, StorageKind};

/// Object name of the JSON document holding every remembered value.
pub const UI_STATE_FILE: &str = "ui_state.json";

pub type DynStore = Arc<dyn ObjectStore>;

/// Minimal key-value persistence used for remembered UI state.
///
/// Values are JSON texts: `save` rejects anything that does not parse and
/// `load` hands back the stored value re-encoded as JSON.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Load the JSON value stored under `key`, if any.
    async fn load(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn save(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Keeps every key in a single JSON object stored through `object_store`.
///
/// The local backend writes each document to a staging file and renames it
/// into place, so a reader never sees a half-written document. A missing
/// document reads as empty.
pub struct UiStateStore {
    store: DynStore,
    backend_kind: StorageKind,
    local_base: Option<PathBuf>,
    location: ObjPath,
    write_lock: Mutex<()>,
}

impl UiStateStore {
    /// Open the backend selected by `cfg.storage`, creating the data
    /// directory for the local backend.
    pub async fn new(cfg: &AppConfig) -> Result<Self, AppError> {
        match cfg.storage {
            StorageKind::Local => {
                let base = PathBuf::from(&cfg.data_dir);
                if !base.exists() {
                    tokio::fs::create_dir_all(&base).await?;
                }
                let store = LocalFileSystem::new_with_prefix(&base)?;
                let mut ui_state = Self::with_backend(Arc::new(store), StorageKind::Local);
                ui_state.local_base = Some(base);
                Ok(ui_state)
            }
            StorageKind::Memory => Ok(Self::in_memory()),
        }
    }

    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(InMemory::new()), StorageKind::Memory)
    }

    /// Wrap an existing backend, e.g. one shared with other components.
    pub fn with_backend(store: DynStore, backend_kind: StorageKind) -> Self {
        Self {
            store,
            backend_kind,
            local_base: None,
            location: ObjPath::from(UI_STATE_FILE),
            write_lock: Mutex::new(()),
        }
    }

    pub fn backend_kind(&self) -> &StorageKind {
        &self.backend_kind
    }

    /// Path of the document on disk when using the local backend.
    pub fn local_path(&self) -> Option<PathBuf> {
        self.local_base
            .as_ref()
            .map(|base| base.join(UI_STATE_FILE))
    }

    async fn read_document(&self) -> Result<Map<String, Value>, AppError> {
        match self.store.get(&self.location).await {
            Ok(result) => {
                let raw = result.bytes().await?;
                if raw.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Map::new());
                }
                Ok(serde_json::from_slice(&raw)?)
            }
            Err(object_store::Error::NotFound { .. }) => Ok(Map::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_document(&self, document: &Map<String, Value>) -> Result<(), AppError> {
        let raw = serde_json::to_vec_pretty(document)?;
        let payload = PutPayload::from_bytes(Bytes::from(raw));
        self.store.put(&self.location, payload).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for UiStateStore {
    async fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        let mut document = self.read_document().await?;
        Ok(document.remove(key).map(|value| value.to_string()))
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), AppError> {
        let value: Value = serde_json::from_str(value)?;

        let _guard = self.write_lock.lock().await;
        let mut document = match self.read_document().await {
            Ok(document) => document,
            Err(AppError::Serialization(err)) => {
                warn!(location = %self.location, error = %err, "Replacing unreadable UI state document");
                Map::new()
            }
            Err(err) => return Err(err),
        };
        document.insert(key.to_string(), value);
        self.write_document(&document).await
    }
}
