use tracing::warn;

use crate::error::AppError;
use crate::storage::kv::KeyValueStore;

pub const LEFT_SIDEBAR_KEY: &str = "leftSidebarState";
pub const RIGHT_SIDEBAR_KEY: &str = "rightSidebarState";

/// A collapsible panel whose collapsed flag is remembered between sessions.
///
/// The flag is stored as a JSON boolean under a fixed key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelToggle {
    key: String,
    collapsed: bool,
}

impl PanelToggle {
    /// Restore the panel state saved under `key`.
    ///
    /// Missing values mean expanded. An unparsable value, or an unreadable
    /// state document, is logged and treated as expanded; the next toggle
    /// overwrites it.
    pub async fn load(store: &dyn KeyValueStore, key: &str) -> Result<Self, AppError> {
        let collapsed = match store.load(key).await {
            Ok(Some(raw)) => serde_json::from_str::<bool>(&raw).unwrap_or_else(|err| {
                warn!(key, raw = %raw, error = %err, "Ignoring unreadable panel state");
                false
            }),
            Ok(None) => false,
            Err(AppError::Serialization(err)) => {
                warn!(key, error = %err, "Ignoring unreadable UI state document");
                false
            }
            Err(err) => return Err(err),
        };

        Ok(Self {
            key: key.to_string(),
            collapsed,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Flip the collapsed flag and persist the new value.
    pub async fn toggle(&mut self, store: &dyn KeyValueStore) -> Result<bool, AppError> {
        self.set_collapsed(store, !self.collapsed).await?;
        Ok(self.collapsed)
    }

    pub async fn set_collapsed(
        &mut self,
        store: &dyn KeyValueStore,
        collapsed: bool,
    ) -> Result<(), AppError> {
        store
            .save(&self.key, &serde_json::to_string(&collapsed)?)
            .await?;
        self.collapsed = collapsed;
        Ok(())
    }
}
