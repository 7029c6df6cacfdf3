use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Backend holding remembered UI state.
#[derive(Clone, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    Local,
    Memory,
}

fn default_storage_kind() -> StorageKind {
    StorageKind::Local
}

#[derive(Clone, Deserialize, Debug, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_max_visible_pages")]
    pub max_visible_pages: usize,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_storage_kind")]
    pub storage: StorageKind,
    #[serde(default)]
    pub search_query: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_visible_pages: default_max_visible_pages(),
            data_dir: default_data_dir(),
            storage: default_storage_kind(),
            search_query: None,
        }
    }
}

fn default_page_size() -> usize {
    3
}

fn default_max_visible_pages() -> usize {
    5
}

fn default_data_dir() -> String {
    "./data".to_string()
}

pub fn get_config() -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default())
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(raw: &str) -> Result<AppConfig, ConfigError> {
        Config::builder()
            .add_source(File::from_str(raw, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn empty_source_falls_back_to_defaults() {
        let config = from_toml("").expect("empty config should deserialize");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.page_size, 3);
        assert_eq!(config.max_visible_pages, 5);
        assert_eq!(config.data_dir, "./data");
        assert_eq!(config.storage, StorageKind::Local);
        assert!(config.search_query.is_none());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = from_toml(
            r#"
            page_size = 10
            max_visible_pages = 7
            data_dir = "/tmp/akkuea"
            storage = "memory"
            search_query = "matemáticas"
            "#,
        )
        .expect("config should deserialize");

        assert_eq!(config.page_size, 10);
        assert_eq!(config.max_visible_pages, 7);
        assert_eq!(config.data_dir, "/tmp/akkuea");
        assert_eq!(config.storage, StorageKind::Memory);
        assert_eq!(config.search_query.as_deref(), Some("matemáticas"));
    }
}
