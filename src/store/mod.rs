//! Saved live code — a small key/value store persisted as YAML.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Key the editor buffer is saved under.
pub const DEFAULT_LIVE_CODE_KEY: &str = "$saved-live-code";

/// Sample shown (and typed out) when nothing has been saved yet.
pub const DEFAULT_LIVE_CODE: &str = r#"export default function App() {
  return (
    <>
      <h1 id="title">
        Hello
        <span> world</span>
      </h1>
      <div style={styles.bar} />
    </>
  )
}
"#;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("store YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// String key/value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store, nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a YAML map on disk, rewritten on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_yaml::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };
        tracing::info!(path = %path.display(), entries = entries.len(), "store loaded");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(&self.entries)?;
        std::fs::write(&self.path, yaml)?;
        Ok(())
    }
}

/// Default path for the store.
pub fn default_store_path() -> PathBuf {
    crate::config::glint_dir()
        .unwrap_or_else(|| PathBuf::from(".glint"))
        .join("store.yaml")
}

/// The saved buffer, or the sample when nothing (or nothing non-empty) is saved.
pub fn load_live_code(store: &dyn KeyValueStore) -> String {
    store
        .get(DEFAULT_LIVE_CODE_KEY)
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| DEFAULT_LIVE_CODE.to_string())
}
