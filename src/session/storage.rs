//! Session storage implementation
//!
//! A small string key-value store holding the session token and user
//! profile between runs. Backed by process memory, a JSON file, or Redis.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use redis::AsyncCommands;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, warn};

use crate::config::{SessionBackendKind, SessionConfig};
use crate::utils::errors::{InfluenceHubError, Result};

/// Key-value store used for the local session
#[derive(Clone)]
pub enum SessionStorage {
    Memory(MemoryStore),
    File(FileStore),
    Redis(RedisStore),
}

impl SessionStorage {
    /// Open the backend selected in configuration
    pub async fn from_config(config: &SessionConfig) -> Result<Self> {
        match config.backend {
            SessionBackendKind::Memory => Ok(Self::memory()),
            SessionBackendKind::File => {
                let path = config.file_path.as_deref().ok_or_else(|| {
                    InfluenceHubError::Config("Session file path is not configured".to_string())
                })?;
                Ok(Self::file(path))
            }
            SessionBackendKind::Redis => {
                let url = config.redis_url.as_deref().ok_or_else(|| {
                    InfluenceHubError::Config("Redis URL is not configured".to_string())
                })?;
                Ok(SessionStorage::Redis(RedisStore::connect(url, &config.redis_prefix).await?))
            }
        }
    }

    pub fn memory() -> Self {
        SessionStorage::Memory(MemoryStore::default())
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        SessionStorage::File(FileStore::new(path))
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            SessionStorage::Memory(store) => Ok(store.get(key).await),
            SessionStorage::File(store) => store.get(key).await,
            SessionStorage::Redis(store) => store.get(key).await,
        }
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        match self {
            SessionStorage::Memory(store) => {
                store.set(key, value).await;
                Ok(())
            }
            SessionStorage::File(store) => store.set(key, value).await,
            SessionStorage::Redis(store) => store.set(key, value).await,
        }
    }

    pub async fn remove(&self, key: &str) -> Result<()> {
        match self {
            SessionStorage::Memory(store) => {
                store.remove(key).await;
                Ok(())
            }
            SessionStorage::File(store) => store.remove(key).await,
            SessionStorage::Redis(store) => store.remove(key).await,
        }
    }

    /// Remove every key this store owns
    pub async fn clear(&self) -> Result<()> {
        match self {
            SessionStorage::Memory(store) => {
                store.clear().await;
                Ok(())
            }
            SessionStorage::File(store) => store.clear().await,
            SessionStorage::Redis(store) => store.clear().await,
        }
    }
}

impl std::fmt::Debug for SessionStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStorage::Memory(_) => f.write_str("SessionStorage::Memory"),
            SessionStorage::File(store) => f
                .debug_tuple("SessionStorage::File")
                .field(&store.path)
                .finish(),
            SessionStorage::Redis(store) => f
                .debug_tuple("SessionStorage::Redis")
                .field(&store.prefix)
                .finish(),
        }
    }
}

/// In-process store, lost when the process exits
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        self.entries.write().await.insert(key.to_string(), value.to_string());
    }

    async fn remove(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

/// JSON object on disk. Each mutation rewrites the file through a temp file and rename.
#[derive(Clone)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.load().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(key).is_some() {
            self.persist(&entries).await?;
        }
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "Session file removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn load(&self) -> Result<HashMap<String, String>> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&data) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Session file is corrupt, ignoring it");
                Ok(HashMap::new())
            }
        }
    }

    async fn persist(&self, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let serialized = serde_json::to_string_pretty(entries)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, serialized).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            error!(path = %self.path.display(), error = %e, "Failed to replace session file");
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        debug!(path = %self.path.display(), keys = entries.len(), "Session file written");
        Ok(())
    }
}

/// Redis-backed store, keys namespaced under a prefix
#[derive(Clone)]
pub struct RedisStore {
    connection_manager: redis::aio::ConnectionManager,
    prefix: String,
}

impl RedisStore {
    pub async fn connect(url: &str, prefix: &str) -> Result<Self> {
        let client = redis::Client::open(url)?;
        let connection_manager = redis::aio::ConnectionManager::new(client).await?;

        Ok(Self {
            connection_manager,
            prefix: prefix.to_string(),
        })
    }

    fn key(&self, key: &str) -> String {
        format!("{}session:{}", self.prefix, key)
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection_manager.clone();
        let value: Option<String> = conn.get(self.key(key)).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.connection_manager.clone();
        conn.set::<_, _, ()>(self.key(key), value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut conn = self.connection_manager.clone();
        let _: u32 = conn.del(self.key(key)).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut conn = self.connection_manager.clone();
        let pattern = format!("{}session:*", self.prefix);
        let keys: Vec<String> = conn.keys(&pattern).await?;

        if keys.is_empty() {
            return Ok(());
        }

        let deleted: u64 = conn.del(&keys).await?;
        debug!(deleted_keys = deleted, "Cleared session keys from Redis");
        Ok(())
    }
}
