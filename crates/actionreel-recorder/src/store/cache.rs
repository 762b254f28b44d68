//! Durable cache backends.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use actionreel_config::{ConfigLoader, StorageConfig};
use actionreel_protocols::{CacheError, DurableCache};
use parking_lot::Mutex;
use tracing::debug;

/// In-memory cache with an optional byte quota.
///
/// Clones share the same entries, so a host can keep a handle and inspect
/// what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: Arc<Mutex<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes that would grow the total of keys and values past
    /// `quota` bytes.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: Arc::default(),
            quota: Some(quota),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl DurableCache for MemoryCache {
    fn load(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.get(key))
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.lock();
        if let Some(quota) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > quota {
                return Err(CacheError::QuotaExceeded { needed, quota });
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), CacheError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// File-backed cache: one JSON file per key.
///
/// ```text
/// {dir}/
/// ├── {sanitized_key}.json
/// └── ...
/// ```
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// Create the cache, creating `dir` if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!("FileCache initialized at {:?}", dir);
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", Self::sanitize_key(key)))
    }

    /// Sanitize a key for use as a file name.
    fn sanitize_key(key: &str) -> String {
        key.chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect()
    }
}

impl DurableCache for FileCache {
    fn load(&self, key: &str) -> Result<Option<String>, CacheError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), CacheError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), CacheError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Build the backend named by `[storage]`.
///
/// Unknown backends fall back to the file cache.
pub fn cache_from_config(storage: &StorageConfig) -> Result<Box<dyn DurableCache>, CacheError> {
    match storage.backend.as_str() {
        "memory" => Ok(Box::new(match storage.quota_bytes {
            Some(quota) => MemoryCache::with_quota(quota),
            None => MemoryCache::new(),
        })),
        _ => Ok(Box::new(FileCache::new(ConfigLoader::expand_path(
            &storage.cache_dir,
        ))?)),
    }
}
