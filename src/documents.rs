//! Local cache for generated resume and cover-letter text.
//!
//! Derived documents are keyed by `(job id, document kind)` and live only in
//! a local store; structured job records go to the remote backend, but
//! regenerable text does not survive a device switch. Regenerating a
//! document overwrites the prior value for its key. Corrupt cached JSON is
//! discarded (and its key removed) instead of surfacing an error, so a bad
//! cache never blocks the user.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::tracker::domain::JobId;

/// The two derived artifacts the assistant produces per tracked job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Resume,
    CoverLetter,
}

impl DocumentKind {
    /// Stable storage key, kept compatible with the cache laid down by
    /// earlier clients.
    pub const fn cache_key(self) -> &'static str {
        match self {
            DocumentKind::Resume => "autoapply_resumes",
            DocumentKind::CoverLetter => "autoapply_cover_letters",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::CoverLetter => "cover letter",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache store failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("cache serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Minimal key/value blob store backing the document cache.
pub trait CacheStore {
    fn read(&self, key: &str) -> Result<Option<String>, CacheError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), CacheError>;
    fn remove(&mut self, key: &str) -> Result<(), CacheError>;
}

/// File-backed store writing one JSON file per key under a cache directory.
pub struct FileCacheStore {
    dir: PathBuf,
}

impl FileCacheStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl CacheStore for FileCacheStore {
    fn read(&self, key: &str) -> Result<Option<String>, CacheError> {
        match fs::read_to_string(self.path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), CacheError> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory view of the cached documents, written through to a
/// [`CacheStore`] on every save.
pub struct DocumentCache<S> {
    store: S,
    resumes: HashMap<JobId, String>,
    cover_letters: HashMap<JobId, String>,
}

impl<S> DocumentCache<S>
where
    S: CacheStore,
{
    /// Load both document maps, recovering from corrupt entries.
    pub fn open(mut store: S) -> Result<Self, CacheError> {
        let resumes = Self::load_map(&mut store, DocumentKind::Resume)?;
        let cover_letters = Self::load_map(&mut store, DocumentKind::CoverLetter)?;
        Ok(Self {
            store,
            resumes,
            cover_letters,
        })
    }

    fn load_map(store: &mut S, kind: DocumentKind) -> Result<HashMap<JobId, String>, CacheError> {
        let Some(raw) = store.read(kind.cache_key())? else {
            return Ok(HashMap::new());
        };
        match serde_json::from_str(&raw) {
            Ok(map) => Ok(map),
            Err(err) => {
                warn!(
                    key = kind.cache_key(),
                    error = %err,
                    "discarding corrupt document cache"
                );
                store.remove(kind.cache_key())?;
                Ok(HashMap::new())
            }
        }
    }

    fn map(&self, kind: DocumentKind) -> &HashMap<JobId, String> {
        match kind {
            DocumentKind::Resume => &self.resumes,
            DocumentKind::CoverLetter => &self.cover_letters,
        }
    }

    /// Store generated text for a job, overwriting any prior value for the
    /// same `(job, kind)` key.
    pub fn save(
        &mut self,
        job: &JobId,
        kind: DocumentKind,
        content: impl Into<String>,
    ) -> Result<(), CacheError> {
        let mut updated = self.map(kind).clone();
        updated.insert(job.clone(), content.into());
        let serialized = serde_json::to_string(&updated)?;
        self.store.write(kind.cache_key(), &serialized)?;
        match kind {
            DocumentKind::Resume => self.resumes = updated,
            DocumentKind::CoverLetter => self.cover_letters = updated,
        }
        Ok(())
    }

    pub fn get(&self, job: &JobId, kind: DocumentKind) -> Option<&str> {
        self.map(kind).get(job).map(String::as_str)
    }
}

/// Convenience constructor for the file-backed cache.
pub fn open_file_cache(dir: impl AsRef<Path>) -> Result<DocumentCache<FileCacheStore>, CacheError> {
    DocumentCache::open(FileCacheStore::new(dir.as_ref()))
}
