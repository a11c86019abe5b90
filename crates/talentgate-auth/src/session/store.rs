//! Session persistence backends.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

use talentgate_core::config::{SessionBackend, SessionConfig};
use talentgate_core::error::{AppError, ErrorKind};
use talentgate_entity::session::Session;

/// Trait for loading and persisting the client session.
///
/// Implementations must be thread-safe; the session manager calls them after
/// every mutation.
#[async_trait]
pub trait SessionStore: Send + Sync + std::fmt::Debug {
    /// Loads the persisted session, or an anonymous one when nothing is stored.
    async fn load(&self) -> Result<Session, AppError>;

    /// Persists the session, replacing what was stored.
    async fn save(&self, session: &Session) -> Result<(), AppError>;

    /// Removes any persisted session.
    async fn clear(&self) -> Result<(), AppError>;
}

/// Builds the store selected by configuration.
pub fn build_store(config: &SessionConfig) -> Arc<dyn SessionStore> {
    match config.backend {
        SessionBackend::File => Arc::new(FileSessionStore::new(&config.file_path)),
        SessionBackend::Memory => Arc::new(MemorySessionStore::new()),
    }
}

/// Stores the session as a JSON document on disk.
///
/// Writes go to a uniquely named sibling file that is renamed over the
/// document, so readers never observe a partial write.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    /// Location of the session document.
    path: PathBuf,
    /// Serializes writes and removals issued through this store.
    write_lock: Arc<Mutex<()>>,
}

impl FileSessionStore {
    /// Creates a store writing to `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Location of the session document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Writes `body` to `path` through a fresh temp file in the same directory.
fn write_atomically(path: &Path, body: &[u8]) -> Result<(), AppError> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            std::fs::create_dir_all(parent)?;
            parent.to_path_buf()
        }
        None => PathBuf::from("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(&dir)?;
    temp.write_all(body)?;
    temp.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(temp.path(), std::fs::Permissions::from_mode(0o600))?;
    }

    temp.persist(path).map_err(|e| {
        AppError::with_source(
            ErrorKind::Storage,
            format!("Failed to replace session file {}", path.display()),
            e.error,
        )
    })?;
    Ok(())
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Session, AppError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No persisted session");
                return Ok(Session::anonymous());
            }
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read session file {}", self.path.display()),
                    e,
                ));
            }
        };

        match serde_json::from_slice::<Session>(&raw) {
            Ok(session) => Ok(session),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Discarding unreadable session file"
                );
                Ok(Session::anonymous())
            }
        }
    }

    async fn save(&self, session: &Session) -> Result<(), AppError> {
        let body = serde_json::to_vec_pretty(session)?;
        let _guard = self.write_lock.lock().await;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&path, &body))
            .await
            .map_err(|e| AppError::storage(format!("Session write task failed: {e}")))??;

        debug!(path = %self.path.display(), "Session persisted");
        Ok(())
    }

    async fn clear(&self) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Keeps the session in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    /// The stored session, if any.
    inner: Arc<RwLock<Option<Session>>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with `session`.
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(session))),
        }
    }

    /// The currently stored session, if any.
    pub async fn stored(&self) -> Option<Session> {
        self.inner.read().await.clone()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Session, AppError> {
        Ok(self.inner.read().await.clone().unwrap_or_default())
    }

    async fn save(&self, session: &Session) -> Result<(), AppError> {
        *self.inner.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), AppError> {
        *self.inner.write().await = None;
        Ok(())
    }
}
