use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::CoreError;
use crate::models::session::SessionToken;

use super::session_store::{SessionStore, SESSION_TOKEN_KEY};

/// File-backed session store for native shells (desktop, TUI).
///
/// The raw token string is written to `<dir>/token`, mirroring the
/// single-key layout browser shells get from web storage. The file is
/// readable by the owner only on Unix.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store the token inside `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join(SESSION_TOKEN_KEY),
        })
    }

    /// Where the token file lives.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Result<Option<SessionToken>, CoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(SessionToken::new(raw))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, token: &SessionToken) -> Result<(), CoreError> {
        fs::write(&self.path, token.expose())?;

        // The token is a bearer credential; keep other users out.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), CoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
