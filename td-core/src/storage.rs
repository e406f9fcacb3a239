//! Storage backend for the todo list.
//!
//! Persists the todo list as a JSON document at a deterministic per-user
//! path, one file per user. The config directory and file are created with
//! owner-only permissions.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TdError};
use crate::paths::{default_config_dir, CONFIG_FILE_NAME};
use crate::types::Todolist;

/// Filesystem-backed storage for the todo list.
pub struct ListStorage {
    /// Directory holding the config file.
    config_dir: PathBuf,
}

impl ListStorage {
    /// Create storage rooted at a custom directory.
    ///
    /// This is the testing override: the caller-supplied directory takes
    /// precedence over the computed platform default.
    pub fn new(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Create storage at the platform default location under the home
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`TdError::UnableToLocateHomeDir`] if the home directory
    /// cannot be determined.
    pub fn new_default() -> Result<Self> {
        Ok(Self::new(default_config_dir()?))
    }

    /// Directory holding the config file.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Full path of the config file.
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Whether the config file is present. Best-effort: any error statting
    /// the path is treated as "does not exist".
    pub fn exists(&self) -> bool {
        self.config_path().exists()
    }

    /// Load the todo list from the config file.
    ///
    /// A missing file is not an error and yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`TdError::UnableToLoadConfig`] if the file exists but cannot
    /// be read, or its content does not deserialize as a todo list.
    pub fn load(&self) -> Result<Todolist> {
        let path = self.config_path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no config file at {}, starting empty", path.display());
                return Ok(Todolist::new());
            }
            Err(e) => return Err(TdError::load(path, e)),
        };

        serde_json::from_str(&content).map_err(|e| TdError::load(path, e))
    }

    /// Save the todo list to the config file, fully overwriting any prior
    /// content.
    ///
    /// # Errors
    ///
    /// Returns [`TdError::UnableToSaveConfig`] wrapping the underlying
    /// serialization or I/O error.
    pub fn save(&self, list: &Todolist) -> Result<()> {
        self.ensure_config_dir()?;

        let path = self.config_path();
        let content = serde_json::to_string(list).map_err(|e| TdError::save(path.clone(), e))?;
        fs::write(&path, content).map_err(|e| TdError::save(path.clone(), e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&path, perms).map_err(|e| TdError::save(path.clone(), e))?;
        }

        tracing::debug!("saved {} todos to {}", list.len(), path.display());
        Ok(())
    }

    /// Create the config directory (and parents) with owner-only
    /// permissions if missing. Idempotent.
    fn ensure_config_dir(&self) -> Result<()> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o700);
        }
        builder
            .create(&self.config_dir)
            .map_err(|e| TdError::save(self.config_path(), e))
    }
}
