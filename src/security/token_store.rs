use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::runtime::config::APP_DIR;

pub const TOKEN_STORE_FILE: &str = "notebook_tokens.yaml";

const DELIMITER: &str = ": ";

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("cannot determine the user configuration directory")]
    NoConfigDir,

    #[error("token store {} does not exist", path.display())]
    StoreNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    #[error("token store {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TokenStoreError {
    /// True when the store file or the requested key is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TokenStoreError::StoreNotFound { .. } | TokenStoreError::KeyNotFound(_)
        )
    }
}

/// Append-only `identifier: secret` file holding legacy notebook tokens.
///
/// Saves never rewrite earlier lines, and a lookup returns the first line
/// whose identifier matches. Re-saving an identifier therefore leaves the
/// original secret in effect. Nothing is escaped: an identifier containing
/// `": "` or either value containing a newline breaks later lookups.
///
/// There is no locking; concurrent processes race on the file.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store at `<config-home>/llmo/notebook_tokens.yaml`.
    pub fn open_default() -> Result<Self, TokenStoreError> {
        let home = dirs::config_dir().ok_or(TokenStoreError::NoConfigDir)?;
        Ok(Self::at(home.join(APP_DIR).join(TOKEN_STORE_FILE)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, id: &str, secret: &str) -> Result<(), TokenStoreError> {
        if let Some(dir) = self.path.parent() {
            create_private_dir(dir).map_err(|e| self.io_error(e))?;
        }

        let mut file = open_private_append(&self.path).map_err(|e| self.io_error(e))?;
        let line = format!("{id}{DELIMITER}{secret}\n");
        file.write_all(line.as_bytes())
            .map_err(|e| self.io_error(e))?;

        debug!(id = %id, path = %self.path.display(), "notebook token saved");
        Ok(())
    }

    pub fn load(&self, id: &str) -> Result<String, TokenStoreError> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => TokenStoreError::StoreNotFound {
                path: self.path.clone(),
                source: e,
            },
            _ => self.io_error(e),
        })?;

        // Lines are compared as bytes; only the matching secret must be UTF-8.
        for line in BufReader::new(file).split(b'\n') {
            let mut line = line.map_err(|e| self.io_error(e))?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            if let Some((key, secret)) = split_record(&line) {
                if key == id.as_bytes() {
                    debug!(id = %id, path = %self.path.display(), "notebook token found");
                    return String::from_utf8(secret.to_vec()).map_err(|e| {
                        self.io_error(io::Error::new(io::ErrorKind::InvalidData, e))
                    });
                }
            }
        }

        Err(TokenStoreError::KeyNotFound(id.to_string()))
    }

    fn io_error(&self, source: io::Error) -> TokenStoreError {
        TokenStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Split a record on the first delimiter.
fn split_record(line: &[u8]) -> Option<(&[u8], &[u8])> {
    let delim = DELIMITER.as_bytes();
    let pos = line.windows(delim.len()).position(|w| w == delim)?;
    Some((&line[..pos], &line[pos + delim.len()..]))
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn open_private_append(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_private_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
