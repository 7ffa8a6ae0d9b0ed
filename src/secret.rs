/*!
Secret sourcing for [`CookieStore`](crate::CookieStore).

Prefer handing [`CookieStore::new`](crate::CookieStore::new) a secret
retrieved from your deployment environment. For applications without a
secret-distribution story, [`load_or_generate`] generates a
cryptographically random secret on first run and persists it, so sealed
cookies stay valid across restarts.
*/

use std::{fs, io::ErrorKind, path::Path};

use cookie::Key;
use thiserror::Error;

/// The length in bytes of a secret generated by [`load_or_generate`].
pub const GENERATED_SECRET_LEN: usize = 64;

/// Concrete errors that occur while loading or persisting a secret.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SecretError {
    /// the secret file exists but is empty, which would authenticate
    /// cookies under an empty key
    #[error("secret file {0} is empty")]
    Empty(String),

    /// [`std::io::Error`]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/**
Loads the secret persisted at `path`, generating it on first run.

When `path` does not exist, [`GENERATED_SECRET_LEN`] bytes are drawn
from the operating system's secure random source, written to `path`
(owner-readable only, on unix), and returned. Subsequent calls return
the same bytes. An existing but empty file is an error rather than an
empty secret.
*/
pub fn load_or_generate(path: impl AsRef<Path>) -> Result<Vec<u8>, SecretError> {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(secret) if secret.is_empty() => Err(SecretError::Empty(path.display().to_string())),

        Ok(secret) => Ok(secret),

        Err(e) if e.kind() == ErrorKind::NotFound => {
            let secret = Key::generate().master().to_vec();
            persist(path, &secret)?;
            log::info!("generated a new session secret at {}", path.display());
            Ok(secret)
        }

        Err(e) => Err(e.into()),
    }
}

#[cfg(unix)]
fn persist(path: &Path, secret: &[u8]) -> std::io::Result<()> {
    use std::{io::Write, os::unix::fs::OpenOptionsExt};

    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(path)?
        .write_all(secret)
}

#[cfg(not(unix))]
fn persist(path: &Path, secret: &[u8]) -> std::io::Result<()> {
    fs::write(path, secret)
}
