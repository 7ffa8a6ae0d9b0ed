use std::{
    fmt::{self, Debug, Formatter},
    time::{Duration, SystemTime},
};

use base64::{engine::general_purpose, Engine};
use cookie::{Cookie, CookieJar};

use crate::{HashAlgorithm, SessionHandler};

const SESSION_TTL: Duration = Duration::from_secs(3600);

/**
# Session storage inside the cookie itself.

`CookieStore` keeps no server-side state. [`write`](SessionHandler::write)
seals the payload as `base64( payload ++ hmac(secret, payload) )` and
[`read`](SessionHandler::read) only hands the payload back after
recomputing the tag over the prefix and matching it against the suffix.
A cookie that is absent, not base64, shorter than the tag, or carries a
mismatched tag reads as the empty string.

See crate-level docs for what this scheme does and does not protect
against.
*/
pub struct CookieStore {
    secret: Vec<u8>,
    algorithm: HashAlgorithm,
    save_path: Option<String>,
}

impl Debug for CookieStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CookieStore")
            .field("secret", &"<<secret>>")
            .field("algorithm", &self.algorithm)
            .field("save_path", &self.save_path)
            .finish()
    }
}

impl CookieStore {
    /**
    Constructs a `CookieStore` from the given secret, authenticating
    with hmac-sha512.

    Hmac accepts a secret of any length, but it MUST be
    cryptographically random to be secure. It is recommended to retrieve
    this at runtime from the environment, or to persist a generated one
    with [`secret::load_or_generate`](crate::secret::load_or_generate),
    instead of compiling it into your application.
    */
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
            algorithm: HashAlgorithm::default(),
            save_path: None,
        }
    }

    /// Sets the hash algorithm used for authentication tags. The
    /// default is [`HashAlgorithm::Sha512`]. Cookies sealed under one
    /// algorithm do not verify under another.
    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// The length in bytes of the authentication tag appended to every
    /// sealed cookie value. Determined by the configured algorithm.
    pub fn tag_len(&self) -> usize {
        self.algorithm.tag_len()
    }

    //--- methods below here are private ---

    fn seal(&self, data: &str) -> String {
        // Sealed value is [payload | tag], in one base64 frame.
        let mut sealed = data.as_bytes().to_vec();
        sealed.extend_from_slice(&self.algorithm.tag(&self.secret, data.as_bytes()));
        general_purpose::STANDARD.encode(sealed)
    }

    fn unseal(&self, cookie_value: &str) -> Option<String> {
        let raw = match general_purpose::STANDARD.decode(cookie_value) {
            Ok(raw) => raw,
            Err(_) => {
                log::trace!("cookie value is not valid base64");
                return None;
            }
        };

        if raw.len() < self.tag_len() {
            log::trace!("cookie value is shorter than the authentication tag");
            return None;
        }

        // Split [payload | tag] into its two parts.
        let (data, tag) = raw.split_at(raw.len() - self.tag_len());

        if !self.algorithm.verify(&self.secret, data, tag) {
            log::trace!("cookie authentication tag mismatch");
            return None;
        }

        match String::from_utf8(data.to_vec()) {
            Ok(data) => Some(data),
            Err(_) => {
                // write only ever seals utf-8, so this is malformed too
                log::trace!("cookie payload is not valid utf-8");
                None
            }
        }
    }
}

impl SessionHandler for CookieStore {
    fn open(&mut self, save_path: &str, _name: &str) -> bool {
        // there is nothing to open; the save path is recorded and unused
        self.save_path = Some(String::from(save_path));
        true
    }

    fn read(&self, id: &str, cookies: &CookieJar) -> String {
        cookies
            .get(id)
            .and_then(|cookie| self.unseal(cookie.value()))
            .unwrap_or_default()
    }

    fn write(&self, id: &str, data: &str) -> Cookie<'static> {
        let mut cookie = Cookie::new(String::from(id), self.seal(data));
        cookie.set_expires(Some((SystemTime::now() + SESSION_TTL).into()));
        cookie
    }

    fn destroy(&self, id: &str) -> Cookie<'static> {
        let mut cookie = Cookie::new(String::from(id), "");
        cookie.set_expires(Some(SystemTime::now().into()));
        cookie
    }

    fn gc(&mut self, _max_lifetime: Duration) {}

    fn close(&mut self) -> bool {
        true
    }
}
