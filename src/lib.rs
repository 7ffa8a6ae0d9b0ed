#![forbid(unsafe_code)]
#![warn(
    missing_copy_implementations,
    missing_crate_level_docs,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    unused_qualifications
)]

/*!
# cookie-backed session storage

This crate keeps session state in the client's cookie instead of a
server-side store. Each cookie value is `base64( payload ++ tag )` where
`tag` is a raw-byte hmac digest of the payload under a secret key, so any
modification of the cookie is detected on the way back in and treated the
same as having no session at all.

The host session framework drives the store through the
[`SessionHandler`] capability set: it hands the inbound request's
[`CookieJar`](cookie::CookieJar) to [`read`](SessionHandler::read) and
applies the [`Cookie`](cookie::Cookie) descriptors returned by
[`write`](SessionHandler::write) and [`destroy`](SessionHandler::destroy)
to the response.

## security

The payload is authenticated, **not encrypted**: anyone holding the cookie
can read the session data, and only tampering is detectable. Do not put
secrets in the payload. There is also no replay protection; a client can
present any previously issued cookie until it expires.

The `secret` MUST be cryptographically random to be secure. Retrieve it at
runtime from the environment, or persist a generated one with
[`secret::load_or_generate`], instead of compiling it into your
application.

## example

```
use cookie_session_store::{cookie::CookieJar, CookieStore, SessionHandler};

let mut store = CookieStore::new(b"you should use an env var instead of a string literal");
assert!(store.open("/var/lib/sessions", "sid"));

// first request: the client has no cookie yet
let mut jar = CookieJar::new();
assert_eq!(store.read("sid-1", &jar), "");

// the host frames session data however it likes; the returned cookie
// goes out on the response and comes back on the next request
let cookie = store.write("sid-1", "user=42&theme=dark");
jar.add_original(cookie);
assert_eq!(store.read("sid-1", &jar), "user=42&theme=dark");

// logging out instructs the client to discard the cookie
let removal = store.destroy("sid-1");
assert!(removal.value().is_empty());
```
*/

mod cookie_store;
pub use cookie_store::CookieStore;

mod hash_algorithm;
pub use hash_algorithm::{HashAlgorithm, UnknownHashAlgorithm};

pub mod secret;

mod session_handler;
pub use session_handler::SessionHandler;

pub use cookie;
