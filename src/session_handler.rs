use std::time::Duration;

use cookie::{Cookie, CookieJar};

/**
The capability set a session-managing host framework calls through.

The host owns session IDs, cookie transport, and request/response
plumbing; implementations of this trait own only the storage of session
payloads. Cookie state is explicit at this boundary: `read` receives the
inbound request's [`CookieJar`], and `write`/`destroy` return the
[`Cookie`] to set on the response rather than touching any ambient
request or response state.
*/
pub trait SessionHandler {
    /// Called by the host before any other operation. `save_path` is
    /// recorded for handlers that need a storage location; `name` is the
    /// host's session cookie name. Returns `true` on success.
    fn open(&mut self, save_path: &str, name: &str) -> bool;

    /**
    Returns the session payload stored under `id`, or the empty string
    if there is none.

    Absent, malformed, and tampered-with cookies are deliberately
    indistinguishable here: all of them read as the empty string, and
    nothing else is surfaced to the caller. Because of that sentinel, a
    host that needs to tell "no session" apart from "empty session" must
    not store genuinely empty payloads.
    */
    fn read(&self, id: &str, cookies: &CookieJar) -> String;

    /// Stores `data` under `id`, returning the cookie to set on the
    /// response.
    fn write(&self, id: &str, data: &str) -> Cookie<'static>;

    /// Discards the session stored under `id`, returning a removal
    /// cookie to set on the response.
    fn destroy(&self, id: &str) -> Cookie<'static>;

    /// Reclaims sessions older than `max_lifetime`, where the handler
    /// holds anything to reclaim.
    fn gc(&mut self, max_lifetime: Duration);

    /// Called by the host after the last operation. Returns `true` on
    /// success.
    fn close(&mut self) -> bool;
}
