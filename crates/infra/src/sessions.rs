//! Session-keyed cart storage.
//!
//! Carts are not ambient request state: handlers load the entry for their
//! session id, hold its lock for the duration of the operation, and the
//! store owns expiry. Holding the per-session mutex serializes concurrent
//! requests against the same cart; requests for different sessions do not
//! contend beyond the brief map access.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, Instant};

use storefront_cart::Cart;
use storefront_core::SessionId;

/// A session's cart plus its expiry deadline.
#[derive(Debug)]
pub struct CartEntry {
    pub cart: Cart,
    expires_at: Instant,
}

impl CartEntry {
    fn fresh(ttl: Duration) -> Self {
        Self {
            cart: Cart::new(),
            expires_at: Instant::now() + ttl,
        }
    }

    fn expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Keyed store of session carts with a sliding TTL.
///
/// Entries are created lazily on first use, refreshed on every access, and
/// dropped when expired (checked on access, swept on insert).
#[derive(Debug)]
pub struct SessionCartStore {
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<CartEntry>>>>,
    ttl: Duration,
}

impl SessionCartStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// The entry for `session`, creating it if absent or expired.
    pub fn get_or_create(&self, session: SessionId) -> Arc<Mutex<CartEntry>> {
        if let Some(entry) = self.get(session) {
            return entry;
        }

        let mut map = match self.sessions.write() {
            Ok(m) => m,
            Err(poisoned) => poisoned.into_inner(),
        };
        // Opportunistic sweep keeps abandoned sessions from accumulating.
        map.retain(|_, e| e.lock().map(|g| !g.expired()).unwrap_or(false));
        map.entry(session)
            .or_insert_with(|| Arc::new(Mutex::new(CartEntry::fresh(self.ttl))))
            .clone()
    }

    /// The live entry for `session`, if one exists. Refreshes the TTL;
    /// expired entries are dropped and reported as absent.
    pub fn get(&self, session: SessionId) -> Option<Arc<Mutex<CartEntry>>> {
        let entry = {
            let map = self.sessions.read().ok()?;
            map.get(&session).cloned()
        }?;

        let expired = {
            let mut guard = entry.lock().ok()?;
            if guard.expired() {
                true
            } else {
                guard.expires_at = Instant::now() + self.ttl;
                false
            }
        };

        if expired {
            if let Ok(mut map) = self.sessions.write() {
                map.remove(&session);
            }
            tracing::debug!(session_id = %session, "session cart expired");
            return None;
        }
        Some(entry)
    }

    /// Discard the cart for `session`, if any.
    pub fn clear(&self, session: SessionId) {
        if let Ok(mut map) = self.sessions.write() {
            map.remove(&session);
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
