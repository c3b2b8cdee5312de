use storefront_core::SessionId;

/// Session context for a request.
///
/// Injected by the session middleware; identity/authentication beyond the
/// session id is handled by an external provider and is not modeled here.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SessionContext {
    session_id: SessionId,
}

impl SessionContext {
    pub fn new(session_id: SessionId) -> Self {
        Self { session_id }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }
}
