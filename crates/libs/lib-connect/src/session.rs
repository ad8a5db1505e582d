//! Wallet session ownership and lending.
//!
//! The connection manager owns at most one [`Session`] at a time and lends
//! it to the UI as [`SessionHandle`] values. Dropping the session (the
//! disconnect path) kills every handle at once; a dead handle answers
//! `None` instead of serving stale data.

use std::rc::{Rc, Weak};

use crate::source::ProviderSource;

struct SessionInner {
    address: String,
    provider: Rc<dyn ProviderSource>,
}

/// A live wallet connection. Owned exclusively by the connection manager.
pub(crate) struct Session {
    inner: Rc<SessionInner>,
}

impl Session {
    pub(crate) fn new(address: String, provider: Rc<dyn ProviderSource>) -> Self {
        Self {
            inner: Rc::new(SessionInner { address, provider }),
        }
    }

    pub(crate) fn handle(&self) -> SessionHandle {
        SessionHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

/// Cheap, cloneable view of the live session.
///
/// Handles hold no ownership: every accessor returns `None` once the
/// manager revokes the session.
#[derive(Clone)]
pub struct SessionHandle {
    inner: Weak<SessionInner>,
}

impl SessionHandle {
    /// True while the session behind this handle has not been revoked.
    pub fn is_live(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Address the session is bound to.
    pub fn address(&self) -> Option<String> {
        self.inner.upgrade().map(|session| session.address.clone())
    }

    /// The provider capability downstream requests should be routed
    /// through. Always the same provider the connection was made with.
    pub fn provider(&self) -> Option<Rc<dyn ProviderSource>> {
        self.inner.upgrade().map(|session| Rc::clone(&session.provider))
    }
}
