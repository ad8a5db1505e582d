//! Connection lifecycle state machine.
//!
//! One [`ConnectionManager`] lives for the lifetime of a mounted page. The
//! UI drives it with [`start`](ConnectionManager::start),
//! [`connect`](ConnectionManager::connect),
//! [`disconnect`](ConnectionManager::disconnect) and
//! [`stop`](ConnectionManager::stop), and observes it through
//! [`subscribe`](ConnectionManager::subscribe).
//!
//! Cancellation is cooperative: `stop` and `disconnect` bump an epoch
//! counter instead of aborting in-flight futures. A result that resolves
//! under a stale epoch, or after the state has moved past the point that
//! requested it, is discarded without a transition or a notification.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::{ConnectError, Result};
use crate::session::{Session, SessionHandle};
use crate::source::{ConnectMode, LoadSignal, ProviderSource};
use crate::state::{ConnectionState, ProviderPresence, WalletAccount};

/// Identifier returned by [`ConnectionManager::subscribe`].
pub type SubscriptionId = u64;

type Subscriber = Rc<dyn Fn(&ConnectionState)>;

/// Owns the connection state and the lent session.
///
/// Cloning is cheap: clones share the same underlying machine, so UI
/// handlers can each hold their own copy.
#[derive(Clone)]
pub struct ConnectionManager {
    inner: Rc<ManagerInner>,
}

struct ManagerInner {
    source: Rc<dyn ProviderSource>,
    load: Rc<dyn LoadSignal>,
    state: RefCell<ConnectionState>,
    session: RefCell<Option<Session>>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_subscriber_id: Cell<SubscriptionId>,
    started: Cell<bool>,
    epoch: Cell<u64>,
}

impl ConnectionManager {
    /// Build a manager over the given provider and page-load capabilities.
    ///
    /// The state starts at [`ConnectionState::Unknown`]; nothing happens
    /// until [`start`](Self::start) is awaited.
    pub fn new(source: Rc<dyn ProviderSource>, load: Rc<dyn LoadSignal>) -> Self {
        Self {
            inner: Rc::new(ManagerInner {
                source,
                load,
                state: RefCell::new(ConnectionState::Unknown),
                session: RefCell::new(None),
                subscribers: RefCell::new(Vec::new()),
                next_subscriber_id: Cell::new(0),
                started: Cell::new(false),
                epoch: Cell::new(0),
            }),
        }
    }

    /// Current connection state.
    pub fn state(&self) -> ConnectionState {
        self.inner.state.borrow().clone()
    }

    /// Handle to the live session, if an account is connected.
    pub fn session(&self) -> Option<SessionHandle> {
        self.inner.session.borrow().as_ref().map(Session::handle)
    }

    /// Register an observer called once per state transition.
    ///
    /// The current state is not replayed; read [`state`](Self::state) first.
    /// Callbacks run on a snapshot of the subscriber list, so a callback may
    /// itself subscribe or unsubscribe.
    pub fn subscribe(&self, callback: impl Fn(&ConnectionState) + 'static) -> SubscriptionId {
        let id = self.inner.next_subscriber_id.get();
        self.inner.next_subscriber_id.set(id + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        id
    }

    /// Remove a previously registered observer. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .subscribers
            .borrow_mut()
            .retain(|(subscriber_id, _)| *subscriber_id != id);
    }

    /// Run detection and the trust-only reconnect once the page has loaded.
    ///
    /// At most one sequence runs per mount: calling this again while the
    /// manager is started is a no-op, so duplicate load events cannot fork
    /// the sequence. After [`stop`](Self::stop), the next call runs a fresh
    /// sequence.
    pub async fn start(&self) {
        if self.inner.started.get() {
            log::debug!("start ignored, already running");
            return;
        }
        self.inner.started.set(true);
        let epoch = self.inner.epoch.get();

        self.inner.load.ready().await;
        if !self.still_current(epoch) {
            log::debug!("load signal resolved after stop, skipping detection");
            return;
        }

        let presence = self.inner.source.detect();
        log::debug!("provider detection: {:?}", presence);
        self.apply_detection(presence);

        if self.state().is_connected() || !presence.is_recognized() {
            return;
        }

        log::debug!("recognized provider present, attempting trust-only reconnect");
        let result = self.inner.source.connect(ConnectMode::Silent).await;
        if !self.still_current(epoch) {
            log::debug!("stale trust-only result discarded");
            return;
        }
        match result {
            Ok(account) => {
                // The machine may have moved on while the wallet held the
                // request open; only the state that asked still accepts it.
                if !self.state().can_connect() {
                    log::debug!("trust-only result discarded, connection already settled");
                    return;
                }
                if let Err(err) = self.complete_connection(account) {
                    log::warn!("trust-only reconnect returned an unusable account: {}", err);
                }
            }
            Err(ConnectError::UserRejected) => {
                // Expected when the wallet holds no prior trust for this page.
                log::debug!("trust-only reconnect declined");
            }
            Err(err) => {
                log::warn!("trust-only reconnect failed: {}", err);
            }
        }
    }

    /// Discard whatever the startup sequence still has in flight.
    ///
    /// Late resolutions apply no transition and notify nobody. Idempotent;
    /// a later [`start`](Self::start) begins a fresh sequence.
    pub fn stop(&self) {
        self.inner.epoch.set(self.inner.epoch.get() + 1);
        self.inner.started.set(false);
    }

    /// Explicit connect, raised from a user gesture.
    ///
    /// Requires a recognized provider. While already connected this returns
    /// the current address without touching state. A declined prompt leaves
    /// the state unchanged so the control stays retryable.
    pub async fn connect(&self) -> Result<String> {
        let state = self.state();
        if let ConnectionState::Connected { address } = state {
            log::debug!("connect requested while already connected");
            return Ok(address);
        }
        if !state.can_connect() {
            log::error!("connect requested in {:?} without a usable provider", state);
            let presence = self.inner.source.detect();
            self.apply_detection(presence);
            return Err(ConnectError::ProviderUnavailable);
        }

        let epoch = self.inner.epoch.get();
        let result = self.inner.source.connect(ConnectMode::Interactive).await;
        if !self.still_current(epoch) {
            // Stopped or reset while the prompt was open.
            log::debug!("stale connect result discarded");
            return Err(ConnectError::ProviderUnavailable);
        }
        if let ConnectionState::Connected { address } = self.state() {
            // A concurrent attempt already installed the session.
            log::debug!("connect resolved while already connected");
            return Ok(address);
        }
        match result {
            Ok(account) => self.complete_connection(account),
            Err(err) => {
                log::warn!("wallet connect failed: {}", err);
                Err(err)
            }
        }
    }

    /// Revoke the lent session and settle the state by re-detection.
    ///
    /// This is the only path out of [`ConnectionState::Connected`]. It also
    /// invalidates in-flight connect work, as [`stop`](Self::stop) does, so
    /// a stale result cannot undo the reset.
    pub fn disconnect(&self) {
        self.inner.epoch.set(self.inner.epoch.get() + 1);
        let had_session = self.inner.session.borrow_mut().take().is_some();
        if had_session {
            log::info!("wallet disconnected");
        }
        let presence = self.inner.source.detect();
        self.set_state(ConnectionState::from_presence(presence));
    }

    fn still_current(&self, epoch: u64) -> bool {
        self.inner.epoch.get() == epoch
    }

    /// Apply a detection result. Never downgrades an established connection;
    /// only [`disconnect`](Self::disconnect) leaves `Connected`.
    fn apply_detection(&self, presence: ProviderPresence) {
        let connected = self.inner.state.borrow().is_connected();
        if connected {
            return;
        }
        self.set_state(ConnectionState::from_presence(presence));
    }

    /// Install the session and publish `Connected`. The address must be
    /// non-empty; a blank one is a provider contract violation.
    fn complete_connection(&self, account: WalletAccount) -> Result<String> {
        if account.address.is_empty() {
            return Err(ConnectError::Provider("empty account address".to_string()));
        }
        let session = Session::new(account.address.clone(), Rc::clone(&self.inner.source));
        *self.inner.session.borrow_mut() = Some(session);
        self.set_state(ConnectionState::Connected {
            address: account.address.clone(),
        });
        log::info!("wallet connected: {}", account.address);
        Ok(account.address)
    }

    /// Check-and-set: writing a value equal to the current state notifies
    /// nobody, so every subscriber sees exactly one call per transition.
    fn set_state(&self, next: ConnectionState) {
        {
            let mut state = self.inner.state.borrow_mut();
            if *state == next {
                return;
            }
            log::debug!("connection state {:?} -> {:?}", *state, next);
            *state = next.clone();
        }
        let subscribers: Vec<Subscriber> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in subscribers {
            callback(&next);
        }
    }
}
