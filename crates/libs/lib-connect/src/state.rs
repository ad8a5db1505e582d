//! Connection state and provider presence types.

/// Outcome of probing the page for an injected wallet provider.
///
/// Detection is a pure read of ambient page state at call time: repeating it
/// is always safe, and the result reflects the page at that moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderPresence {
    /// Nothing compatible is injected into the page.
    Absent,
    /// A provider object is injected. `recognized` is true only when it
    /// identifies itself as Phantom.
    Present { recognized: bool },
}

impl ProviderPresence {
    pub fn is_recognized(&self) -> bool {
        matches!(self, ProviderPresence::Present { recognized: true })
    }
}

/// Account reported by a successful provider connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletAccount {
    /// Base58 public key string, exactly as the provider reported it.
    pub address: String,
}

/// Connection lifecycle state observed by the UI.
///
/// Exactly one value holds at a time. Transitions happen only inside
/// [`ConnectionManager`](crate::manager::ConnectionManager).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectionState {
    /// Detection has not completed yet.
    Unknown,
    /// No compatible provider is injected into the page.
    NoProvider,
    /// A provider is present but no account is connected.
    ProviderFound { recognized: bool },
    /// An account is connected through a recognized provider.
    Connected { address: String },
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            ConnectionState::Connected { address } => Some(address),
            _ => None,
        }
    }

    /// True when an explicit connect request may be issued.
    pub fn can_connect(&self) -> bool {
        matches!(self, ConnectionState::ProviderFound { recognized: true })
    }

    pub(crate) fn from_presence(presence: ProviderPresence) -> Self {
        match presence {
            ProviderPresence::Absent => ConnectionState::NoProvider,
            ProviderPresence::Present { recognized } => {
                ConnectionState::ProviderFound { recognized }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connected_state_helpers() {
        let state = ConnectionState::Connected {
            address: "ABC123".to_string(),
        };
        assert!(state.is_connected());
        assert_eq!(state.address(), Some("ABC123"));
        assert!(!state.can_connect());
    }

    #[test]
    fn test_only_recognized_providers_accept_connects() {
        assert!(ConnectionState::ProviderFound { recognized: true }.can_connect());
        assert!(!ConnectionState::ProviderFound { recognized: false }.can_connect());
        assert!(!ConnectionState::Unknown.can_connect());
        assert!(!ConnectionState::NoProvider.can_connect());
    }

    #[test]
    fn test_presence_maps_onto_state() {
        assert_eq!(
            ConnectionState::from_presence(ProviderPresence::Absent),
            ConnectionState::NoProvider
        );
        assert_eq!(
            ConnectionState::from_presence(ProviderPresence::Present { recognized: true }),
            ConnectionState::ProviderFound { recognized: true }
        );
        assert_eq!(
            ConnectionState::from_presence(ProviderPresence::Present { recognized: false }),
            ConnectionState::ProviderFound { recognized: false }
        );
    }
}
