//! # Formatting Utilities
//!
//! Display helpers for wallet addresses shown in the page chrome.

/// Format a wallet address by showing the first four and last four
/// characters (e.g. `8W6Q...JKAL`).
///
/// Addresses too short to truncate meaningfully are returned as-is.
///
/// # Examples
///
/// ```rust
/// use drop_web::utils::format::truncate_address;
///
/// let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// assert_eq!(truncate_address(addr), "8W6Q...JKAL");
/// assert_eq!(truncate_address("short"), "short");
/// ```
pub fn truncate_address(address: &str) -> String {
    const PREFIX_LEN: usize = 4;
    const SUFFIX_LEN: usize = 4;

    let address_len = address.len();
    if address_len <= PREFIX_LEN + SUFFIX_LEN {
        return address.to_string();
    }

    // Base58 addresses are ASCII-only, so byte slicing is safe here.
    let prefix = &address[..PREFIX_LEN];
    let suffix = &address[address_len - SUFFIX_LEN..];

    format!("{}...{}", prefix, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_address() {
        let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
        assert_eq!(truncate_address(addr), "8W6Q...JKAL");
    }

    #[test]
    fn test_short_addresses_pass_through() {
        assert_eq!(truncate_address("ABC123"), "ABC123");
        assert_eq!(truncate_address(""), "");
    }

    #[test]
    fn test_boundary_length_is_not_truncated() {
        // Exactly prefix + suffix long: truncating would not shorten it.
        assert_eq!(truncate_address("12345678"), "12345678");
        assert_eq!(truncate_address("123456789"), "1234...6789");
    }
}
