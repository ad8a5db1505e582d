//! Application constants

// Drop page copy
pub const DROP_TITLE: &str = "🍭 Sauce Candy";
pub const DROP_SUBTITLE: &str = "An NFT drop machine with fair mint";
pub const DROP_SEASON: &str = "Season #1: Hot Ones! 🔥";

// Wallet provider
pub const WALLET_INSTALL_URL: &str = "https://phantom.app/";

// Footer credit
pub const TWITTER_HANDLE: &str = "andrewmhenry22";
pub const TWITTER_LINK: &str = "https://twitter.com/andrewmhenry22";
