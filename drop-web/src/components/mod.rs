//! UI Components

pub mod connect_button;
pub mod footer;
pub mod guidance;
pub mod header;
pub mod mint_machine;

pub use connect_button::ConnectButton;
pub use footer::Footer;
pub use guidance::Guidance;
pub use header::Header;
pub use mint_machine::MintMachine;
