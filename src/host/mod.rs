//! [`Host`](crate::engine::Host) implementations.
//!
//! - [`TerminalHost`]: full-screen crossterm UI with real-time gravity.
//! - [`TextHost`]: line prompt over any reader/writer pair, no gravity.

pub mod terminal;
pub mod text;

pub use terminal::TerminalHost;
pub use text::TextHost;
