//! Game engine - session state machine, snapshots and the host-driven run loop
//!
//! The engine owns every mutation of a game. Hosts (terminal, text prompt,
//! tests) implement [`Host`] and only ever hand commands in and take
//! [`GameSnapshot`]s out.
//!
//! # Example
//!
//! ```
//! use term_tetris_core::BoardConfig;
//! use term_tetris_engine::{Phase, Response, Session};
//! use term_tetris_engine::types::Command;
//!
//! let mut session = Session::with_seed(BoardConfig::default(), 7);
//! session.start();
//! assert_eq!(session.phase(), Phase::Falling);
//!
//! assert!(matches!(session.apply(Command::HardDrop), Response::Froze(_)));
//! assert_eq!(session.statistics().total(), 2);
//! ```

pub mod host;
pub mod runner;
pub mod session;
pub mod snapshot;

pub use term_tetris_types as types;

pub use host::Host;
pub use runner::{gravity_interval, run};
pub use session::{FreezeReport, Phase, Response, Session};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
