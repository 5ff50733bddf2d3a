use std::time::Duration;

use anyhow::Result;

use crate::snapshot::GameSnapshot;
use crate::types::Command;

/// The clock, input and display a [`run`](crate::run) loop is driven by.
///
/// Hosts never mutate the session. Gravity is delivered as a `MoveDown` in
/// the command stream returned by [`Host::poll_commands`].
pub trait Host {
    /// Append every command received since the last poll, in arrival order.
    fn poll_commands(&mut self, commands: &mut Vec<Command>) -> Result<()>;

    /// Deliver a `MoveDown` every `interval` from now on.
    fn schedule_gravity_tick(&mut self, interval: Duration) -> Result<()>;

    fn sleep(&mut self, duration: Duration) -> Result<()>;

    fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()>;

    fn show_instructions(&mut self) -> Result<()>;

    fn show_paused(&mut self, snapshot: &GameSnapshot) -> Result<()>;

    /// Final score screen with the restart and quit options.
    fn draw_game_over(&mut self, snapshot: &GameSnapshot) -> Result<()>;

    /// The loop has ended.
    fn quit(&mut self) -> Result<()>;
}
