//! Run loop - drives a [`Session`] from a [`Host`]
//!
//! Each iteration polls one batch of commands, applies them in order, then
//! redraws once. Commands that follow a freeze in the same batch go to the
//! newly spawned piece.

use std::time::Duration;

use anyhow::Result;
use rand::Rng;

use term_tetris_core::fall_interval_ms;

use crate::host::Host;
use crate::session::{Phase, Response, Session};
use crate::snapshot::GameSnapshot;
use crate::types::{Command, GAME_OVER_DELAY_MS, LOOP_SLEEP_MS};

/// Gravity interval for `level`.
pub fn gravity_interval(level: u32) -> Duration {
    Duration::from_millis(u64::from(fall_interval_ms(level)))
}

/// Play until the host delivers `Quit`.
pub fn run<R, H>(session: &mut Session<R>, host: &mut H) -> Result<()>
where
    R: Rng,
    H: Host + ?Sized,
{
    host.show_instructions()?;
    session.start();
    host.schedule_gravity_tick(gravity_interval(session.level()))?;

    let mut snapshot = GameSnapshot::default();
    let mut was_over = false;
    present(session, host, &mut snapshot, &mut was_over)?;

    let mut batch: Vec<Command> = Vec::with_capacity(8);
    loop {
        batch.clear();
        host.poll_commands(&mut batch)?;
        if batch.is_empty() {
            host.sleep(Duration::from_millis(LOOP_SLEEP_MS))?;
            continue;
        }

        let mut reschedule = false;
        for &command in &batch {
            match session.apply(command) {
                Response::Quit => return host.quit(),
                Response::Help => host.show_instructions()?,
                Response::Froze(report) if report.leveled_up => reschedule = true,
                Response::Restarted => reschedule = true,
                _ => {}
            }
        }
        if reschedule {
            host.schedule_gravity_tick(gravity_interval(session.level()))?;
        }

        present(session, host, &mut snapshot, &mut was_over)?;
    }
}

fn present<R, H>(
    session: &Session<R>,
    host: &mut H,
    snapshot: &mut GameSnapshot,
    was_over: &mut bool,
) -> Result<()>
where
    R: Rng,
    H: Host + ?Sized,
{
    session.snapshot_into(snapshot);
    let over = session.phase() == Phase::GameOver;
    match session.phase() {
        Phase::GameOver if !*was_over => {
            host.draw(snapshot)?;
            host.sleep(Duration::from_millis(GAME_OVER_DELAY_MS))?;
            host.draw_game_over(snapshot)?;
        }
        Phase::GameOver => host.draw_game_over(snapshot)?,
        Phase::Paused => host.show_paused(snapshot)?,
        Phase::Spawning | Phase::Falling => host.draw(snapshot)?,
    }
    *was_over = over;
    Ok(())
}
