//! Full-screen crossterm host.
//!
//! Gravity is a deadline kept here: once it passes, a `MoveDown` is appended
//! to the polled batch after the key commands.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use crate::engine::{GameSnapshot, Host};
use crate::input::{command_for_key, INSTRUCTIONS};
use crate::term::{FrameBuffer, GameView, TerminalRenderer};
use crate::types::Command;

pub struct TerminalHost {
    renderer: TerminalRenderer,
    view: GameView,
    frame: FrameBuffer,
    gravity: Option<Duration>,
    next_tick: Instant,
}

impl Default for TerminalHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalHost {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: GameView::default(),
            frame: FrameBuffer::new(0, 0),
            gravity: None,
            next_tick: Instant::now(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    /// Restore the terminal. Safe to call after [`Host::quit`].
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let viewport = self.renderer.viewport()?;
        self.view.render_into(snapshot, viewport, &mut self.frame);
        self.renderer.draw_swap(&mut self.frame)
    }

    fn restart_gravity_clock(&mut self) {
        if let Some(interval) = self.gravity {
            self.next_tick = Instant::now() + interval;
        }
    }
}

impl Host for TerminalHost {
    fn poll_commands(&mut self, commands: &mut Vec<Command>) -> Result<()> {
        while event::poll(Duration::ZERO).context("poll terminal events")? {
            match event::read().context("read terminal event")? {
                Event::Key(key) => commands.extend(command_for_key(key)),
                Event::Resize(..) => self.renderer.invalidate(),
                _ => {}
            }
        }

        if let Some(interval) = self.gravity {
            let now = Instant::now();
            if now >= self.next_tick {
                commands.push(Command::MoveDown);
                self.next_tick = now + interval;
            }
        }
        Ok(())
    }

    fn schedule_gravity_tick(&mut self, interval: Duration) -> Result<()> {
        self.gravity = Some(interval);
        self.restart_gravity_clock();
        Ok(())
    }

    fn sleep(&mut self, duration: Duration) -> Result<()> {
        std::thread::sleep(duration);
        Ok(())
    }

    fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.present(snapshot)
    }

    /// Blocks until a key is pressed.
    fn show_instructions(&mut self) -> Result<()> {
        let viewport = self.renderer.viewport()?;
        let mut page = self.view.render_help(INSTRUCTIONS, viewport);
        self.renderer.draw_swap(&mut page)?;

        loop {
            if let Event::Key(key) = event::read().context("read terminal event")? {
                if key.kind == KeyEventKind::Press {
                    break;
                }
            }
        }
        // Time spent reading does not count towards the next gravity step.
        self.restart_gravity_clock();
        Ok(())
    }

    fn show_paused(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.present(snapshot)
    }

    fn draw_game_over(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.present(snapshot)
    }

    fn quit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}
