//! Line-prompt host.
//!
//! Each poll prints a prompt and reads one line, re-prompting until the line
//! parses. End of input quits. There is no gravity: the piece only falls on
//! `D` and `DD`.

use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::engine::{GameSnapshot, Host};
use crate::input::{parse_command, INSTRUCTIONS};
use crate::types::{Command, ShapeKind};

pub const PROMPT: &str = "Input a command [L/R/D/DD/U/P/H/N/Q]: ";

pub struct TextHost<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> TextHost<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Host for TextHost<R, W> {
    fn poll_commands(&mut self, commands: &mut Vec<Command>) -> Result<()> {
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush().context("flush prompt")?;

            self.line.clear();
            if self.input.read_line(&mut self.line).context("read command")? == 0 {
                writeln!(self.output)?;
                commands.push(Command::Quit);
                return Ok(());
            }
            match parse_command(&self.line) {
                Ok(command) => {
                    commands.push(command);
                    return Ok(());
                }
                Err(err) => writeln!(self.output, "Invalid input: {err}. Type H for help.")?,
            }
        }
    }

    fn schedule_gravity_tick(&mut self, _interval: Duration) -> Result<()> {
        Ok(())
    }

    fn sleep(&mut self, duration: Duration) -> Result<()> {
        std::thread::sleep(duration);
        Ok(())
    }

    fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.output.write_all(render_text(snapshot).as_bytes())?;
        Ok(())
    }

    fn show_instructions(&mut self) -> Result<()> {
        writeln!(self.output, "{INSTRUCTIONS}\n")?;
        Ok(())
    }

    fn show_paused(&mut self, _snapshot: &GameSnapshot) -> Result<()> {
        writeln!(self.output, "Paused. Type P to resume.")?;
        Ok(())
    }

    fn draw_game_over(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        writeln!(
            self.output,
            "Game over! Score: {}  Lines: {}  Level: {}",
            snapshot.score, snapshot.lines, snapshot.level
        )?;
        writeln!(self.output, "Type N for a new game or Q to quit.")?;
        Ok(())
    }

    fn quit(&mut self) -> Result<()> {
        writeln!(self.output, "Bye.")?;
        self.output.flush().context("flush output")?;
        Ok(())
    }
}

/// Score line, statistics, the well and the next piece as plain text.
pub fn render_text(snap: &GameSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Score: {}  Lines: {}  Level: {}",
        snap.score, snap.lines, snap.level
    );

    out.push_str("Stats:");
    for (kind, count) in ShapeKind::ALL.into_iter().zip(snap.stats.counts()) {
        let _ = write!(
            out,
            " {}={count} ({:.1}%)",
            kind.letter(),
            snap.stats.share_percent(kind)
        );
    }
    out.push('\n');

    let border: String = "-".repeat(snap.width * 2 + 1);
    let _ = writeln!(out, "+{border}+");
    for row in 0..snap.height {
        out.push('|');
        for col in 0..snap.width {
            out.push(' ');
            let ch = snap
                .cell(row, col)
                .and_then(ShapeKind::from_id)
                .map_or('.', ShapeKind::letter);
            out.push(ch);
        }
        out.push_str(" |\n");
    }
    let _ = writeln!(out, "+{border}+");
    let _ = writeln!(out, "Next: {}", snap.next.letter());
    out
}
