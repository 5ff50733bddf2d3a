//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame and every frame after a size change are full redraws.
//! Otherwise only runs of changed glyphs are written.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::game_view::Viewport;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    active: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
            active: false,
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.active = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        Ok(())
    }

    /// Current terminal size.
    pub fn viewport(&self) -> Result<Viewport> {
        let (width, height) = terminal::size().context("query terminal size")?;
        Ok(Viewport::new(width, height))
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The caller keeps one `FrameBuffer` and passes it every frame; after the
    /// call it holds the previous frame and can be redrawn into.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf).context("write to terminal")?;
        self.stdout.flush().context("flush terminal")?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Queues glyphs, switching style only when it changes.
struct GlyphWriter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> GlyphWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn glyph(&mut self, glyph: Glyph) -> Result<()> {
        if self.style != Some(glyph.style) {
            let style = glyph.style;
            self.out.queue(SetAttribute(Attribute::Reset))?;
            self.out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
            self.out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
            if style.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.style = Some(style);
        }
        self.out.queue(Print(glyph.ch))?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Clear the screen and write every glyph of `fb`.
fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut w = GlyphWriter::new(out);
    for y in 0..fb.height() {
        w.move_to(0, y)?;
        for x in 0..fb.width() {
            w.glyph(fb.get(x, y).unwrap_or_default())?;
        }
    }
    w.finish()
}

/// Write only the glyphs of `next` that differ from `prev`. Both frames have
/// the same size. A cursor move is emitted at the start of each changed run.
fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut w = GlyphWriter::new(out);
    for y in 0..next.height() {
        let mut in_run = false;
        for x in 0..next.width() {
            let glyph = next.get(x, y).unwrap_or_default();
            if prev.get(x, y) == Some(glyph) {
                in_run = false;
                continue;
            }
            if !in_run {
                w.move_to(x, y)?;
                in_run = true;
            }
            w.glyph(glyph)?;
        }
    }
    w.finish()
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diff(a: &FrameBuffer, b: &FrameBuffer) -> String {
        let mut out = Vec::new();
        encode_diff_into(a, b, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// Number of cursor moves (`ESC [ row ; col H`) in an encoded frame.
    fn moves(encoded: &str) -> usize {
        encoded
            .split('\x1b')
            .filter_map(|seq| seq.strip_prefix('['))
            .filter(|params| params.chars().find(char::is_ascii_alphabetic) == Some('H'))
            .count()
    }

    #[test]
    fn adjacent_changes_share_one_cursor_move() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(5, 1);
        let mut b = FrameBuffer::new(5, 1);
        b.put_str(1, 0, "XYZ", style);

        let encoded = diff(&a, &b);
        assert!(encoded.contains("XYZ"));
        assert_eq!(moves(&encoded), 1);
        assert!(encoded.contains("\x1b[1;2H"));
    }

    #[test]
    fn separate_changes_move_the_cursor_each_time() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = a.clone();
        b.put_char(0, 0, 'A', style);
        b.put_char(5, 0, 'B', style);
        b.put_char(2, 1, 'C', style.dim());

        let encoded = diff(&a, &b);
        assert_eq!(moves(&encoded), 3);
        assert!(encoded.contains("\x1b[2;3H"));
    }

    #[test]
    fn identical_frames_encode_no_glyphs() {
        let fb = FrameBuffer::new(4, 4);
        let encoded = diff(&fb, &fb);
        assert_eq!(moves(&encoded), 0);
        assert!(!encoded.contains(' '));

        let mut full = Vec::new();
        encode_full_into(&fb, &mut full).unwrap();
        let full = String::from_utf8(full).unwrap();
        assert_eq!(full.matches(' ').count(), 16);
        assert_eq!(moves(&full), 4);
    }

    #[test]
    fn rgb_maps_to_truecolor() {
        assert_eq!(
            rgb_to_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
