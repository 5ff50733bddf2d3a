//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::shapes::layout;
use crate::core::Point;
use crate::engine::{GameSnapshot, Phase};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::ShapeKind;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Top-left corner and outer size of the bordered well.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        let board_w = clamp_u16(snap.width) * self.cell_w;
        let board_h = clamp_u16(snap.height) * self.cell_h;
        let frame = Frame {
            x: viewport.width.saturating_sub(board_w + 2) / 2,
            y: viewport.height.saturating_sub(board_h + 2) / 2,
            w: board_w + 2,
            h: board_h + 2,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        fb.fill_rect(frame.x + 1, frame.y + 1, board_w, board_h, ' ', CellStyle::new(WELL_BG, WELL_BG));
        draw_border(fb, frame, border);

        // Settled cells; the active piece is part of the board already.
        for row in 0..snap.height {
            for col in 0..snap.width {
                match snap.cell(row, col).and_then(ShapeKind::from_id) {
                    Some(kind) => self.fill_cell(fb, frame, row, col, '█', shape_style(kind)),
                    None => self.fill_cell(
                        fb,
                        frame,
                        row,
                        col,
                        '·',
                        CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim(),
                    ),
                }
            }
        }

        if let Some(active) = snap.active {
            let ghost = CellStyle::new(Rgb::new(140, 140, 140), WELL_BG).dim();
            for p in active.preview {
                if let Some((row, col)) = visible(snap, p) {
                    if snap.is_empty_at(row, col) {
                        self.fill_cell(fb, frame, row, col, '░', ghost);
                    }
                }
            }
            for p in active.cells {
                if let Some((row, col)) = visible(snap, p) {
                    self.fill_cell(fb, frame, row, col, '█', shape_style(active.kind).bold());
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.phase {
            Phase::Paused => draw_overlay(fb, frame, &["PAUSED", "p to resume"]),
            Phase::GameOver => {
                let score = format!("Score {}", snap.score);
                let lines = format!("Lines {}", snap.lines);
                let level = format!("Level {}", snap.level);
                draw_overlay(
                    fb,
                    frame,
                    &["GAME OVER", "", &score, &lines, &level, "", "r restart", "q quit"],
                );
            }
            Phase::Spawning | Phase::Falling => {}
        }
    }

    /// Paint a full-screen text page, one line per row, centred as a block.
    pub fn render_help(&self, text: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let label = CellStyle::default().bold();
        let body = CellStyle::default();

        let lines: Vec<&str> = text.lines().collect();
        let block_w = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let x = viewport.width.saturating_sub(clamp_u16(block_w)) / 2;
        let top = viewport.height.saturating_sub(clamp_u16(lines.len() + 2)) / 2;

        for (i, line) in lines.iter().enumerate() {
            let style = if i == 0 { label } else { body };
            fb.put_str(x, top.saturating_add(clamp_u16(i)), line, style);
        }
        fb.put_str(
            x,
            top.saturating_add(clamp_u16(lines.len() + 1)),
            "Press any key to continue",
            body.dim(),
        );
        fb
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, row: usize, col: usize, ch: char, style: CellStyle) {
        let px = frame.x + 1 + clamp_u16(col) * self.cell_w;
        let py = frame.y + 1 + clamp_u16(row) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = frame.y;
        for (name, number) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), number, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let (cells, _) = layout(snap.next, Point::new(0, 0));
        let min_x = cells.iter().map(|p| p.x).min().unwrap_or(0);
        for p in cells {
            let px = panel_x.saturating_add(clamp_u16((p.x - min_x) as usize) * 2);
            let py = y.saturating_add(clamp_u16(p.y as usize));
            fb.put_str(px, py, "██", shape_style(snap.next));
        }
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "STATS", label);
        y = y.saturating_add(1);
        for kind in ShapeKind::ALL {
            if y >= viewport.height {
                break;
            }
            fb.put_char(panel_x, y, kind.letter(), shape_style(kind));
            fb.put_u32(panel_x + 2, y, snap.stats.count(kind), value);
            let pct = snap.stats.share_percent(kind).round() as u32;
            let pct_x = panel_x + 7;
            fb.put_u32(pct_x, y, pct, value.dim());
            fb.put_char(pct_x + digits(pct), y, '%', value.dim());
            y = y.saturating_add(1);
        }
    }
}

fn visible(snap: &GameSnapshot, p: Point) -> Option<(usize, usize)> {
    let row = usize::try_from(p.y).ok()?;
    let col = usize::try_from(p.x).ok()?;
    (row < snap.height && col < snap.width).then_some((row, col))
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay(fb: &mut FrameBuffer, frame: Frame, lines: &[&str]) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    let top = frame
        .y
        .saturating_add(frame.h / 2)
        .saturating_sub(clamp_u16(lines.len()) / 2);
    for (i, line) in lines.iter().enumerate() {
        if !line.is_empty() {
            fb.put_str_centered(frame.x, frame.w, top.saturating_add(clamp_u16(i)), line, style);
        }
    }
}

fn shape_style(kind: ShapeKind) -> CellStyle {
    let fg = match kind {
        ShapeKind::I => Rgb::new(80, 220, 220),
        ShapeKind::J => Rgb::new(80, 120, 220),
        ShapeKind::L => Rgb::new(255, 165, 0),
        ShapeKind::O => Rgb::new(240, 220, 80),
        ShapeKind::S => Rgb::new(100, 220, 120),
        ShapeKind::T => Rgb::new(200, 120, 220),
        ShapeKind::Z => Rgb::new(220, 80, 80),
    };
    CellStyle::new(fg, WELL_BG)
}

fn digits(n: u32) -> u16 {
    match n {
        0..=9 => 1,
        10..=99 => 2,
        _ => 3,
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardConfig;
    use crate::engine::Session;
    use crate::types::Command;

    fn screen(fb: &FrameBuffer) -> Vec<String> {
        (0..fb.height()).map(|y| fb.row_text(y)).collect()
    }

    fn started(seed: u64) -> Session {
        let mut s = Session::with_seed(BoardConfig::default(), seed);
        s.start();
        s
    }

    #[test]
    fn well_is_framed_and_centred() {
        let snap = started(1).snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));
        let rows = screen(&fb);

        // 10 cells * 2 columns + 2 border columns, 20 rows + 2 border rows.
        let top = &rows[1];
        let left = top.find('┌').unwrap();
        assert_eq!(top.chars().filter(|&c| c == '─').count(), 20);
        assert_eq!(left, (80 - 22) / 2);
        assert!(rows[22].contains('└'));
    }

    #[test]
    fn side_panel_shows_labels_next_and_stats() {
        let snap = started(2).snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(80, 30));
        let text = screen(&fb).join("\n");
        for label in ["SCORE", "LEVEL", "LINES", "NEXT", "STATS"] {
            assert!(text.contains(label), "missing {label}");
        }
        // One spawned piece so far: its letter shows 100%.
        let kind = snap.active.unwrap().kind;
        let stat_row = screen(&fb)
            .into_iter()
            .find(|row| row.contains(&format!("{} 1    100%", kind.letter())));
        assert!(stat_row.is_some(), "{text}");
    }

    #[test]
    fn landing_preview_is_drawn_at_the_bottom() {
        let snap = started(3).snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));
        let rows = screen(&fb);
        // Bottom visible row sits just above the bottom border.
        assert!(rows[21].contains("░░"));
    }

    #[test]
    fn paused_overlay() {
        let mut s = started(4);
        s.apply(Command::Pause);
        let fb = GameView::default().render(&s.snapshot(), Viewport::new(80, 24));
        assert!(screen(&fb).iter().any(|row| row.contains("PAUSED")));
    }

    #[test]
    fn game_over_overlay_shows_final_numbers() {
        let mut s = started(5);
        while s.phase() != Phase::GameOver {
            s.apply(Command::HardDrop);
        }
        let fb = GameView::default().render(&s.snapshot(), Viewport::new(80, 24));
        let text = screen(&fb).join("\n");
        assert!(text.contains("GAME OVER"));
        assert!(text.contains(&format!("Score {}", s.score())));
        assert!(text.contains("r restart"));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = started(6).snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }

    #[test]
    fn help_page_lists_every_line() {
        let text = "How to play:\n  L left\n  R right";
        let fb = GameView::default().render_help(text, Viewport::new(40, 10));
        let rows = screen(&fb).join("\n");
        assert!(rows.contains("How to play:"));
        assert!(rows.contains("L left"));
        assert!(rows.contains("Press any key"));
    }
}
