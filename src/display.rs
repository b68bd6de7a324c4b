//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable snapshot of the
//! simulation.  No game logic is performed; this module only translates
//! percentage coordinates into terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use arcade_shooter::entities::{EntityView, Snapshot};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_DIFFICULTY: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Red;
const C_BULLET: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

/// Screen layout: HUD on row 0, border on rows 1 and `height - 2`, hint on
/// the last row.  The playfield is everything inside the border.
#[derive(Clone, Copy, Debug)]
struct Viewport {
    width: u16,
    height: u16,
}

impl Viewport {
    fn left(&self) -> i32 {
        1
    }
    fn right(&self) -> i32 {
        self.width as i32 - 2
    }
    fn top(&self) -> i32 {
        2
    }
    fn bottom(&self) -> i32 {
        self.height as i32 - 3
    }

    /// Map a percentage position to a cell, or `None` when off the playfield.
    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let span_x = (self.right() - self.left()) as f32;
        let span_y = (self.bottom() - self.top()) as f32;
        let col = self.left() + (x / 100.0 * span_x).round() as i32;
        let row = self.top() + (y / 100.0 * span_y).round() as i32;
        let inside = (self.left()..=self.right()).contains(&col)
            && (self.top()..=self.bottom()).contains(&row);
        inside.then_some((col as u16, row as u16))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    snap: &Snapshot,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let view = Viewport { width, height };
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view)?;
    draw_hud(out, snap, view)?;

    for enemy in &snap.enemies {
        draw_enemy(out, enemy, view)?;
    }
    for bullet in &snap.bullets {
        draw_bullet(out, bullet, view)?;
    }

    draw_player(out, snap, view)?;
    draw_controls_hint(out, view)?;

    if snap.game_over {
        draw_game_over(out, snap, view)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let w = view.width as usize;
    let h = view.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, snap: &Snapshot, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", snap.score)))?;

    let diff_str = format!("Difficulty x{:.1}", snap.difficulty);
    let rx = view
        .width
        .saturating_sub(diff_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_DIFFICULTY))?;
    out.queue(Print(&diff_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, snap: &Snapshot, view: Viewport) -> std::io::Result<()> {
    if let Some((col, row)) = view.cell(snap.player.x, snap.player.y) {
        out.queue(style::SetForegroundColor(C_PLAYER))?;
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("▲"))?;
    }
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &EntityView, view: Viewport) -> std::io::Result<()> {
    // Pre-cull positions can sit off the playfield; those are simply skipped.
    if let Some((col, row)) = view.cell(enemy.x, enemy.y) {
        out.queue(style::SetForegroundColor(C_ENEMY))?;
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("▼"))?;
    }
    Ok(())
}

fn draw_bullet<W: Write>(out: &mut W, bullet: &EntityView, view: Viewport) -> std::io::Result<()> {
    if let Some((col, row)) = view.cell(bullet.x, bullet.y) {
        out.queue(style::SetForegroundColor(C_BULLET))?;
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("║"))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "Arrows / WASD / 8246 : Move   SPACE : Shoot   Q : Quit",
    ))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, snap: &Snapshot, view: Viewport) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", snap.score);

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
    ];

    let cx = view.width / 2;
    let total_rows = lines.len() + 2; // box + score + hint
    let start_row = (view.height / 2).saturating_sub(total_rows as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    let hint = "R - Play Again  Q - Quit";
    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row + 1))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
