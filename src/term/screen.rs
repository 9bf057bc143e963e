//! Terminal screen - fixed 80x24 layout drawn with crossterm
//!
//! The play field, preview box and score panel live at fixed positions;
//! every draw call repaints only its own region and flushes once, so
//! the two gameplay actors can interleave draws without tearing. All
//! blocking prompts filter key releases and swallow everything else.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{ensure, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::{get_shape, Board, FallingPiece, GameScore};
use crate::types::{
    Cell, EndReason, PieceKind, QuitChoice, Rotation, BOARD_HEIGHT, BOARD_WIDTH,
};
use crate::ui::GameUi;

/// Minimum terminal size for the fixed layout
const SCREEN_W: u16 = 80;
const SCREEN_H: u16 = 24;

/// Play field box; the interior starts one cell in
const BOARD_BOX_X: u16 = 13;
const BOARD_BOX_Y: u16 = 1;
const BOARD_BOX_W: u16 = BOARD_WIDTH as u16 * 2 + 2;
const BOARD_BOX_H: u16 = BOARD_HEIGHT as u16 + 2;
const BOARD_ORIGIN_X: u16 = BOARD_BOX_X + 1;
const BOARD_ORIGIN_Y: u16 = BOARD_BOX_Y + 1;

/// Preview box holds a full 4x4 shape bounding box
const NEXT_BOX_X: u16 = 45;
const NEXT_BOX_Y: u16 = 3;
const NEXT_BOX_W: u16 = 4 * 2 + 2;
const NEXT_BOX_H: u16 = 4 + 2;

/// Score panel column and first row
const PANEL_X: u16 = 45;
const PANEL_Y: u16 = 11;

/// Banner rows inside the play field box
const BANNER_ROW: u16 = 10;
const DETAIL_ROW: u16 = 12;
const PROMPT_ROW: u16 = 14;

/// Milliseconds each swept cell stays blank during the clear animation
const SWEEP_STEP_MS: u64 = 12;

/// Crossterm-backed implementation of [`GameUi`]
pub struct TerminalScreen {
    out: io::Stdout,
    colors: bool,
    /// Alternation state for the row-clear sweep direction
    sweep_left: bool,
}

impl TerminalScreen {
    pub fn new(colors: bool) -> Self {
        Self {
            out: io::stdout(),
            colors,
            sweep_left: false,
        }
    }

    /// Switch to raw mode on the alternate screen. The layout needs a
    /// terminal of at least 80x24.
    pub fn enter(&mut self) -> Result<()> {
        let (w, h) = terminal::size()?;
        ensure!(
            w >= SCREEN_W && h >= SCREEN_H,
            "terminal too small: need {SCREEN_W}x{SCREEN_H}, have {w}x{h}"
        );
        terminal::enable_raw_mode()?;
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.flush()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call after a failed enter.
    pub fn exit(&mut self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Clear the screen and draw everything that never changes: the
    /// outer frame, the play field box, the preview box and the help
    /// column.
    pub fn draw_chrome(&mut self) -> Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;

        self.draw_box(0, 0, SCREEN_W, SCREEN_H)?;
        self.put_centered(0, SCREEN_W, 0, " T E T R I Z ")?;

        self.draw_box(BOARD_BOX_X, BOARD_BOX_Y, BOARD_BOX_W, BOARD_BOX_H)?;
        self.draw_box(NEXT_BOX_X, NEXT_BOX_Y, NEXT_BOX_W, NEXT_BOX_H)?;
        self.put(NEXT_BOX_X + 1, NEXT_BOX_Y - 1, "NEXT")?;

        let help_y = PANEL_Y + 7;
        for (i, line) in [
            "MOVE    < > / A D",
            "DOWN    v / S",
            "DROP    ^ / W",
            "ROTATE  J K / Z X",
            "PAUSE   ESC / P / Q",
        ]
        .iter()
        .enumerate()
        {
            self.put(PANEL_X, help_y + i as u16, line)?;
        }

        self.out.flush()?;
        Ok(())
    }

    /// Start prompt. Returns false when the player backs out.
    pub fn ready_prompt(&mut self) -> Result<bool> {
        self.put_banner(BANNER_ROW, " READY? ")?;
        self.put_centered(BOARD_BOX_X, BOARD_BOX_W, DETAIL_ROW, "press any key to start")?;
        self.out.flush()?;

        let key = self.wait_key()?;
        let declined = matches!(key, KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N'));
        Ok(!declined)
    }

    /// Post-game prompt. Returns true to start another session.
    pub fn play_again_prompt(&mut self) -> Result<bool> {
        self.put_centered(BOARD_BOX_X, BOARD_BOX_W, PROMPT_ROW, "play again? (y/n)")?;
        self.out.flush()?;

        loop {
            match self.wait_key()? {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter | KeyCode::Char(' ') => {
                    return Ok(true)
                }
                KeyCode::Char('n')
                | KeyCode::Char('N')
                | KeyCode::Char('q')
                | KeyCode::Char('Q')
                | KeyCode::Esc => return Ok(false),
                _ => {}
            }
        }
    }

    /// Next key press, releases filtered out
    fn wait_key(&mut self) -> Result<KeyCode> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    return Ok(key.code);
                }
            }
        }
    }

    fn put(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    /// Print centered within a horizontal span starting at `x`
    fn put_centered(&mut self, x: u16, width: u16, y: u16, text: &str) -> Result<()> {
        self.put(x + centered_offset(width, text), y, text)
    }

    /// Reverse-video banner centered in the play field box
    fn put_banner(&mut self, row: u16, text: &str) -> Result<()> {
        self.out.queue(SetAttribute(Attribute::Reverse))?;
        self.put_centered(BOARD_BOX_X, BOARD_BOX_W, row, text)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    fn draw_box(&mut self, x: u16, y: u16, w: u16, h: u16) -> Result<()> {
        self.put(x, y, "┌")?;
        self.put(x + w - 1, y, "┐")?;
        self.put(x, y + h - 1, "└")?;
        self.put(x + w - 1, y + h - 1, "┘")?;
        for dx in 1..w - 1 {
            self.put(x + dx, y, "─")?;
            self.put(x + dx, y + h - 1, "─")?;
        }
        for dy in 1..h - 1 {
            self.put(x, y + dy, "│")?;
            self.put(x + w - 1, y + dy, "│")?;
        }
        Ok(())
    }

    /// Paint one board cell (two columns wide) at interior (x, y)
    fn put_cell(&mut self, x: u16, y: u16, kind: Option<PieceKind>) -> Result<()> {
        self.out
            .queue(cursor::MoveTo(BOARD_ORIGIN_X + x * 2, BOARD_ORIGIN_Y + y))?;
        match kind {
            Some(kind) => {
                if self.colors {
                    self.out.queue(SetForegroundColor(piece_color(kind)))?;
                    self.out.queue(Print("██"))?;
                    self.out.queue(ResetColor)?;
                } else {
                    self.out.queue(Print("██"))?;
                }
            }
            None => {
                self.out.queue(Print("  "))?;
            }
        }
        Ok(())
    }

    fn draw_quit_dialog(&mut self, choice: QuitChoice) -> Result<()> {
        self.put_banner(BANNER_ROW - 1, " PAUSED ")?;
        self.put_centered(BOARD_BOX_X, BOARD_BOX_W, BANNER_ROW + 1, "quit the game?")?;

        let y = DETAIL_ROW + 1;
        let quit_x = BOARD_BOX_X + 5;
        let resume_x = BOARD_BOX_X + 14;
        if choice == QuitChoice::Quit {
            self.out.queue(SetAttribute(Attribute::Reverse))?;
            self.put(quit_x, y, " QUIT ")?;
            self.out.queue(SetAttribute(Attribute::Reset))?;
            self.put(resume_x, y, " RESUME ")?;
        } else {
            self.put(quit_x, y, " QUIT ")?;
            self.out.queue(SetAttribute(Attribute::Reverse))?;
            self.put(resume_x, y, " RESUME ")?;
            self.out.queue(SetAttribute(Attribute::Reset))?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl GameUi for TerminalScreen {
    fn draw_board(&mut self, board: &Board, piece: Option<&FallingPiece>) -> Result<()> {
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                let kind = match board.get(x, y) {
                    Some(Cell::Block(kind)) => Some(kind),
                    _ => None,
                };
                self.put_cell(x as u16, y as u16, kind)?;
            }
        }
        if let Some(piece) = piece {
            for (x, y) in piece.cells() {
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    self.put_cell(x as u16, y as u16, Some(piece.kind))?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn draw_next_piece(&mut self, kind: PieceKind, rotation: Rotation) -> Result<()> {
        let shape = get_shape(kind, rotation);
        for dy in 0..4u16 {
            for dx in 0..4u16 {
                let filled = shape
                    .iter()
                    .any(|&(sx, sy)| sx == dx as i8 && sy == dy as i8);
                self.out.queue(cursor::MoveTo(
                    NEXT_BOX_X + 1 + dx * 2,
                    NEXT_BOX_Y + 1 + dy,
                ))?;
                if filled {
                    if self.colors {
                        self.out.queue(SetForegroundColor(piece_color(kind)))?;
                        self.out.queue(Print("██"))?;
                        self.out.queue(ResetColor)?;
                    } else {
                        self.out.queue(Print("██"))?;
                    }
                } else {
                    self.out.queue(Print("  "))?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn draw_score(&mut self, score: &GameScore) -> Result<()> {
        let lines = [
            format!("{:<11}{:>8}", "SCORE", score.score),
            format!("{:<11}{:>8}", "HIGH SCORE", score.high_score),
            format!("{:<11}{:>8}", "LEVEL", score.level),
            format!("{:<11}{:>8}", "ROWS", score.rows_this_level),
            format!("{:<11}{:>8}", "TOTAL ROWS", score.total_rows),
        ];
        for (i, line) in lines.iter().enumerate() {
            self.put(PANEL_X, PANEL_Y + i as u16, line)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn draw_level_banner(&mut self, level: u32) -> Result<()> {
        self.put_banner(BANNER_ROW, &format!(" LEVEL {level} "))?;
        self.out.flush()?;
        // Held on screen briefly; the next board draw erases it.
        thread::sleep(Duration::from_millis(600));
        Ok(())
    }

    fn draw_row_clear(&mut self, rows: &[usize]) -> Result<()> {
        self.sweep_left = !self.sweep_left;
        let columns: Vec<u16> = if self.sweep_left {
            (0..BOARD_WIDTH as u16).rev().collect()
        } else {
            (0..BOARD_WIDTH as u16).collect()
        };
        for x in columns {
            for &row in rows {
                self.put_cell(x, row as u16, None)?;
            }
            self.out.flush()?;
            thread::sleep(Duration::from_millis(SWEEP_STEP_MS));
        }
        Ok(())
    }

    fn confirm_quit(&mut self) -> Result<QuitChoice> {
        let mut choice = QuitChoice::Resume;
        self.draw_quit_dialog(choice)?;

        loop {
            match self.wait_key()? {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                    choice = match choice {
                        QuitChoice::Quit => QuitChoice::Resume,
                        QuitChoice::Resume => QuitChoice::Quit,
                    };
                    self.draw_quit_dialog(choice)?;
                }
                KeyCode::Enter | KeyCode::Char(' ') => return Ok(choice),
                KeyCode::Esc => return Ok(QuitChoice::Resume),
                _ => {}
            }
        }
    }

    fn draw_game_over(&mut self, reason: EndReason) -> Result<()> {
        let text = match reason {
            EndReason::ToppedOut => " GAME OVER ",
            EndReason::UserQuit => " THANK YOU ",
        };
        self.put_banner(BANNER_ROW, text)?;
        self.out.flush()?;
        Ok(())
    }

    fn draw_high_score(&mut self, value: u32) -> Result<()> {
        self.put_banner(DETAIL_ROW, &format!(" NEW HIGH SCORE {value} "))?;
        self.out.flush()?;
        Ok(())
    }
}

fn piece_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::O => Color::Yellow,
        PieceKind::I => Color::Cyan,
        PieceKind::T => Color::Magenta,
        PieceKind::Z => Color::Red,
        PieceKind::S => Color::Green,
        PieceKind::L => Color::DarkYellow,
        PieceKind::J => Color::Blue,
    }
}

/// Column offset that centers `text` within `width`
fn centered_offset(width: u16, text: &str) -> u16 {
    let len = text.chars().count() as u16;
    width.saturating_sub(len) / 2
}
