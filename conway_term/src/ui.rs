// ui.rs - Draws each generation to the terminal
// The simulation only hands over a Snapshot; nothing here touches its state.

use std::io::{self, Write};

use conway::grid::{ALIVE, DEAD};
use conway::{Outcome, Snapshot};
use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

/// Where generations go once computed.
pub trait Sink {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()>;

    /// Called once when the run stops, however it stopped.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Redraws the whole screen every generation.
pub struct TerminalSink<W: Write> {
    out: W,
    color: bool,
    live_color: Color,
    dead_color: Color,
    cursor_hidden: bool,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            live_color: Color::Rgb { r: 0, g: 200, b: 0 },
            dead_color: Color::DarkGrey,
            cursor_hidden: false,
        }
    }

    fn print_cell(&mut self, alive: bool) -> io::Result<()> {
        let glyph = if alive { ALIVE } else { DEAD };
        if self.color {
            let color = if alive { self.live_color } else { self.dead_color };
            queue!(self.out, SetForegroundColor(color), Print(glyph), ResetColor, Print(' '))
        } else {
            queue!(self.out, Print(glyph), Print(' '))
        }
    }
}

impl<W: Write> Sink for TerminalSink<W> {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        if !self.cursor_hidden {
            queue!(self.out, cursor::Hide)?;
            self.cursor_hidden = true;
        }
        queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        for row in snapshot.grid.rows_iter() {
            for &alive in row {
                self.print_cell(alive)?;
            }
            queue!(self.out, Print("\n"))?;
        }
        for line in status_lines(snapshot) {
            queue!(self.out, Print(line), Print("\n"))?;
        }
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        execute!(self.out, ResetColor, cursor::Show)?;
        self.cursor_hidden = false;
        Ok(())
    }
}

/// Text shown under the grid.
pub fn status_lines(snapshot: &Snapshot<'_>) -> [String; 3] {
    let header = format!(
        "Grid ({}x{}). Generation {}. Press Ctrl+C to exit.",
        snapshot.grid.rows(),
        snapshot.grid.cols(),
        snapshot.generation
    );
    let counters = format!(
        "Pattern: {} | Alive: {} | Births: {} | Deaths: {}",
        snapshot.pattern_name, snapshot.alive_count, snapshot.total_births, snapshot.total_deaths
    );
    let detected_at = snapshot.detected_at.unwrap_or(snapshot.generation);
    let detection = match snapshot.outcome {
        None => "Evolving...".to_string(),
        Some(Outcome::Extinct) => format!("All cells died at generation {detected_at}."),
        Some(Outcome::Looping { period: 1 }) => {
            format!("Still life reached at generation {detected_at}.")
        }
        Some(Outcome::Looping { period }) => {
            format!("Loop detected at generation {detected_at} (period {period}).")
        }
        Some(Outcome::GenerationCap) => format!(
            "Stopped after {} generations without extinction or a loop.",
            snapshot.generation
        ),
    };
    [header, counters, detection]
}
