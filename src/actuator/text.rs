//! Plain-text presenter for terminals and logs.

use std::fmt::Write as _;
use std::io::Write;

use super::{Actuator, GameSnapshot};

/// Width of one cell, enough for six-digit tiles.
const CELL_WIDTH: usize = 6;

/// Render a snapshot as a text block: status line, then one line per row.
///
/// ```
/// use tile_merge::actuator::{GameSnapshot, Metadata, text::render_text};
/// use tile_merge::grid::Grid;
///
/// let grid = Grid::from_rows(&[vec![2, 0], vec![0, 4]]).unwrap();
/// let text = render_text(&GameSnapshot::capture(&grid, Metadata::default()));
/// assert!(text.starts_with("Score: 0\n"));
/// ```
#[must_use]
pub fn render_text(snapshot: &GameSnapshot) -> String {
    let mut out = String::new();
    let meta = snapshot.metadata;

    let _ = write!(out, "Score: {}", meta.score);
    if meta.won {
        out.push_str("  You win!");
    } else if meta.over {
        out.push_str("  Game over!");
    }
    out.push('\n');

    let size = snapshot.size as i32;
    for y in 0..size {
        for x in 0..size {
            match snapshot.tile_at(x, y) {
                Some(tile) => {
                    let _ = write!(out, "{:>width$}", tile.value, width = CELL_WIDTH);
                }
                None => {
                    let _ = write!(out, "{:>width$}", ".", width = CELL_WIDTH);
                }
            }
        }
        out.push('\n');
    }

    out
}

/// Actuator that writes each frame as text to a writer.
#[derive(Debug)]
pub struct TextActuator<W: Write> {
    out: W,
    frames: usize,
}

impl<W: Write> TextActuator<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Number of frames drawn so far.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Actuator for TextActuator<W> {
    fn actuate(&mut self, snapshot: &GameSnapshot) {
        self.frames += 1;
        let frame = render_text(snapshot);
        if let Err(err) = self.out.write_all(frame.as_bytes()).and_then(|()| self.out.flush()) {
            tracing::warn!(%err, "failed to write frame");
        }
    }

    fn restart(&mut self) {
        if let Err(err) = writeln!(self.out, "Score:") {
            tracing::warn!(%err, "failed to clear score");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actuator::Metadata;
    use crate::grid::Grid;

    #[test]
    fn test_render_layout() {
        let grid = Grid::from_rows(&[vec![2, 0], vec![0, 1024]]).unwrap();
        let snapshot = GameSnapshot::capture(&grid, Metadata { score: 8, over: false, won: false });

        let text = render_text(&snapshot);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Score: 8");
        assert_eq!(lines[1], "     2     .");
        assert_eq!(lines[2], "     .  1024");
    }

    #[test]
    fn test_render_messages() {
        let grid = Grid::new(2);
        let won = GameSnapshot::capture(&grid, Metadata { score: 0, over: false, won: true });
        let over = GameSnapshot::capture(&grid, Metadata { score: 0, over: true, won: false });

        assert!(render_text(&won).contains("You win!"));
        assert!(render_text(&over).contains("Game over!"));
    }

    #[test]
    fn test_actuator_writes_frames() {
        let grid = Grid::from_rows(&[vec![4, 0], vec![0, 0]]).unwrap();
        let mut actuator = TextActuator::new(Vec::new());

        actuator.actuate(&GameSnapshot::capture(&grid, Metadata::default()));
        actuator.restart();

        assert_eq!(actuator.frames(), 1);
        let written = String::from_utf8(actuator.into_inner()).unwrap();
        assert!(written.contains("     4"));
        assert!(written.ends_with("Score:\n"));
    }
}
