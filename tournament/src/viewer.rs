use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use cozy_chess::{Color, File, Piece, Rank, Square};
use utils::Position;

/// Live display of a game in progress.
pub trait Viewer {
    /// Called after every ply.
    fn update(&mut self, position: &Position);

    /// Polled once per ply. When set the current game stops and no new game starts.
    fn quit_requested(&self) -> bool;
}

/// Prints the board after every ply. The quit flag is shared with a signal handler.
pub struct TerminalViewer<W: Write> {
    out: W,
    quit: Arc<AtomicBool>,
}

impl<W: Write> TerminalViewer<W> {
    pub fn new(out: W, quit: Arc<AtomicBool>) -> Self {
        Self { out, quit }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Viewer for TerminalViewer<W> {
    fn update(&mut self, position: &Position) {
        let frame = format!("{}\n{}\n", render_board(position), position.fen());
        if let Err(e) = self.out.write_all(frame.as_bytes()).and_then(|_| self.out.flush()) {
            log::warn!("Failed to draw board: {}", e);
        }
    }

    fn quit_requested(&self) -> bool {
        self.quit.load(Ordering::Relaxed)
    }
}

/// Eight lines, rank 8 first, uppercase for White and `.` for empty squares.
pub fn render_board(position: &Position) -> String {
    let board = position.board();
    let mut text = String::with_capacity(8 * 9);

    for rank in Rank::ALL.iter().rev() {
        for file in File::ALL {
            let square = Square::new(file, *rank);
            let symbol = match (board.piece_on(square), board.color_on(square)) {
                (Some(piece), Some(color)) => piece_symbol(piece, color),
                _ => '.',
            };
            text.push(symbol);
        }
        text.push('\n');
    }
    text
}

fn piece_symbol(piece: Piece, color: Color) -> char {
    let symbol = match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    match color {
        Color::White => symbol.to_ascii_uppercase(),
        Color::Black => symbol,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_start_position() {
        let rendered = render_board(&Position::new());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "rnbqkbnr");
        assert_eq!(lines[4], "........");
        assert_eq!(lines[7], "RNBQKBNR");
    }

    #[test]
    fn test_terminal_viewer_writes_frames() {
        let quit = Arc::new(AtomicBool::new(false));
        let mut viewer = TerminalViewer::new(Vec::new(), quit.clone());

        viewer.update(&Position::new());
        assert!(!viewer.quit_requested());
        quit.store(true, Ordering::Relaxed);
        assert!(viewer.quit_requested());

        let written = String::from_utf8(viewer.into_inner()).unwrap();
        assert!(written.starts_with("rnbqkbnr\n"));
        assert!(written.contains(&Position::new().fen()));
    }
}
