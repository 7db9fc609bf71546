use std::fmt;

use crate::agent::player::GameResult;
use crate::error::{FenError, MoveError};
use crate::game_repr::{parse_coordinate_move, Color, Move, Piece, Position, Rules, Square, Type};

/// Pieces each side starts with, pawns through queens
const STARTING_COUNTS: [(Type, usize); 5] = [
    (Type::Pawn, 8),
    (Type::Knight, 2),
    (Type::Bishop, 2),
    (Type::Rook, 2),
    (Type::Queen, 1),
];

/// Game session: the live position and everything the front end shows about it.
///
/// The orchestrator owns one `Game` and lends it to the players in turn. The
/// computer searches it through the [`Rules`] trait; the human player reads
/// it to list moves and may undo the last move pair.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    start: Position,
    flipped: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_position(Position::default())
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::with_position(Position::from_fen(fen)?))
    }

    fn with_position(position: Position) -> Self {
        Self {
            start: position.clone(),
            position,
            flipped: false,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves()
    }

    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.position
            .legal_moves_from(mv.from())
            .iter()
            .any(|legal| legal.bare() == mv.bare())
    }

    /// Plays `mv` if it is legal, returning it with its capture/check flags
    pub fn make_move(&mut self, mv: Move) -> Option<Move> {
        self.position.make_move(mv)
    }

    /// Resolves coordinate input such as `e2e4` to a legal move without playing it
    pub fn find_move(&self, input: &str) -> Result<Move, MoveError> {
        let coords = parse_coordinate_move(input)?;
        self.position
            .legal_moves_from(coords.from)
            .into_iter()
            .find(|mv| {
                mv.to() == coords.to
                    && (!mv.is_promotion() || matches!(coords.promotion, None | Some(Type::Queen)))
            })
            .ok_or_else(|| MoveError::Illegal(input.trim().to_string()))
    }

    pub fn try_move(&mut self, input: &str) -> Result<Move, MoveError> {
        let mv = self.find_move(input)?;
        self.make_move(mv)
            .ok_or_else(|| MoveError::Illegal(input.trim().to_string()))
    }

    /// Takes back the last two plies so the same side is to move again.
    /// Does nothing when fewer than two plies have been played.
    pub fn undo_move_pair(&mut self) -> bool {
        if self.position.ply_count() < 2 {
            return false;
        }
        self.position.undo_last_move();
        self.position.undo_last_move();
        true
    }

    /// Back to the position the game started from
    pub fn reset(&mut self) {
        self.position = self.start.clone();
    }

    pub fn flipped(&self) -> bool {
        self.flipped
    }

    pub fn set_flipped(&mut self, flipped: bool) {
        self.flipped = flipped;
    }

    /// `e2 to e4`, or `None` before the first move
    pub fn last_move_text(&self) -> String {
        match self.position.last_move() {
            Some(mv) => format!("{} to {}", mv.from(), mv.to()),
            None => "None".to_string(),
        }
    }

    /// Pieces missing from a full starting set, per capturing side
    pub fn captured_pieces(&self) -> CapturedPieces {
        let mut counts = [[0usize; 6]; 2];
        for (_, piece) in self.position.pieces() {
            counts[piece.color.index()][piece.piece_type as usize] += 1;
        }

        let missing = |color: Color| {
            let mut pieces = Vec::new();
            for (piece_type, start) in STARTING_COUNTS {
                let on_board = counts[color.index()][piece_type as usize];
                let taken = start.saturating_sub(on_board);
                pieces.extend(std::iter::repeat(Piece::new(color, piece_type)).take(taken));
            }
            pieces
        };

        CapturedPieces {
            by_white: missing(Color::Black),
            by_black: missing(Color::White),
        }
    }

    /// Final result, or `None` while the game goes on
    pub fn result(&self) -> Option<GameResult> {
        if self.position.is_checkmate() {
            Some(GameResult::from_winner(self.side_to_move().opposite()))
        } else if self.position.is_stalemate() {
            Some(GameResult::Stalemate)
        } else if self.position.is_draw() {
            Some(GameResult::Draw)
        } else {
            None
        }
    }

    /// One-line status: whose turn, check, or the final result
    pub fn status(&self) -> String {
        let to_move = self.side_to_move();
        if self.position.is_checkmate() {
            return format!("Game over, {} wins by checkmate!", to_move.opposite());
        }
        if self.position.is_draw() {
            return "Game over, drawn position".to_string();
        }

        let mut status = match to_move {
            Color::White => "Your turn (white)".to_string(),
            Color::Black => "Computer thinking...".to_string(),
        };
        if self.position.is_in_check() {
            status.push_str(match to_move {
                Color::White => ", You are in check!",
                Color::Black => ", Computer is in check!",
            });
        }
        status
    }

    /// Text board with Unicode pieces and coordinates, white at the bottom
    /// unless the board is flipped
    pub fn render(&self) -> String {
        let ranks: Vec<u8> = if self.flipped {
            (0..8).collect()
        } else {
            (0..8).rev().collect()
        };
        let files: Vec<u8> = if self.flipped {
            (0..8).rev().collect()
        } else {
            (0..8).collect()
        };

        let labels: String = files
            .iter()
            .map(|&file| format!(" {}", (b'a' + file) as char))
            .collect();

        let mut out = format!(" {}\n", labels);
        for &rank in &ranks {
            out.push_str(&format!("{}", rank + 1));
            for &file in &files {
                let glyph = self
                    .position
                    .piece_at(Square::from_coords(file, rank))
                    .map_or('·', Piece::symbol);
                out.push(' ');
                out.push(glyph);
            }
            out.push_str(&format!(" {}\n", rank + 1));
        }
        out.push_str(&format!(" {}\n", labels));
        out
    }
}

/// Captured material, shown with the captured side's glyphs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    /// Black pieces white has taken
    pub by_white: Vec<Piece>,
    /// White pieces black has taken
    pub by_black: Vec<Piece>,
}

impl fmt::Display for CapturedPieces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn glyphs(pieces: &[Piece]) -> String {
            if pieces.is_empty() {
                "None".to_string()
            } else {
                pieces.iter().map(|p| p.symbol()).collect()
            }
        }
        write!(
            f,
            "White captured: {} | Black captured: {}",
            glyphs(&self.by_white),
            glyphs(&self.by_black)
        )
    }
}
