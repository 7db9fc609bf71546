//! The interface the engine uses to talk to a chess rules implementation.
//!
//! Evaluation, ordering and search are written against [`Rules`] rather than
//! [`Position`] directly, so any move generator that can play and take back
//! moves can drive them. [`Position`] is the implementation shipped with the
//! crate.

use super::*;

pub trait Rules {
    fn side_to_move(&self) -> Color;

    /// All legal moves, annotated with capture and check flags
    fn legal_moves(&self) -> Vec<Move>;

    /// Legal moves starting on `from`; empty for the opponent's pieces
    fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        self.legal_moves()
            .into_iter()
            .filter(|mv| mv.from() == from)
            .collect()
    }

    /// Plays `mv` if it is legal, returning the annotated move; `None` otherwise
    fn make_move(&mut self, mv: Move) -> Option<Move>;

    /// Plays the legal move from `from` to `to`. Promotions always produce a
    /// queen, so any other requested piece is rejected.
    fn make_move_squares(&mut self, from: Square, to: Square, promotion: Option<Type>) -> Option<Move> {
        let mv = self
            .legal_moves_from(from)
            .into_iter()
            .find(|mv| mv.to() == to)?;
        if mv.is_promotion() && !matches!(promotion, None | Some(Type::Queen)) {
            return None;
        }
        self.make_move(mv)
    }

    /// Takes back the last move played, if any
    fn undo_last_move(&mut self) -> Option<Move>;

    fn is_checkmate(&self) -> bool;

    /// Stalemate, insufficient material, fifty-move rule or threefold repetition
    fn is_stalemate_or_draw(&self) -> bool;

    /// Whether the side to move is in check
    fn is_in_check(&self) -> bool;

    fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_stalemate_or_draw()
    }

    fn piece_at(&self, square: Square) -> Option<Piece>;

    fn position_fen(&self) -> String;

    /// Number of `by` pieces attacking `square`, when the implementation can
    /// answer it exactly. `None` makes callers fall back to an approximation.
    fn attackers(&self, _square: Square, _by: Color) -> Option<u32> {
        None
    }
}

impl Rules for Position {
    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    fn legal_moves(&self) -> Vec<Move> {
        self.all_legal_moves().into_vec()
    }

    fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        match self.position[from.index()] {
            Some(piece) if piece.color == self.side_to_move => {
                self.piece_legal_moves(from.index()).into_vec()
            }
            _ => Vec::new(),
        }
    }

    fn make_move(&mut self, mv: Move) -> Option<Move> {
        let legal = self
            .legal_moves_from(mv.from())
            .into_iter()
            .find(|candidate| candidate.bare() == mv.bare())?;
        self.play(legal).then_some(legal)
    }

    fn undo_last_move(&mut self) -> Option<Move> {
        self.take_back()
    }

    fn is_checkmate(&self) -> bool {
        self.is_mate()
    }

    fn is_stalemate_or_draw(&self) -> bool {
        self.is_draw()
    }

    fn is_in_check(&self) -> bool {
        self.king_in_check(self.side_to_move)
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position[square.index()]
    }

    fn position_fen(&self) -> String {
        self.to_fen()
    }

    fn attackers(&self, square: Square, by: Color) -> Option<u32> {
        Some(self.attackers_of(square.index(), by).count_ones())
    }
}
