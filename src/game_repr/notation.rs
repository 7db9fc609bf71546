use crate::error::MoveParseError;

use super::*;

/// Origin, destination and requested promotion read from coordinate input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Type>,
}

/// Reads `e2e4`, `e2-e4`, `e2 e4` or `e7e8q`
pub fn parse_coordinate_move(input: &str) -> Result<CoordinateMove, MoveParseError> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if compact.len() < 4 || !compact.is_ascii() {
        return Err(MoveParseError::TooShort(input.to_string()));
    }

    let from: Square = compact[0..2].parse()?;
    let to: Square = compact[2..4].parse()?;
    let promotion = match compact[4..].chars().next() {
        None => None,
        Some(c) => Some(Type::from_promotion_char(c).ok_or(MoveParseError::InvalidPromotion(c))?),
    };

    Ok(CoordinateMove { from, to, promotion })
}

impl Position {
    /// Standard algebraic notation for a legal move in this position
    pub fn san(&self, mv: Move) -> String {
        let from = mv.from();
        let to = mv.to();
        let Some(piece) = self.position[from.index()] else {
            return mv.to_string();
        };

        let mut san = String::new();
        if mv.move_type() == MoveType::Castling {
            san.push_str(if to.file() > from.file() { "O-O" } else { "O-O-O" });
        } else {
            match piece.piece_type.letter() {
                Some(letter) => {
                    san.push(letter);
                    san.push_str(&self.disambiguation(mv, piece));
                }
                None if mv.is_capture() => san.push((b'a' + from.file()) as char),
                None => {}
            }
            if mv.is_capture() {
                san.push('x');
            }
            san.push_str(&to.to_string());
            if mv.is_promotion() {
                san.push_str("=Q");
            }
        }

        if mv.is_check() {
            let mut after = self.clone();
            after.play(mv);
            san.push(if after.is_mate() { '#' } else { '+' });
        }
        san
    }

    /// File, rank or both, when another piece of the same kind can reach `to`
    fn disambiguation(&self, mv: Move, piece: Piece) -> String {
        let rivals: Vec<Square> = self
            .all_legal_moves()
            .into_iter()
            .filter(|other| other.to() == mv.to() && other.from() != mv.from())
            .filter(|other| self.position[other.from().index()] == Some(piece))
            .map(|other| other.from())
            .collect();

        if rivals.is_empty() {
            return String::new();
        }

        let from = mv.from();
        let file = (b'a' + from.file()) as char;
        let rank = (b'1' + from.rank()) as char;
        if rivals.iter().all(|sq| sq.file() != from.file()) {
            file.to_string()
        } else if rivals.iter().all(|sq| sq.rank() != from.rank()) {
            rank.to_string()
        } else {
            from.to_string()
        }
    }
}
