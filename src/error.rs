//! Error types shared across the crate.
//!
//! Rules-engine failures (FEN parsing, coordinate parsing) are reported to the
//! caller. Evaluation and search failures never escape the engine: they are
//! caught at the term or root-move level and replaced by fallback values.

use thiserror::Error;

/// Errors produced while parsing a FEN string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN string is empty")]
    Empty,

    #[error("expected 8 ranks in piece placement, found {0}")]
    RankCount(usize),

    #[error("rank {rank} does not describe exactly 8 squares")]
    RankWidth { rank: usize },

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),

    #[error("invalid side to move '{0}'")]
    InvalidSide(String),

    #[error("invalid castling field '{0}'")]
    InvalidCastling(String),

    #[error("invalid en passant square '{0}'")]
    InvalidEnPassant(String),

    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid square '{0}', expected a file a-h followed by a rank 1-8")]
pub struct SquareParseError(pub String);

/// Errors produced while reading a coordinate move such as `e2e4`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("move '{0}' is too short, expected something like e2e4")]
    TooShort(String),

    #[error(transparent)]
    Square(#[from] SquareParseError),

    #[error("invalid promotion piece '{0}'")]
    InvalidPromotion(char),
}

/// Coordinate input that does not name a legal move
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    Parse(#[from] MoveParseError),

    #[error("{0} is not a legal move here")]
    Illegal(String),
}

/// A position the evaluator refuses to score
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("{color} has {count} kings on the board")]
    KingCount { color: crate::game_repr::Color, count: usize },

    #[error("pawn on back rank square {square}")]
    PawnOnBackRank { square: crate::game_repr::Square },
}

/// Failures inside the recursive search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("rules engine rejected generated move {0}")]
    RejectedMove(crate::game_repr::Move),

    #[error("undo requested with an empty move history")]
    EmptyHistory,
}

/// Errors loading an engine configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {field} = {value}, expected {expected}")]
    Invalid {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
}
