// Position evaluation function
// Returns score in pawns (positive = good for white)

use super::piece_square_tables::positional_bonus;
use crate::config::EvalWeights;
use crate::error::EvalError;
use crate::game_repr::bitboards::tables::{KING_OFFSETS, KNIGHT_OFFSETS};
use crate::game_repr::{squares, Color, Piece, Rules, Square, Type};

/// Non-king material (centipawns) below which kings use the endgame table
const ENDGAME_MATERIAL: i32 = 2000;

// Term constants
const DOUBLED_PAWN_PENALTY: f64 = 0.3;
const CASTLED_KING_BONUS: f64 = 0.5;
const CENTRAL_KING_PENALTY: f64 = 0.3;
const CENTER_ATTACK_BONUS: f64 = 0.1;
const CENTER_OCCUPANT_BONUS: f64 = 0.2;
const CENTER_MINOR_BONUS: f64 = 0.1;
const DEVELOPMENT_BONUS: f64 = 0.1;
const MAX_DEVELOPED: u32 = 8;

/// Board contents read once per evaluation
pub type Snapshot = [Option<Piece>; 64];

pub fn snapshot<R: Rules + ?Sized>(rules: &R) -> Snapshot {
    let mut board = [None; 64];
    for square in Square::all() {
        board[square.index()] = rules.piece_at(square);
    }
    board
}

/// Unweighted value of every evaluation term, white's point of view
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Breakdown {
    pub material: f64,
    pub mobility: f64,
    pub pawn_structure: f64,
    pub king_safety: f64,
    pub center_control: f64,
    pub development: f64,
}

impl Breakdown {
    pub fn total(&self, weights: &EvalWeights) -> f64 {
        self.material
            + self.mobility * weights.mobility
            + self.pawn_structure * weights.pawn_structure
            + self.king_safety * weights.king_safety
            + self.center_control * weights.center_control
            + self.development * weights.development
    }
}

/// Computes every term. Only a material failure is fatal; the positional
/// terms that fail are logged and count as zero.
pub fn breakdown<R: Rules + ?Sized>(rules: &R) -> Result<Breakdown, EvalError> {
    let board = snapshot(rules);
    Ok(Breakdown {
        material: material(&board)?,
        mobility: or_zero("mobility", Ok(mobility(rules))),
        pawn_structure: or_zero("pawn structure", pawn_structure(&board)),
        king_safety: or_zero("king safety", king_safety(&board)),
        center_control: or_zero("center control", Ok(center_control(rules, &board))),
        development: development(&board),
    })
}

/// Weighted evaluation without jitter
pub fn evaluate<R: Rules + ?Sized>(rules: &R, weights: &EvalWeights) -> Result<f64, EvalError> {
    Ok(breakdown(rules)?.total(weights))
}

fn or_zero(term: &str, value: Result<f64, EvalError>) -> f64 {
    value.unwrap_or_else(|err| {
        log::debug!("{} term skipped: {}", term, err);
        0.0
    })
}

/// Plain material count with base values only, used when evaluation fails
pub fn raw_material(board: &Snapshot) -> f64 {
    let centipawns: i32 = board
        .iter()
        .flatten()
        .map(|piece| signed(piece.color, piece.piece_type.centipawns()))
        .sum();
    centipawns as f64 / 100.0
}

fn signed(color: Color, value: i32) -> i32 {
    match color {
        Color::White => value,
        Color::Black => -value,
    }
}

/// Total non-king material in centipawns, both colors
fn non_king_material(board: &Snapshot) -> i32 {
    board
        .iter()
        .flatten()
        .filter(|piece| piece.piece_type != Type::King)
        .map(|piece| piece.piece_type.centipawns())
        .sum()
}

/// Square of `color`'s king; more than one king is a malformed position
fn king_square(board: &Snapshot, color: Color) -> Result<Option<Square>, EvalError> {
    let king = Some(Piece::new(color, Type::King));
    let mut found = None;
    let mut count = 0;
    for (idx, piece) in board.iter().enumerate() {
        if *piece == king {
            found = Some(Square::new(idx as u8));
            count += 1;
        }
    }
    if count > 1 {
        return Err(EvalError::KingCount { color, count });
    }
    Ok(found)
}

/// Base value plus piece-square bonus, summed with black negated
pub fn material(board: &Snapshot) -> Result<f64, EvalError> {
    king_square(board, Color::White)?;
    king_square(board, Color::Black)?;

    let is_endgame = non_king_material(board) < ENDGAME_MATERIAL;
    let mut centipawns = 0;
    for (idx, piece) in board.iter().enumerate() {
        let Some(piece) = *piece else {
            continue;
        };
        let square = Square::new(idx as u8);
        let value = piece.piece_type.centipawns() + positional_bonus(piece, square, is_endgame);
        centipawns += signed(piece.color, value);
    }
    Ok(centipawns as f64 / 100.0)
}

/// Legal moves of the side to move, tenths of a pawn, signed by that side
pub fn mobility<R: Rules + ?Sized>(rules: &R) -> f64 {
    let count = rules.legal_moves().len() as f64;
    rules.side_to_move().sign() * count / 10.0
}

/// Penalty for every extra pawn sharing a file
pub fn pawn_structure(board: &Snapshot) -> Result<f64, EvalError> {
    let mut counts = [[0u32; 8]; 2];
    for (idx, piece) in board.iter().enumerate() {
        let Some(Piece { color, piece_type: Type::Pawn }) = *piece else {
            continue;
        };
        let square = Square::new(idx as u8);
        if square.rank() == 0 || square.rank() == 7 {
            return Err(EvalError::PawnOnBackRank { square });
        }
        counts[color.index()][square.file() as usize] += 1;
    }

    let mut score = 0.0;
    for file in 0..8 {
        for color in [Color::White, Color::Black] {
            let pawns = counts[color.index()][file];
            if pawns > 1 {
                score -= color.sign() * DOUBLED_PAWN_PENALTY * (pawns - 1) as f64;
            }
        }
    }
    Ok(score)
}

/// Bonus for a castled king, penalty for one still on the central home files
pub fn king_safety(board: &Snapshot) -> Result<f64, EvalError> {
    let mut score = 0.0;

    if let Some(king) = king_square(board, Color::White)? {
        if king == squares::G1 || king == squares::C1 {
            score += CASTLED_KING_BONUS;
        }
        // rank() is zero based, so rank 1 and 2 are below 2
        if (2..6).contains(&king.file()) && king.rank() < 2 {
            score -= CENTRAL_KING_PENALTY;
        }
    }

    if let Some(king) = king_square(board, Color::Black)? {
        if king == squares::G8 || king == squares::C8 {
            score -= CASTLED_KING_BONUS;
        }
        if (2..6).contains(&king.file()) && king.rank() > 5 {
            score += CENTRAL_KING_PENALTY;
        }
    }

    Ok(score)
}

/// Attackers and occupants of d4, e4, d5 and e5
pub fn center_control<R: Rules + ?Sized>(rules: &R, board: &Snapshot) -> f64 {
    let mut score = 0.0;
    for square in squares::CENTER {
        let attackers = |by: Color| {
            rules
                .attackers(square, by)
                .unwrap_or_else(|| approximate_attackers(board, square, by))
        };
        let white = attackers(Color::White) as f64;
        let black = attackers(Color::Black) as f64;
        score += CENTER_ATTACK_BONUS * (white - black);

        if let Some(piece) = board[square.index()] {
            let mut bonus = CENTER_OCCUPANT_BONUS;
            if matches!(piece.piece_type, Type::Knight | Type::Bishop) {
                bonus += CENTER_MINOR_BONUS;
            }
            score += piece.color.sign() * bonus;
        }
    }
    score
}

/// Counts `by` kings and knights that reach `target`, and pawns whose
/// forward diagonal does. Sliding pieces are not considered.
pub fn approximate_attackers(board: &Snapshot, target: Square, by: Color) -> u32 {
    let holds = |square: Option<Square>, piece_type: Type| {
        square.map_or(false, |sq| board[sq.index()] == Some(Piece::new(by, piece_type)))
    };

    let kings = KING_OFFSETS
        .iter()
        .filter(|&&(dr, df)| holds(target.offset(df, dr), Type::King))
        .count();

    let knights = KNIGHT_OFFSETS
        .iter()
        .filter(|&&(dr, df)| holds(target.offset(df, dr), Type::Knight))
        .count();

    // a pawn attacks from one rank behind the target, seen from its own side
    let behind = match by {
        Color::White => -1,
        Color::Black => 1,
    };
    let pawns = [-1, 1]
        .iter()
        .filter(|&&df| holds(target.offset(df, behind), Type::Pawn))
        .count();

    (kings + knights + pawns) as u32
}

/// Home squares (back two ranks) a side has vacated, capped at 8 each
pub fn development(board: &Snapshot) -> f64 {
    let vacated = |color: Color, ranks: [u8; 2]| {
        let count = ranks
            .iter()
            .flat_map(|&rank| (0..8).map(move |file| Square::from_coords(file, rank)))
            .filter(|sq| !matches!(board[sq.index()], Some(piece) if piece.color == color))
            .count() as u32;
        count.min(MAX_DEVELOPED)
    };

    let white = vacated(Color::White, [0, 1]) as f64;
    let black = vacated(Color::Black, [6, 7]) as f64;
    DEVELOPMENT_BONUS * (white - black)
}
