use super::{Color, Type};

pub mod tables;
pub use tables::*;

/// Twelve u64 boards, one per (color, piece type); bit n set = piece on square n
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bitboards {
    /// Indexed by [color * 6 + piece_type]
    /// White: 0=Pawn .. 5=King, Black: 6=Pawn .. 11=King
    pieces: [u64; 12],
}

impl Bitboards {
    pub fn empty() -> Self {
        Self { pieces: [0; 12] }
    }

    #[inline(always)]
    pub fn pieces_of_type(&self, color: Color, piece_type: Type) -> u64 {
        self.pieces[piece_index(color, piece_type)]
    }

    #[inline(always)]
    pub fn occupied_by_color(&self, color: Color) -> u64 {
        let base = color.index() * 6;
        self.pieces[base..base + 6].iter().fold(0, |acc, bb| acc | bb)
    }

    #[inline(always)]
    pub fn all_occupied(&self) -> u64 {
        self.occupied_by_color(Color::White) | self.occupied_by_color(Color::Black)
    }

    pub fn move_piece(&mut self, color: Color, piece_type: Type, from: usize, to: usize) {
        let idx = piece_index(color, piece_type);
        self.pieces[idx] &= !(1u64 << from);
        self.pieces[idx] |= 1u64 << to;
    }

    pub fn remove_piece(&mut self, color: Color, piece_type: Type, square: usize) {
        self.pieces[piece_index(color, piece_type)] &= !(1u64 << square);
    }

    pub fn add_piece(&mut self, color: Color, piece_type: Type, square: usize) {
        self.pieces[piece_index(color, piece_type)] |= 1u64 << square;
    }
}

#[inline(always)]
fn piece_index(color: Color, piece_type: Type) -> usize {
    let offset = match piece_type {
        Type::Pawn => 0,
        Type::Knight => 1,
        Type::Bishop => 2,
        Type::Rook => 3,
        Type::Queen => 4,
        Type::King => 5,
    };
    color.index() * 6 + offset
}

/// Pop the least significant bit from a bitboard and return its index
#[inline(always)]
pub fn pop_lsb(bb: &mut u64) -> usize {
    let sq = bb.trailing_zeros() as usize;
    *bb &= *bb - 1;
    sq
}

#[inline(always)]
pub fn bitscan_forward(bb: u64) -> usize {
    bb.trailing_zeros() as usize
}

#[inline]
pub fn bitscan_reverse(bb: u64) -> usize {
    63 - bb.leading_zeros() as usize
}

/// Squares reached by sliding along `directions` from `square`, stopping at
/// (and including) the first occupied square on each ray
pub fn slider_attacks(square: usize, occupied: u64, directions: &[usize]) -> u64 {
    let mut attacks = 0u64;
    for &direction in directions {
        let mut ray = RAYS[direction][square];
        let blockers = ray & occupied;
        if blockers != 0 {
            let blocker_sq = if is_forward(direction) {
                bitscan_forward(blockers)
            } else {
                bitscan_reverse(blockers)
            };
            ray &= !RAYS[direction][blocker_sq];
        }
        attacks |= ray;
    }
    attacks
}

#[inline]
pub fn bishop_attacks(square: usize, occupied: u64) -> u64 {
    slider_attacks(square, occupied, &DIAGONALS)
}

#[inline]
pub fn rook_attacks(square: usize, occupied: u64) -> u64 {
    slider_attacks(square, occupied, &ORTHOGONALS)
}

// directions whose square index grows along the ray
#[inline(always)]
fn is_forward(direction: usize) -> bool {
    matches!(direction, NORTH | NORTH_EAST | EAST | NORTH_WEST)
}
