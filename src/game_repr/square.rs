use std::fmt;
use std::str::FromStr;

use crate::error::SquareParseError;

/// Board square, `a1 = 0` through `h8 = 63` (index = rank * 8 + file)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const fn new(index: u8) -> Self {
        Self(index & 63)
    }

    pub const fn from_coords(file: u8, rank: u8) -> Self {
        Self::new(rank * 8 + file)
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 0 = a-file, 7 = h-file
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// 0 = first rank, 7 = eighth rank
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Index into the 64-entry evaluation tables, whose row 0 is rank 8
    pub const fn table_index(self) -> usize {
        (self.0 ^ 56) as usize
    }

    /// Same square seen from the other side of the board
    pub const fn flip(self) -> Self {
        Self(self.0 ^ 56)
    }

    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = self.file() as i8 + file_delta;
        let rank = self.rank() as i8 + rank_delta;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::from_coords(file as u8, rank as u8))
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareParseError(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(SquareParseError(s.to_string()));
        }
        Ok(Square::from_coords(file - b'a', rank - b'1'))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, (b'1' + self.rank()) as char)
    }
}

pub mod squares {
    use super::Square;

    pub const A1: Square = Square::new(0);
    pub const C1: Square = Square::new(2);
    pub const D1: Square = Square::new(3);
    pub const E1: Square = Square::new(4);
    pub const F1: Square = Square::new(5);
    pub const G1: Square = Square::new(6);
    pub const H1: Square = Square::new(7);
    pub const D4: Square = Square::new(27);
    pub const E4: Square = Square::new(28);
    pub const D5: Square = Square::new(35);
    pub const E5: Square = Square::new(36);
    pub const A8: Square = Square::new(56);
    pub const C8: Square = Square::new(58);
    pub const D8: Square = Square::new(59);
    pub const E8: Square = Square::new(60);
    pub const F8: Square = Square::new(61);
    pub const G8: Square = Square::new(62);
    pub const H8: Square = Square::new(63);

    pub const CENTER: [Square; 4] = [D4, E4, D5, E5];
}
