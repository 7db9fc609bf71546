use std::fmt;

use smallvec::SmallVec;

use super::Square;

/*-------ARCHITECTURE--------*/

// | 6 bits | 6 bits | 2 bits | 1 bit   | 1 bit |
// |  From  |   To   | Type   | Capture | Check |
// |               16 bits                      |

pub type MoveList = SmallVec<[Move; 64]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    Normal = 0,
    EnPassant = 1,
    Castling = 2,
    /// Always promotes to a queen
    Promotion = 3,
}

impl From<u16> for MoveType {
    fn from(value: u16) -> Self {
        match value & 0b11 {
            0 => MoveType::Normal,
            1 => MoveType::EnPassant,
            2 => MoveType::Castling,
            _ => MoveType::Promotion,
        }
    }
}

const CAPTURE_FLAG: u16 = 1 << 1;
const CHECK_FLAG: u16 = 1 << 0;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    buf: u16,
}

impl Move {
    pub fn new(from: Square, to: Square, move_type: MoveType) -> Move {
        let mut buf = 0u16;
        buf |= (from.index() as u16) << 10;
        buf |= (to.index() as u16) << 4;
        buf |= (move_type as u16) << 2;

        Self { buf }
    }

    pub fn move_type(&self) -> MoveType {
        (self.buf >> 2).into()
    }

    pub fn from(&self) -> Square {
        Square::new(((self.buf >> 10) & 0x3F) as u8)
    }

    pub fn to(&self) -> Square {
        Square::new(((self.buf >> 4) & 0x3F) as u8)
    }

    pub fn is_capture(&self) -> bool {
        self.buf & CAPTURE_FLAG != 0
    }

    pub fn is_check(&self) -> bool {
        self.buf & CHECK_FLAG != 0
    }

    pub fn is_promotion(&self) -> bool {
        self.move_type() == MoveType::Promotion
    }

    pub fn with_capture(mut self) -> Self {
        self.buf |= CAPTURE_FLAG;
        self
    }

    pub fn with_check(mut self) -> Self {
        self.buf |= CHECK_FLAG;
        self
    }

    /// Same move with capture/check annotations stripped
    pub fn bare(&self) -> Self {
        Self {
            buf: self.buf & !(CAPTURE_FLAG | CHECK_FLAG),
        }
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if self.is_promotion() {
            write!(f, "q")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)?;
        if self.is_capture() {
            write!(f, "x")?;
        }
        if self.is_check() {
            write!(f, "+")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::squares::*;

    #[test]
    fn test_packing() {
        let mv = Move::new(E1, G1, MoveType::Castling);
        assert_eq!(mv.from(), E1);
        assert_eq!(mv.to(), G1);
        assert_eq!(mv.move_type(), MoveType::Castling);
        assert!(!mv.is_capture());
        assert!(!mv.is_check());

        let flagged = mv.with_capture().with_check();
        assert!(flagged.is_capture());
        assert!(flagged.is_check());
        assert_eq!(flagged.move_type(), MoveType::Castling);
        assert_eq!(flagged.bare(), mv);
    }

    #[test]
    fn test_display() {
        let e2: Square = "e2".parse().unwrap();
        assert_eq!(Move::new(e2, E4, MoveType::Normal).to_string(), "e2e4");
        let e7: Square = "e7".parse().unwrap();
        assert_eq!(Move::new(e7, E8, MoveType::Promotion).to_string(), "e7e8q");
    }
}
