use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Type {
    pub const ALL: [Type; 6] = [
        Type::Pawn,
        Type::Knight,
        Type::Bishop,
        Type::Rook,
        Type::Queen,
        Type::King,
    ];

    /// Base material value in centipawns
    pub const fn centipawns(self) -> i32 {
        match self {
            Type::Pawn => 100,
            Type::Knight => 320,
            Type::Bishop => 330,
            Type::Rook => 510,
            Type::Queen => 950,
            Type::King => 10000,
        }
    }

    /// Base material value in pawns
    pub fn value(self) -> f64 {
        self.centipawns() as f64 / 100.0
    }

    /// Uppercase SAN letter, pawns have none
    pub fn letter(self) -> Option<char> {
        match self {
            Type::Pawn => None,
            Type::Knight => Some('N'),
            Type::Bishop => Some('B'),
            Type::Rook => Some('R'),
            Type::Queen => Some('Q'),
            Type::King => Some('K'),
        }
    }

    pub fn from_promotion_char(c: char) -> Option<Type> {
        match c.to_ascii_lowercase() {
            'n' => Some(Type::Knight),
            'b' => Some(Type::Bishop),
            'r' => Some(Type::Rook),
            'q' => Some(Type::Queen),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// +1 for white, -1 for black
    pub fn sign(self) -> f64 {
        match self {
            Color::White => 1.0,
            Color::Black => -1.0,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Piece {
    pub const fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    /// Parses a FEN piece letter; uppercase is white
    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece_type = match c.to_ascii_lowercase() {
            'p' => Type::Pawn,
            'n' => Type::Knight,
            'b' => Type::Bishop,
            'r' => Type::Rook,
            'q' => Type::Queen,
            'k' => Type::King,
            _ => return None,
        };
        Some(Self { color, piece_type })
    }

    pub fn to_char(self) -> char {
        let c = match self.piece_type {
            Type::Pawn => 'p',
            Type::Knight => 'n',
            Type::Bishop => 'b',
            Type::Rook => 'r',
            Type::Queen => 'q',
            Type::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Unicode chess glyph used by the text board
    pub fn symbol(self) -> char {
        match (self.color, self.piece_type) {
            (Color::White, Type::King) => '♔',
            (Color::White, Type::Queen) => '♕',
            (Color::White, Type::Rook) => '♖',
            (Color::White, Type::Bishop) => '♗',
            (Color::White, Type::Knight) => '♘',
            (Color::White, Type::Pawn) => '♙',
            (Color::Black, Type::King) => '♚',
            (Color::Black, Type::Queen) => '♛',
            (Color::Black, Type::Rook) => '♜',
            (Color::Black, Type::Bishop) => '♝',
            (Color::Black, Type::Knight) => '♞',
            (Color::Black, Type::Pawn) => '♟',
        }
    }

    pub fn is(&self, color: Color) -> bool {
        self.color == color
    }
}
