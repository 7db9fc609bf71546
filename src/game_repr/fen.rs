use crate::error::FenError;

use super::*;

impl Position {
    /// Parses a FEN string. Only the piece placement is mandatory; missing
    /// fields default to white to move, no castling, no en passant, `0 1`.
    pub fn from_fen(fen_str: &str) -> Result<Position, FenError> {
        let mut parts = fen_str.split_whitespace();
        let placement = parts.next().ok_or(FenError::Empty)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        let mut pos = Position::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            // first rank in the string is the eighth
            let rank = 7 - row as u8;
            let mut file = 0u8;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(FenError::InvalidPiece(c));
                    }
                    file += skip as u8;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece(c))?;
                    if file >= 8 {
                        return Err(FenError::RankWidth { rank: rank as usize + 1 });
                    }
                    pos.place(Square::from_coords(file, rank), piece);
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::RankWidth { rank: rank as usize + 1 });
                }
            }
            if file != 8 {
                return Err(FenError::RankWidth { rank: rank as usize + 1 });
            }
        }

        pos.side_to_move = match parts.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::InvalidSide(other.to_string())),
        };

        if let Some(castling_str) = parts.next() {
            if castling_str != "-" {
                for c in castling_str.chars() {
                    let flag = match c {
                        'K' => CastlingRights::WHITE_KINGSIDE,
                        'Q' => CastlingRights::WHITE_QUEENSIDE,
                        'k' => CastlingRights::BLACK_KINGSIDE,
                        'q' => CastlingRights::BLACK_QUEENSIDE,
                        _ => return Err(FenError::InvalidCastling(castling_str.to_string())),
                    };
                    pos.castling.grant(flag);
                }
            }
        }

        if let Some(ep_str) = parts.next() {
            if ep_str != "-" {
                let square: Square = ep_str
                    .parse()
                    .map_err(|_| FenError::InvalidEnPassant(ep_str.to_string()))?;
                if square.rank() != 2 && square.rank() != 5 {
                    return Err(FenError::InvalidEnPassant(ep_str.to_string()));
                }
                pos.en_passant = Some(square);
            }
        }

        if let Some(halfmove) = parts.next() {
            pos.halfmove_clock = halfmove
                .parse()
                .map_err(|_| FenError::InvalidCounter(halfmove.to_string()))?;
        }

        if let Some(fullmove) = parts.next() {
            pos.fullmove_number = match fullmove.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(FenError::InvalidCounter(fullmove.to_string())),
            };
        }

        Ok(pos)
    }

    /// Converts the current position to FEN notation
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);

        for rank in (0..8).rev() {
            let mut empty_count = 0;
            for file in 0..8 {
                match self.position[rank * 8 + file] {
                    None => empty_count += 1,
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_char());
                    }
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        let mut castling = String::new();
        for (flag, c) in [
            (CastlingRights::WHITE_KINGSIDE, 'K'),
            (CastlingRights::WHITE_QUEENSIDE, 'Q'),
            (CastlingRights::BLACK_KINGSIDE, 'k'),
            (CastlingRights::BLACK_QUEENSIDE, 'q'),
        ] {
            if self.castling.has(flag) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        fen.push(' ');
        fen.push_str(&castling);

        match self.en_passant {
            Some(square) => fen.push_str(&format!(" {}", square)),
            None => fen.push_str(" -"),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }
}
