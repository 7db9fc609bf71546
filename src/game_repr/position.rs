use super::*;
use super::bitboards::{bishop_attacks, bitscan_forward, pop_lsb, rook_attacks, Bitboards};
use super::bitboards::tables::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const BACK_RANK: [Type; 8] = [
    Type::Rook,
    Type::Knight,
    Type::Bishop,
    Type::Queen,
    Type::King,
    Type::Bishop,
    Type::Knight,
    Type::Rook,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const WHITE_KINGSIDE: u8 = 1 << 0;
    pub const WHITE_QUEENSIDE: u8 = 1 << 1;
    pub const BLACK_KINGSIDE: u8 = 1 << 2;
    pub const BLACK_QUEENSIDE: u8 = 1 << 3;

    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(0b1111);

    pub fn has(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    pub fn grant(&mut self, flag: u8) {
        self.0 |= flag;
    }

    pub fn revoke(&mut self, flag: u8) {
        self.0 &= !flag;
    }

    pub fn kingside(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_KINGSIDE,
            Color::Black => Self::BLACK_KINGSIDE,
        }
    }

    pub fn queenside(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_QUEENSIDE,
        }
    }
}

/// Rights lost when a piece leaves or lands on `square`
fn rights_touched(square: usize) -> u8 {
    match square {
        0 => CastlingRights::WHITE_QUEENSIDE,
        4 => CastlingRights::WHITE_KINGSIDE | CastlingRights::WHITE_QUEENSIDE,
        7 => CastlingRights::WHITE_KINGSIDE,
        56 => CastlingRights::BLACK_QUEENSIDE,
        60 => CastlingRights::BLACK_KINGSIDE | CastlingRights::BLACK_QUEENSIDE,
        63 => CastlingRights::BLACK_KINGSIDE,
        _ => 0,
    }
}

/// Rook (from, to) for a castling king landing on `king_to`
pub(crate) fn castling_rook_squares(king_to: usize) -> (usize, usize) {
    match king_to {
        6 => (7, 5),    // h1 -> f1
        2 => (0, 3),    // a1 -> d1
        62 => (63, 61), // h8 -> f8
        _ => (56, 59),  // a8 -> d8
    }
}

/// Square of the pawn removed by an en passant capture landing on `to`
fn en_passant_victim(to: usize, mover: Color) -> usize {
    match mover {
        Color::White => to - 8,
        Color::Black => to + 8,
    }
}

#[derive(Clone, Debug)]
pub struct Position {
    /// Bitboard representation for fast move generation
    pub(crate) bitboards: Bitboards,
    /// Mailbox representation for fast piece lookup (kept in sync with bitboards)
    pub position: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// Square a pawn skipped over on the previous double push
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    history: Vec<HistoryEntry>,
}

#[derive(Clone, Copy, Debug)]
pub struct UndoInfo {
    captured_piece: Option<Piece>,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

/// Everything that makes two positions the same for repetition purposes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RepetitionKey {
    bitboards: Bitboards,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
}

#[derive(Clone, Copy, Debug)]
struct HistoryEntry {
    mv: Move,
    undo: UndoInfo,
    key: RepetitionKey,
}

impl Default for Position {
    fn default() -> Self {
        let mut pos = Self::empty();
        for (file, &piece_type) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            pos.place(Square::from_coords(file, 0), Piece::new(Color::White, piece_type));
            pos.place(Square::from_coords(file, 1), Piece::new(Color::White, Type::Pawn));
            pos.place(Square::from_coords(file, 6), Piece::new(Color::Black, Type::Pawn));
            pos.place(Square::from_coords(file, 7), Piece::new(Color::Black, piece_type));
        }
        pos.castling = CastlingRights::ALL;
        pos
    }
}

impl Position {
    /// Board with no pieces, white to move, no castling rights
    pub fn empty() -> Self {
        Self {
            bitboards: Bitboards::empty(),
            position: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    /// Puts `piece` on `square`, replacing whatever stood there
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.clear(square);
        self.bitboards.add_piece(piece.color, piece.piece_type, square.index());
        self.position[square.index()] = Some(piece);
    }

    pub fn clear(&mut self, square: Square) {
        if let Some(old) = self.position[square.index()].take() {
            self.bitboards.remove_piece(old.color, old.piece_type, square.index());
        }
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.position
            .iter()
            .enumerate()
            .filter_map(|(idx, piece)| piece.map(|p| (Square::new(idx as u8), p)))
    }

    /// Copy without move history, used for legality probes and perft
    fn scratch(&self) -> Position {
        Position {
            bitboards: self.bitboards,
            position: self.position,
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            history: Vec::new(),
        }
    }

    /// Applies `mv` without recording it in the history.
    /// Returns `None` and leaves the position untouched when the origin square is empty.
    pub fn make_move_undoable(&mut self, mv: Move) -> Option<UndoInfo> {
        let from = mv.from().index();
        let to = mv.to().index();
        let moving_piece = self.position[from]?;
        let move_type = mv.move_type();

        let captured_sq = match move_type {
            MoveType::EnPassant => en_passant_victim(to, moving_piece.color),
            _ => to,
        };
        let captured_piece = self.position[captured_sq];

        let undo = UndoInfo {
            captured_piece,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        };

        if let Some(captured) = captured_piece {
            self.bitboards.remove_piece(captured.color, captured.piece_type, captured_sq);
            self.position[captured_sq] = None;
        }

        let placed = match move_type {
            MoveType::Promotion => Piece::new(moving_piece.color, Type::Queen),
            _ => moving_piece,
        };
        self.bitboards.remove_piece(moving_piece.color, moving_piece.piece_type, from);
        self.bitboards.add_piece(placed.color, placed.piece_type, to);
        self.position[from] = None;
        self.position[to] = Some(placed);

        if move_type == MoveType::Castling {
            let (rook_from, rook_to) = castling_rook_squares(to);
            self.bitboards.move_piece(moving_piece.color, Type::Rook, rook_from, rook_to);
            self.position[rook_to] = self.position[rook_from].take();
        }

        self.castling.revoke(rights_touched(from) | rights_touched(to));

        let is_pawn = moving_piece.piece_type == Type::Pawn;
        self.en_passant = if is_pawn && from.abs_diff(to) == 16 {
            Some(Square::new(((from + to) / 2) as u8))
        } else {
            None
        };
        self.halfmove_clock = if is_pawn || captured_piece.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };
        if moving_piece.color == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = moving_piece.color.opposite();

        Some(undo)
    }

    /// Reverses a move applied with [`make_move_undoable`](Self::make_move_undoable)
    pub fn unmake_move(&mut self, mv: Move, undo: UndoInfo) {
        let from = mv.from().index();
        let to = mv.to().index();
        let Some(placed) = self.position[to] else {
            return;
        };
        let move_type = mv.move_type();
        let moving_piece = match move_type {
            MoveType::Promotion => Piece::new(placed.color, Type::Pawn),
            _ => placed,
        };

        self.bitboards.remove_piece(placed.color, placed.piece_type, to);
        self.bitboards.add_piece(moving_piece.color, moving_piece.piece_type, from);
        self.position[to] = None;
        self.position[from] = Some(moving_piece);

        if move_type == MoveType::Castling {
            let (rook_from, rook_to) = castling_rook_squares(to);
            self.bitboards.move_piece(moving_piece.color, Type::Rook, rook_to, rook_from);
            self.position[rook_from] = self.position[rook_to].take();
        }

        if let Some(captured) = undo.captured_piece {
            let captured_sq = match move_type {
                MoveType::EnPassant => en_passant_victim(to, moving_piece.color),
                _ => to,
            };
            self.bitboards.add_piece(captured.color, captured.piece_type, captured_sq);
            self.position[captured_sq] = Some(captured);
        }

        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;
        self.side_to_move = moving_piece.color;
    }

    /// Applies `mv` and records it so it can be taken back later.
    /// The move is assumed legal; use the `Rules` interface for validated input.
    pub fn play(&mut self, mv: Move) -> bool {
        let key = self.repetition_key();
        match self.make_move_undoable(mv) {
            Some(undo) => {
                self.history.push(HistoryEntry { mv, undo, key });
                true
            }
            None => false,
        }
    }

    /// Undoes the most recent recorded move
    pub fn take_back(&mut self) -> Option<Move> {
        let entry = self.history.pop()?;
        self.unmake_move(entry.mv, entry.undo);
        Some(entry.mv)
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|entry| entry.mv)
    }

    pub fn moves_played(&self) -> Vec<Move> {
        self.history.iter().map(|entry| entry.mv).collect()
    }

    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    fn repetition_key(&self) -> RepetitionKey {
        RepetitionKey {
            bitboards: self.bitboards,
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant,
        }
    }

    /// Bitboard of every `by_color` piece attacking `square`
    pub fn attackers_of(&self, square: usize, by_color: Color) -> u64 {
        let occupied = self.bitboards.all_occupied();
        let of = |piece_type| self.bitboards.pieces_of_type(by_color, piece_type);
        let queens = of(Type::Queen);

        // a pawn attacks `square` from where an opposite pawn on `square` would capture
        (PAWN_ATTACKS[by_color.opposite().index()][square] & of(Type::Pawn))
            | (KNIGHT_ATTACKS[square] & of(Type::Knight))
            | (KING_ATTACKS[square] & of(Type::King))
            | (bishop_attacks(square, occupied) & (of(Type::Bishop) | queens))
            | (rook_attacks(square, occupied) & (of(Type::Rook) | queens))
    }

    pub fn is_square_attacked(&self, square: usize, by_color: Color) -> bool {
        self.attackers_of(square, by_color) != 0
    }

    pub fn king_square(&self, color: Color) -> Option<usize> {
        let king_bb = self.bitboards.pieces_of_type(color, Type::King);
        (king_bb != 0).then(|| bitscan_forward(king_bb))
    }

    /// A side without a king is never in check
    pub fn king_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .map_or(false, |king| self.is_square_attacked(king, color.opposite()))
    }

    fn pseudo_moves_into(&self, idx: usize, moves: &mut MoveList) {
        match self.position[idx] {
            Some(Piece { piece_type: Type::Pawn, .. }) => self.pawn_moves_into(idx, moves),
            Some(Piece { piece_type: Type::Knight, .. }) => self.knight_moves_into(idx, moves),
            Some(Piece { piece_type: Type::Bishop, .. }) => self.bishop_moves_into(idx, moves),
            Some(Piece { piece_type: Type::Rook, .. }) => self.rook_moves_into(idx, moves),
            Some(Piece { piece_type: Type::Queen, .. }) => self.queen_moves_into(idx, moves),
            Some(Piece { piece_type: Type::King, .. }) => self.king_moves_into(idx, moves),
            None => {}
        }
    }

    /// Drops moves from `start` onward that leave the mover's king attacked,
    /// and marks the survivors that give check
    fn retain_legal(&self, moves: &mut MoveList, start: usize) {
        let mut scratch = self.scratch();
        let mut i = start;
        while i < moves.len() {
            let mv = moves[i];
            let Some(mover) = self.position[mv.from().index()].map(|p| p.color) else {
                moves.remove(i);
                continue;
            };
            let Some(undo) = scratch.make_move_undoable(mv) else {
                moves.remove(i);
                continue;
            };
            let legal = !scratch.king_in_check(mover);
            let gives_check = legal && scratch.king_in_check(mover.opposite());
            scratch.unmake_move(mv, undo);

            if legal {
                if gives_check {
                    moves[i] = mv.with_check();
                }
                i += 1;
            } else {
                moves.remove(i);
            }
        }
    }

    /// Legal moves of the piece on `idx`, whichever side it belongs to
    pub fn piece_legal_moves(&self, idx: usize) -> MoveList {
        let mut moves = MoveList::new();
        self.pseudo_moves_into(idx, &mut moves);
        self.retain_legal(&mut moves, 0);
        moves
    }

    /// Generate all legal moves for the side to move into a provided buffer
    /// The buffer is cleared before adding moves
    pub fn all_legal_moves_into(&self, moves: &mut MoveList) {
        moves.clear();
        for piece_type in Type::ALL {
            let mut pieces_bb = self.bitboards.pieces_of_type(self.side_to_move, piece_type);
            while pieces_bb != 0 {
                let square = pop_lsb(&mut pieces_bb);
                self.pseudo_moves_into(square, moves);
            }
        }
        self.retain_legal(moves, 0);
    }

    pub fn all_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.all_legal_moves_into(&mut moves);
        moves
    }

    pub fn has_legal_moves(&self) -> bool {
        let mut own = self.bitboards.occupied_by_color(self.side_to_move);
        while own != 0 {
            let square = pop_lsb(&mut own);
            if !self.piece_legal_moves(square).is_empty() {
                return true;
            }
        }
        false
    }

    /// Side to move is in check and cannot get out of it
    pub fn is_mate(&self) -> bool {
        self.king_in_check(self.side_to_move) && !self.has_legal_moves()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.king_in_check(self.side_to_move) && !self.has_legal_moves()
    }

    /// Neither side can possibly deliver mate
    pub fn is_insufficient_material(&self) -> bool {
        let mut white_minors = Vec::new();
        let mut black_minors = Vec::new();
        let mut bishop_square_colors = Vec::new();

        for (square, piece) in self.pieces() {
            match piece.piece_type {
                Type::King => {}
                Type::Knight | Type::Bishop => {
                    match piece.color {
                        Color::White => white_minors.push(piece.piece_type),
                        Color::Black => black_minors.push(piece.piece_type),
                    }
                    if piece.piece_type == Type::Bishop {
                        bishop_square_colors.push((square.file() + square.rank()) % 2);
                    }
                }
                // any pawn, rook or queen can still mate
                _ => return false,
            }
        }

        let minors = white_minors.len() + black_minors.len();
        if minors <= 1 {
            return true;
        }

        // only bishops left, all on squares of one color
        let only_bishops = white_minors
            .iter()
            .chain(black_minors.iter())
            .all(|&t| t == Type::Bishop);
        only_bishops && bishop_square_colors.windows(2).all(|w| w[0] == w[1])
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// How many times the current position has occurred, including now
    pub fn repetition_count(&self) -> usize {
        let key = self.repetition_key();
        1 + self.history.iter().filter(|entry| entry.key == key).count()
    }

    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 3
    }

    pub fn is_draw(&self) -> bool {
        self.is_fifty_move_draw()
            || self.is_insufficient_material()
            || self.is_stalemate()
            || self.is_threefold_repetition()
    }

    /// Perft (Performance Test) - counts leaf nodes at a given depth
    /// Used to validate move generation correctness
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.all_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        let mut pos = self.scratch();
        for mv in moves {
            if let Some(undo) = pos.make_move_undoable(mv) {
                nodes += pos.perft(depth - 1);
                pos.unmake_move(mv, undo);
            }
        }
        nodes
    }
}
