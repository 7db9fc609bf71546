/// KNIGHT_ATTACKS[square]: squares a knight on `square` attacks
pub static KNIGHT_ATTACKS: [u64; 64] = generate_leaper_attacks(&KNIGHT_OFFSETS);

/// KING_ATTACKS[square]: squares a king on `square` attacks
pub static KING_ATTACKS: [u64; 64] = generate_leaper_attacks(&KING_OFFSETS);

/// PAWN_ATTACKS[color][square]: squares a pawn of that color attacks
/// Index 0 = White, Index 1 = Black
pub static PAWN_ATTACKS: [[u64; 64]; 2] = [
    generate_leaper_attacks(&[(1, -1), (1, 1)]),
    generate_leaper_attacks(&[(-1, -1), (-1, 1)]),
];

/// RAYS[direction][square]: every square in that direction, edge excluded
pub static RAYS: [[u64; 64]; 8] = generate_rays();

// (rank delta, file delta)
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

// Direction indices
pub const NORTH: usize = 0;
pub const NORTH_EAST: usize = 1;
pub const EAST: usize = 2;
pub const SOUTH_EAST: usize = 3;
pub const SOUTH: usize = 4;
pub const SOUTH_WEST: usize = 5;
pub const WEST: usize = 6;
pub const NORTH_WEST: usize = 7;

pub const DIAGONALS: [usize; 4] = [NORTH_EAST, SOUTH_EAST, SOUTH_WEST, NORTH_WEST];
pub const ORTHOGONALS: [usize; 4] = [NORTH, EAST, SOUTH, WEST];

const DIRECTION_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const fn generate_leaper_attacks(offsets: &[(i8, i8)]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    let mut sq = 0;

    while sq < 64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut i = 0;
        while i < offsets.len() {
            let new_rank = rank + offsets[i].0;
            let new_file = file + offsets[i].1;
            if new_rank >= 0 && new_rank < 8 && new_file >= 0 && new_file < 8 {
                attacks[sq] |= 1u64 << (new_rank * 8 + new_file) as u32;
            }
            i += 1;
        }
        sq += 1;
    }

    attacks
}

const fn generate_rays() -> [[u64; 64]; 8] {
    let mut rays = [[0u64; 64]; 8];
    let mut dir = 0;

    while dir < 8 {
        let (dr, df) = DIRECTION_STEPS[dir];
        let mut sq = 0;
        while sq < 64 {
            let mut rank = (sq / 8) as i8 + dr;
            let mut file = (sq % 8) as i8 + df;
            while rank >= 0 && rank < 8 && file >= 0 && file < 8 {
                rays[dir][sq] |= 1u64 << (rank * 8 + file) as u32;
                rank += dr;
                file += df;
            }
            sq += 1;
        }
        dir += 1;
    }

    rays
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_attacks() {
        // d4 attacks b3, b5, c2, c6, e2, e6, f3, f5
        let expected = (1u64 << 17) | (1u64 << 33) | (1u64 << 10) | (1u64 << 42) |
                       (1u64 << 12) | (1u64 << 44) | (1u64 << 21) | (1u64 << 37);
        assert_eq!(KNIGHT_ATTACKS[27], expected);
        assert_eq!(KNIGHT_ATTACKS[0].count_ones(), 2);
    }

    #[test]
    fn test_king_attacks() {
        assert_eq!(KING_ATTACKS[28].count_ones(), 8);
        assert_eq!(KING_ATTACKS[0], (1u64 << 1) | (1u64 << 8) | (1u64 << 9));
    }

    #[test]
    fn test_pawn_attacks() {
        // white e4 -> d5, f5; black e5 -> d4, f4
        assert_eq!(PAWN_ATTACKS[0][28], (1u64 << 35) | (1u64 << 37));
        assert_eq!(PAWN_ATTACKS[1][36], (1u64 << 27) | (1u64 << 29));
        // a-file pawn only has one capture
        assert_eq!(PAWN_ATTACKS[0][8], 1u64 << 17);
    }

    #[test]
    fn test_rays() {
        let north_from_a1 = (1u64 << 8) | (1u64 << 16) | (1u64 << 24) | (1u64 << 32) |
                            (1u64 << 40) | (1u64 << 48) | (1u64 << 56);
        assert_eq!(RAYS[NORTH][0], north_from_a1);

        let diagonal_from_a1 = (1u64 << 9) | (1u64 << 18) | (1u64 << 27) | (1u64 << 36) |
                               (1u64 << 45) | (1u64 << 54) | (1u64 << 63);
        assert_eq!(RAYS[NORTH_EAST][0], diagonal_from_a1);
        assert_eq!(RAYS[WEST][0], 0);
    }
}
