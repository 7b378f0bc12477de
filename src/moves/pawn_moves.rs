use crate::game_state::chess_types::Player;

// Player one advances toward row 0, player two toward row 7.
pub const PLAYER_ONE_PAWN_ATTACKS: [u64; 64] = generate_player_one_pawn_attacks();
pub const PLAYER_TWO_PAWN_ATTACKS: [u64; 64] = generate_player_two_pawn_attacks();

/// Diagonal squares a pawn of `player` on `square` attacks.
#[inline]
pub const fn pawn_attacks(player: Player, square: u8) -> u64 {
    match player {
        Player::One => PLAYER_ONE_PAWN_ATTACKS[square as usize],
        Player::Two => PLAYER_TWO_PAWN_ATTACKS[square as usize],
    }
}

const fn generate_player_one_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = sq % 8;
        let row = sq / 8;
        let mut attacks = 0u64;

        if row > 0 {
            if col > 0 {
                attacks |= 1u64 << (sq - 9);
            }
            if col < 7 {
                attacks |= 1u64 << (sq - 7);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn generate_player_two_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = sq % 8;
        let row = sq / 8;
        let mut attacks = 0u64;

        if row < 7 {
            if col > 0 {
                attacks |= 1u64 << (sq + 7);
            }
            if col < 7 {
                attacks |= 1u64 << (sq + 9);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
