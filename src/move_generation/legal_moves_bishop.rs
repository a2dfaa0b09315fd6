//! Bishop move generation: the four diagonal rays.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::piece_team::PieceTeam;

/// Diagonal ray directions in source order.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn generate_bishop_moves(
    board: &Board,
    origin: BoardLocation,
    mover: PieceTeam,
    out: &mut Vec<BoardLocation>,
) {
    for (d_file, d_rank) in BISHOP_DIRECTIONS {
        push_ray_moves(board, out, &origin, d_file, d_rank, mover);
    }
}
