//! King move generation: the eight adjacent squares, probed clockwise
//! starting below the king (source order). Castling is out of scope.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::move_generation::legal_move_shared::push_step_if_movable;
use crate::piece_team::PieceTeam;

/// Adjacent offsets, clockwise from (0, 1).
const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub fn generate_king_moves(
    board: &Board,
    origin: BoardLocation,
    mover: PieceTeam,
    out: &mut Vec<BoardLocation>,
) {
    for (d_file, d_rank) in KING_OFFSETS {
        push_step_if_movable(board, out, &origin, d_file, d_rank, mover);
    }
}
