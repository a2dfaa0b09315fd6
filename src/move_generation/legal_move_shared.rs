//! Helpers shared by the per-class move generators.
//!
//! Destinations are appended in generation order: fixed-offset pieces emit
//! their offsets in a documented sequence, and sliders walk each ray from
//! near to far. Order is informational only; legality is the contract.

use crate::board_location::{offset_location, BoardLocation};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::piece_team::PieceTeam;

/// Appends `origin + (d_file, d_rank)` when it lies on the board and is not
/// held by one of the mover's own pieces. Used by knight and king steps.
pub fn push_step_if_movable(
    board: &Board,
    out: &mut Vec<BoardLocation>,
    origin: &BoardLocation,
    d_file: i8,
    d_rank: i8,
    mover: PieceTeam,
) {
    let Ok(target) = offset_location(origin, d_file, d_rank) else {
        return;
    };
    match board.get(target) {
        Ok(Square::Empty) => out.push(target),
        Ok(Square::Occupied(piece)) if piece.team != mover => out.push(target),
        _ => {}
    }
}

/// Casts one slider ray from `origin` in direction `(d_file, d_rank)`.
///
/// Each empty square along the ray is appended and the ray continues. The
/// first occupied square always ends the ray and is appended only when it
/// holds an enemy piece.
pub fn push_ray_moves(
    board: &Board,
    out: &mut Vec<BoardLocation>,
    origin: &BoardLocation,
    d_file: i8,
    d_rank: i8,
    mover: PieceTeam,
) {
    let mut cursor = *origin;
    while let Ok(target) = offset_location(&cursor, d_file, d_rank) {
        match board.get(target) {
            Ok(Square::Empty) => {
                out.push(target);
                cursor = target;
            }
            Ok(Square::Occupied(piece)) => {
                if piece.team != mover {
                    out.push(target);
                }
                return;
            }
            Err(_) => return,
        }
    }
}

/// True when the location is on the board and holds an enemy of `mover`.
/// Used for pawn diagonal captures.
#[inline]
pub fn enemy_occupies(board: &Board, location: BoardLocation, mover: PieceTeam) -> bool {
    matches!(
        board.get(location),
        Ok(Square::Occupied(piece)) if piece.team != mover
    )
}
