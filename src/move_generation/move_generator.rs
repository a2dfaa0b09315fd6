//! Move generation entry points.
//!
//! `generate_moves` dispatches to the per-class generators and returns
//! pseudo-legal destinations: squares reachable by the piece's movement rule
//! and not held by a friendly piece, without verifying that the mover's own
//! king stays safe (check detection is out of scope by design).
//!
//! `legal_moves` and `legal_moves_for_claimed` are the boundary queries a
//! presentation collaborator calls; the latter cross-checks the caller's
//! belief about a square against the board and raises the fatal
//! [`EngineError::DesyncFault`] on disagreement.

use crate::board_location::BoardLocation;
use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::piece_class::PieceClass;
use crate::piece_codec::{encode_piece, encode_square};
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;

/// Pseudo-legal destinations for `piece` standing on `origin`, with
/// friend/enemy occupancy judged from `mover`'s side.
///
/// The piece class is a closed enum, so the "unknown piece kind" failure of
/// the encoded form cannot occur here; it is caught by the codec when
/// corrupted data tries to enter the engine.
pub fn generate_moves(
    board: &Board,
    origin: BoardLocation,
    piece: &PieceRecord,
    mover: PieceTeam,
) -> Vec<BoardLocation> {
    let mut destinations = Vec::new();
    match piece.class {
        PieceClass::Pawn => generate_pawn_moves(board, origin, piece, mover, &mut destinations),
        PieceClass::Knight => generate_knight_moves(board, origin, mover, &mut destinations),
        PieceClass::Bishop => generate_bishop_moves(board, origin, mover, &mut destinations),
        PieceClass::Rook => generate_rook_moves(board, origin, mover, &mut destinations),
        PieceClass::Queen => generate_queen_moves(board, origin, mover, &mut destinations),
        PieceClass::King => generate_king_moves(board, origin, mover, &mut destinations),
    }
    destinations
}

/// Destinations for the piece on `coords`, as shown to the UI.
///
/// An empty square or a piece of the inactive team yields an empty list;
/// coordinates off the board are a hard `OutOfBounds` failure.
pub fn legal_moves(
    game: &GameState,
    coords: BoardLocation,
) -> Result<Vec<BoardLocation>, EngineError> {
    match game.board.get(coords)? {
        Square::Empty => Ok(Vec::new()),
        Square::Occupied(piece) if piece.team != game.turn => Ok(Vec::new()),
        Square::Occupied(piece) => Ok(generate_moves(&game.board, coords, &piece, game.turn)),
    }
}

/// Like [`legal_moves`], but first verifies that `claimed` is what actually
/// stands on `coords`.
///
/// A mismatch means the caller's board tracking has diverged from the
/// engine's and is fatal; the engine refuses to guess or repair state.
pub fn legal_moves_for_claimed(
    game: &GameState,
    coords: BoardLocation,
    claimed: &PieceRecord,
) -> Result<Vec<BoardLocation>, EngineError> {
    let square = game.board.get(coords)?;
    match square {
        Square::Occupied(found) if found == *claimed => legal_moves(game, coords),
        _ => {
            let fault = EngineError::DesyncFault {
                location: coords,
                expected: encode_piece(claimed),
                found: encode_square(&square),
            };
            log::error!("{fault}");
            Err(fault)
        }
    }
}
