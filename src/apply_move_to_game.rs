//! Validated move application.
//!
//! Applies a proposed move to a game state, returning the resulting state or
//! an error. The input state is borrowed and cloned, so rejected moves leave
//! the caller's state untouched by construction; only the returned snapshot
//! carries the mutation.

use crate::board_location::BoardLocation;
use crate::errors::EngineError;
use crate::game_state::chess_types::{MoveOutcome, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::generate_moves;
use crate::piece_class::PieceClass;
use crate::piece_codec::encode_piece;

/// Applies the move `from` -> `to` for the active team.
///
/// Preconditions, checked in order:
/// 1. both coordinates lie on the board (`OutOfBounds`),
/// 2. `from` holds a piece of the active team (`NotYourTurn`),
/// 3. `to` is among the piece's generated destinations (`IllegalMove`).
///
/// On success the returned state has the capture (if any) appended to the
/// mover's graveyard, a moving pawn marked as having moved, the piece
/// relocated, and the turn advanced. `MoveOutcome` reports the captured
/// piece's class and team for UI feedback.
pub fn apply_move_to_game(
    game: &GameState,
    from: BoardLocation,
    to: BoardLocation,
) -> Result<(GameState, MoveOutcome), EngineError> {
    let from_square = game.board.get(from)?;
    let to_square = game.board.get(to)?;

    let piece = match from_square {
        Square::Occupied(piece) if piece.team == game.turn => piece,
        _ => return Err(EngineError::NotYourTurn),
    };

    let destinations = generate_moves(&game.board, from, &piece, game.turn);
    if !destinations.contains(&to) {
        return Err(EngineError::IllegalMove);
    }

    let mut result = game.clone();
    let mut outcome = MoveOutcome { captured: None };

    if let Square::Occupied(captured) = to_square {
        result.graveyards[game.turn.index()].push(captured);
        result.board.clear(to)?;
        outcome.captured = Some((captured.class, captured.team));
        log::debug!(
            "{} captured at {to:?} by {}",
            encode_piece(&captured),
            encode_piece(&piece)
        );
    }

    let mut moved = piece;
    if matches!(moved.class, PieceClass::Pawn) {
        moved.mark_moved();
    }

    result.board.clear(from)?;
    result.board.place(to, Square::Occupied(moved))?;
    result.advance_turn();

    log::debug!(
        "{} moved {from:?} -> {to:?}, turn {} next",
        encode_piece(&moved),
        result.turn_count
    );

    Ok((result, outcome))
}
