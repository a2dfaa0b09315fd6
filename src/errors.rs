//! Errors used throughout the engine.
//!
//! This module defines the canonical error type returned by game logic, the
//! piece codec, move generation, and move application. The enum
//! [`EngineError`] is used as the single error type across the crate to
//! simplify propagation and matching.
//!
//! Usage guidelines:
//! - `NotYourTurn` and `IllegalMove` are recoverable and user-facing; the
//!   game state is untouched when they are returned and callers should show
//!   feedback and keep playing.
//! - `UnknownPieceKind` and `DesyncFault` indicate corrupted upstream data or
//!   a caller whose board tracking has diverged from the engine's. They are
//!   fatal: callers must stop mutating the game rather than patch over them.

use thiserror::Error;

use crate::board_location::BoardLocation;

/// Unified error type for the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Coordinates fall outside the 8x8 board.
    #[error("coordinates fall outside the 8x8 board")]
    OutOfBounds,

    /// An encoded piece or layout token failed to parse.
    ///
    /// Payload: a description of what was wrong with the token.
    #[error("malformed piece encoding: {0}")]
    MalformedEncoding(String),

    /// An encoded token names a piece kind outside the six recognized kinds.
    ///
    /// Fatal: the persisted data the caller handed over is corrupt.
    #[error("unknown piece kind '{0}' in encoded data")]
    UnknownPieceKind(char),

    /// The origin square does not hold a piece of the team whose turn it is.
    #[error("it is not that piece's turn to move")]
    NotYourTurn,

    /// The proposed destination is not among the piece's legal moves.
    #[error("that destination is not a legal move for the piece")]
    IllegalMove,

    /// The caller's claimed occupant of a square does not match the board.
    ///
    /// Fatal: the engine and its presentation collaborator have diverged and
    /// the engine must not guess which side is right. Payloads are encoded
    /// square tokens for diagnostics.
    #[error("board desync at {location:?}: caller expected '{expected}', board holds '{found}'")]
    DesyncFault {
        location: BoardLocation,
        expected: String,
        found: String,
    },
}
