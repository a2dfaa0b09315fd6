//! Shared game-state value types.
//!
//! Re-exports the board and state structs so call sites can pull everything
//! from one path, mirroring how the board module is consumed by move
//! generation and application.

use serde::{Deserialize, Serialize};

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;

/// Contents of one board square.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Square {
    /// No piece on the square.
    Empty,
    /// The square holds exactly this piece.
    Occupied(PieceRecord),
}

impl Square {
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Square::Empty)
    }

    /// The occupying piece, if any.
    #[inline]
    pub const fn piece(&self) -> Option<&PieceRecord> {
        match self {
            Square::Empty => None,
            Square::Occupied(piece) => Some(piece),
        }
    }
}

/// Informational result of a completed move, for UI feedback only.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Class and team of the captured piece when the move was a capture.
    pub captured: Option<(PieceClass, PieceTeam)>,
}

impl MoveOutcome {
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}
