//! Core game state representation.
//!
//! `GameState` is the central model for the engine. It stores the board
//! grid, the active team, the turn counter, and the per-team graveyards of
//! captured pieces. It is created once per game and mutated exclusively by
//! move application; every other subsystem reads it.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;

/// Turn counter value before the first move has completed.
///
/// The source game counts from -1 and opens with Dark to move; both are
/// preserved as observed conventions rather than corrected.
pub const TURN_COUNT_START: i32 = -1;

/// Full state of one game in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// The 8x8 grid of squares.
    pub board: Board,
    /// The team whose turn it is.
    pub turn: PieceTeam,
    /// Completed-move counter, starting at [`TURN_COUNT_START`].
    pub turn_count: i32,
    /// Captured pieces in capture order, indexed by the capturing team
    /// (`PieceTeam::index`).
    pub graveyards: [Vec<PieceRecord>; 2],
}

impl GameState {
    /// A fresh game at the canonical starting position, Dark to move.
    pub fn new_game() -> Self {
        GameState {
            board: Board::starting_position(),
            turn: PieceTeam::Dark,
            turn_count: TURN_COUNT_START,
            graveyards: [Vec::new(), Vec::new()],
        }
    }

    /// The team whose turn it is.
    #[inline]
    pub fn active_team(&self) -> PieceTeam {
        self.turn
    }

    /// Captured pieces taken by `team`, in capture order.
    #[inline]
    pub fn graveyard(&self, team: PieceTeam) -> &[PieceRecord] {
        &self.graveyards[team.index()]
    }

    /// Locations of every piece the active team may pick up this turn.
    ///
    /// This query is the single source of truth for selectability: the UI
    /// polls it instead of tracking per-piece movable flags of its own.
    pub fn movable_pieces(&self) -> Vec<BoardLocation> {
        let mut locations = Vec::new();
        for y in 0..8i8 {
            for x in 0..8i8 {
                if let Ok(Square::Occupied(piece)) = self.board.get((x, y)) {
                    if piece.team == self.turn {
                        locations.push((x, y));
                    }
                }
            }
        }
        locations
    }

    /// Flips the active team and counts the completed move. Called by move
    /// application after a successful commit.
    pub fn advance_turn(&mut self) {
        self.turn = self.turn.opposite();
        self.turn_count += 1;
    }
}
