//! The 8x8 board grid.
//!
//! `Board` owns exactly 64 squares indexed by `(file x, rank y)` with rank 0
//! at the top (Dark's back rank). Reads are available to every subsystem;
//! the `place`/`clear` mutators are reserved for move application, which
//! clones the board and commits a fresh snapshot instead of editing shared
//! state in place.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::board_location::{is_on_board, BoardLocation};
use crate::errors::EngineError;
use crate::game_state::chess_types::Square;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;
use crate::utils::layout_generator::generate_layout;
use crate::utils::layout_parser::parse_layout;

/// Back-rank piece classes from file 0 to file 7.
const BACK_RANK_CLASSES: [PieceClass; 8] = [
    PieceClass::Rook,
    PieceClass::Knight,
    PieceClass::Bishop,
    PieceClass::Queen,
    PieceClass::King,
    PieceClass::Bishop,
    PieceClass::Knight,
    PieceClass::Rook,
];

/// An 8x8 grid of squares, indexed `[rank y][file x]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; 8]; 8],
}

impl Board {
    /// A board with all 64 squares empty.
    pub fn empty() -> Self {
        Board {
            squares: [[Square::Empty; 8]; 8],
        }
    }

    /// The canonical starting position: Dark on ranks 0-1, Light on ranks
    /// 6-7, back rank r n b q k b n r. Ids are assigned left to right within
    /// each class and team; pawn ids equal their starting file.
    pub fn starting_position() -> Self {
        let mut board = Board::empty();

        for team in [PieceTeam::Dark, PieceTeam::Light] {
            let (back_rank, pawn_rank) = match team {
                PieceTeam::Dark => (0, 1),
                PieceTeam::Light => (7, 6),
            };

            let mut counts = [0u8; 6];
            for (file, class) in BACK_RANK_CLASSES.iter().enumerate() {
                let id = counts[class_slot(*class)];
                counts[class_slot(*class)] += 1;
                board.squares[back_rank][file] =
                    Square::Occupied(PieceRecord::new(*class, team, id));
            }

            for file in 0..8 {
                board.squares[pawn_rank][file] =
                    Square::Occupied(PieceRecord::new(PieceClass::Pawn, team, file as u8));
            }
        }

        board
    }

    /// Reads the square at `location`.
    pub fn get(&self, location: BoardLocation) -> Result<Square, EngineError> {
        if !is_on_board(&location) {
            return Err(EngineError::OutOfBounds);
        }
        Ok(self.squares[location.1 as usize][location.0 as usize])
    }

    /// Overwrites the square at `location`. Reserved for move application.
    pub fn place(&mut self, location: BoardLocation, square: Square) -> Result<(), EngineError> {
        if !is_on_board(&location) {
            return Err(EngineError::OutOfBounds);
        }
        self.squares[location.1 as usize][location.0 as usize] = square;
        Ok(())
    }

    /// Empties the square at `location`. Reserved for move application.
    pub fn clear(&mut self, location: BoardLocation) -> Result<(), EngineError> {
        self.place(location, Square::Empty)
    }
}

// The persisted form of a board is the 8x8 layout of encoded piece tokens,
// not the in-memory grid, so serde goes through the layout codec.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        generate_layout(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<String>>::deserialize(deserializer)?;
        parse_layout(&rows).map_err(D::Error::custom)
    }
}

#[inline]
const fn class_slot(class: PieceClass) -> usize {
    match class {
        PieceClass::Pawn => 0,
        PieceClass::Knight => 1,
        PieceClass::Bishop => 2,
        PieceClass::Rook => 3,
        PieceClass::Queen => 4,
        PieceClass::King => 5,
    }
}
