use serde::{Deserialize, Serialize};

/// Represents the type (class) of a chess piece.
/// Used to distinguish between pawns, knights, bishops, rooks, queens, and kings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceClass {
    /// A pawn piece.
    Pawn,
    /// A knight piece.
    Knight,
    /// A bishop piece.
    Bishop,
    /// A rook piece.
    Rook,
    /// A queen piece.
    Queen,
    /// A king piece.
    King,
}

impl PieceClass {
    /// The lowercase kind character used by the piece encoding.
    #[inline]
    pub const fn kind_char(self) -> char {
        match self {
            PieceClass::Pawn => 'p',
            PieceClass::Knight => 'n',
            PieceClass::Bishop => 'b',
            PieceClass::Rook => 'r',
            PieceClass::Queen => 'q',
            PieceClass::King => 'k',
        }
    }

    /// Parses a kind character; `None` when the character is not one of the
    /// six recognized kinds.
    #[inline]
    pub fn from_kind_char(c: char) -> Option<Self> {
        match c {
            'p' => Some(PieceClass::Pawn),
            'n' => Some(PieceClass::Knight),
            'b' => Some(PieceClass::Bishop),
            'r' => Some(PieceClass::Rook),
            'q' => Some(PieceClass::Queen),
            'k' => Some(PieceClass::King),
            _ => None,
        }
    }
}
