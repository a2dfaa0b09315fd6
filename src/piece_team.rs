use serde::{Deserialize, Serialize};

/// Represents the team (color) of a chess piece.
/// Used to distinguish between dark (black) and light (white) pieces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceTeam {
    /// The light (white) side.
    Light,
    /// The dark (black) side.
    Dark,
}

impl PieceTeam {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceTeam::Light => PieceTeam::Dark,
            PieceTeam::Dark => PieceTeam::Light,
        }
    }

    /// Index used for per-team arrays such as the graveyards.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceTeam::Light => 0,
            PieceTeam::Dark => 1,
        }
    }

    /// The color character used by the piece encoding.
    #[inline]
    pub const fn color_char(self) -> char {
        match self {
            PieceTeam::Light => 'l',
            PieceTeam::Dark => 'd',
        }
    }

    /// Parses a color character; `None` when the character is not `l` or `d`.
    #[inline]
    pub fn from_color_char(c: char) -> Option<Self> {
        match c {
            'l' => Some(PieceTeam::Light),
            'd' => Some(PieceTeam::Dark),
            _ => None,
        }
    }

    /// Rank delta of a pawn advance for this team.
    ///
    /// Light pawns march toward rank 0 at the top of the board, Dark pawns
    /// toward rank 7.
    #[inline]
    pub const fn forward_step(self) -> i8 {
        match self {
            PieceTeam::Light => -1,
            PieceTeam::Dark => 1,
        }
    }
}
