use crate::{piece_class::PieceClass, piece_team::PieceTeam};

/// Represents a chess piece with its class, team, and bookkeeping fields.
/// Used to store information about a piece occupying a board square.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceRecord {
    /// The class (type) of the piece (e.g., pawn, knight).
    pub class: PieceClass,
    /// Piece team.
    pub team: PieceTeam,
    /// Small integer distinguishing pieces of the same class and team in the
    /// encoding. Never consulted by rule logic.
    pub id: u8,
    /// Whether the piece has completed a move. Meaningful only for pawns,
    /// which lose their two-square advance once this is set; other classes
    /// ignore it. Once set it never reverts.
    pub has_moved: bool,
}

impl PieceRecord {
    #[inline]
    pub const fn new(class: PieceClass, team: PieceTeam, id: u8) -> Self {
        PieceRecord {
            class,
            team,
            id,
            has_moved: false,
        }
    }

    /// Clears the not-yet-moved state. There is deliberately no inverse.
    #[inline]
    pub fn mark_moved(&mut self) {
        self.has_moved = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pieces_have_not_moved() {
        let pawn = PieceRecord::new(PieceClass::Pawn, PieceTeam::Dark, 4);
        assert!(!pawn.has_moved);
    }

    #[test]
    fn marking_moved_sticks() {
        let mut pawn = PieceRecord::new(PieceClass::Pawn, PieceTeam::Light, 0);
        pawn.mark_moved();
        assert!(pawn.has_moved);
        pawn.mark_moved();
        assert!(pawn.has_moved);
    }
}
