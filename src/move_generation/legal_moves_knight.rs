//! Knight move generation: the eight L-shaped offsets, each a destination
//! when on the board and not held by a friendly piece.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::move_generation::legal_move_shared::push_step_if_movable;
use crate::piece_team::PieceTeam;

/// Offsets in the order the source game probes them.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

pub fn generate_knight_moves(
    board: &Board,
    origin: BoardLocation,
    mover: PieceTeam,
    out: &mut Vec<BoardLocation>,
) {
    for (d_file, d_rank) in KNIGHT_OFFSETS {
        push_step_if_movable(board, out, &origin, d_file, d_rank, mover);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Square;
    use crate::piece_class::PieceClass;
    use crate::piece_record::PieceRecord;

    #[test]
    fn knight_in_the_middle_of_an_empty_board_has_eight_moves() {
        let board = Board::empty();
        let mut out = Vec::new();
        generate_knight_moves(&board, (3, 3), PieceTeam::Light, &mut out);
        assert_eq!(out.len(), 8);
        assert!(out.contains(&(5, 4)));
        assert!(out.contains(&(1, 2)));
    }

    #[test]
    fn cornered_knight_has_two_moves() {
        let board = Board::empty();
        let mut out = Vec::new();
        generate_knight_moves(&board, (0, 0), PieceTeam::Dark, &mut out);
        assert_eq!(out, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn friendly_pieces_block_and_enemies_are_capturable() {
        let mut board = Board::empty();
        board
            .place(
                (5, 4),
                Square::Occupied(PieceRecord::new(PieceClass::Pawn, PieceTeam::Light, 0)),
            )
            .unwrap();
        board
            .place(
                (1, 2),
                Square::Occupied(PieceRecord::new(PieceClass::Pawn, PieceTeam::Dark, 0)),
            )
            .unwrap();

        let mut out = Vec::new();
        generate_knight_moves(&board, (3, 3), PieceTeam::Light, &mut out);
        assert!(!out.contains(&(5, 4)));
        assert!(out.contains(&(1, 2)));
        assert_eq!(out.len(), 7);
    }
}
