//! Rook move generation: the four orthogonal rays.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::piece_team::PieceTeam;

/// Orthogonal ray directions in source order.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn generate_rook_moves(
    board: &Board,
    origin: BoardLocation,
    mover: PieceTeam,
    out: &mut Vec<BoardLocation>,
) {
    for (d_file, d_rank) in ROOK_DIRECTIONS {
        push_ray_moves(board, out, &origin, d_file, d_rank, mover);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Square;
    use crate::piece_class::PieceClass;
    use crate::piece_record::PieceRecord;

    fn place(board: &mut Board, location: BoardLocation, class: PieceClass, team: PieceTeam) {
        board
            .place(location, Square::Occupied(PieceRecord::new(class, team, 0)))
            .unwrap();
    }

    #[test]
    fn rook_in_the_middle_of_an_empty_board_has_fourteen_moves() {
        let board = Board::empty();
        let mut out = Vec::new();
        generate_rook_moves(&board, (3, 3), PieceTeam::Dark, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn cornered_light_rook_runs_up_to_an_enemy_blocker() {
        // Scenario: light rook at (0,7), enemy at (0,3), friendly at (1,7).
        let mut board = Board::empty();
        place(&mut board, (0, 7), PieceClass::Rook, PieceTeam::Light);
        place(&mut board, (0, 3), PieceClass::Pawn, PieceTeam::Dark);
        place(&mut board, (1, 7), PieceClass::Knight, PieceTeam::Light);

        let mut out = Vec::new();
        generate_rook_moves(&board, (0, 7), PieceTeam::Light, &mut out);
        assert_eq!(out, vec![(0, 6), (0, 5), (0, 4), (0, 3)]);
    }

    #[test]
    fn friendly_blocker_is_excluded_with_nothing_beyond() {
        let mut board = Board::empty();
        place(&mut board, (5, 3), PieceClass::Pawn, PieceTeam::Dark);

        let mut out = Vec::new();
        generate_rook_moves(&board, (3, 3), PieceTeam::Dark, &mut out);
        assert!(out.contains(&(4, 3)));
        assert!(!out.contains(&(5, 3)));
        assert!(!out.contains(&(6, 3)));
    }
}
