//! Queen move generation: the union of bishop and rook rays, diagonals
//! first (source order).

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::piece_team::PieceTeam;

pub fn generate_queen_moves(
    board: &Board,
    origin: BoardLocation,
    mover: PieceTeam,
    out: &mut Vec<BoardLocation>,
) {
    generate_bishop_moves(board, origin, mover, out);
    generate_rook_moves(board, origin, mover, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Square;
    use crate::piece_class::PieceClass;
    use crate::piece_record::PieceRecord;

    #[test]
    fn queen_in_the_middle_of_an_empty_board_has_twenty_seven_moves() {
        let board = Board::empty();
        let mut out = Vec::new();
        generate_queen_moves(&board, (3, 3), PieceTeam::Light, &mut out);
        assert_eq!(out.len(), 27);
    }

    #[test]
    fn diagonal_destinations_come_before_orthogonal_ones() {
        let board = Board::empty();
        let mut out = Vec::new();
        generate_queen_moves(&board, (3, 3), PieceTeam::Light, &mut out);
        assert_eq!(out[0], (4, 4));
        let first_orthogonal = out.iter().position(|&(x, y)| x == 3 || y == 3).unwrap();
        assert_eq!(out[first_orthogonal], (4, 3));
    }

    #[test]
    fn queen_respects_blockers_on_both_ray_families() {
        let mut board = Board::empty();
        board
            .place(
                (3, 5),
                Square::Occupied(PieceRecord::new(PieceClass::Pawn, PieceTeam::Light, 0)),
            )
            .unwrap();
        board
            .place(
                (5, 5),
                Square::Occupied(PieceRecord::new(PieceClass::Pawn, PieceTeam::Dark, 0)),
            )
            .unwrap();

        let mut out = Vec::new();
        generate_queen_moves(&board, (3, 3), PieceTeam::Light, &mut out);
        assert!(out.contains(&(5, 5)));
        assert!(!out.contains(&(6, 6)));
        assert!(out.contains(&(3, 4)));
        assert!(!out.contains(&(3, 5)));
        assert!(!out.contains(&(3, 6)));
    }
}
