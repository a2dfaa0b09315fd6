//! Pawn move generation.
//!
//! Pawns are the only directional piece: Light marches toward rank 0, Dark
//! toward rank 7. Forward steps require empty squares; the two-square
//! advance additionally requires an unmoved pawn and an empty intermediate
//! square; diagonals are captures only and never land on empty squares
//! (en passant is out of scope).

use crate::board_location::{offset_location, BoardLocation};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::enemy_occupies;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;

pub fn generate_pawn_moves(
    board: &Board,
    origin: BoardLocation,
    piece: &PieceRecord,
    mover: PieceTeam,
    out: &mut Vec<BoardLocation>,
) {
    let forward = piece.team.forward_step();

    // Single advance onto an empty square.
    if let Ok(one_step) = offset_location(&origin, 0, forward) {
        if matches!(board.get(one_step), Ok(Square::Empty)) {
            out.push(one_step);

            // Double advance: unmoved pawn, both squares empty.
            if !piece.has_moved {
                if let Ok(two_step) = offset_location(&origin, 0, 2 * forward) {
                    if matches!(board.get(two_step), Ok(Square::Empty)) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    // Diagonal captures, attack right then attack left (source order).
    for d_file in [1i8, -1i8] {
        if let Ok(diagonal) = offset_location(&origin, d_file, forward) {
            if enemy_occupies(board, diagonal, mover) {
                out.push(diagonal);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;
    use crate::piece_class::PieceClass;

    fn pawn(team: PieceTeam) -> PieceRecord {
        PieceRecord::new(PieceClass::Pawn, team, 0)
    }

    fn occupy(board: &mut Board, location: BoardLocation, team: PieceTeam) {
        board
            .place(
                location,
                Square::Occupied(PieceRecord::new(PieceClass::Knight, team, 0)),
            )
            .unwrap();
    }

    #[test]
    fn unmoved_dark_pawn_from_the_start_position_may_advance_twice() {
        // Scenario: dark pawn at (4,1) with (4,2) and (4,3) empty.
        let game = GameState::new_game();
        let piece = *game.board.get((4, 1)).unwrap().piece().unwrap();
        assert!(!piece.has_moved);

        let mut out = Vec::new();
        generate_pawn_moves(&game.board, (4, 1), &piece, PieceTeam::Dark, &mut out);
        assert!(out.contains(&(4, 2)));
        assert!(out.contains(&(4, 3)));
    }

    #[test]
    fn moved_pawn_loses_the_double_advance() {
        let board = Board::empty();
        let mut piece = pawn(PieceTeam::Dark);
        piece.mark_moved();

        let mut out = Vec::new();
        generate_pawn_moves(&board, (4, 3), &piece, PieceTeam::Dark, &mut out);
        assert_eq!(out, vec![(4, 4)]);
    }

    #[test]
    fn light_pawns_march_toward_rank_zero() {
        let board = Board::empty();
        let mut out = Vec::new();
        generate_pawn_moves(&board, (3, 6), &pawn(PieceTeam::Light), PieceTeam::Light, &mut out);
        assert_eq!(out, vec![(3, 5), (3, 4)]);
    }

    #[test]
    fn blocked_pawn_cannot_advance_at_all() {
        let mut board = Board::empty();
        occupy(&mut board, (4, 2), PieceTeam::Light);

        let mut out = Vec::new();
        generate_pawn_moves(&board, (4, 1), &pawn(PieceTeam::Dark), PieceTeam::Dark, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn blocked_intermediate_square_denies_only_the_double_advance() {
        let mut board = Board::empty();
        occupy(&mut board, (4, 3), PieceTeam::Light);

        let mut out = Vec::new();
        generate_pawn_moves(&board, (4, 1), &pawn(PieceTeam::Dark), PieceTeam::Dark, &mut out);
        assert_eq!(out, vec![(4, 2)]);
    }

    #[test]
    fn diagonals_require_an_enemy_occupant() {
        let mut board = Board::empty();
        occupy(&mut board, (5, 2), PieceTeam::Light);
        occupy(&mut board, (3, 2), PieceTeam::Dark);

        let mut out = Vec::new();
        generate_pawn_moves(&board, (4, 1), &pawn(PieceTeam::Dark), PieceTeam::Dark, &mut out);
        // Forward squares plus the enemy diagonal; the friendly diagonal and
        // the empty diagonal are never offered.
        assert_eq!(out, vec![(4, 2), (4, 3), (5, 2)]);
    }

    #[test]
    fn pawn_on_the_last_rank_has_no_forward_moves() {
        let board = Board::empty();
        let mut out = Vec::new();
        generate_pawn_moves(&board, (4, 7), &pawn(PieceTeam::Dark), PieceTeam::Dark, &mut out);
        assert!(out.is_empty());
    }
}
