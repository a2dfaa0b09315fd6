//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable view of a game state for debugging, tests, and
//! diagnostics in text environments. Rank 0 (Dark's back rank) is printed at
//! the top, matching the board's coordinate system.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

/// Render the board and turn status to a Unicode string for terminal output.
pub fn render_game_state(game: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for y in 0..8i8 {
        out.push(char::from(b'0' + y as u8));
        out.push(' ');

        for x in 0..8i8 {
            match game.board.get((x, y)) {
                Ok(Square::Occupied(piece)) => out.push(piece_to_unicode(piece.team, piece.class)),
                _ => out.push('·'),
            }
            if x < 7 {
                out.push(' ');
            }
        }

        out.push('\n');
    }

    let turn = match game.turn {
        PieceTeam::Light => "light",
        PieceTeam::Dark => "dark",
    };
    out.push_str(&format!("turn: {turn} (count {})", game.turn_count));

    out
}

fn piece_to_unicode(team: PieceTeam, class: PieceClass) -> char {
    match (team, class) {
        (PieceTeam::Light, PieceClass::Pawn) => '♙',
        (PieceTeam::Light, PieceClass::Knight) => '♘',
        (PieceTeam::Light, PieceClass::Bishop) => '♗',
        (PieceTeam::Light, PieceClass::Rook) => '♖',
        (PieceTeam::Light, PieceClass::Queen) => '♕',
        (PieceTeam::Light, PieceClass::King) => '♔',
        (PieceTeam::Dark, PieceClass::Pawn) => '♟',
        (PieceTeam::Dark, PieceClass::Knight) => '♞',
        (PieceTeam::Dark, PieceClass::Bishop) => '♝',
        (PieceTeam::Dark, PieceClass::Rook) => '♜',
        (PieceTeam::Dark, PieceClass::Queen) => '♛',
        (PieceTeam::Dark, PieceClass::King) => '♚',
    }
}
