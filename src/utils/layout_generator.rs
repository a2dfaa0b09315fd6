//! Board-to-layout serializer.
//!
//! Produces the persisted board representation: an 8x8 array of encoded
//! square tokens, row-major from rank 0 (Dark's back rank) to rank 7, files
//! 0..7 left to right. The inverse lives in `layout_parser`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::piece_codec::encode_square;

pub fn generate_layout(board: &Board) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(8);
    for y in 0..8i8 {
        let mut row = Vec::with_capacity(8);
        for x in 0..8i8 {
            // Coordinates iterate the full grid, so the read cannot fail.
            let square = board.get((x, y)).unwrap_or(Square::Empty);
            row.push(encode_square(&square));
        }
        rows.push(row);
    }
    rows
}
