//! Layout-to-board parser.
//!
//! Restores a `Board` from the persisted 8x8 array of encoded square tokens
//! produced by `layout_generator`. Shape problems surface as
//! `MalformedEncoding`; token problems keep the codec's own error, so a
//! corrupt piece kind still reads as the fatal `UnknownPieceKind`.

use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::piece_codec::decode_square;

pub fn parse_layout<R: AsRef<[String]>>(rows: &[R]) -> Result<Board, EngineError> {
    if rows.len() != 8 {
        return Err(EngineError::MalformedEncoding(format!(
            "layout must contain 8 rows, found {}",
            rows.len()
        )));
    }

    let mut board = Board::empty();
    for (y, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != 8 {
            return Err(EngineError::MalformedEncoding(format!(
                "layout row {y} must contain 8 squares, found {}",
                row.len()
            )));
        }
        for (x, token) in row.iter().enumerate() {
            let square = decode_square(token)?;
            board.place((x as i8, y as i8), square)?;
        }
    }

    Ok(board)
}
