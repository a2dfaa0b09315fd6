use crate::errors::EngineError;

/// A square coordinate as `(file x, rank y)`, each in `0..=7` when on board.
///
/// Rank 0 is Dark's back rank at the top of the board; rank 7 is Light's.
pub type BoardLocation = (i8, i8);

/// Returns true when the location lies within the 8x8 grid.
#[inline]
pub fn is_on_board(location: &BoardLocation) -> bool {
    (0..=7).contains(&location.0) && (0..=7).contains(&location.1)
}

/// Offsets a board location by a file and rank delta.
///
/// # Returns
///
/// * `Result<BoardLocation, EngineError>` - The new location if it stays on
///   the board, otherwise `EngineError::OutOfBounds`.
pub fn offset_location(
    origin: &BoardLocation,
    d_file: i8,
    d_rank: i8,
) -> Result<BoardLocation, EngineError> {
    let target: BoardLocation = (origin.0 + d_file, origin.1 + d_rank);
    if is_on_board(&target) {
        Ok(target)
    } else {
        Err(EngineError::OutOfBounds)
    }
}
