//! Compact piece-string codec.
//!
//! Pieces cross the engine boundary (persisted layouts, desync diagnostics)
//! as short tokens: a kind character (`p n b r q k`), a color character
//! (`l` light, `d` dark), one id digit, and an optional trailing `f` marking
//! a pawn that has not yet moved. An empty square is the single token `e`.
//!
//! The codec is pure and lives only at the boundary; internal logic works on
//! [`PieceRecord`] values and never re-parses strings.

use crate::errors::EngineError;
use crate::game_state::chess_types::Square;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;

/// Token for an empty square in encoded layouts.
pub const EMPTY_TOKEN: &str = "e";

/// Encodes a piece as its canonical token.
pub fn encode_piece(piece: &PieceRecord) -> String {
    let mut token = String::with_capacity(4);
    token.push(piece.class.kind_char());
    token.push(piece.team.color_char());
    token.push(char::from(b'0' + piece.id % 10));
    if matches!(piece.class, PieceClass::Pawn) && !piece.has_moved {
        token.push('f');
    }
    token
}

/// Decodes a piece token.
///
/// # Returns
///
/// * `EngineError::UnknownPieceKind` when the kind character is outside the
///   six recognized kinds (fatal, the encoded data is corrupt).
/// * `EngineError::MalformedEncoding` for any other structural problem:
///   a bad color character, a missing or non-digit id, a stray flag, or
///   trailing characters.
pub fn decode_piece(token: &str) -> Result<PieceRecord, EngineError> {
    let mut chars = token.chars();

    let kind_char = chars
        .next()
        .ok_or_else(|| EngineError::MalformedEncoding("empty piece token".to_owned()))?;
    let class = PieceClass::from_kind_char(kind_char)
        .ok_or(EngineError::UnknownPieceKind(kind_char))?;

    let color_char = chars.next().ok_or_else(|| {
        EngineError::MalformedEncoding(format!("token '{token}' is missing its color character"))
    })?;
    let team = PieceTeam::from_color_char(color_char).ok_or_else(|| {
        EngineError::MalformedEncoding(format!("invalid color character '{color_char}'"))
    })?;

    let id_char = chars.next().ok_or_else(|| {
        EngineError::MalformedEncoding(format!("token '{token}' is missing its id digit"))
    })?;
    let id = id_char.to_digit(10).ok_or_else(|| {
        EngineError::MalformedEncoding(format!("invalid id digit '{id_char}'"))
    })? as u8;

    let mut piece = PieceRecord::new(class, team, id);

    match chars.next() {
        None => {
            // Absent flag on a pawn means the pawn has already moved.
            if matches!(class, PieceClass::Pawn) {
                piece.has_moved = true;
            }
        }
        Some('f') => {
            if !matches!(class, PieceClass::Pawn) {
                return Err(EngineError::MalformedEncoding(format!(
                    "flag 'f' is only valid on pawns, not '{token}'"
                )));
            }
            if chars.next().is_some() {
                return Err(EngineError::MalformedEncoding(format!(
                    "trailing characters after flag in '{token}'"
                )));
            }
        }
        Some(other) => {
            return Err(EngineError::MalformedEncoding(format!(
                "unexpected character '{other}' in '{token}'"
            )));
        }
    }

    Ok(piece)
}

/// Encodes a square: `e` when empty, the piece token otherwise.
pub fn encode_square(square: &Square) -> String {
    match square {
        Square::Empty => EMPTY_TOKEN.to_owned(),
        Square::Occupied(piece) => encode_piece(piece),
    }
}

/// Decodes a square token, accepting `e` for an empty square.
pub fn decode_square(token: &str) -> Result<Square, EngineError> {
    if token == EMPTY_TOKEN {
        Ok(Square::Empty)
    } else {
        decode_piece(token).map(Square::Occupied)
    }
}
