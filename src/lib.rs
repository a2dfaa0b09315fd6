//! Crate root module declarations for the Quince Chess engine.
//!
//! This file exposes the rules/state engine subsystems (board and game state,
//! piece encoding, move generation, move application, and layout utilities)
//! so binaries, tests, and external tooling can import stable module paths.
//!
//! The crate is a pure library: rendering, pointer input, and persistence I/O
//! live in collaborator processes that drive the engine through
//! [`game_state::game_state::GameState`], `move_generation::move_generator`,
//! and [`apply_move_to_game::apply_move_to_game`].

pub mod board_location;
pub mod errors;
pub mod piece_class;
pub mod piece_codec;
pub mod piece_record;
pub mod piece_team;

pub mod game_state {
    pub mod board;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
}

pub mod apply_move_to_game;

pub mod utils {
    pub mod layout_generator;
    pub mod layout_parser;
    pub mod render_game_state;
}
