//! Move notation for a 3x3x3 cube.
//!
//! A move is written as a face letter (`L`, `R`, `U`, `D`, `F`, or `B`),
//! optionally followed by `'` for a counterclockwise turn and then `2` for a
//! half turn. For example: `R`, `U'`, `F2`, `B'2`.

mod error;
mod face;
mod moves;
mod parse;

pub use error::MoveError;
pub use face::{Axis, Face, Sign};
pub use moves::{Move, format_moves, invert_sequence};
pub use parse::{ParseError, parse_move, parse_moves};
