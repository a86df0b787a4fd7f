//! Shortest knight-move paths on an 8×8 chessboard.
//!
//! The search is an unweighted breadth-first search over the knight's move
//! graph ([`find_path`]). Each call owns its queue and predecessor record, so
//! calls are independent and may run from several threads at once.
//!
//! - **Path search** ([`find_path`], [`find_path_components`], [`find_path_with`])
//! - **Distance maps** ([`distance_map`])
//! - **Move generation** ([`legal_moves`], [`Knight`])
//!
//! Candidates are generated in the fixed order of [`KNIGHT_OFFSETS`]; among
//! equally short paths, the one discovered first under that order is
//! returned, so results are reproducible.

mod bfs;
mod distance;
mod error;
mod moves;
mod traits;

pub use bfs::{find_path, find_path_components, find_path_with};
pub use distance::{UNREACHABLE, distance_map};
pub use error::PathError;
pub use moves::{KNIGHT_OFFSETS, Knight, is_knight_move, is_valid_coordinate, legal_moves};
pub use traits::Pather;
