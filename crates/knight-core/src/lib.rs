//! **knight-core** — chessboard geometry shared by the knight path crates.
//!
//! This crate provides the coordinate type ([`Point`]), half-open rectangles
//! ([`Range`]) and the [`BOARD`] they are checked against.

pub mod geom;

pub use geom::{BOARD, BOARD_SIZE, ParsePointError, Point, Range, RangeIter, parse_components};
