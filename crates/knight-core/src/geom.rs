//! Geometry primitives: [`Point`], [`Range`] and the 8×8 [`BOARD`].

use std::fmt;
use std::num::IntErrorKind;
use std::ops::{Add, Sub};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A square on the board, as an integer `(x, y)` pair.
///
/// Points may lie off the board (move generation produces such candidates);
/// use [`Point::on_board`] to check.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[i32; 2]", into = "[i32; 2]"))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether the point is one of the 64 squares of [`BOARD`].
    #[inline]
    pub fn on_board(self) -> bool {
        BOARD.contains(self)
    }
}

// --- trait impls for Point ---

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<[i32; 2]> for Point {
    #[inline]
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [i32; 2] {
    #[inline]
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl TryFrom<&[i32]> for Point {
    type Error = ParsePointError;

    /// Build a point from a component slice. Only the arity is checked here,
    /// not board bounds.
    fn try_from(components: &[i32]) -> Result<Self, Self::Error> {
        match *components {
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(ParsePointError::Arity(components.len())),
        }
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    /// Accepts `x,y`, `[x, y]` and `(x, y)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = parse_components(s)?;
        Point::try_from(components.as_slice())
    }
}

/// Split a textual coordinate into its integer components, without checking
/// the arity. Surrounding brackets or parentheses are ignored. Integers that
/// overflow `i32` saturate, so they still read as off-board components.
pub fn parse_components(s: &str) -> Result<Vec<i32>, ParsePointError> {
    let inner = s.trim();
    let inner = inner
        .strip_prefix('[')
        .and_then(|r| r.strip_suffix(']'))
        .or_else(|| inner.strip_prefix('(').and_then(|r| r.strip_suffix(')')))
        .unwrap_or(inner);
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }
    inner
        .split(',')
        .map(|part| {
            let part = part.trim();
            match part.parse::<i32>() {
                Ok(v) => Ok(v),
                // Too large for i32, but still an integer: keep it off the board.
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(i32::MAX),
                Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(i32::MIN),
                Err(_) => Err(ParsePointError::InvalidComponent(part.to_string())),
            }
        })
        .collect()
}

/// Errors that can occur when reading a [`Point`] from text or a slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePointError {
    /// The input did not have exactly two components.
    Arity(usize),
    /// A component was not an integer.
    InvalidComponent(String),
}

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arity(n) => write!(f, "expected 2 coordinate components, got {n}"),
            Self::InvalidComponent(s) => {
                write!(f, "invalid coordinate component \u{201c}{s}\u{201d}")
            }
        }
    }
}

impl std::error::Error for ParsePointError {}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

/// Side length of the chessboard.
pub const BOARD_SIZE: i32 = 8;

/// The chessboard: every valid square, `[0, 8) × [0, 8)`.
pub const BOARD: Range = Range {
    min: Point::ZERO,
    max: Point::new(BOARD_SIZE, BOARD_SIZE),
};

impl Range {
    /// Width of the range.
    #[inline]
    pub const fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the range.
    #[inline]
    pub const fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of cells in the range.
    #[inline]
    pub const fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub const fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Row-major index of `p`, or `None` if it lies outside the range.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let x = (p.x - self.min.x) as usize;
        let y = (p.y - self.min.y) as usize;
        Some(y * self.width() as usize + x)
    }

    /// Inverse of [`Range::index`]. `idx` must be below [`Range::len`].
    #[inline]
    pub fn point(self, idx: usize) -> Point {
        let w = self.width() as usize;
        Point::new((idx % w) as i32 + self.min.x, (idx / w) as i32 + self.min.y)
    }

    /// Row-major iterator over every point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.y >= self.range.max.y {
            return (0, Some(0));
        }
        let w = self.range.width() as usize;
        let remaining_in_row = (self.range.max.x - self.cur.x) as usize;
        let remaining_rows = (self.range.max.y - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_serializes_as_pair() {
        let json = serde_json::to_string(&Point::new(3, 7)).unwrap();
        assert_eq!(json, "[3,7]");
        let back: Point = serde_json::from_str("[0,6]").unwrap();
        assert_eq!(back, Point::new(0, 6));
    }

    #[test]
    fn board_round_trip() {
        let json = serde_json::to_string(&BOARD).unwrap();
        let back: Range = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BOARD);
    }
}
