use knight_core::{BOARD_SIZE, Point};

use crate::traits::Pather;

/// The eight knight offsets, in generation order.
///
/// This order decides which path is returned when several shortest paths
/// exist.
pub const KNIGHT_OFFSETS: [Point; 8] = [
    Point::new(2, 1),
    Point::new(2, -1),
    Point::new(-2, 1),
    Point::new(-2, -1),
    Point::new(1, 2),
    Point::new(1, -2),
    Point::new(-1, 2),
    Point::new(-1, -2),
];

/// Whether `pos` has exactly two components, each in `0..=7`.
#[inline]
pub fn is_valid_coordinate(pos: &[i32]) -> bool {
    match *pos {
        [x, y] => (0..BOARD_SIZE).contains(&x) && (0..BOARD_SIZE).contains(&y),
        _ => false,
    }
}

/// The eight knight move candidates from `pos`, unfiltered for board bounds.
///
/// `pos` must be on the board (see [`Point::on_board`]); the offsets are
/// added without overflow checks.
#[inline]
pub fn legal_moves(pos: Point) -> [Point; 8] {
    KNIGHT_OFFSETS.map(|d| pos + d)
}

/// Whether `from` → `to` is a single knight move.
///
/// Both squares must be on the board or within two squares of it.
#[inline]
pub fn is_knight_move(from: Point, to: Point) -> bool {
    let d = to - from;
    let (dx, dy) = (d.x.abs(), d.y.abs());
    (dx == 1 && dy == 2) || (dx == 2 && dy == 1)
}

/// The knight's move graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Knight;

impl Pather for Knight {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(legal_moves(p));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_core::BOARD;

    #[test]
    fn valid_coordinate_shape_and_bounds() {
        assert!(is_valid_coordinate(&[0, 0]));
        assert!(is_valid_coordinate(&[7, 7]));
        assert!(is_valid_coordinate(&[3, 5]));
        assert!(!is_valid_coordinate(&[8, 0]));
        assert!(!is_valid_coordinate(&[-1, 3]));
        assert!(!is_valid_coordinate(&[0, 8]));
        assert!(!is_valid_coordinate(&[3]));
        assert!(!is_valid_coordinate(&[]));
        assert!(!is_valid_coordinate(&[1, 2, 3]));
    }

    #[test]
    fn valid_coordinate_agrees_with_on_board() {
        for x in -2..10 {
            for y in -2..10 {
                assert_eq!(is_valid_coordinate(&[x, y]), Point::new(x, y).on_board());
            }
        }
    }

    #[test]
    fn legal_moves_order() {
        let moves = legal_moves(Point::new(3, 3));
        assert_eq!(
            moves,
            [
                Point::new(5, 4),
                Point::new(5, 2),
                Point::new(1, 4),
                Point::new(1, 2),
                Point::new(4, 5),
                Point::new(4, 1),
                Point::new(2, 5),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn legal_moves_not_filtered() {
        let moves = legal_moves(Point::new(0, 0));
        assert_eq!(moves.len(), 8);
        assert_eq!(moves.iter().filter(|p| p.on_board()).count(), 2);
        assert!(moves.contains(&Point::new(-2, -1)));
    }

    #[test]
    fn candidates_stay_within_two_squares_of_board() {
        for p in BOARD {
            for m in legal_moves(p) {
                let near = -2..BOARD_SIZE + 2;
                assert!(near.contains(&m.x) && near.contains(&m.y), "{p} -> {m}");
            }
        }
    }

    #[test]
    fn every_candidate_is_a_knight_move() {
        for p in BOARD {
            for m in legal_moves(p) {
                assert!(is_knight_move(p, m));
            }
        }
        assert!(!is_knight_move(Point::new(0, 0), Point::new(1, 1)));
        assert!(!is_knight_move(Point::new(0, 0), Point::new(0, 0)));
        assert!(!is_knight_move(Point::new(0, 0), Point::new(2, 2)));
    }

    #[test]
    fn knight_pather_appends_in_order() {
        let mut buf = Vec::new();
        Knight.neighbors(Point::new(4, 4), &mut buf);
        assert_eq!(buf, legal_moves(Point::new(4, 4)).to_vec());
    }
}
