use std::collections::VecDeque;

use knight_core::{BOARD, Point};

use crate::moves::legal_moves;

/// Sentinel value meaning "unreachable" in distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

/// Knight-move distance from `source` to every square, in row-major board
/// order. Squares never reached hold [`UNREACHABLE`]; an off-board source
/// reaches nothing.
pub fn distance_map(source: Point) -> [i32; BOARD.len()] {
    let mut dist = [UNREACHABLE; BOARD.len()];
    let Some(si) = BOARD.index(source) else {
        return dist;
    };
    dist[si] = 0;

    let mut queue: VecDeque<usize> = VecDeque::with_capacity(BOARD.len());
    queue.push_back(si);

    while let Some(ci) = queue.pop_front() {
        let nd = dist[ci] + 1;
        for np in legal_moves(BOARD.point(ci)) {
            let Some(ni) = BOARD.index(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = nd;
            queue.push_back(ni);
        }
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_map() {
        let dist = distance_map(Point::new(0, 0));
        assert_eq!(dist[BOARD.index(Point::new(0, 0)).unwrap()], 0);
        assert_eq!(dist[BOARD.index(Point::new(1, 2)).unwrap()], 1);
        assert_eq!(dist[BOARD.index(Point::new(1, 1)).unwrap()], 4);
        assert_eq!(dist[BOARD.index(Point::new(7, 7)).unwrap()], 6);
        assert!(dist.iter().all(|&d| d != UNREACHABLE));
    }

    #[test]
    fn off_board_source_reaches_nothing() {
        let dist = distance_map(Point::new(-1, 0));
        assert!(dist.iter().all(|&d| d == UNREACHABLE));
    }

    #[test]
    fn knight_graph_is_connected() {
        for a in BOARD {
            assert!(distance_map(a).iter().all(|&d| d != UNREACHABLE));
        }
    }

    #[test]
    fn orthogonal_neighbour_takes_three() {
        let dist = distance_map(Point::new(3, 3));
        assert_eq!(dist[BOARD.index(Point::new(4, 3)).unwrap()], 3);
        assert_eq!(dist[BOARD.index(Point::new(3, 3)).unwrap()], 0);
    }
}
