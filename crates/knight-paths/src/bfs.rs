use std::collections::VecDeque;

use knight_core::{BOARD, Point};

use crate::error::PathError;
use crate::moves::{Knight, is_valid_coordinate};
use crate::traits::Pather;

/// Predecessor slot of the start square.
const ROOT: usize = usize::MAX;
/// Slot of a square not yet reached.
const UNSEEN: usize = usize::MAX - 1;

/// Compute the shortest knight path from `start` to `end`.
///
/// Returns the full path (including both endpoints). Fails with
/// [`PathError::InvalidPosition`] if either square is off the board, before
/// any search is done.
pub fn find_path(start: Point, end: Point) -> Result<Vec<Point>, PathError> {
    find_path_with(&Knight, start, end)
}

/// Like [`find_path`], for coordinates given as raw components.
///
/// Anything other than two components in `0..=7` is rejected with
/// [`PathError::InvalidPosition`].
pub fn find_path_components(start: &[i32], end: &[i32]) -> Result<Vec<Point>, PathError> {
    if !(is_valid_coordinate(start) && is_valid_coordinate(end)) {
        return Err(PathError::InvalidPosition);
    }
    let start = Point::try_from(start).map_err(|_| PathError::InvalidPosition)?;
    let end = Point::try_from(end).map_err(|_| PathError::InvalidPosition)?;
    find_path(start, end)
}

/// Breadth-first search from `start` to `end` over the moves of `pather`.
///
/// Candidates off the board or already visited are skipped; the search stops
/// as soon as `end` is first recorded.
pub fn find_path_with<P: Pather>(
    pather: &P,
    start: Point,
    end: Point,
) -> Result<Vec<Point>, PathError> {
    let (Some(si), Some(ei)) = (BOARD.index(start), BOARD.index(end)) else {
        return Err(PathError::InvalidPosition);
    };

    if si == ei {
        return Ok(vec![start]);
    }

    let mut parents = [UNSEEN; BOARD.len()];
    parents[si] = ROOT;

    let mut queue: VecDeque<usize> = VecDeque::with_capacity(BOARD.len());
    queue.push_back(si);

    let mut nbuf = Vec::with_capacity(8);

    let found = 'search: loop {
        let Some(ci) = queue.pop_front() else {
            break 'search false;
        };

        nbuf.clear();
        pather.neighbors(BOARD.point(ci), &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = BOARD.index(np) else {
                continue;
            };
            if parents[ni] != UNSEEN {
                continue;
            }
            parents[ni] = ci;
            queue.push_back(ni);
            if ni == ei {
                break 'search true;
            }
        }
    };

    if !found {
        return Err(PathError::NoPathFound);
    }

    // Walk predecessors back from the goal.
    let mut path = vec![end];
    let mut i = ei;
    while parents[i] != ROOT {
        i = parents[i];
        path.push(BOARD.point(i));
    }
    path.reverse();
    Ok(path)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_serializes_as_nested_pairs() {
        let path = find_path(Point::new(0, 0), Point::new(3, 3)).unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "[[0,0],[2,1],[3,3]]");
        let back: Vec<Point> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
