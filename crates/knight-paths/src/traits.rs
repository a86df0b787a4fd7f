use knight_core::Point;

/// Minimal pathfinding interface — provides move candidate enumeration.
pub trait Pather {
    /// Append move candidates from `p` into `buf`, in a deterministic order.
    /// Candidates may lie off the board; the search filters them. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
