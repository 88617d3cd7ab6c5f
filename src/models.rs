//! Data structures for `shapeset`

use std::collections::HashSet;

/// A point with x and y coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// The X coordinate of the point
    pub x: i32,
    /// The Y coordinate of the point
    pub y: i32,
}

/// An unordered collection of unique points
///
/// Starts without backing storage; the first mutation allocates it. Iteration order is
/// unspecified and may change between runs.
///
/// Not synchronized: wrap it in a lock to mutate it from several threads.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    /// Members of the set, `None` until first initialized
    pub(crate) data: Option<HashSet<Point>>,
}
