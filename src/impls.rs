//! Implementations for structs within `models.rs`

use crate::models::{Point, PointSet};
use log::trace;
use std::collections::HashSet;
use std::iter::Flatten;

impl PointSet {
    /// Creates an empty set without allocating
    pub const fn new() -> Self {
        Self { data: None }
    }

    /// Allocates the backing storage if it does not exist yet
    ///
    /// Existing members are never discarded, so this is safe to call any number of times.
    pub fn ensure_initialized(&mut self) -> &mut HashSet<Point> {
        self.data.get_or_insert_with(HashSet::new)
    }

    /// Inserts a point, returning `false` if it was already a member
    pub fn add(&mut self, point: Point) -> bool {
        self.ensure_initialized().insert(point)
    }

    /// Inserts every point of `points`
    pub fn add_many<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Point>,
    {
        let data = self.ensure_initialized();
        let before = data.len();

        for point in points {
            data.insert(point);
        }

        trace!("Added {} new points to set", data.len() - before);
    }

    /// Removes a point, returning `false` if it was not a member
    pub fn remove(&mut self, point: &Point) -> bool {
        self.ensure_initialized().remove(point)
    }

    /// Removes every point of `points`, ignoring the ones that are not members
    pub fn remove_many<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Point>,
    {
        let data = self.ensure_initialized();
        let before = data.len();

        for point in points {
            data.remove(&point);
        }

        trace!("Removed {} points from set", before - data.len());
    }

    /// Checks whether `point` is a member
    pub fn contains(&self, point: &Point) -> bool {
        self.data.as_ref().is_some_and(|data| data.contains(point))
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, HashSet::len)
    }

    /// Checks whether the set has no members
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the members in no particular order
    ///
    /// Every call starts over from the current members.
    pub fn iter(&self) -> Flatten<std::option::Iter<'_, HashSet<Point>>> {
        self.data.iter().flatten()
    }

    /// Copies the members into a vector in no particular order
    pub fn to_vec(&self) -> Vec<Point> {
        self.iter().copied().collect()
    }
}

impl PartialEq for PointSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|point| other.contains(point))
    }
}

impl Eq for PointSet {}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = Self::new();
        set.add_many(iter);
        set
    }
}

impl Extend<Point> for PointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.add_many(iter);
    }
}

impl IntoIterator for PointSet {
    type Item = Point;
    type IntoIter = Flatten<std::option::IntoIter<HashSet<Point>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter().flatten()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = Flatten<std::option::Iter<'a, HashSet<Point>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
