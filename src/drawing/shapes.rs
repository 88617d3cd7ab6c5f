//! Rasterizes basic shapes into point sets
//!
//! Every helper returns a [`PointSet`], so pixels that several parts of a shape (or several
//! shapes) share are stored once.

use crate::models::{Point, PointSet};
use log::trace;

/// A shape that can be turned into pixels
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Segment between two points, both included
    Line { from: Point, to: Point },
    /// Outline of the axis-aligned box spanned by two opposite corners
    Rectangle { a: Point, b: Point },
    /// Circle outline; a negative radius draws nothing
    Circle { center: Point, radius: i32 },
}

impl Shape {
    /// Pixels covered by the shape
    pub fn rasterize(&self) -> PointSet {
        match *self {
            Shape::Line { from, to } => line(from, to),
            Shape::Rectangle { a, b } => rectangle(a, b),
            Shape::Circle { center, radius } => circle(center, radius),
        }
    }
}

/// Union of the pixels of every shape
pub fn rasterize_all<'a, I>(shapes: I) -> PointSet
where
    I: IntoIterator<Item = &'a Shape>,
{
    let mut points = PointSet::new();
    for shape in shapes {
        points.add_many(shape.rasterize());
    }

    trace!("Rasterized shapes into {} points", points.len());
    points
}

/// Bresenham segment from `from` to `to`
pub fn line(from: Point, to: Point) -> PointSet {
    let mut points = PointSet::new();

    let (mut x, mut y) = (i64::from(from.x), i64::from(from.y));
    let (end_x, end_y) = (i64::from(to.x), i64::from(to.y));

    let dx = (end_x - x).abs();
    let dy = -(end_y - y).abs();
    let sx = if x < end_x { 1 } else { -1 };
    let sy = if y < end_y { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        // x and y never leave the range spanned by the two endpoints.
        points.add(Point::new(x as i32, y as i32));
        if x == end_x && y == end_y {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    points
}

/// Outline of the axis-aligned rectangle with opposite corners `a` and `b`
pub fn rectangle(a: Point, b: Point) -> PointSet {
    let top_left = Point::new(a.x.min(b.x), a.y.min(b.y));
    let bottom_right = Point::new(a.x.max(b.x), a.y.max(b.y));
    let top_right = Point::new(bottom_right.x, top_left.y);
    let bottom_left = Point::new(top_left.x, bottom_right.y);

    let mut points = line(top_left, top_right);
    points.add_many(line(top_right, bottom_right));
    points.add_many(line(bottom_right, bottom_left));
    points.add_many(line(bottom_left, top_left));
    points
}

/// Midpoint circle around `center`
///
/// Pixels that fall outside the `i32` range are clipped.
pub fn circle(center: Point, radius: i32) -> PointSet {
    let mut points = PointSet::new();
    if radius < 0 {
        return points;
    }

    let (mut x, mut y) = (radius, 0);
    let mut err = 1 - radius;

    while x >= y {
        points.add_many(
            [
                (x, y),
                (y, x),
                (-y, x),
                (-x, y),
                (-x, -y),
                (-y, -x),
                (y, -x),
                (x, -y),
            ]
            .into_iter()
            .filter_map(|(dx, dy)| center.checked_offset(dx, dy)),
        );

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }

    points
}
