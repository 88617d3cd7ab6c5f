use crate::models::{Point, PointSet};
use std::collections::HashMap;

/// Grid cell containing `point` for cells of `grid_size` pixels
pub fn grid_cell(point: Point, grid_size: i32) -> (i32, i32) {
    (point.x.div_euclid(grid_size), point.y.div_euclid(grid_size))
}

/// Nearest unvisited point within `max_distance` of `current`
///
/// Equally distant candidates are ordered by `(y, x)` so the walk does not depend on set
/// iteration order.
pub fn find_next_point(
    current: Point,
    spatial_index: &HashMap<(i32, i32), Vec<Point>>,
    visited: &PointSet,
    max_distance: i32,
) -> Option<Point> {
    let grid_size = max_distance.max(1);
    let max_distance_sq = i64::from(grid_size) * i64::from(grid_size);
    let (current_grid_x, current_grid_y) = grid_cell(current, grid_size);

    let mut best: Option<(i64, Point)> = None;

    for dx in -1..=1 {
        for dy in -1..=1 {
            // Cells past the i32 range hold no points.
            let (Some(grid_x), Some(grid_y)) =
                (current_grid_x.checked_add(dx), current_grid_y.checked_add(dy))
            else {
                continue;
            };
            let Some(points) = spatial_index.get(&(grid_x, grid_y)) else {
                continue;
            };

            for &point in points {
                if visited.contains(&point) {
                    continue;
                }

                let dist_sq = current.distance_squared(&point);
                if dist_sq > max_distance_sq {
                    continue;
                }

                let better = match best {
                    None => true,
                    Some((best_dist, best_point)) => {
                        (dist_sq, point.y, point.x) < (best_dist, best_point.y, best_point.x)
                    }
                };
                if better {
                    best = Some((dist_sq, point));
                }
            }
        }
    }

    best.map(|(_, point)| point)
}

/// Follows nearest neighbours from `start` until no unvisited point is in reach
pub fn trace_line(
    start: Point,
    spatial_index: &HashMap<(i32, i32), Vec<Point>>,
    visited: &mut PointSet,
    max_distance: i32,
) -> Vec<Point> {
    let mut line = vec![start];
    visited.add(start);

    let mut current = start;
    while let Some(next) = find_next_point(current, spatial_index, visited, max_distance) {
        line.push(next);
        visited.add(next);
        current = next;
    }

    line
}
