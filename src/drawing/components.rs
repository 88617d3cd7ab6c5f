use crate::drawing::pathfinding::{grid_cell, trace_line};
use crate::models::{Point, PointSet};
use crate::settings::TraceSettings;
use log::debug;
use std::collections::HashMap;

/// Buckets points by grid cell so neighbour lookups only touch nearby cells
pub fn build_spatial_index(
    points: &PointSet,
    grid_size: i32,
) -> HashMap<(i32, i32), Vec<Point>> {
    let grid_size = grid_size.max(1);
    let mut spatial_index: HashMap<(i32, i32), Vec<Point>> = HashMap::new();

    for &point in points {
        spatial_index
            .entry(grid_cell(point, grid_size))
            .or_default()
            .push(point);
    }

    spatial_index
}

/// Splits a point set into strokes, longest first
///
/// Strokes start from unvisited points in `(y, x)` order and extend to the nearest
/// neighbour within `max_distance`. Strokes with fewer than `min_len` points are dropped.
pub fn find_connected_components(
    points: &PointSet,
    max_distance: i32,
    min_len: usize,
) -> Vec<Vec<Point>> {
    let max_distance = max_distance.max(1);
    let spatial_index = build_spatial_index(points, max_distance);
    let mut visited = PointSet::new();
    let mut lines = Vec::new();

    let mut sorted_points = points.to_vec();
    sorted_points.sort_by_key(|p| (p.y, p.x));

    for start_point in sorted_points {
        if !visited.contains(&start_point) {
            let line = trace_line(start_point, &spatial_index, &mut visited, max_distance);

            if line.len() >= min_len {
                lines.push(line);
            }
        }
    }

    lines.sort_by_key(|line| std::cmp::Reverse(line.len()));
    debug!("Generated {} strokes from {} points", lines.len(), points.len());
    lines
}

/// [`find_connected_components`] with the stroke options from `settings`
pub fn trace_strokes(points: &PointSet, settings: &TraceSettings) -> Vec<Vec<Point>> {
    find_connected_components(
        points,
        settings.effective_max_distance(),
        settings.min_stroke_len,
    )
}
