use shapeset::{rasterize_all, trace_strokes, Point, PointSet, Shape, TraceSettings};

#[test]
fn traced_rectangle_covers_its_outline() {
    let shapes = [Shape::Rectangle {
        a: Point::new(0, 0),
        b: Point::new(9, 5),
    }];
    let outline = rasterize_all(&shapes);

    let strokes = trace_strokes(&outline, &TraceSettings::default().with_max_distance(1));
    let covered: PointSet = strokes.iter().flatten().copied().collect();

    assert!(!strokes.is_empty());
    assert_eq!(covered, outline);
}

#[test]
fn separate_shapes_become_separate_strokes() {
    let shapes = [
        Shape::Line {
            from: Point::new(0, 0),
            to: Point::new(10, 0),
        },
        Shape::Line {
            from: Point::new(0, 20),
            to: Point::new(4, 20),
        },
    ];
    let points = rasterize_all(&shapes);

    let strokes = trace_strokes(&points, &TraceSettings::default());
    assert_eq!(strokes.len(), 2);
    assert_eq!(strokes[0].len(), 11);
    assert_eq!(strokes[1].len(), 5);
}
