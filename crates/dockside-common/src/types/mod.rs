mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect::new(x, y, width, height)
    }

    #[test]
    fn rect_edges() {
        let r = rect(100.0, 20.0, 800.0, 600.0);
        assert_eq!(r.min_x(), 100.0);
        assert_eq!(r.max_x(), 900.0);
        assert_eq!(r.min_y(), 20.0);
        assert_eq!(r.max_y(), 620.0);
        assert_eq!(r.origin(), Point { x: 100.0, y: 20.0 });
    }

    #[test]
    fn rect_contains_point_is_half_open() {
        let r = rect(0.0, 0.0, 1440.0, 900.0);
        assert!(r.contains_point(Point { x: 0.0, y: 0.0 }));
        assert!(r.contains_point(Point { x: 1439.5, y: 899.0 }));
        assert!(!r.contains_point(Point { x: 1440.0, y: 10.0 }));
        assert!(!r.contains_point(Point { x: -1.0, y: 10.0 }));
    }

    #[test]
    fn rect_contains_rect() {
        let screen = rect(0.0, 0.0, 1440.0, 900.0);
        assert!(screen.contains_rect(&rect(100.0, 0.0, 800.0, 600.0)));
        assert!(screen.contains_rect(&screen));
        assert!(!screen.contains_rect(&rect(1200.0, 0.0, 400.0, 600.0)));
    }

    #[test]
    fn rect_intersection_overlapping() {
        let a = rect(0.0, 0.0, 1200.0, 900.0);
        let b = rect(900.0, 100.0, 400.0, 600.0);
        assert_eq!(a.intersection(&b), Some(rect(900.0, 100.0, 300.0, 600.0)));
    }

    #[test]
    fn rect_intersection_disjoint_or_touching() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        assert_eq!(a.intersection(&rect(200.0, 0.0, 50.0, 50.0)), None);
        // Sharing an edge is not an overlap.
        assert_eq!(a.intersection(&rect(100.0, 0.0, 50.0, 50.0)), None);
    }

    #[test]
    fn rect_area_and_empty() {
        assert_eq!(rect(0.0, 0.0, 10.0, 20.0).area(), 200.0);
        assert!(rect(0.0, 0.0, 0.0, 20.0).is_empty());
        assert!(rect(0.0, 0.0, 10.0, -1.0).is_empty());
        assert_eq!(rect(0.0, 0.0, -10.0, 20.0).area(), 0.0);
    }

    #[test]
    fn rect_display() {
        let r = rect(800.0, 0.0, 400.0, 600.0);
        assert_eq!(r.to_string(), "{x:800, y:0, w:400, h:600}");
    }

    #[test]
    fn edge_serializes_lowercase() {
        let json = serde_json::to_string(&Edge::Trailing).unwrap();
        assert_eq!(json, "\"trailing\"");
        let edge: Edge = serde_json::from_str("\"leading\"").unwrap();
        assert_eq!(edge, Edge::Leading);
    }
}
