//! Property-based agreement tests between the raster canvas and the
//! recording surface.
//!
//! 1. Both surfaces measure text identically with default metrics.
//! 2. Anything the recorder says a polygon covers, a strict canvas of that
//!    size accepts without going out of bounds.
//! 3. Lines touch exactly their endpoints' bounding box.

use blockimg_core::geometry::Point;
use blockimg_render::{Canvas, ClipMode, RecordingSurface, Rgb, Surface};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn point_strategy() -> impl Strategy<Value = Point> {
    (-40i32..=40, -40i32..=40)
}

fn polygon_strategy() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(point_strategy(), 1..12)
}

/// Draw onto a strict `w x h` canvas after shifting by `(-dx, -dy)`.
fn replay_shifted(ops_vertices: &[Point], dx: i32, dy: i32, w: u32, h: u32) -> Result<(), String> {
    let shifted: Vec<Point> = ops_vertices.iter().map(|&(x, y)| (x - dx, y - dy)).collect();
    let mut canvas = Canvas::new(w, h, Rgb::WHITE).with_clip_mode(ClipMode::Strict);
    canvas
        .draw_polygon(&shifted, Some(Rgb::BLACK), Some(Rgb::new(255, 0, 0)))
        .map_err(|e| e.to_string())
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Text metrics agree
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn text_metrics_agree(text in "[ -~]{0,24}") {
        let canvas = Canvas::new(1, 1, Rgb::WHITE);
        let recorder = RecordingSurface::new();
        let a = canvas.measure_text(&text).unwrap();
        let b = recorder.measure_text(&text).unwrap();
        prop_assert_eq!(a.bottom, b.bottom);
        prop_assert_eq!(a.left, b.left);
        // The raster font drops the trailing column of spacing.
        if text.is_empty() {
            prop_assert_eq!(a.right, 0);
        } else {
            prop_assert_eq!(a.right + 1, b.right);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Polygons stay inside their vertex bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn polygon_stays_in_vertex_bounds(vertices in polygon_strategy()) {
        let mut recorder = RecordingSurface::new();
        recorder.draw_polygon(&vertices, Some(Rgb::BLACK), None).unwrap();
        let rect = recorder.drawn_bounds().unwrap();
        let result = replay_shifted(
            &vertices,
            rect.x0,
            rect.y0,
            rect.width() as u32,
            rect.height() as u32,
        );
        prop_assert!(result.is_ok(), "{:?}: {:?}", vertices, result);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Lines cover their endpoints and nothing outside them
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn line_touches_endpoints(from in (0i32..30, 0i32..30), to in (0i32..30, 0i32..30)) {
        let mut canvas = Canvas::new(30, 30, Rgb::WHITE);
        canvas.draw_line(from, to, Rgb::BLACK).unwrap();
        prop_assert_eq!(canvas.pixel(from.0, from.1), Some(Rgb::BLACK));
        prop_assert_eq!(canvas.pixel(to.0, to.1), Some(Rgb::BLACK));

        let (lo_x, hi_x) = (from.0.min(to.0), from.0.max(to.0));
        let (lo_y, hi_y) = (from.1.min(to.1), from.1.max(to.1));
        for y in 0..30 {
            for x in 0..30 {
                if canvas.pixel(x, y) == Some(Rgb::BLACK) {
                    prop_assert!((lo_x..=hi_x).contains(&x) && (lo_y..=hi_y).contains(&y));
                }
            }
        }
    }
}
