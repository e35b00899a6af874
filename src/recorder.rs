// Stroke recorder: turns one pointer drag into one Stroke.
// State machine: Idle -> Recording (begin) -> Recording (extend) -> Idle (end).

use crate::types::{Point, Stroke};

/// A move point is kept only if it is farther than this from the last kept point.
pub const MIN_POINT_DISTANCE: f32 = 1.0;

/// Drop every point within `MIN_POINT_DISTANCE` of the previously *kept* point.
/// The first point is always kept. Running it on its own output changes nothing.
pub fn decimate(points: &[Point]) -> Vec<Point> {
    let mut kept: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        match kept.last() {
            Some(&last) if last.distance(p) <= MIN_POINT_DISTANCE => {}
            _ => kept.push(p),
        }
    }
    kept
}

#[derive(Debug, Default)]
pub struct StrokeRecorder {
    in_progress: Option<Vec<Point>>,
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_recording(&self) -> bool {
        self.in_progress.is_some()
    }

    /// Start a stroke at `point`. A second `begin` without `end` is ignored
    /// and the current stroke keeps going; returns false in that case.
    pub fn begin(&mut self, point: Point) -> bool {
        if self.in_progress.is_some() {
            log::warn!("drag restarted without release at ({:.1}, {:.1}); ignoring", point.x, point.y);
            return false;
        }
        self.in_progress = Some(vec![point]);
        true
    }

    /// Append `point` if it is far enough from the last recorded point.
    /// Does nothing while idle.
    pub fn extend(&mut self, point: Point) {
        let Some(points) = self.in_progress.as_mut() else { return };
        let far_enough = points
            .last()
            .is_none_or(|last| last.distance(point) > MIN_POINT_DISTANCE);
        if far_enough {
            points.push(point);
        }
    }

    /// Finish the stroke and go back to idle. `None` when nothing was recording.
    pub fn end(&mut self) -> Option<Stroke> {
        let points = self.in_progress.take().filter(|points| !points.is_empty())?;
        debug_assert_eq!(decimate(&points), points);
        Some(Stroke::from_points(points))
    }

    /// Points of the stroke being drawn right now (for live feedback).
    pub fn in_progress(&self) -> Option<&[Point]> {
        self.in_progress.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    fn record(points: &[Point]) -> Stroke {
        let mut rec = StrokeRecorder::new();
        rec.begin(points[0]);
        for &pt in &points[1..] {
            rec.extend(pt);
        }
        rec.end().expect("stroke in progress")
    }

    #[test]
    fn begin_starts_with_exactly_one_point() {
        let mut rec = StrokeRecorder::new();
        assert!(!rec.is_recording());
        assert!(rec.begin(p(5.0, 5.0)));
        assert!(rec.is_recording());
        assert_eq!(rec.in_progress(), Some(&[p(5.0, 5.0)][..]));
    }

    #[test]
    fn extend_drops_points_within_threshold() {
        let stroke = record(&[p(0.0, 0.0), p(0.5, 0.5), p(1.0, 0.0), p(1.5, 0.0), p(3.0, 0.0)]);
        // (1,0) is exactly 1.0 away: not strictly farther, dropped.
        assert_eq!(stroke.points(), &[p(0.0, 0.0), p(1.5, 0.0), p(3.0, 0.0)]);
    }

    #[test]
    fn threshold_is_measured_from_last_recorded_point() {
        // Each step is 0.8, but the third point is 1.6 from the kept start.
        let stroke = record(&[p(0.0, 0.0), p(0.8, 0.0), p(1.6, 0.0), p(2.4, 0.0)]);
        assert_eq!(stroke.points(), &[p(0.0, 0.0), p(1.6, 0.0)]);
    }

    #[test]
    fn recorded_stroke_matches_decimate_and_is_idempotent() {
        let raw: Vec<Point> = (0..200)
            .map(|i| {
                let t = i as f32 * 0.37;
                p(t * 1.3, (t * 0.7).sin() * 4.0)
            })
            .collect();
        let stroke = record(&raw);
        assert_eq!(stroke.points(), decimate(&raw).as_slice());
        assert_eq!(decimate(stroke.points()), stroke.points());
        assert_eq!(stroke.points()[0], raw[0]);
    }

    #[test]
    fn second_begin_is_ignored() {
        let mut rec = StrokeRecorder::new();
        rec.begin(p(0.0, 0.0));
        rec.extend(p(10.0, 0.0));
        assert!(!rec.begin(p(50.0, 50.0)));
        let stroke = rec.end().unwrap();
        assert_eq!(stroke.points(), &[p(0.0, 0.0), p(10.0, 0.0)]);
    }

    #[test]
    fn end_without_begin_is_a_noop() {
        let mut rec = StrokeRecorder::new();
        rec.extend(p(3.0, 3.0));
        assert!(rec.end().is_none());
        assert!(!rec.is_recording());
    }

    #[test]
    fn end_resets_to_idle() {
        let mut rec = StrokeRecorder::new();
        rec.begin(p(1.0, 1.0));
        assert!(rec.end().is_some());
        assert!(rec.end().is_none());
        assert!(rec.in_progress().is_none());
    }
}
