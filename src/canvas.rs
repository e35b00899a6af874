// The drawing surface controller: routes drag events into the recorder and
// commits finished strokes into the store.

use crate::input::PointerEvent;
use crate::recorder::StrokeRecorder;
use crate::signature::SignatureStore;
use crate::types::{Point, Rect, Stroke};

pub struct SignatureCanvas {
    /// Where the surface sits in the window (window pixels).
    area: Rect,
    recorder: StrokeRecorder,
    store: SignatureStore,
}

impl SignatureCanvas {
    pub fn new(area: Rect) -> Self {
        Self { area, recorder: StrokeRecorder::new(), store: SignatureStore::new() }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Window coordinates -> surface-local coordinates.
    pub fn to_local(&self, window: Point) -> Point {
        window.offset(-(self.area.x as f32), -(self.area.y as f32))
    }

    /// Drags only start on the surface. Once started, points are recorded
    /// wherever the pointer goes and clip when drawn.
    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(p) => {
                if self.area.contains(p) {
                    self.recorder.begin(self.to_local(p));
                }
            }
            PointerEvent::Move(p) => {
                let local = self.to_local(p);
                self.recorder.extend(local);
            }
            PointerEvent::Up => self.commit(),
            PointerEvent::Cancel => {
                if self.recorder.is_recording() {
                    log::warn!("drag ended without pointer-up; keeping the stroke");
                }
                self.commit();
            }
        }
    }

    fn commit(&mut self) {
        if let Some(stroke) = self.recorder.end() {
            log::debug!("stroke committed: {} points", stroke.points().len());
            self.store.append(stroke);
        }
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn store(&self) -> &SignatureStore {
        &self.store
    }

    pub fn strokes(&self) -> &[Stroke] {
        self.store.current_strokes()
    }

    pub fn in_progress(&self) -> Option<&[Point]> {
        self.recorder.in_progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::SignatureState;

    fn canvas() -> SignatureCanvas {
        SignatureCanvas::new(Rect::new(20, 40, 300, 150))
    }

    fn drag(c: &mut SignatureCanvas, points: &[(f32, f32)]) {
        let (x, y) = points[0];
        c.handle(PointerEvent::Down(Point::new(x, y)));
        for &(x, y) in &points[1..] {
            c.handle(PointerEvent::Move(Point::new(x, y)));
        }
        c.handle(PointerEvent::Up);
    }

    #[test]
    fn n_drags_give_n_strokes_in_order() {
        let mut c = canvas();
        for i in 0..5 {
            let x = 30.0 + i as f32 * 10.0;
            drag(&mut c, &[(x, 50.0), (x, 60.0), (x + 3.0, 70.0)]);
        }
        let strokes = c.strokes();
        assert_eq!(strokes.len(), 5);
        for (i, s) in strokes.iter().enumerate() {
            assert_eq!(s.points()[0], Point::new(10.0 + i as f32 * 10.0, 10.0));
        }
    }

    #[test]
    fn points_are_surface_local() {
        let mut c = canvas();
        drag(&mut c, &[(20.0, 40.0), (25.0, 45.0)]);
        assert_eq!(c.strokes()[0].points(), &[Point::new(0.0, 0.0), Point::new(5.0, 5.0)]);
    }

    #[test]
    fn press_outside_surface_draws_nothing() {
        let mut c = canvas();
        drag(&mut c, &[(5.0, 5.0), (100.0, 100.0)]);
        assert_eq!(c.store().state(), &SignatureState::Empty);
    }

    #[test]
    fn moves_past_the_edge_are_kept() {
        let mut c = canvas();
        drag(&mut c, &[(300.0, 100.0), (400.0, 100.0)]);
        assert_eq!(c.strokes()[0].points()[1], Point::new(380.0, 60.0));
    }

    #[test]
    fn in_progress_stroke_is_visible_until_release() {
        let mut c = canvas();
        c.handle(PointerEvent::Down(Point::new(30.0, 50.0)));
        c.handle(PointerEvent::Move(Point::new(40.0, 50.0)));
        assert_eq!(c.in_progress().map(<[Point]>::len), Some(2));
        assert!(c.strokes().is_empty());
        c.handle(PointerEvent::Up);
        assert!(c.in_progress().is_none());
        assert_eq!(c.strokes().len(), 1);
    }

    #[test]
    fn cancel_commits_the_in_progress_stroke() {
        let mut c = canvas();
        c.handle(PointerEvent::Down(Point::new(30.0, 50.0)));
        c.handle(PointerEvent::Move(Point::new(40.0, 50.0)));
        c.handle(PointerEvent::Cancel);
        assert_eq!(c.strokes().len(), 1);
        assert!(c.in_progress().is_none());
    }

    #[test]
    fn clear_drops_signature() {
        let mut c = canvas();
        drag(&mut c, &[(30.0, 50.0), (40.0, 60.0)]);
        c.clear();
        assert!(c.strokes().is_empty());
        assert!(c.store().signature().is_none());
    }
}
