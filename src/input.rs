// Turns per-frame mouse polling into drag events.
// minifb only tells us "button is down" and "pointer is here" each frame;
// the canvas wants start / move / end.

use crate::types::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
    /// The drag lost its pointer-up (focus loss, screen change). Treated as Up.
    Cancel,
}

#[derive(Debug, Default)]
pub struct GestureTracker {
    dragging: bool,
    last: Option<Point>,
    // After a cancel the button may still be held; wait for a release first.
    wait_for_release: bool,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Feed one frame of pointer state. `pos` is None when the pointer is
    /// outside the window.
    pub fn sample(&mut self, down: bool, pos: Option<Point>, focused: bool) -> Option<PointerEvent> {
        if !down {
            self.wait_for_release = false;
        }

        if self.dragging {
            if !focused {
                return self.cancel();
            }
            if !down {
                self.dragging = false;
                self.last = None;
                return Some(PointerEvent::Up);
            }
            let p = pos?;
            if self.last == Some(p) {
                return None;
            }
            self.last = Some(p);
            return Some(PointerEvent::Move(p));
        }

        if down && focused && !self.wait_for_release {
            let p = pos?;
            self.dragging = true;
            self.last = Some(p);
            return Some(PointerEvent::Down(p));
        }
        None
    }

    /// End the current drag without a pointer-up. `None` when not dragging.
    pub fn cancel(&mut self) -> Option<PointerEvent> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        self.last = None;
        self.wait_for_release = true;
        Some(PointerEvent::Cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Option<Point> {
        Some(Point::new(x, y))
    }

    #[test]
    fn press_move_release() {
        let mut g = GestureTracker::new();
        assert_eq!(g.sample(false, p(1.0, 1.0), true), None);
        assert_eq!(g.sample(true, p(1.0, 1.0), true), Some(PointerEvent::Down(Point::new(1.0, 1.0))));
        assert_eq!(g.sample(true, p(1.0, 1.0), true), None);
        assert_eq!(g.sample(true, p(4.0, 2.0), true), Some(PointerEvent::Move(Point::new(4.0, 2.0))));
        assert_eq!(g.sample(false, p(4.0, 2.0), true), Some(PointerEvent::Up));
        assert!(!g.is_dragging());
    }

    #[test]
    fn press_outside_window_waits_for_position() {
        let mut g = GestureTracker::new();
        assert_eq!(g.sample(true, None, true), None);
        assert_eq!(g.sample(true, p(2.0, 2.0), true), Some(PointerEvent::Down(Point::new(2.0, 2.0))));
        // Leaving the window mid-drag produces no event, but the drag survives.
        assert_eq!(g.sample(true, None, true), None);
        assert!(g.is_dragging());
    }

    #[test]
    fn focus_loss_cancels_and_requires_release() {
        let mut g = GestureTracker::new();
        g.sample(true, p(2.0, 2.0), true);
        assert_eq!(g.sample(true, p(3.0, 3.0), false), Some(PointerEvent::Cancel));
        // Button still held when focus comes back: no new drag.
        assert_eq!(g.sample(true, p(3.0, 3.0), true), None);
        assert_eq!(g.sample(false, p(3.0, 3.0), true), None);
        assert_eq!(g.sample(true, p(5.0, 5.0), true), Some(PointerEvent::Down(Point::new(5.0, 5.0))));
    }

    #[test]
    fn cancel_when_idle_is_none() {
        let mut g = GestureTracker::new();
        assert_eq!(g.cancel(), None);
    }
}
