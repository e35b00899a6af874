// Signature store: owns the drawing. Appending a finished stroke and clearing
// are the only mutations.

use crate::types::{Signature, Stroke};

/// "No signature yet" and "a signature" are kept apart on purpose:
/// Clear goes back to `Empty`, and Copy only acts on `Drawn`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SignatureState {
    #[default]
    Empty,
    Drawn(Signature),
}

#[derive(Debug, Default)]
pub struct SignatureStore {
    state: SignatureState,
}

impl SignatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finished stroke; the first one turns "no signature" into a signature.
    pub fn append(&mut self, stroke: Stroke) {
        match &mut self.state {
            SignatureState::Drawn(signature) => signature.push(stroke),
            SignatureState::Empty => {
                let mut signature = Signature::default();
                signature.push(stroke);
                self.state = SignatureState::Drawn(signature);
            }
        }
    }

    /// Back to "no signature".
    pub fn clear(&mut self) {
        self.state = SignatureState::Empty;
    }

    /// Strokes in draw order; empty when there is no signature.
    pub fn current_strokes(&self) -> &[Stroke] {
        match &self.state {
            SignatureState::Drawn(signature) => signature.strokes(),
            SignatureState::Empty => &[],
        }
    }

    pub fn signature(&self) -> Option<&Signature> {
        match &self.state {
            SignatureState::Drawn(signature) => Some(signature),
            SignatureState::Empty => None,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &SignatureState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn stroke(x: f32) -> Stroke {
        Stroke::from_points(vec![Point::new(x, 0.0), Point::new(x, 10.0)])
    }

    #[test]
    fn starts_with_no_signature() {
        let store = SignatureStore::new();
        assert_eq!(store.state(), &SignatureState::Empty);
        assert!(store.signature().is_none());
        assert!(store.current_strokes().is_empty());
    }

    #[test]
    fn append_keeps_order() {
        let mut store = SignatureStore::new();
        for x in [1.0, 2.0, 3.0] {
            store.append(stroke(x));
        }
        let xs: Vec<f32> = store.current_strokes().iter().map(|s| s.points()[0].x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
        assert!(store.signature().is_some());
    }

    #[test]
    fn clear_always_yields_no_signature() {
        let mut store = SignatureStore::new();
        store.clear();
        assert_eq!(store.state(), &SignatureState::Empty);

        store.append(stroke(4.0));
        store.append(stroke(5.0));
        store.clear();
        assert_eq!(store.state(), &SignatureState::Empty);
        assert!(store.current_strokes().is_empty());
    }
}
