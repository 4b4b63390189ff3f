//! Rolling window of freshly predicted states.

use crate::primitives::Primitives;

/// Three-slot window carried across the radial sweep.
///
/// `front` holds the station predicted this iteration, `mid` the one
/// before it, `back` the one before that. The corrector for station
/// `i - 1` reads all three slots while the predictor for station `i`
/// writes `front`. The pass for station 2 rewrites `mid` with the wall
/// state before any corrector sees it.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct WorkWindow {
    pub back: Primitives,
    pub mid: Primitives,
    pub front: Primitives,
}

impl WorkWindow {
    /// Drop the oldest slot, freeing `front` for the next prediction.
    pub fn shift(&mut self) {
        self.back = self.mid;
        self.mid = self.front;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_moves_slots_back() {
        let a = Primitives { rho: 1.0, u: 0.1, v: 0.0, p: 0.5 };
        let b = Primitives { rho: 2.0, u: 0.2, v: 0.0, p: 0.6 };
        let c = Primitives { rho: 3.0, u: 0.3, v: 0.0, p: 0.7 };
        let mut w = WorkWindow { back: a, mid: b, front: c };
        w.shift();
        assert_eq!(w.back, b);
        assert_eq!(w.mid, c);
        // front keeps its value until the caller overwrites it
        assert_eq!(w.front, c);
    }
}
