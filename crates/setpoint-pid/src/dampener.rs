//! Shared dampener cell for runtime gain scheduling.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// A concurrently readable and writable scalar multiplier shared between a
/// controller and external gain-scheduling logic.
///
/// The controller reads the cell once per step; a scheduler may raise or
/// lower it at any time to make the loop more or less aggressive (e.g.
/// raising it during an incident to accelerate scale-up) without
/// reconstructing the controller or losing its integral and derivative
/// history. Only the scalar load/store itself is atomic; writes are not
/// ordered with respect to a whole controller step.
///
/// Clones share the same cell.
#[derive(Debug, Clone)]
pub struct Dampener(Arc<AtomicU64>);

impl Dampener {
    pub fn new(value: f64) -> Self {
        Self(Arc::new(AtomicU64::new(value.to_bits())))
    }

    /// Current multiplier.
    pub fn get(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    /// Replace the multiplier.
    pub fn set(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

impl Default for Dampener {
    /// Neutral multiplier: gains pass through unchanged.
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_neutral() {
        assert_eq!(Dampener::default().get(), 1.0);
    }

    #[test]
    fn clones_share_the_cell() {
        let dampener = Dampener::new(1.0);
        let handle = dampener.clone();

        handle.set(2.5);
        assert_eq!(dampener.get(), 2.5);

        dampener.set(0.0);
        assert_eq!(handle.get(), 0.0);
    }

    #[test]
    fn writes_from_another_thread_are_visible() {
        let dampener = Dampener::new(1.0);
        let writer = dampener.clone();

        std::thread::spawn(move || writer.set(3.0))
            .join()
            .unwrap();

        assert_eq!(dampener.get(), 3.0);
    }
}
