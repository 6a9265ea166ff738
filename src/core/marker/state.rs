use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::data::normalized_position::NormalizedPosition;
use crate::core::data::point::Point;

/// A consistent copy of the marker state at one point in time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerSnapshot {
    /// Marker centre in screen pixels.
    pub position: Point,
    /// The normalized position that produced `position`, if any update has arrived.
    pub normalized: Option<NormalizedPosition>,
    /// Incremented on every accepted move; `0` means the initial position.
    pub generation: u64,
}

/// Shared marker position, written by the listener side and read by the renderer.
#[derive(Debug)]
pub struct MarkerState {
    inner: Mutex<MarkerSnapshot>,
}

impl MarkerState {
    #[must_use]
    pub fn new(initial: Point) -> Self {
        Self {
            inner: Mutex::new(MarkerSnapshot {
                position: initial,
                normalized: None,
                generation: 0,
            }),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> MarkerSnapshot {
        *self.lock()
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.lock().position
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Stores a new position and returns its generation.
    pub fn set(&self, position: Point, normalized: NormalizedPosition) -> u64 {
        let mut guard = self.lock();
        guard.position = position;
        guard.normalized = Some(normalized);
        guard.generation += 1;
        guard.generation
    }

    fn lock(&self) -> MutexGuard<'_, MarkerSnapshot> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
