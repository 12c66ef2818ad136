use serde::{Deserialize, Serialize};

/// A contiguous half-open interval `[start, end)` of a strand on one helix.
///
/// Domains are immutable once created; nicking a strand replaces the affected
/// domain with two fresh ones rather than modifying it in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Domain {
    pub helix: usize,
    pub start: usize,
    pub end: usize,
    /// Orientation along the helix axis; `false` marks a reverse domain.
    pub forward: bool,
}

impl Domain {
    pub fn new(helix: usize, start: usize, end: usize, forward: bool) -> Self {
        Self {
            helix,
            start,
            end,
            forward,
        }
    }

    /// Number of bases covered by this domain.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether `offset` falls inside the half-open interval.
    pub fn contains_offset(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Whether `offset` is strictly interior, i.e. a cut there leaves a
    /// non-empty piece on both sides.
    pub fn strictly_contains(&self, offset: usize) -> bool {
        self.start < offset && offset < self.end
    }
}
