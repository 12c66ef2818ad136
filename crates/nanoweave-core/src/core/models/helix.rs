use serde::{Deserialize, Serialize};

/// A fixed-capacity linear track representing one strand-pair axis.
///
/// Helices are identified by their position in the design's helix list and
/// are allocated once at assembly start; they are never resized afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Helix {
    /// Index of this helix within the design, in `0..helix_count`.
    pub index: usize,
    /// Total addressable length along the track; domains must fit in
    /// `[0, max_offset]`.
    pub max_offset: usize,
}

impl Helix {
    pub fn new(index: usize, max_offset: usize) -> Self {
        Self { index, max_offset }
    }
}
