use thiserror::Error;

/// Errors raised by mutation operations on a [`Design`](super::design::Design).
///
/// Every mutation is total from the caller's perspective: on error the design
/// is left exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("helix index {helix} is out of range (design has {helix_count} helices)")]
    UnknownHelix { helix: usize, helix_count: usize },

    #[error("strand must contain at least one domain")]
    EmptyStrand,

    #[error("domain [{start}, {end}) on helix {helix} does not fit within [0, {max_offset}]")]
    DomainOutOfBounds {
        helix: usize,
        start: usize,
        end: usize,
        max_offset: usize,
    },

    #[error("offset {offset} is not strictly inside any domain on helix {helix}")]
    InvalidOffset { helix: usize, offset: usize },

    #[error("no strand covers offset {offset} on helix {helix}")]
    NoStrandAtOffset { helix: usize, offset: usize },

    #[error("view order must reference each allocated helix exactly once")]
    InvalidViewOrder,
}
