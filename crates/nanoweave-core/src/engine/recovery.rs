//! Ordered retry ladders for directive recovery.
//!
//! Each recoverable directive category has a small ordered list of candidate
//! parameter variants (original helix order then swapped; overhang lengths 5
//! through 8). The ladder evaluates candidates in order and stops at the
//! first success, which keeps the retry policy inspectable and testable
//! independent of the mutation calls it drives.

/// The candidate that succeeded, along with its ladder position.
///
/// `rung` 0 is the original directive; anything later is a recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Winner<T> {
    pub candidate: T,
    pub rung: usize,
}

/// Attempts `candidates` in order, first success wins.
///
/// On exhaustion, returns every candidate's error in ladder order so the
/// caller can report what was tried.
pub(crate) fn run_ladder<T, E>(
    candidates: impl IntoIterator<Item = T>,
    mut attempt: impl FnMut(&T) -> Result<(), E>,
) -> Result<Winner<T>, Vec<E>> {
    let mut failures = Vec::new();
    for (rung, candidate) in candidates.into_iter().enumerate() {
        match attempt(&candidate) {
            Ok(()) => return Ok(Winner { candidate, rung }),
            Err(e) => failures.push(e),
        }
    }
    Err(failures)
}
