//! The unified overhang-pair operation.
//!
//! Both the degraded crossover fallback and the sticky-end phase attach the
//! same structure: a forward overhang on the tail of one helix paired with a
//! reverse overhang on the head of another, differing only in length. One
//! parameterized operation serves both call sites with a single orientation
//! convention.

use crate::core::models::design::Design;
use crate::core::models::domain::Domain;
use crate::core::models::error::ModelError;
use crate::core::models::ids::StrandId;
use crate::core::models::strand::Strand;
use thiserror::Error;

/// Raised when no overhang pair could be placed at any tried length.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "overhang placement failed on helices {tail_helix} and {head_helix}: {last_error}"
)]
pub(crate) struct OverhangPlacementFailed {
    /// 0-based helix receiving the forward tail overhang.
    pub tail_helix: usize,
    /// 0-based helix receiving the reverse head overhang.
    pub head_helix: usize,
    /// The model's rejection of the final attempt.
    pub last_error: ModelError,
}

/// One complementary overhang pair: a forward strand on the tail region
/// `[total_length - length, total_length)` of `tail_helix` and a reverse
/// strand on the head region `[0, length)` of `head_helix`. Helix indices
/// are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OverhangPair {
    pub tail_helix: usize,
    pub head_helix: usize,
    pub length: usize,
}

/// Attaches an overhang pair atomically.
///
/// Both strands are validated against the design before either is inserted,
/// so a rejected pair leaves the design unchanged — no partial strand is
/// ever left behind.
pub(crate) fn attach_overhang_pair(
    design: &mut Design,
    total_length: usize,
    pair: OverhangPair,
) -> Result<(StrandId, StrandId), ModelError> {
    let tail_start =
        total_length
            .checked_sub(pair.length)
            .ok_or(ModelError::DomainOutOfBounds {
                helix: pair.tail_helix,
                start: 0,
                end: pair.length,
                max_offset: total_length,
            })?;
    let tail = Strand::single(Domain::new(pair.tail_helix, tail_start, total_length, true));
    let head = Strand::single(Domain::new(pair.head_helix, 0, pair.length, false));

    design.validate_strand(&tail)?;
    design.validate_strand(&head)?;

    let tail_id = design.add_strand(tail)?;
    let head_id = design.add_strand(head)?;
    Ok((tail_id, head_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lattice(helices: usize, total_length: usize) -> Design {
        let mut design = Design::new();
        design.allocate_helices(helices, total_length);
        design
    }

    #[test]
    fn attaches_forward_tail_and_reverse_head() {
        let mut design = lattice(4, 80);
        let (tail_id, head_id) = attach_overhang_pair(
            &mut design,
            80,
            OverhangPair {
                tail_helix: 2,
                head_helix: 3,
                length: 5,
            },
        )
        .unwrap();

        let tail = design.strand(tail_id).unwrap().first_domain().to_owned();
        assert_eq!((tail.helix, tail.start, tail.end, tail.forward), (2, 75, 80, true));

        let head = design.strand(head_id).unwrap().first_domain().to_owned();
        assert_eq!((head.helix, head.start, head.end, head.forward), (3, 0, 5, false));
    }

    #[test]
    fn rejected_pair_leaves_design_unchanged() {
        let mut design = lattice(2, 80);
        let err = attach_overhang_pair(
            &mut design,
            80,
            OverhangPair {
                tail_helix: 0,
                head_helix: 7,
                length: 5,
            },
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::UnknownHelix { helix: 7, .. }));
        assert_eq!(design.strand_count(), 0);
    }

    #[test]
    fn invalid_tail_helix_adds_nothing_either() {
        let mut design = lattice(2, 80);
        attach_overhang_pair(
            &mut design,
            80,
            OverhangPair {
                tail_helix: 9,
                head_helix: 1,
                length: 5,
            },
        )
        .unwrap_err();
        assert_eq!(design.strand_count(), 0);
    }

    #[test]
    fn overhang_longer_than_track_is_rejected() {
        let mut design = lattice(1, 4);
        let err = attach_overhang_pair(
            &mut design,
            4,
            OverhangPair {
                tail_helix: 0,
                head_helix: 0,
                length: 5,
            },
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::DomainOutOfBounds { .. }));
        assert_eq!(design.strand_count(), 0);
    }
}
