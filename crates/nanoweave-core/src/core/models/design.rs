use super::connectors::{Crossover, Loopout, Nick};
use super::domain::Domain;
use super::error::ModelError;
use super::helix::Helix;
use super::ids::StrandId;
use super::strand::Strand;
use slotmap::SlotMap;

/// The central mutable container for one nanostructure assembly.
///
/// A design is created empty, populated monotonically over one construction
/// pass, and then handed to a serializer. Helices are allocated once and
/// never resized; strands, nicks, loopouts, and crossovers accumulate as
/// directives are applied. Every mutation either succeeds and updates state
/// or fails with a [`ModelError`] and leaves the design untouched.
#[derive(Debug, Clone, Default)]
pub struct Design {
    helices: Vec<Helix>,
    /// Primary strand storage; insertion order is kept separately so that
    /// serialization and iteration are deterministic.
    strands: SlotMap<StrandId, Strand>,
    strand_order: Vec<StrandId>,
    nicks: Vec<Nick>,
    loopouts: Vec<Loopout>,
    crossovers: Vec<Crossover>,
    helices_view_order: Vec<usize>,
}

impl Design {
    /// Creates a new, empty design.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates `count` helices of capacity `max_offset`, returning the
    /// newly created helices in index order.
    ///
    /// Helices are appended after any already allocated ones and join the
    /// view order at the end.
    pub fn allocate_helices(&mut self, count: usize, max_offset: usize) -> &[Helix] {
        let base = self.helices.len();
        for i in 0..count {
            self.helices.push(Helix::new(base + i, max_offset));
            self.helices_view_order.push(base + i);
        }
        &self.helices[base..]
    }

    pub fn helices(&self) -> &[Helix] {
        &self.helices
    }

    pub fn helix(&self, index: usize) -> Option<&Helix> {
        self.helices.get(index)
    }

    pub fn helix_count(&self) -> usize {
        self.helices.len()
    }

    /// Replaces the helix display order.
    ///
    /// The order must reference each allocated helix exactly once.
    pub fn set_helices_view_order(&mut self, order: Vec<usize>) -> Result<(), ModelError> {
        if order.len() != self.helices.len() {
            return Err(ModelError::InvalidViewOrder);
        }
        let mut seen = vec![false; self.helices.len()];
        for &index in &order {
            if index >= self.helices.len() || seen[index] {
                return Err(ModelError::InvalidViewOrder);
            }
            seen[index] = true;
        }
        self.helices_view_order = order;
        Ok(())
    }

    pub fn helices_view_order(&self) -> &[usize] {
        &self.helices_view_order
    }

    /// Validates a strand against the design without inserting it.
    ///
    /// Checks invariants 1 and 2: every domain's helix index must be in
    /// range and its interval must be non-empty and fit in
    /// `[0, max_offset]`.
    pub(crate) fn validate_strand(&self, strand: &Strand) -> Result<(), ModelError> {
        if strand.domains().is_empty() {
            return Err(ModelError::EmptyStrand);
        }
        for domain in strand.domains() {
            let helix = self
                .helices
                .get(domain.helix)
                .ok_or(ModelError::UnknownHelix {
                    helix: domain.helix,
                    helix_count: self.helices.len(),
                })?;
            if domain.is_empty() || domain.end > helix.max_offset {
                return Err(ModelError::DomainOutOfBounds {
                    helix: domain.helix,
                    start: domain.start,
                    end: domain.end,
                    max_offset: helix.max_offset,
                });
            }
        }
        Ok(())
    }

    /// Inserts a strand, returning its ID.
    pub fn add_strand(&mut self, strand: Strand) -> Result<StrandId, ModelError> {
        self.validate_strand(&strand)?;
        let id = self.strands.insert(strand);
        self.strand_order.push(id);
        Ok(id)
    }

    pub fn strand(&self, id: StrandId) -> Option<&Strand> {
        self.strands.get(id)
    }

    /// Iterates over strands in insertion order.
    pub fn strands_iter(&self) -> impl Iterator<Item = (StrandId, &Strand)> {
        self.strand_order.iter().map(|&id| (id, &self.strands[id]))
    }

    pub fn strand_count(&self) -> usize {
        self.strand_order.len()
    }

    /// Whether some strand has a domain covering `offset` on `helix`.
    ///
    /// This is the feasibility predicate for crossover insertion.
    pub fn strand_exists_at(&self, helix: usize, offset: usize) -> bool {
        self.strands.values().any(|s| s.covers(helix, offset))
    }

    /// Cuts the strand covering `(helix, offset, forward)` into two strands.
    ///
    /// The cut is only meaningful at an offset strictly inside a matching
    /// domain; anything else is rejected with `InvalidOffset`. The owning
    /// strand keeps the domains up to the cut, and a new strand takes the
    /// rest, inserted directly after it in strand order.
    pub fn add_nick(&mut self, helix: usize, offset: usize, forward: bool) -> Result<(), ModelError> {
        let target = self.strand_order.iter().copied().find_map(|id| {
            self.strands[id]
                .domains()
                .iter()
                .position(|d| d.helix == helix && d.forward == forward && d.strictly_contains(offset))
                .map(|idx| (id, idx))
        });
        let (id, idx) = target.ok_or(ModelError::InvalidOffset { helix, offset })?;

        let domains = self.strands[id].domains().to_vec();
        let cut = domains[idx];
        let mut left = domains[..idx].to_vec();
        left.push(Domain::new(cut.helix, cut.start, offset, cut.forward));
        let mut right = vec![Domain::new(cut.helix, offset, cut.end, cut.forward)];
        right.extend_from_slice(&domains[idx + 1..]);

        // Both pieces are non-empty by construction of `strictly_contains`.
        let left_strand = Strand::from_domains(left)?;
        let right_strand = Strand::from_domains(right)?;

        self.strands[id] = left_strand;
        let right_id = self.strands.insert(right_strand);
        match self.strand_order.iter().position(|&s| s == id) {
            Some(pos) => self.strand_order.insert(pos + 1, right_id),
            None => self.strand_order.push(right_id),
        }
        self.nicks.push(Nick::new(helix, offset, forward));
        Ok(())
    }

    pub fn nicks(&self) -> &[Nick] {
        &self.nicks
    }

    /// Restores a nick record without re-splitting strands. Used when
    /// rebuilding a design whose strands are already stored post-split.
    pub(crate) fn record_nick(&mut self, nick: Nick) {
        self.nicks.push(nick);
    }

    /// Records an unpaired connector of `length` bases between two helices.
    ///
    /// The connector is undirected; both referenced helices must exist.
    pub fn add_loopout(
        &mut self,
        helix_a: usize,
        helix_b: usize,
        length: usize,
    ) -> Result<(), ModelError> {
        self.check_helix(helix_a)?;
        self.check_helix(helix_b)?;
        self.loopouts.push(Loopout::new(helix_a, helix_b, length));
        Ok(())
    }

    pub fn loopouts(&self) -> &[Loopout] {
        &self.loopouts
    }

    /// Records a rigid link between two helices at a shared offset.
    ///
    /// Requires a strand domain spanning `offset` on both helices at the
    /// moment of insertion (invariant 3).
    pub fn add_crossover(
        &mut self,
        helix_a: usize,
        helix_b: usize,
        offset: usize,
        forward: bool,
    ) -> Result<(), ModelError> {
        self.check_helix(helix_a)?;
        self.check_helix(helix_b)?;
        for helix in [helix_a, helix_b] {
            if !self.strand_exists_at(helix, offset) {
                return Err(ModelError::NoStrandAtOffset { helix, offset });
            }
        }
        self.crossovers
            .push(Crossover::new(helix_a, helix_b, offset, forward));
        Ok(())
    }

    pub fn crossovers(&self) -> &[Crossover] {
        &self.crossovers
    }

    fn check_helix(&self, helix: usize) -> Result<(), ModelError> {
        if helix >= self.helices.len() {
            return Err(ModelError::UnknownHelix {
                helix,
                helix_count: self.helices.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn design_with_base_strands(helices: usize, total_length: usize) -> Design {
        let mut design = Design::new();
        design.allocate_helices(helices, total_length);
        for helix in 0..helices {
            design
                .add_strand(Strand::single(Domain::new(helix, 0, total_length, true)))
                .unwrap();
        }
        design
    }

    #[test]
    fn allocate_helices_assigns_sequential_indices() {
        let mut design = Design::new();
        let allocated = design.allocate_helices(4, 80);
        assert_eq!(allocated.len(), 4);
        for (i, helix) in allocated.iter().enumerate() {
            assert_eq!(helix.index, i);
            assert_eq!(helix.max_offset, 80);
        }
        assert_eq!(design.helices_view_order(), &[0, 1, 2, 3]);
    }

    #[test]
    fn add_strand_rejects_unknown_helix() {
        let mut design = Design::new();
        design.allocate_helices(2, 32);
        let err = design
            .add_strand(Strand::single(Domain::new(2, 0, 32, true)))
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownHelix {
                helix: 2,
                helix_count: 2
            }
        );
        assert_eq!(design.strand_count(), 0);
    }

    #[test]
    fn add_strand_rejects_domain_past_capacity() {
        let mut design = Design::new();
        design.allocate_helices(1, 32);
        let err = design
            .add_strand(Strand::single(Domain::new(0, 28, 33, true)))
            .unwrap_err();
        assert!(matches!(err, ModelError::DomainOutOfBounds { end: 33, .. }));
        assert_eq!(design.strand_count(), 0);
    }

    #[test]
    fn add_strand_rejects_empty_interval() {
        let mut design = Design::new();
        design.allocate_helices(1, 32);
        let err = design
            .add_strand(Strand::single(Domain::new(0, 5, 5, true)))
            .unwrap_err();
        assert!(matches!(err, ModelError::DomainOutOfBounds { .. }));
    }

    #[test]
    fn strand_exists_at_tracks_coverage() {
        let design = design_with_base_strands(2, 80);
        assert!(design.strand_exists_at(0, 0));
        assert!(design.strand_exists_at(1, 79));
        assert!(!design.strand_exists_at(1, 80));
        assert!(!design.strand_exists_at(2, 0));
    }

    #[test]
    fn add_nick_splits_strand_at_offset() {
        let mut design = design_with_base_strands(1, 80);
        design.add_nick(0, 40, true).unwrap();

        assert_eq!(design.strand_count(), 2);
        let spans: Vec<(usize, usize)> = design
            .strands_iter()
            .map(|(_, s)| (s.first_domain().start, s.last_domain().end))
            .collect();
        assert_eq!(spans, vec![(0, 40), (40, 80)]);
        assert_eq!(design.nicks(), &[Nick::new(0, 40, true)]);
    }

    #[test]
    fn nicked_halves_still_cover_the_cut_offset() {
        let mut design = design_with_base_strands(1, 80);
        design.add_nick(0, 40, true).unwrap();
        // The right half owns [40, 80), so offset 40 stays covered.
        assert!(design.strand_exists_at(0, 40));
        assert!(design.strand_exists_at(0, 39));
    }

    #[test]
    fn add_nick_rejects_offset_outside_domains() {
        let mut design = design_with_base_strands(1, 80);
        for offset in [0, 80, 200] {
            let err = design.add_nick(0, offset, true).unwrap_err();
            assert_eq!(err, ModelError::InvalidOffset { helix: 0, offset });
        }
        assert_eq!(design.strand_count(), 1);
        assert!(design.nicks().is_empty());
    }

    #[test]
    fn add_nick_respects_orientation() {
        let mut design = design_with_base_strands(1, 80);
        let err = design.add_nick(0, 40, false).unwrap_err();
        assert_eq!(err, ModelError::InvalidOffset { helix: 0, offset: 40 });
    }

    #[test]
    fn add_loopout_requires_known_helices() {
        let mut design = design_with_base_strands(2, 32);
        design.add_loopout(0, 1, 10).unwrap();
        assert_eq!(design.loopouts(), &[Loopout::new(0, 1, 10)]);

        let err = design.add_loopout(0, 5, 10).unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownHelix {
                helix: 5,
                helix_count: 2
            }
        );
        assert_eq!(design.loopouts().len(), 1);
    }

    #[test]
    fn add_loopout_accepts_self_loop() {
        let mut design = design_with_base_strands(1, 32);
        design.add_loopout(0, 0, 6).unwrap();
        assert!(design.loopouts()[0].joins(0, 0));
    }

    #[test]
    fn add_crossover_requires_coverage_on_both_helices() {
        let mut design = design_with_base_strands(2, 80);
        design.add_crossover(0, 1, 40, true).unwrap();
        assert_eq!(design.crossovers(), &[Crossover::new(0, 1, 40, true)]);
    }

    #[test]
    fn add_crossover_names_the_uncovered_helix() {
        let mut design = Design::new();
        design.allocate_helices(2, 80);
        design
            .add_strand(Strand::single(Domain::new(0, 0, 80, true)))
            .unwrap();
        // Helix 1 has no strand at all.
        let err = design.add_crossover(0, 1, 40, true).unwrap_err();
        assert_eq!(
            err,
            ModelError::NoStrandAtOffset {
                helix: 1,
                offset: 40
            }
        );
        assert!(design.crossovers().is_empty());
    }

    #[test]
    fn add_crossover_rejects_unknown_helix_before_coverage_check() {
        let mut design = design_with_base_strands(2, 80);
        let err = design.add_crossover(0, 9, 40, true).unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownHelix {
                helix: 9,
                helix_count: 2
            }
        );
    }

    #[test]
    fn set_helices_view_order_validates_permutation() {
        let mut design = Design::new();
        design.allocate_helices(3, 32);
        design.set_helices_view_order(vec![2, 0, 1]).unwrap();
        assert_eq!(design.helices_view_order(), &[2, 0, 1]);

        assert_eq!(
            design.set_helices_view_order(vec![0, 1]).unwrap_err(),
            ModelError::InvalidViewOrder
        );
        assert_eq!(
            design.set_helices_view_order(vec![0, 0, 1]).unwrap_err(),
            ModelError::InvalidViewOrder
        );
        assert_eq!(
            design.set_helices_view_order(vec![0, 1, 3]).unwrap_err(),
            ModelError::InvalidViewOrder
        );
    }
}
