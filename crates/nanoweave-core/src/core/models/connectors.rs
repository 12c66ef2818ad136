use serde::{Deserialize, Serialize};

/// A logical cut point splitting a continuous strand into two independently
/// addressable pieces without removing base-pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nick {
    pub helix: usize,
    pub offset: usize,
    pub forward: bool,
}

impl Nick {
    pub fn new(helix: usize, offset: usize, forward: bool) -> Self {
        Self {
            helix,
            offset,
            forward,
        }
    }
}

/// An unpaired flexible connector of `length` bases joining a position on one
/// helix to a position on another (or the same) helix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Loopout {
    pub helix_a: usize,
    pub helix_b: usize,
    pub length: usize,
}

impl Loopout {
    pub fn new(helix_a: usize, helix_b: usize, length: usize) -> Self {
        Self {
            helix_a,
            helix_b,
            length,
        }
    }

    /// Whether this loopout joins the given pair, in either order.
    pub fn joins(&self, helix_a: usize, helix_b: usize) -> bool {
        (self.helix_a == helix_a && self.helix_b == helix_b)
            || (self.helix_a == helix_b && self.helix_b == helix_a)
    }
}

/// A rigid link where the strands of two helices cross at a shared offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crossover {
    pub helix_a: usize,
    pub helix_b: usize,
    pub offset: usize,
    pub forward: bool,
}

impl Crossover {
    pub fn new(helix_a: usize, helix_b: usize, offset: usize, forward: bool) -> Self {
        Self {
            helix_a,
            helix_b,
            offset,
            forward,
        }
    }

    pub fn involves(&self, helix: usize) -> bool {
        self.helix_a == helix || self.helix_b == helix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loopout_joins_is_order_insensitive() {
        let loopout = Loopout::new(0, 3, 10);
        assert!(loopout.joins(0, 3));
        assert!(loopout.joins(3, 0));
        assert!(!loopout.joins(0, 2));
    }

    #[test]
    fn loopout_may_join_a_helix_to_itself() {
        let hairpin = Loopout::new(2, 2, 6);
        assert!(hairpin.joins(2, 2));
    }

    #[test]
    fn crossover_involves_both_helices() {
        let crossover = Crossover::new(1, 2, 40, true);
        assert!(crossover.involves(1));
        assert!(crossover.involves(2));
        assert!(!crossover.involves(0));
    }
}
