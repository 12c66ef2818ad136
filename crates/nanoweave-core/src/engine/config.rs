use super::error::EngineError;
use serde::{Deserialize, Serialize};

/// A loop directive: connect two helices with an unpaired loopout of
/// `length` bases. Helix indices are 1-based as delivered by the
/// parameter-extraction collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopDirective {
    pub helix_a: usize,
    pub helix_b: usize,
    pub length: usize,
}

/// A sticky-end directive: attach complementary overhangs to the tail of
/// `helix_a` and the head of `helix_b`. Indices are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickyEndDirective {
    pub helix_a: usize,
    pub helix_b: usize,
}

/// A crossover directive: link two helices at the base-phase offset.
/// Indices are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossoverDirective {
    pub helix_a: usize,
    pub helix_b: usize,
}

/// The typed parameter set produced by the extraction collaborator.
///
/// The two core fields are optional because extraction may fail to produce
/// them; [`DesignParameters::core_values`] turns their absence into the
/// run-fatal `MissingParameters` error. Directive lists default to empty, so
/// a bare `{ helices, total_length }` set builds a plain nicked lattice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignParameters {
    pub helices: Option<usize>,
    pub total_length: Option<usize>,
    pub loops: Vec<LoopDirective>,
    pub sticky_ends: Vec<StickyEndDirective>,
    pub crossovers: Vec<CrossoverDirective>,
}

impl DesignParameters {
    /// Validates the core fields, returning `(helices, total_length)`.
    ///
    /// # Errors
    ///
    /// Returns `MissingParameters` if either field is absent or zero.
    pub fn core_values(&self) -> Result<(usize, usize), EngineError> {
        let helices = self
            .helices
            .filter(|&n| n > 0)
            .ok_or(EngineError::MissingParameters { field: "helices" })?;
        let total_length = self.total_length.filter(|&n| n > 0).ok_or(
            EngineError::MissingParameters {
                field: "total_length",
            },
        )?;
        Ok((helices, total_length))
    }
}

/// Builder for assembling a parameter set in code (tests, CLI overrides).
#[derive(Debug, Default)]
pub struct DesignParametersBuilder {
    params: DesignParameters,
}

impl DesignParametersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn helices(mut self, count: usize) -> Self {
        self.params.helices = Some(count);
        self
    }

    pub fn total_length(mut self, length: usize) -> Self {
        self.params.total_length = Some(length);
        self
    }

    pub fn loop_directive(mut self, helix_a: usize, helix_b: usize, length: usize) -> Self {
        self.params.loops.push(LoopDirective {
            helix_a,
            helix_b,
            length,
        });
        self
    }

    pub fn sticky_end(mut self, helix_a: usize, helix_b: usize) -> Self {
        self.params
            .sticky_ends
            .push(StickyEndDirective { helix_a, helix_b });
        self
    }

    pub fn crossover(mut self, helix_a: usize, helix_b: usize) -> Self {
        self.params
            .crossovers
            .push(CrossoverDirective { helix_a, helix_b });
        self
    }

    pub fn build(self) -> DesignParameters {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_values_requires_both_fields() {
        let missing_all = DesignParameters::default();
        assert!(matches!(
            missing_all.core_values(),
            Err(EngineError::MissingParameters { field: "helices" })
        ));

        let missing_length = DesignParametersBuilder::new().helices(4).build();
        assert!(matches!(
            missing_length.core_values(),
            Err(EngineError::MissingParameters {
                field: "total_length"
            })
        ));
    }

    #[test]
    fn core_values_rejects_zero() {
        let params = DesignParametersBuilder::new()
            .helices(0)
            .total_length(80)
            .build();
        assert!(matches!(
            params.core_values(),
            Err(EngineError::MissingParameters { field: "helices" })
        ));
    }

    #[test]
    fn core_values_returns_validated_pair() {
        let params = DesignParametersBuilder::new()
            .helices(4)
            .total_length(80)
            .build();
        assert_eq!(params.core_values().unwrap(), (4, 80));
    }

    #[test]
    fn builder_collects_directives_in_order() {
        let params = DesignParametersBuilder::new()
            .helices(4)
            .total_length(80)
            .loop_directive(1, 2, 10)
            .crossover(1, 2)
            .crossover(3, 4)
            .sticky_end(3, 4)
            .build();
        assert_eq!(params.loops.len(), 1);
        assert_eq!(params.crossovers.len(), 2);
        assert_eq!(params.sticky_ends.len(), 1);
        assert_eq!(
            params.crossovers[1],
            CrossoverDirective {
                helix_a: 3,
                helix_b: 4
            }
        );
    }

    #[test]
    fn parameters_deserialize_from_toml_shape() {
        // Mirrors what the CLI's parameter files contain.
        let json = r#"{
            "helices": 4,
            "total_length": 80,
            "loops": [{"helix_a": 1, "helix_b": 2, "length": 10}],
            "crossovers": [{"helix_a": 1, "helix_b": 2}]
        }"#;
        let params: DesignParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.core_values().unwrap(), (4, 80));
        assert_eq!(params.loops[0].length, 10);
        assert!(params.sticky_ends.is_empty());
    }
}
