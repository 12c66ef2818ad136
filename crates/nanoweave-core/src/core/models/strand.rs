use super::domain::Domain;
use super::error::ModelError;
use serde::{Deserialize, Serialize};

/// An ordered, non-empty sequence of domains owned by the design.
///
/// Strands start out as full-length base strands and are later split by nicks
/// or supplemented by short overhang strands for sticky-end pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strand {
    domains: Vec<Domain>,
}

impl Strand {
    /// Builds a strand from its domains, rejecting an empty sequence.
    pub fn from_domains(domains: Vec<Domain>) -> Result<Self, ModelError> {
        if domains.is_empty() {
            return Err(ModelError::EmptyStrand);
        }
        Ok(Self { domains })
    }

    /// Convenience constructor for the common single-domain strand.
    pub fn single(domain: Domain) -> Self {
        Self {
            domains: vec![domain],
        }
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn first_domain(&self) -> &Domain {
        &self.domains[0]
    }

    pub fn last_domain(&self) -> &Domain {
        &self.domains[self.domains.len() - 1]
    }

    /// Total number of bases covered across all domains.
    pub fn length(&self) -> usize {
        self.domains.iter().map(Domain::len).sum()
    }

    /// Whether any domain of this strand covers `offset` on `helix`.
    pub fn covers(&self, helix: usize, offset: usize) -> bool {
        self.domains
            .iter()
            .any(|d| d.helix == helix && d.contains_offset(offset))
    }
}
