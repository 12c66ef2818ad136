use crate::error::Result;
use nanoweave::engine::config::{
    CrossoverDirective, DesignParameters, LoopDirective, StickyEndDirective,
};
use regex::Regex;
use tracing::debug;

/// A parameter-extraction collaborator: turns a free-text design description
/// into a typed parameter set.
///
/// The construction engine never sees this trait; extraction happens in the
/// caller and may be backed by anything from regexes to a remote model.
/// Implementations leave fields they cannot find unset and let the engine's
/// own validation decide whether the set is usable.
pub trait ParameterSource {
    fn extract(&self, prompt: &str) -> Result<DesignParameters>;
}

/// Regex-based extractor for the structured phrasing used in design prompts,
/// e.g. "Create a square lattice with 4 helices, each 80 bases long. Helix 1
/// and 2 have a loop of 10 base pairs."
pub struct RegexExtractor {
    helices: Regex,
    total_length: Regex,
    loops: Regex,
    sticky_ends: Regex,
    crossovers: Regex,
}

impl RegexExtractor {
    pub fn new() -> Self {
        Self {
            helices: Regex::new(r"(\d+)\s*helices?").expect("Failed to compile helices pattern"),
            total_length: Regex::new(r"(\d+)\s*(?:bases|bp)")
                .expect("Failed to compile total-length pattern"),
            loops: Regex::new(
                r"helix\s*(\d+)\s*and\s*(\d+)\s*have\s*a\s*loop\s*of\s*(\d+)\s*base\s*pairs",
            )
            .expect("Failed to compile loop pattern"),
            sticky_ends: Regex::new(
                r"helix\s*(\d+)\s*has\s*a\s*sticky\s*end\s*linking\s*with\s*helix\s*(\d+)",
            )
            .expect("Failed to compile sticky-end pattern"),
            crossovers: Regex::new(r"crossovers?\s*between\s*helix\s*(\d+)\s*and\s*helix\s*(\d+)")
                .expect("Failed to compile crossover pattern"),
        }
    }
}

impl Default for RegexExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterSource for RegexExtractor {
    fn extract(&self, prompt: &str) -> Result<DesignParameters> {
        let text = prompt.to_lowercase();

        let helices = first_number(&self.helices, &text);
        let total_length = first_number(&self.total_length, &text);

        let loops = self
            .loops
            .captures_iter(&text)
            .filter_map(|c| {
                Some(LoopDirective {
                    helix_a: number(&c, 1)?,
                    helix_b: number(&c, 2)?,
                    length: number(&c, 3)?,
                })
            })
            .collect();
        let sticky_ends = self
            .sticky_ends
            .captures_iter(&text)
            .filter_map(|c| {
                Some(StickyEndDirective {
                    helix_a: number(&c, 1)?,
                    helix_b: number(&c, 2)?,
                })
            })
            .collect();
        let crossovers = self
            .crossovers
            .captures_iter(&text)
            .filter_map(|c| {
                Some(CrossoverDirective {
                    helix_a: number(&c, 1)?,
                    helix_b: number(&c, 2)?,
                })
            })
            .collect();

        let params = DesignParameters {
            helices,
            total_length,
            loops,
            sticky_ends,
            crossovers,
        };
        debug!(?params, "Parameters extracted from prompt.");
        Ok(params)
    }
}

fn first_number(pattern: &Regex, text: &str) -> Option<usize> {
    pattern
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn number(captures: &regex::Captures<'_>, group: usize) -> Option<usize> {
    captures.get(group).and_then(|m| m.as_str().parse().ok())
}
