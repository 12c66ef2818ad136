use serde::Serialize;
use std::fmt;

/// The directive categories that run after the base phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DirectiveKind {
    Loop,
    Crossover,
    StickyEnd,
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Loop => "loop",
            Self::Crossover => "crossover",
            Self::StickyEnd => "sticky end",
        };
        write!(f, "{}", name)
    }
}

/// How a single directive concluded.
///
/// `Applied` means the first candidate succeeded; `Recovered` means a later
/// rung of the retry ladder (swapped helix order, longer overhang, degraded
/// crossover fallback) succeeded; `Skipped` means every remedy failed and
/// the design was left unchanged by this directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DirectiveOutcome {
    Applied,
    Recovered { detail: String },
    Skipped { reason: String },
}

/// One directive's record: what was asked, on which helices (1-based, as
/// given by the parameter set), and how it concluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectiveRecord {
    pub kind: DirectiveKind,
    pub helix_a: usize,
    pub helix_b: usize,
    pub outcome: DirectiveOutcome,
}

impl fmt::Display for DirectiveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}): ",
            self.kind, self.helix_a, self.helix_b
        )?;
        match &self.outcome {
            DirectiveOutcome::Applied => write!(f, "applied"),
            DirectiveOutcome::Recovered { detail } => write!(f, "recovered - {}", detail),
            DirectiveOutcome::Skipped { reason } => write!(f, "skipped - {}", reason),
        }
    }
}

/// Ordered per-directive outcomes of one construction run.
///
/// A run that completes always yields a best-effort design; this report is
/// the audit trail of which directives made it in unchanged, which needed a
/// remedy, and which were abandoned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    records: Vec<DirectiveRecord>,
}

impl BuildReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: DirectiveRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[DirectiveRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn applied_count(&self) -> usize {
        self.count(|o| matches!(o, DirectiveOutcome::Applied))
    }

    pub fn recovered_count(&self) -> usize {
        self.count(|o| matches!(o, DirectiveOutcome::Recovered { .. }))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, DirectiveOutcome::Skipped { .. }))
    }

    /// Whether every directive was applied or recovered.
    pub fn is_clean(&self) -> bool {
        self.skipped_count() == 0
    }

    fn count(&self, predicate: impl Fn(&DirectiveOutcome) -> bool) -> usize {
        self.records
            .iter()
            .filter(|r| predicate(&r.outcome))
            .count()
    }
}
