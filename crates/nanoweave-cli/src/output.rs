use chrono::DateTime;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Builds the timestamped output path for a generated design, e.g.
/// `designs/dna_design_4x80_20260829_141503.sc`.
pub fn design_output_path<Tz>(
    dir: &Path,
    helices: usize,
    total_length: usize,
    timestamp: DateTime<Tz>,
) -> PathBuf
where
    Tz: chrono::TimeZone,
    Tz::Offset: Display,
{
    dir.join(format!(
        "dna_design_{}x{}_{}.sc",
        helices,
        total_length,
        timestamp.format("%Y%m%d_%H%M%S")
    ))
}
