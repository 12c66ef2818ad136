use super::traits::DesignFile;
use crate::core::models::connectors::{Crossover, Loopout, Nick};
use crate::core::models::design::Design;
use crate::core::models::error::ModelError;
use crate::core::models::strand::Strand;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Format version written into every file; readers tolerate unknown fields
/// so older NanoWeave releases can open newer files.
const FORMAT_VERSION: &str = "0.19.1";

const GRID_SQUARE: &str = "square";

#[derive(Debug, Error)]
pub enum ScadnanoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stored design violates model invariants: {0}")]
    Model(#[from] ModelError),

    #[error("unsupported grid type '{0}', only 'square' is recognized")]
    UnsupportedGrid(String),
}

#[derive(serde::Serialize, serde::Deserialize)]
struct DesignDocument {
    version: String,
    grid: String,
    helices: Vec<HelixDocument>,
    #[serde(default)]
    helices_view_order: Vec<usize>,
    strands: Vec<StrandDocument>,
    #[serde(default)]
    nicks: Vec<Nick>,
    #[serde(default)]
    loopouts: Vec<Loopout>,
    #[serde(default)]
    crossovers: Vec<Crossover>,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct HelixDocument {
    max_offset: usize,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct StrandDocument {
    domains: Vec<DomainDocument>,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct DomainDocument {
    helix: usize,
    forward: bool,
    start: usize,
    end: usize,
}

/// The scadnano-style JSON design format (`.sc`).
///
/// Strands are stored post-split, so nick records are restored verbatim on
/// read while loopouts and crossovers are re-validated through the model's
/// insertion operations.
pub struct ScadnanoFile;

impl DesignFile for ScadnanoFile {
    type Error = ScadnanoError;

    fn read_from(reader: &mut impl BufRead) -> Result<Design, Self::Error> {
        let document: DesignDocument = serde_json::from_reader(reader)?;
        if document.grid != GRID_SQUARE {
            return Err(ScadnanoError::UnsupportedGrid(document.grid));
        }

        let mut design = Design::new();
        for helix in &document.helices {
            design.allocate_helices(1, helix.max_offset);
        }
        if !document.helices_view_order.is_empty() {
            design.set_helices_view_order(document.helices_view_order)?;
        }
        for strand in document.strands {
            let domains = strand
                .domains
                .into_iter()
                .map(|d| crate::core::models::domain::Domain::new(d.helix, d.start, d.end, d.forward))
                .collect();
            design.add_strand(Strand::from_domains(domains)?)?;
        }
        for nick in document.nicks {
            design.record_nick(nick);
        }
        for loopout in document.loopouts {
            design.add_loopout(loopout.helix_a, loopout.helix_b, loopout.length)?;
        }
        for crossover in document.crossovers {
            design.add_crossover(
                crossover.helix_a,
                crossover.helix_b,
                crossover.offset,
                crossover.forward,
            )?;
        }
        Ok(design)
    }

    fn write_to(design: &Design, writer: &mut impl Write) -> Result<(), Self::Error> {
        let document = DesignDocument {
            version: FORMAT_VERSION.to_string(),
            grid: GRID_SQUARE.to_string(),
            helices: design
                .helices()
                .iter()
                .map(|h| HelixDocument {
                    max_offset: h.max_offset,
                })
                .collect(),
            helices_view_order: design.helices_view_order().to_vec(),
            strands: design
                .strands_iter()
                .map(|(_, strand)| StrandDocument {
                    domains: strand
                        .domains()
                        .iter()
                        .map(|d| DomainDocument {
                            helix: d.helix,
                            forward: d.forward,
                            start: d.start,
                            end: d.end,
                        })
                        .collect(),
                })
                .collect(),
            nicks: design.nicks().to_vec(),
            loopouts: design.loopouts().to_vec(),
            crossovers: design.crossovers().to_vec(),
        };
        serde_json::to_writer_pretty(&mut *writer, &document)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::domain::Domain;
    use std::io::BufReader;

    fn sample_design() -> Design {
        let mut design = Design::new();
        design.allocate_helices(2, 80);
        for helix in 0..2 {
            design
                .add_strand(Strand::single(Domain::new(helix, 0, 80, true)))
                .unwrap();
            design.add_nick(helix, 40, true).unwrap();
        }
        design.add_loopout(0, 1, 10).unwrap();
        design.add_crossover(0, 1, 40, true).unwrap();
        design
    }

    #[test]
    fn written_design_reads_back_identically() {
        let design = sample_design();
        let mut buffer = Vec::new();
        ScadnanoFile::write_to(&design, &mut buffer).unwrap();

        let restored = ScadnanoFile::read_from(&mut BufReader::new(buffer.as_slice())).unwrap();

        assert_eq!(restored.helix_count(), design.helix_count());
        assert_eq!(restored.strand_count(), design.strand_count());
        assert_eq!(restored.nicks(), design.nicks());
        assert_eq!(restored.loopouts(), design.loopouts());
        assert_eq!(restored.crossovers(), design.crossovers());

        let original_spans: Vec<Vec<Domain>> = design
            .strands_iter()
            .map(|(_, s)| s.domains().to_vec())
            .collect();
        let restored_spans: Vec<Vec<Domain>> = restored
            .strands_iter()
            .map(|(_, s)| s.domains().to_vec())
            .collect();
        assert_eq!(restored_spans, original_spans);
    }

    #[test]
    fn output_contains_format_header() {
        let design = sample_design();
        let mut buffer = Vec::new();
        ScadnanoFile::write_to(&design, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"version\": \"0.19.1\""));
        assert!(text.contains("\"grid\": \"square\""));
    }

    #[test]
    fn read_rejects_unknown_grid() {
        let text = r#"{"version":"0.19.1","grid":"honeycomb","helices":[],"strands":[]}"#;
        let err = ScadnanoFile::read_from(&mut BufReader::new(text.as_bytes())).unwrap_err();
        assert!(matches!(err, ScadnanoError::UnsupportedGrid(grid) if grid == "honeycomb"));
    }

    #[test]
    fn read_rejects_out_of_range_strand() {
        let text = r#"{
            "version": "0.19.1",
            "grid": "square",
            "helices": [{"max_offset": 32}],
            "strands": [{"domains": [{"helix": 3, "forward": true, "start": 0, "end": 32}]}]
        }"#;
        let err = ScadnanoFile::read_from(&mut BufReader::new(text.as_bytes())).unwrap_err();
        assert!(matches!(
            err,
            ScadnanoError::Model(ModelError::UnknownHelix { helix: 3, .. })
        ));
    }

    #[test]
    fn path_roundtrip_through_tempdir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("design.sc");
        let design = sample_design();

        ScadnanoFile::write_to_path(&design, &path).unwrap();
        let restored = ScadnanoFile::read_from_path(&path).unwrap();
        assert_eq!(restored.strand_count(), design.strand_count());
    }
}
