use crate::cli::BuildArgs;
use crate::error::{CliError, Result};
use crate::output::design_output_path;
use crate::progress::CliProgressHandler;
use crate::prompt::{ParameterSource, RegexExtractor};
use chrono::Local;
use nanoweave::core::io::scadnano::ScadnanoFile;
use nanoweave::core::io::traits::DesignFile;
use nanoweave::engine::config::DesignParameters;
use nanoweave::engine::progress::ProgressReporter;
use nanoweave::engine::report::DirectiveOutcome;
use nanoweave::workflows;
use std::fs;
use tracing::{debug, info};

pub fn run(args: BuildArgs) -> Result<()> {
    let params = load_parameters(&args)?;
    let (helices, total_length) = params.core_values()?;
    info!(
        helices,
        total_length,
        loops = params.loops.len(),
        crossovers = params.crossovers.len(),
        sticky_ends = params.sticky_ends.len(),
        "Starting assembly construction."
    );

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.callback());

    let result = workflows::build::run(&params, &reporter)?;

    for record in result.report.records() {
        if let DirectiveOutcome::Skipped { .. } = record.outcome {
            eprintln!("  ⚠ {}", record);
        }
    }
    if args.report && !result.report.is_empty() {
        println!("\nRun report:");
        for record in result.report.records() {
            println!("  {}", record);
        }
    }
    println!(
        "\nConstructed {} strands across {} helices ({} directives: {} applied, {} recovered, {} skipped).",
        result.design.strand_count(),
        result.design.helix_count(),
        result.report.len(),
        result.report.applied_count(),
        result.report.recovered_count(),
        result.report.skipped_count(),
    );

    fs::create_dir_all(&args.output_dir)?;
    let path = design_output_path(&args.output_dir, helices, total_length, Local::now());
    ScadnanoFile::write_to_path(&result.design, &path)?;
    println!("✓ Design written to {}", path.display());

    Ok(())
}

fn load_parameters(args: &BuildArgs) -> Result<DesignParameters> {
    if let Some(path) = &args.params {
        debug!(path = %path.display(), "Loading parameters from file.");
        let contents = fs::read_to_string(path)?;
        let params = toml::from_str(&contents).map_err(|e| CliError::FileParsing {
            path: path.clone(),
            source: e.into(),
        })?;
        Ok(params)
    } else if let Some(prompt) = &args.prompt {
        debug!("Extracting parameters from prompt.");
        RegexExtractor::new().extract(prompt)
    } else {
        Err(CliError::Argument(
            "either --prompt or --params must be provided".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn build_args(prompt: Option<&str>, params: Option<PathBuf>) -> BuildArgs {
        BuildArgs {
            prompt: prompt.map(str::to_string),
            params,
            output_dir: PathBuf::from("designs"),
            report: false,
        }
    }

    #[test]
    fn load_parameters_requires_a_source() {
        let result = load_parameters(&build_args(None, None));
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn load_parameters_extracts_from_prompt() {
        let args = build_args(Some("4 helices, each 80 bases long"), None);
        let params = load_parameters(&args).unwrap();
        assert_eq!(params.core_values().unwrap(), (4, 80));
    }

    #[test]
    fn load_parameters_reads_toml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("params.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            "helices = 4\ntotal_length = 80\n\n[[loops]]\nhelix_a = 1\nhelix_b = 2\nlength = 10"
        )
        .unwrap();

        let params = load_parameters(&build_args(None, Some(path))).unwrap();
        assert_eq!(params.core_values().unwrap(), (4, 80));
        assert_eq!(params.loops.len(), 1);
    }

    #[test]
    fn load_parameters_reports_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("params.toml");
        fs::write(&path, "helices = \"not a number\"").unwrap();

        let result = load_parameters(&build_args(None, Some(path)));
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn build_writes_a_design_file() {
        let dir = tempdir().unwrap();
        let args = BuildArgs {
            prompt: Some("4 helices, each 80 bases long".to_string()),
            params: None,
            output_dir: dir.path().join("designs"),
            report: true,
        };

        run(args).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path().join("designs"))
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].starts_with("dna_design_4x80_"));
        assert!(entries[0].ends_with(".sc"));
    }
}
