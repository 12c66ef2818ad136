use crate::cli::{ExtractArgs, ExtractFormat};
use crate::error::{CliError, Result};
use crate::prompt::{ParameterSource, RegexExtractor};
use tracing::info;

pub fn run(args: ExtractArgs) -> Result<()> {
    let params = RegexExtractor::new().extract(&args.prompt)?;
    info!(
        directives = params.loops.len() + params.sticky_ends.len() + params.crossovers.len(),
        "Extraction complete."
    );

    let rendered = match args.format {
        ExtractFormat::Toml => {
            toml::to_string_pretty(&params).map_err(|e| CliError::Other(e.into()))?
        }
        ExtractFormat::Json => {
            serde_json::to_string_pretty(&params).map_err(|e| CliError::Other(e.into()))?
        }
    };
    println!("{}", rendered);

    Ok(())
}
