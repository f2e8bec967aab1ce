//! deepads: generate ad-copy variants, hero image previews, and video prompts
//! from a product brief, backed by a hosted text-generation API.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use app::commands::{generate, research};
use ports::MockCopyModel;
use services::HttpCopyModel;

pub use app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use app::commands::research::ResearchFormat;
pub use domain::{
    AdBrief, AppError, Framework, Objective, Platform, ResearchInsights, StudioConfig, Tone,
    VoiceStyle,
};

/// Run ad generation end to end and print the report.
///
/// Loads `deepads.toml` from the current directory (defaults when absent).
/// Dry runs and mock runs never touch the network, so neither requires an
/// API key.
pub fn generate(options: GenerateOptions, mock: bool) -> Result<GenerateOutcome, AppError> {
    let config = StudioConfig::load(Path::new("."))?;

    let outcome = if options.dry_run || mock {
        generate::execute(&MockCopyModel, &config.api, &options)?
    } else {
        let model = HttpCopyModel::from_config(&config.api)?;
        generate::execute(&model, &config.api, &options)?
    };

    generate::print_report(&outcome);
    Ok(outcome)
}

/// Analyze voice-of-customer text and print the research report.
pub fn research(
    product_description: &str,
    voc_text: &str,
    format: ResearchFormat,
) -> Result<ResearchInsights, AppError> {
    let insights = research::execute(product_description, voc_text);
    research::print_report(&insights, format)?;
    Ok(insights)
}

/// Read a voice-of-customer text file.
pub fn load_voc_file(path: &Path) -> Result<String, AppError> {
    if !path.exists() {
        return Err(AppError::VocFileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}
