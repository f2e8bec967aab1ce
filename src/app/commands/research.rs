//! Research command: mine voice-of-customer text for campaign signals.

use crate::domain::insights::{ResearchInsights, analyze_voc_text};
use crate::domain::AppError;

/// Output format for the research report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResearchFormat {
    #[default]
    Text,
    Json,
}

/// Analyze VOC text alongside an optional product description.
pub fn execute(product_description: &str, voc_text: &str) -> ResearchInsights {
    analyze_voc_text(product_description, voc_text)
}

/// Print the insights in the requested format.
pub fn print_report(insights: &ResearchInsights, format: ResearchFormat) -> Result<(), AppError> {
    match format {
        ResearchFormat::Json => {
            let json = serde_json::to_string_pretty(insights)
                .map_err(|e| AppError::config_error(format!("JSON encode failed: {}", e)))?;
            println!("{}", json);
        }
        ResearchFormat::Text => {
            println!("Top keywords:");
            for keyword in insights.top_keywords.iter().take(10) {
                println!("  - {}", keyword);
            }
            println!("Pain points:");
            for pain in insights.pains.iter().take(6) {
                println!("  - {}", pain);
            }
            println!("Desires & outcomes:");
            for desire in insights.desires.iter().take(6) {
                println!("  - {}", desire);
            }
            if !insights.objections.is_empty() {
                println!("Common objections:");
                for objection in insights.objections.iter().take(6) {
                    println!("  - {}", objection);
                }
            }
        }
    }
    Ok(())
}
