//! Ad variant assembly: the finished unit of output for one framework.

use sha2::{Digest, Sha256};

use crate::domain::brief::{AdBrief, Framework, VoiceStyle};
use crate::domain::insights::ResearchInsights;

/// One generated ad: copy plus the artifacts derived from it.
#[derive(Debug, Clone)]
pub struct AdVariant {
    pub framework: Framework,
    pub headline: String,
    pub body: String,
    pub cta: String,
    pub short_link: String,
    pub video_prompt: String,
}

const HEADLINE_MARKER: &str = "HEADLINE:";

/// Split a model response into headline and body.
///
/// The prompt contract asks the model to lead with a `HEADLINE:` line. When
/// the marker is missing the whole response becomes the body and the caller
/// substitutes a deterministic fallback headline.
pub fn split_headline(response: &str) -> (Option<String>, String) {
    let trimmed = response.trim();
    for (idx, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(HEADLINE_MARKER) {
            let headline = rest.trim().to_string();
            let body: String = trimmed
                .lines()
                .enumerate()
                .filter(|(i, _)| *i != idx)
                .map(|(_, l)| l)
                .collect::<Vec<_>>()
                .join("\n");
            if !headline.is_empty() {
                return (Some(headline), body.trim().to_string());
            }
        }
    }
    (None, trimmed.to_string())
}

/// Deterministic headline used when the model response carries none.
pub fn fallback_headline(
    brief: &AdBrief,
    insights: &ResearchInsights,
    framework: Framework,
) -> String {
    let product = brief.product_name();
    let keyword = insights.lead_keyword();
    let audience = brief.audience_or_default();

    match framework {
        Framework::Aida => {
            format!("{}: The {} Upgrade {} Actually Use", product, title_case(keyword), audience)
        }
        Framework::Pas => {
            format!("Tired of {} Failures? Meet {}", keyword.to_lowercase(), product)
        }
        Framework::FourPs => format!("{} – {} in Every Detail", product, title_case(keyword)),
        Framework::Story => {
            format!("How {} Go From Stuck to Thriving with {}", title_case(audience), product)
        }
    }
}

/// Adjust the register of generated body text.
///
/// Simple registers swap jargon for plain words; the technical register
/// appends a tech note. Balanced passes through untouched.
pub fn apply_voice_style(text: &str, style: VoiceStyle) -> String {
    match style {
        VoiceStyle::VerySimple | VoiceStyle::Simple => {
            let replacements = [
                ("optimize", "improve"),
                ("conversion", "results"),
                ("experience", "use"),
                ("leverage", "use"),
            ];
            let mut out = text.to_string();
            for (jargon, plain) in replacements {
                out = out.replace(jargon, plain);
                out = out.replace(&title_case(jargon), &title_case(plain));
            }
            out
        }
        VoiceStyle::Balanced => text.to_string(),
        VoiceStyle::Technical => {
            format!("{}\n\nTech note: Built with data-driven optimization in mind.", text)
        }
    }
}

/// Campaign tracking link, stable for a given description and framework.
pub fn short_link(brief: &AdBrief, framework: Framework) -> String {
    let digest = Sha256::digest(format!("{}|{}", brief.product_description, framework.slug()));
    let tag: String = digest.iter().take(4).map(|b| format!("{:02x}", b)).collect();
    format!("https://deepads.io/{}-{}", framework.slug(), tag)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
