//! Voice-of-customer research: keyword mining and signal classification.
//!
//! Mines free-text customer language (reviews, comments, support tickets) for
//! the signals the prompt builder feeds to the model: frequent keywords, pain
//! points, desires, and objections.

use serde::Serialize;

/// Signals extracted from voice-of-customer text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResearchInsights {
    /// Most frequent non-stopword tokens, descending by count.
    pub top_keywords: Vec<String>,
    /// Lines expressing frustration with the status quo.
    pub pains: Vec<String>,
    /// Lines expressing a wanted outcome.
    pub desires: Vec<String>,
    /// Lines expressing hesitation or doubt.
    pub objections: Vec<String>,
    /// Original VOC text, kept for display.
    pub raw_notes: String,
}

impl ResearchInsights {
    /// Lead keyword used in headlines, with a generic fallback.
    pub fn lead_keyword(&self) -> &str {
        self.top_keywords.first().map(String::as_str).unwrap_or("innovation")
    }
}

const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "to", "of", "for", "in", "on", "is", "are", "it", "this",
    "that", "with", "at", "be", "as", "by", "from", "about", "was", "were", "have", "had", "has",
    "but", "if", "they", "you", "we", "i", "so",
];

const PAIN_TRIGGERS: &[&str] =
    &["frustrated", "tired of", "annoyed", "hate", "sick of", "doesn't work", "does not work"];

const DESIRE_TRIGGERS: &[&str] = &["want", "wish", "would love", "looking for", "need", "dream"];

const OBJECTION_TRIGGERS: &[&str] = &["worried", "not sure", "concerned", "skeptical", "afraid"];

const MAX_KEYWORDS: usize = 15;

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty() && !STOPWORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// Analyze the product description plus VOC text and extract research signals.
///
/// Keywords are tokens occurring more than once across the combined text,
/// ordered by descending count with alphabetical tie-break so output is
/// stable. Pains, desires, and objections are whole VOC lines matched by
/// trigger phrases. Sparse VOC input falls back to signals synthesized from
/// the description so downstream prompts always have material to work with.
pub fn analyze_voc_text(product_description: &str, voc_text: &str) -> ResearchInsights {
    let combined = format!("{}\n{}", product_description, voc_text);
    let tokens = tokenize(&combined);

    let mut counts: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut frequent: Vec<(String, usize)> =
        counts.into_iter().filter(|(_, count)| *count > 1).collect();
    frequent.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let top_keywords: Vec<String> =
        frequent.into_iter().take(MAX_KEYWORDS).map(|(word, _)| word).collect();

    let mut pains = Vec::new();
    let mut desires = Vec::new();
    let mut objections = Vec::new();

    for line in voc_text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let lower = line.to_lowercase();
        if PAIN_TRIGGERS.iter().any(|t| lower.contains(t)) {
            pains.push(line.to_string());
        }
        if DESIRE_TRIGGERS.iter().any(|t| lower.contains(t)) {
            desires.push(line.to_string());
        }
        if OBJECTION_TRIGGERS.iter().any(|t| lower.contains(t)) {
            objections.push(line.to_string());
        }
    }

    let description = product_description.trim();
    if pains.is_empty() && !description.is_empty() {
        pains.push(format!(
            "People struggle to get consistent results with current solutions for {}",
            excerpt(description, 80)
        ));
    }
    if desires.is_empty() && !description.is_empty() {
        desires.push(format!(
            "They want a simpler, faster way to benefit from {}",
            excerpt(description, 80)
        ));
    }

    ResearchInsights { top_keywords, pains, desires, objections, raw_notes: voc_text.to_string() }
}

/// First `max` characters of `text` on a char boundary, with ellipsis when cut.
pub fn excerpt(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_require_repetition() {
        let insights = analyze_voc_text("bottle bottle bottle", "unique words only here");
        assert_eq!(insights.top_keywords, vec!["bottle".to_string()]);
    }

    #[test]
    fn stopwords_are_filtered() {
        let insights = analyze_voc_text("the the the and and", "");
        assert!(insights.top_keywords.is_empty());
    }

    #[test]
    fn keyword_order_is_stable() {
        let insights = analyze_voc_text("", "zeta zeta alpha alpha beta beta beta");
        assert_eq!(insights.top_keywords, vec!["beta", "alpha", "zeta"]);
    }

    #[test]
    fn trigger_lines_are_classified() {
        let voc = "I'm so tired of leaky bottles\n\
                   I wish it kept drinks cold all day\n\
                   Not sure it's worth the price";
        let insights = analyze_voc_text("water bottle", voc);
        assert_eq!(insights.pains, vec!["I'm so tired of leaky bottles"]);
        assert_eq!(insights.desires, vec!["I wish it kept drinks cold all day"]);
        assert_eq!(insights.objections, vec!["Not sure it's worth the price"]);
    }

    #[test]
    fn sparse_voc_falls_back_to_description_signals() {
        let insights = analyze_voc_text("Eco-friendly water bottle", "");
        assert_eq!(insights.pains.len(), 1);
        assert_eq!(insights.desires.len(), 1);
        assert!(insights.pains[0].contains("Eco-friendly water bottle"));
        assert!(insights.objections.is_empty());
    }

    #[test]
    fn lead_keyword_falls_back_when_empty() {
        let insights = ResearchInsights::default();
        assert_eq!(insights.lead_keyword(), "innovation");
    }

    #[test]
    fn excerpt_cuts_on_char_boundary() {
        assert_eq!(excerpt("short", 80), "short");
        let long = "x".repeat(100);
        let cut = excerpt(&long, 80);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 83);
    }
}
