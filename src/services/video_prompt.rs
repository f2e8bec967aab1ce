//! Storyboard prompt for an external video-generation tool.
//!
//! Bridges generated copy to the three-scene prompt shape the video tool
//! expects: hook, solution, CTA end card.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::AppError;
use crate::domain::brief::AdBrief;
use crate::domain::insights::{ResearchInsights, excerpt};
use crate::services::hero_image::aspect_ratio_hint;

const VIDEO_PROMPT: &str = r#"Video ad for {{ platform }} in {{ aspect }} aspect ratio.

Scene 1 (Hook):
- Visual: Close-up of {{ audience }} dealing with {{ pains }}.
- On-screen text: "{{ headline }}"

Scene 2 (Solution):
- Visual: {{ description }} in action, clear UI/product shots.
- On-screen text: Short benefit bullets highlighting {{ desires }}.

Scene 3 (CTA):
- Visual: Clean end card with logo and simple background.
- On-screen text: "{{ cta }}"

Style: {{ style }}.
Tone: {{ tone }}."#;

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    })
}

/// Render the storyboard prompt for one variant.
pub fn render_video_prompt(
    brief: &AdBrief,
    headline: &str,
    cta: &str,
    insights: &ResearchInsights,
) -> Result<String, AppError> {
    let pains = join_or(&insights.pains, 3, "their current frustrations");
    let desires = join_or(&insights.desires, 3, "the outcome they want");
    let style = if brief.brand_personality.is_empty() {
        "clean, modern, trustworthy".to_string()
    } else {
        brief.brand_personality.join(", ")
    };

    let ctx = context! {
        platform => brief.platform.display_name(),
        aspect => aspect_ratio_hint(brief.platform),
        audience => brief.audience_or_default(),
        pains => pains,
        headline => headline,
        description => excerpt(brief.product_description.trim(), 120),
        desires => desires,
        cta => cta,
        style => style,
        tone => brief.tone.display_name(),
    };

    environment()
        .render_str(VIDEO_PROMPT, ctx)
        .map_err(|e| AppError::TemplateError(format!("video prompt: {}", e)))
}

fn join_or(items: &[String], take: usize, fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.iter().take(take).cloned().collect::<Vec<_>>().join(", ")
    }
}
