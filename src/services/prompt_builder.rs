//! Copy prompt builder.
//!
//! Renders the prompt sent to the text-generation API from a brief, research
//! insights, and a copywriting framework. Rendering is deterministic; the
//! output always carries the product description and tone verbatim, plus an
//! output contract telling the model to lead with a `HEADLINE:` line.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::brief::{AdBrief, Framework};
use crate::domain::insights::ResearchInsights;
use crate::domain::AppError;

const COPY_PROMPT: &str = r#"You are an expert direct-response copywriter.
Write {{ framework }} ad copy for the product below.

Product description: {{ description }}
Target audience: {{ audience }}
Platform: {{ platform }}
Objective: {{ objective }}
Tone: {{ tone }}
{%- if personality %}
Brand personality: {{ personality }}
{%- endif %}

Structure the body with these sections, one short paragraph each:
{{ structure }}

Customer research signals to draw language from:
{%- if keywords %}
Top keywords: {{ keywords }}
{%- endif %}
{%- for pain in pains %}
Pain: {{ pain }}
{%- endfor %}
{%- for desire in desires %}
Desire: {{ desire }}
{%- endfor %}
{%- for objection in objections %}
Objection to preempt: {{ objection }}
{%- endfor %}

Close the copy with the call to action "{{ cta }}".

Respond with a first line of the form "HEADLINE: <headline>" followed by the body copy."#;

fn framework_structure(framework: Framework) -> &'static str {
    match framework {
        Framework::Aida => "Attention, Interest, Desire, Action",
        Framework::Pas => "Problem, Agitation, Solution",
        Framework::FourPs => "Product, Price, Place, Promotion",
        Framework::Story => "Before, Turning Point, After",
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    })
}

/// Build the copy prompt for one framework.
pub fn build_copy_prompt(
    brief: &AdBrief,
    insights: &ResearchInsights,
    framework: Framework,
) -> Result<String, AppError> {
    let ctx = context! {
        framework => framework.display_name(),
        description => brief.product_description.trim(),
        audience => brief.audience_or_default(),
        platform => brief.platform.display_name(),
        objective => brief.objective.display_name(),
        tone => brief.tone.display_name(),
        personality => brief.brand_personality.join(", "),
        structure => framework_structure(framework),
        keywords => insights.top_keywords.join(", "),
        pains => &insights.pains,
        desires => &insights.desires,
        objections => &insights.objections,
        cta => brief.resolve_cta(),
    };

    environment()
        .render_str(COPY_PROMPT, ctx)
        .map_err(|e| AppError::TemplateError(format!("copy prompt: {}", e)))
}
