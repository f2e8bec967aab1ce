//! Generate command: brief -> prompts -> model -> rendered ad variants.

use std::path::{Path, PathBuf};

use crate::domain::brief::AdBrief;
use crate::domain::insights::{ResearchInsights, analyze_voc_text};
use crate::domain::variant::{
    AdVariant, apply_voice_style, fallback_headline, short_link, split_headline,
};
use crate::domain::{AppError, ModelApiConfig};
use crate::ports::{CompletionRequest, CopyModel};
use crate::services::hero_image::{
    load_or_placeholder, overlay_headline_band, placeholder_hero, save_png,
};
use crate::services::{build_copy_prompt, render_video_prompt};

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub brief: AdBrief,
    /// Raw voice-of-customer text to mine for signals.
    pub voc_text: Option<String>,
    /// User-supplied hero image; placeholder canvas when absent.
    pub hero_image: Option<PathBuf>,
    /// Stamp the variant headline band onto the hero image.
    pub overlay_headline: bool,
    /// Directory for hero PNGs; no images are written when unset.
    pub out_dir: Option<PathBuf>,
    /// Print assembled prompts without calling the model.
    pub dry_run: bool,
}

/// Result of a generation run.
#[derive(Debug)]
pub struct GenerateOutcome {
    pub insights: ResearchInsights,
    pub variants: Vec<AdVariant>,
    /// Hero image path per variant, parallel to `variants`.
    pub hero_paths: Vec<Option<PathBuf>>,
    /// Assembled prompts (dry runs only).
    pub prompts: Vec<String>,
}

/// Run generation against any copy model implementation.
///
/// Validation happens before anything touches the network; a dry run stops
/// after prompt assembly. One failed model call aborts the whole run.
pub fn execute(
    model: &dyn CopyModel,
    config: &ModelApiConfig,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    options.brief.validate()?;

    let brief = &options.brief;
    let insights =
        analyze_voc_text(&brief.product_description, options.voc_text.as_deref().unwrap_or(""));

    let frameworks = brief.effective_frameworks();

    if options.dry_run {
        let mut prompts = Vec::with_capacity(frameworks.len());
        for framework in &frameworks {
            prompts.push(build_copy_prompt(brief, &insights, *framework)?);
        }
        return Ok(GenerateOutcome { insights, variants: Vec::new(), hero_paths: Vec::new(), prompts });
    }

    let mut variants = Vec::with_capacity(frameworks.len());
    for framework in &frameworks {
        let prompt = build_copy_prompt(brief, &insights, *framework)?;
        let response = model.complete(CompletionRequest {
            prompt,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })?;

        let (headline, body) = split_headline(&response.text);
        let headline =
            headline.unwrap_or_else(|| fallback_headline(brief, &insights, *framework));
        let body = apply_voice_style(&body, brief.voice_style);
        let cta = brief.resolve_cta();
        let video_prompt = render_video_prompt(brief, &headline, &cta, &insights)?;

        variants.push(AdVariant {
            framework: *framework,
            headline,
            body,
            cta,
            short_link: short_link(brief, *framework),
            video_prompt,
        });
    }

    let hero_paths = match &options.out_dir {
        Some(out_dir) => write_hero_images(options, &variants, out_dir)?,
        None => vec![None; variants.len()],
    };

    Ok(GenerateOutcome { insights, variants, hero_paths, prompts: Vec::new() })
}

fn write_hero_images(
    options: &GenerateOptions,
    variants: &[AdVariant],
    out_dir: &Path,
) -> Result<Vec<Option<PathBuf>>, AppError> {
    std::fs::create_dir_all(out_dir)?;

    let brief = &options.brief;
    let base = match &options.hero_image {
        Some(path) => load_or_placeholder(path, &brief.product_description, brief.platform).0,
        None => placeholder_hero(&brief.product_description, brief.platform),
    };

    let mut paths = Vec::with_capacity(variants.len());
    for variant in variants {
        let mut img = base.clone();
        if options.overlay_headline {
            overlay_headline_band(&mut img, &variant.headline);
        }
        let path = out_dir.join(format!("hero-{}.png", variant.framework.slug()));
        save_png(&img, &path)?;
        paths.push(Some(path));
    }
    Ok(paths)
}

/// Print the outcome as stdout sections, one per variant.
pub fn print_report(outcome: &GenerateOutcome) {
    if !outcome.prompts.is_empty() {
        for prompt in &outcome.prompts {
            println!("--- prompt ---");
            println!("{}", prompt);
            println!();
        }
        return;
    }

    for (variant, hero_path) in outcome.variants.iter().zip(&outcome.hero_paths) {
        println!("=== {} ===", variant.framework);
        println!("Headline: {}", variant.headline);
        println!();
        println!("{}", variant.body);
        println!();
        println!("CTA: {}", variant.cta);
        println!("Short link: {}", variant.short_link);
        if let Some(path) = hero_path {
            println!("Hero image: {}", path.display());
        }
        println!();
        println!("--- Video prompt ---");
        println!("{}", variant.video_prompt);
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::brief::{Framework, Objective, Tone, VoiceStyle};
    use crate::ports::{CompletionResponse, MockCopyModel};
    use tempfile::tempdir;

    /// Model that replays a fixed response.
    struct CannedModel {
        response: String,
    }

    impl CopyModel for CannedModel {
        fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, AppError> {
            Ok(CompletionResponse { text: self.response.clone() })
        }
    }

    /// Model that always fails; also asserts it is never reached.
    struct FailingModel {
        reachable: bool,
    }

    impl CopyModel for FailingModel {
        fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, AppError> {
            assert!(self.reachable, "model must not be called");
            Err(AppError::GenerationFailed("boom".into()))
        }
    }

    fn options(description: &str) -> GenerateOptions {
        GenerateOptions {
            brief: AdBrief::new(description),
            voc_text: None,
            hero_image: None,
            overlay_headline: false,
            out_dir: None,
            dry_run: false,
        }
    }

    #[test]
    fn mocked_success_surfaces_response_text() {
        let model = CannedModel {
            response: "HEADLINE: Stay hydrated, stay fun!\nBody copy here.".to_string(),
        };
        let outcome = execute(
            &model,
            &ModelApiConfig::default(),
            &options("Eco-friendly water bottle"),
        )
        .unwrap();

        assert_eq!(outcome.variants.len(), 1);
        assert_eq!(outcome.variants[0].headline, "Stay hydrated, stay fun!");
        assert_eq!(outcome.variants[0].body, "Body copy here.");
    }

    #[test]
    fn mocked_failure_is_a_generation_error() {
        let model = FailingModel { reachable: true };
        let result = execute(&model, &ModelApiConfig::default(), &options("A product"));
        assert!(matches!(result, Err(AppError::GenerationFailed(_))));
    }

    #[test]
    fn empty_description_is_rejected_before_any_model_call() {
        let model = FailingModel { reachable: false };
        let result = execute(&model, &ModelApiConfig::default(), &options("   "));
        assert!(matches!(result, Err(AppError::EmptyDescription)));
    }

    #[test]
    fn dry_run_assembles_prompts_without_model_calls() {
        let model = FailingModel { reachable: false };
        let mut opts = options("Eco-friendly water bottle");
        opts.brief.frameworks = vec![Framework::Aida, Framework::Pas];
        opts.dry_run = true;

        let outcome = execute(&model, &ModelApiConfig::default(), &opts).unwrap();
        assert_eq!(outcome.prompts.len(), 2);
        assert!(outcome.variants.is_empty());
        assert!(outcome.prompts[0].contains("Eco-friendly water bottle"));
    }

    #[test]
    fn response_without_marker_gets_fallback_headline() {
        let model = CannedModel { response: "Copy with no marker at all.".to_string() };
        let outcome = execute(
            &model,
            &ModelApiConfig::default(),
            &options("Eco-friendly water bottle"),
        )
        .unwrap();
        assert!(outcome.variants[0].headline.contains("Eco-friendly water bottle"));
        assert_eq!(outcome.variants[0].body, "Copy with no marker at all.");
    }

    #[test]
    fn voice_style_is_applied_to_body() {
        let model = CannedModel {
            response: "HEADLINE: H\nOptimize your conversion funnel.".to_string(),
        };
        let mut opts = options("A product");
        opts.brief.voice_style = VoiceStyle::Simple;
        let outcome = execute(&model, &ModelApiConfig::default(), &opts).unwrap();
        assert_eq!(outcome.variants[0].body, "Improve your results funnel.");
    }

    #[test]
    fn one_variant_per_framework_with_cta_and_links() {
        let model = CannedModel { response: "HEADLINE: H\nBody.".to_string() };
        let mut opts = options("A product");
        opts.brief.frameworks = vec![Framework::Aida, Framework::Pas, Framework::FourPs];
        opts.brief.objective = Objective::Conversion;
        opts.brief.tone = Tone::Bold;

        let outcome = execute(&model, &ModelApiConfig::default(), &opts).unwrap();
        assert_eq!(outcome.variants.len(), 3);
        for variant in &outcome.variants {
            assert_eq!(variant.cta, "Shop Now");
            assert!(variant.short_link.contains(variant.framework.slug()));
            assert!(variant.video_prompt.contains("Scene 1 (Hook):"));
        }
    }

    #[test]
    fn voc_signals_flow_into_prompts() {
        let model = FailingModel { reachable: false };
        let mut opts = options("Eco-friendly water bottle");
        opts.voc_text = Some("I'm tired of bottles that leak everywhere".to_string());
        opts.dry_run = true;

        let outcome = execute(&model, &ModelApiConfig::default(), &opts).unwrap();
        assert!(outcome.prompts[0].contains("tired of bottles that leak"));
        assert_eq!(outcome.insights.pains, vec!["I'm tired of bottles that leak everywhere"]);
    }

    #[test]
    fn hero_images_are_written_per_variant() {
        let dir = tempdir().unwrap();
        let model = MockCopyModel;
        let mut opts = options("Eco-friendly water bottle");
        opts.brief.frameworks = vec![Framework::Aida, Framework::Story];
        opts.out_dir = Some(dir.path().to_path_buf());
        opts.overlay_headline = true;

        let outcome = execute(&model, &ModelApiConfig::default(), &opts).unwrap();
        assert_eq!(outcome.hero_paths.len(), 2);
        for path in outcome.hero_paths.iter().flatten() {
            assert!(path.exists(), "hero image should exist at {}", path.display());
        }
        assert!(dir.path().join("hero-aida.png").exists());
        assert!(dir.path().join("hero-story.png").exists());
    }
}
