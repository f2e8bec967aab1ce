use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use deepads::domain::brief::{AdBrief, Framework, Objective, Platform, Tone, VoiceStyle};
use deepads::{AppError, GenerateOptions, ResearchFormat};

#[derive(Parser)]
#[command(name = "deepads")]
#[command(version)]
#[command(
    about = "Generate ad-copy variants, hero image previews, and video prompts from a product brief",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate ad variants for a product brief
    #[clap(visible_alias = "g")]
    Generate {
        /// Product or offer description
        #[arg(short, long)]
        description: String,
        /// Tone: friendly, professional, humorous, inspirational, bold, informative
        #[arg(short, long)]
        tone: Option<String>,
        /// Target audience (e.g. "busy parents")
        #[arg(short, long)]
        audience: Option<String>,
        /// Platform: facebook, instagram, tiktok, youtube, linkedin, x, display
        #[arg(short, long)]
        platform: Option<String>,
        /// Objective: awareness, traffic, conversion, lead-gen, retention
        #[arg(short, long)]
        objective: Option<String>,
        /// Copy framework (repeatable): aida, pas, 4ps, story
        #[arg(short, long)]
        framework: Vec<String>,
        /// Brand personality tag (repeatable)
        #[arg(long)]
        personality: Vec<String>,
        /// Custom call-to-action (overrides the objective default)
        #[arg(long)]
        cta: Option<String>,
        /// Voice style: very-simple, simple, balanced, technical
        #[arg(long)]
        voice: Option<String>,
        /// File with voice-of-customer text to mine for signals
        #[arg(long)]
        voc_file: Option<PathBuf>,
        /// Hero image to use instead of the generated placeholder
        #[arg(long)]
        hero_image: Option<PathBuf>,
        /// Stamp the headline band onto the hero image
        #[arg(long)]
        overlay_headline: bool,
        /// Directory for hero image PNGs
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Print assembled prompts without calling the model
        #[arg(long)]
        dry_run: bool,
        /// Use the offline mock model instead of the API
        #[arg(long)]
        mock: bool,
    },
    /// Mine voice-of-customer text for keywords, pains, desires, and objections
    #[clap(visible_alias = "r")]
    Research {
        /// File with voice-of-customer text (stdin when omitted)
        #[arg(long)]
        voc_file: Option<PathBuf>,
        /// Product description to fold into keyword analysis
        #[arg(short, long)]
        description: Option<String>,
        /// Emit JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
}

fn build_brief(
    description: String,
    tone: Option<String>,
    audience: Option<String>,
    platform: Option<String>,
    objective: Option<String>,
    frameworks: Vec<String>,
    personality: Vec<String>,
    cta: Option<String>,
    voice: Option<String>,
) -> Result<AdBrief, AppError> {
    let mut brief = AdBrief::new(description);
    if let Some(tone) = tone {
        brief.tone = Tone::parse(&tone)?;
    }
    if let Some(audience) = audience {
        brief.target_audience = audience;
    }
    if let Some(platform) = platform {
        brief.platform = Platform::parse(&platform)?;
    }
    if let Some(objective) = objective {
        brief.objective = Objective::parse(&objective)?;
    }
    if !frameworks.is_empty() {
        brief.frameworks =
            frameworks.iter().map(|f| Framework::parse(f)).collect::<Result<Vec<_>, _>>()?;
    }
    brief.brand_personality = personality;
    brief.custom_cta = cta;
    if let Some(voice) = voice {
        brief.voice_style = VoiceStyle::parse(&voice)?;
    }
    Ok(brief)
}

fn run_generate(
    brief: AdBrief,
    voc_file: Option<PathBuf>,
    hero_image: Option<PathBuf>,
    overlay_headline: bool,
    out_dir: Option<PathBuf>,
    dry_run: bool,
    mock: bool,
) -> Result<(), AppError> {
    let voc_text = match voc_file {
        Some(path) => Some(deepads::load_voc_file(&path)?),
        None => None,
    };

    let options =
        GenerateOptions { brief, voc_text, hero_image, overlay_headline, out_dir, dry_run };
    deepads::generate(options, mock).map(|_| ())
}

fn run_research(
    voc_file: Option<PathBuf>,
    description: Option<String>,
    json: bool,
) -> Result<(), AppError> {
    let voc_text = match voc_file {
        Some(path) => deepads::load_voc_file(&path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let format = if json { ResearchFormat::Json } else { ResearchFormat::Text };
    deepads::research(description.as_deref().unwrap_or(""), &voc_text, format).map(|_| ())
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate {
            description,
            tone,
            audience,
            platform,
            objective,
            framework,
            personality,
            cta,
            voice,
            voc_file,
            hero_image,
            overlay_headline,
            out_dir,
            dry_run,
            mock,
        } => build_brief(
            description,
            tone,
            audience,
            platform,
            objective,
            framework,
            personality,
            cta,
            voice,
        )
        .and_then(|brief| {
            run_generate(brief, voc_file, hero_image, overlay_headline, out_dir, dry_run, mock)
        }),
        Commands::Research { voc_file, description, json } => {
            run_research(voc_file, description, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
