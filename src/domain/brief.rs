//! Ad brief domain model: the transient per-invocation request.

use std::fmt;

use crate::domain::AppError;

/// Target platform for the ad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Facebook,
    Instagram,
    TikTok,
    YouTube,
    LinkedIn,
    X,
    Display,
}

impl Platform {
    /// All available platforms in order.
    pub const ALL: [Platform; 7] = [
        Platform::Facebook,
        Platform::Instagram,
        Platform::TikTok,
        Platform::YouTube,
        Platform::LinkedIn,
        Platform::X,
        Platform::Display,
    ];

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::TikTok => "TikTok",
            Platform::YouTube => "YouTube",
            Platform::LinkedIn => "LinkedIn",
            Platform::X => "X (Twitter)",
            Platform::Display => "Display",
        }
    }

    /// Parse a platform from a CLI argument.
    pub fn parse(name: &str) -> Result<Platform, AppError> {
        match name.to_lowercase().as_str() {
            "facebook" => Ok(Platform::Facebook),
            "instagram" => Ok(Platform::Instagram),
            "tiktok" => Ok(Platform::TikTok),
            "youtube" => Ok(Platform::YouTube),
            "linkedin" => Ok(Platform::LinkedIn),
            "x" | "twitter" | "x (twitter)" => Ok(Platform::X),
            "display" => Ok(Platform::Display),
            _ => Err(AppError::InvalidPlatform(name.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Campaign objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Objective {
    Awareness,
    Traffic,
    Conversion,
    LeadGen,
    Retention,
}

impl Objective {
    pub fn display_name(&self) -> &'static str {
        match self {
            Objective::Awareness => "Awareness",
            Objective::Traffic => "Traffic",
            Objective::Conversion => "Conversion",
            Objective::LeadGen => "Lead Gen",
            Objective::Retention => "Retention",
        }
    }

    pub fn parse(name: &str) -> Result<Objective, AppError> {
        match name.to_lowercase().as_str() {
            "awareness" => Ok(Objective::Awareness),
            "traffic" => Ok(Objective::Traffic),
            "conversion" => Ok(Objective::Conversion),
            "lead-gen" | "leadgen" | "lead gen" => Ok(Objective::LeadGen),
            "retention" => Ok(Objective::Retention),
            _ => Err(AppError::InvalidObjective(name.to_string())),
        }
    }

    /// Default call-to-action label for this objective.
    pub fn default_cta(&self) -> &'static str {
        match self {
            Objective::Awareness | Objective::Traffic => "Learn More",
            Objective::Conversion => "Shop Now",
            Objective::LeadGen => "Get Started",
            Objective::Retention => "See What's New",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Desired tone of the generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Friendly,
    Professional,
    Humorous,
    Inspirational,
    Bold,
    Informative,
}

impl Tone {
    pub fn display_name(&self) -> &'static str {
        match self {
            Tone::Friendly => "Friendly",
            Tone::Professional => "Professional",
            Tone::Humorous => "Humorous",
            Tone::Inspirational => "Inspirational",
            Tone::Bold => "Bold",
            Tone::Informative => "Informative",
        }
    }

    pub fn parse(name: &str) -> Result<Tone, AppError> {
        match name.to_lowercase().as_str() {
            "friendly" => Ok(Tone::Friendly),
            "professional" => Ok(Tone::Professional),
            "humorous" => Ok(Tone::Humorous),
            "inspirational" => Ok(Tone::Inspirational),
            "bold" => Ok(Tone::Bold),
            "informative" => Ok(Tone::Informative),
            _ => Err(AppError::InvalidTone(name.to_string())),
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Copywriting framework used to structure a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    /// Attention, Interest, Desire, Action.
    Aida,
    /// Problem, Agitation, Solution.
    Pas,
    /// Product, Price, Place, Promotion.
    FourPs,
    /// Before, Turning Point, After.
    Story,
}

impl Framework {
    pub const ALL: [Framework; 4] =
        [Framework::Aida, Framework::Pas, Framework::FourPs, Framework::Story];

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Aida => "AIDA",
            Framework::Pas => "PAS",
            Framework::FourPs => "4Ps",
            Framework::Story => "Story",
        }
    }

    /// URL-safe slug used in short links.
    pub fn slug(&self) -> &'static str {
        match self {
            Framework::Aida => "aida",
            Framework::Pas => "pas",
            Framework::FourPs => "4ps",
            Framework::Story => "story",
        }
    }

    pub fn parse(name: &str) -> Result<Framework, AppError> {
        match name.to_lowercase().as_str() {
            "aida" => Ok(Framework::Aida),
            "pas" => Ok(Framework::Pas),
            "4ps" | "4 ps" | "fourps" => Ok(Framework::FourPs),
            "story" => Ok(Framework::Story),
            _ => Err(AppError::InvalidFramework(name.to_string())),
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Register of the generated body text, from plain to jargon-tolerant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoiceStyle {
    VerySimple,
    Simple,
    #[default]
    Balanced,
    Technical,
}

impl VoiceStyle {
    pub fn display_name(&self) -> &'static str {
        match self {
            VoiceStyle::VerySimple => "Very Simple",
            VoiceStyle::Simple => "Simple",
            VoiceStyle::Balanced => "Balanced",
            VoiceStyle::Technical => "Technical",
        }
    }

    pub fn parse(name: &str) -> Result<VoiceStyle, AppError> {
        match name.to_lowercase().as_str() {
            "very-simple" | "very simple" => Ok(VoiceStyle::VerySimple),
            "simple" => Ok(VoiceStyle::Simple),
            "balanced" => Ok(VoiceStyle::Balanced),
            "technical" => Ok(VoiceStyle::Technical),
            _ => Err(AppError::InvalidVoiceStyle(name.to_string())),
        }
    }
}

/// A single ad-generation request. Built per invocation, never persisted.
#[derive(Debug, Clone)]
pub struct AdBrief {
    pub product_description: String,
    pub target_audience: String,
    pub platform: Platform,
    pub objective: Objective,
    pub tone: Tone,
    pub brand_personality: Vec<String>,
    pub custom_cta: Option<String>,
    pub frameworks: Vec<Framework>,
    pub voice_style: VoiceStyle,
}

impl AdBrief {
    /// Minimal brief with defaults for everything but the description.
    pub fn new<S: Into<String>>(product_description: S) -> Self {
        Self {
            product_description: product_description.into(),
            target_audience: String::new(),
            platform: Platform::Instagram,
            objective: Objective::Awareness,
            tone: Tone::default(),
            brand_personality: Vec::new(),
            custom_cta: None,
            frameworks: vec![Framework::Aida],
            voice_style: VoiceStyle::default(),
        }
    }

    /// Reject briefs that would produce an empty prompt. Must pass before any
    /// network call is attempted.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.product_description.trim().is_empty() {
            return Err(AppError::EmptyDescription);
        }
        Ok(())
    }

    /// Frameworks to generate, defaulting to AIDA when none were selected.
    pub fn effective_frameworks(&self) -> Vec<Framework> {
        if self.frameworks.is_empty() { vec![Framework::Aida] } else { self.frameworks.clone() }
    }

    /// Short product name: the first few words of the description.
    pub fn product_name(&self) -> String {
        let name: Vec<&str> = self.product_description.split_whitespace().take(4).collect();
        if name.is_empty() { "Your Product".to_string() } else { name.join(" ") }
    }

    /// Audience with a generic fallback for prompt and headline text.
    pub fn audience_or_default(&self) -> &str {
        if self.target_audience.trim().is_empty() { "your audience" } else { &self.target_audience }
    }

    /// Resolved call-to-action: custom CTA wins, otherwise the objective default.
    pub fn resolve_cta(&self) -> String {
        match &self.custom_cta {
            Some(cta) if !cta.trim().is_empty() => cta.trim().to_string(),
            _ => self.objective.default_cta().to_string(),
        }
    }
}
