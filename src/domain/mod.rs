pub mod brief;
pub mod config;
pub mod error;
pub mod insights;
pub mod variant;

pub use brief::{AdBrief, Framework, Objective, Platform, Tone, VoiceStyle};
pub use config::{API_KEY_ENV, CONFIG_FILE, ModelApiConfig, StudioConfig};
pub use error::AppError;
pub use insights::{ResearchInsights, analyze_voc_text, excerpt};
pub use variant::{AdVariant, apply_voice_style, fallback_headline, short_link, split_headline};
