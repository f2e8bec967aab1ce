use std::io;

use thiserror::Error;

/// Library-wide error type for deepads operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue (missing API key, bad config values).
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error in deepads.toml.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Product description missing or blank.
    #[error("Product description must not be empty")]
    EmptyDescription,

    /// Tone name not recognized.
    #[error("Invalid tone '{0}': must be one of friendly, professional, humorous, inspirational, bold, informative")]
    InvalidTone(String),

    /// Platform name not recognized.
    #[error("Invalid platform '{0}': must be one of facebook, instagram, tiktok, youtube, linkedin, x, display")]
    InvalidPlatform(String),

    /// Objective name not recognized.
    #[error("Invalid objective '{0}': must be one of awareness, traffic, conversion, lead-gen, retention")]
    InvalidObjective(String),

    /// Framework name not recognized.
    #[error("Invalid framework '{0}': must be one of aida, pas, 4ps, story")]
    InvalidFramework(String),

    /// Voice style not recognized.
    #[error("Invalid voice style '{0}': must be one of very-simple, simple, balanced, technical")]
    InvalidVoiceStyle(String),

    /// Voice-of-customer input file not found.
    #[error("VOC file not found: {0}")]
    VocFileNotFound(String),

    /// Remote generation call failed (network, HTTP status, or exhausted retries).
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// Response body from the model API could not be interpreted.
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    /// Prompt or video template failed to render.
    #[error("Template render failed: {0}")]
    TemplateError(String),

    /// Image decode or encode failure.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// True when the failure is worth retrying user-side (transient remote issue).
    pub fn is_generation_error(&self) -> bool {
        matches!(self, AppError::GenerationFailed(_) | AppError::MalformedResponse(_))
    }
}
