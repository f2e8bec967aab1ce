//! Copy model port definition.

use crate::domain::AppError;

/// Request for one text completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// The assembled prompt to send.
    pub prompt: String,
    /// Model identifier (e.g. "alex-4").
    pub model: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

/// Response from a completion call.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Generated text.
    pub text: String,
}

/// Port for the remote text-generation service.
pub trait CopyModel {
    /// Generate text for the given prompt.
    fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AppError>;
}

/// Mock model for offline runs and tests. Echoes a canned response carrying
/// enough structure for the variant assembler to parse.
#[derive(Debug, Clone, Default)]
pub struct MockCopyModel;

impl CopyModel for MockCopyModel {
    fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AppError> {
        let stamp = chrono::Utc::now().timestamp();
        Ok(CompletionResponse {
            text: format!(
                "HEADLINE: Mock headline ({})\n[mock completion {} for a {}-char prompt]",
                request.model,
                stamp,
                request.prompt.len()
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_model_returns_parseable_response() {
        let request = CompletionRequest {
            prompt: "prompt".to_string(),
            model: "alex-4".to_string(),
            max_tokens: 64,
        };
        let response = MockCopyModel.complete(request).unwrap();
        assert!(response.text.starts_with("HEADLINE:"));
    }
}
