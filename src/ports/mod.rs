pub mod copy_model;

pub use copy_model::{CompletionRequest, CompletionResponse, CopyModel, MockCopyModel};
