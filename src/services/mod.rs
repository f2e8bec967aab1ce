pub mod copy_model_http;
pub mod hero_image;
pub mod prompt_builder;
pub mod video_prompt;

pub use copy_model_http::HttpCopyModel;
pub use prompt_builder::build_copy_prompt;
pub use video_prompt::render_video_prompt;
