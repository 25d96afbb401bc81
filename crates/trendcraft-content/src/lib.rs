//! Marketing copy generation driven by trend insights.
//!
//! [`ContentGenerator`] builds a prompt from [`Insights`](trendcraft_trends::Insights),
//! asks an OpenAI-compatible chat endpoint for copy, and falls back to canned
//! templates when no model answers.

mod client;
mod error;
mod generator;
mod prompt;
mod template;

pub use client::{ChatClient, Completion};
pub use error::ContentError;
pub use generator::{ContentGenerator, GenerationResult, TEMPLATE_MODEL};
pub use prompt::{build_prompt, keyword_insight, time_insight};
pub use template::template_content;
