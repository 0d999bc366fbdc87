mod client;
pub mod prompt;
mod types;

pub use client::{OpenAiClient, OPENAI_API_URL};
pub use prompt::{build_turn, SYSTEM_PROMPT};
