use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChefReply {
    pub content: String,
    pub elapsed: Duration,
}

impl ChefReply {
    pub fn new(content: String, elapsed: Duration) -> Self {
        Self { content, elapsed }
    }

    /// Reply text followed by the generation-time annotation.
    pub fn display(&self) -> String {
        format!(
            "{}\n\n---\n(Generated in {:.1}s)",
            self.content,
            self.elapsed.as_secs_f64()
        )
    }
}
