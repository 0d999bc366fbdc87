use super::{ConversationTurn, GenerationParams};
use chef_errors::AppError;

/// A remote chat-completion service.
///
/// Implementations send the turn and parameters in a single request and return
/// the text of the first choice.
#[async_trait::async_trait]
pub trait ChatCompletion: Send + Sync + 'static {
    async fn complete(
        &self,
        turn: &ConversationTurn,
        params: &GenerationParams,
    ) -> Result<String, AppError>;
}
