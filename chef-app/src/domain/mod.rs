mod chef_reply;
mod conversation_turn;
mod form_settings;
mod generation_params;
mod message;

#[cfg(feature = "ssr")]
mod chat_completion;

pub use chef_reply::ChefReply;
pub use conversation_turn::ConversationTurn;
pub use form_settings::FormSettings;
pub use generation_params::{
    GenerationParams, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
pub use message::{Message, Role};

#[cfg(feature = "ssr")]
pub use chat_completion::ChatCompletion;
