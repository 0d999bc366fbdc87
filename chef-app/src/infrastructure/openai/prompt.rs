use crate::domain::{ConversationTurn, Message};

pub const SYSTEM_PROMPT: &str = r#"You are Chef AI, a friendly, concise, and practical cooking assistant.
When given ingredients or a cooking question, return:
1) A short recipe title.
2) Ingredients list (quantities if possible).
3) Step-by-step instructions numbered.
4) Preparation + cook time estimate.
5) Serving size.
6) 2 quick tips or substitutions.
Be clear and concise. If the user gives dietary constraints (vegan, gluten-free), obey them.
If the user doesn't give ingredients but asks for ideas, propose 3 quick recipe options, each 1-2 sentences."#;

/// Builds `[system, user]`, or `[user]` when no system instruction is set.
///
/// The user text is passed through untouched.
pub fn build_turn(user_text: &str, system: Option<&str>) -> ConversationTurn {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = system {
        messages.push(Message::system(system));
    }
    messages.push(Message::user(user_text));
    ConversationTurn::new(messages)
}
