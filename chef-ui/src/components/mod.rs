mod chef_page;
mod example_prompts;
mod prompt_form;
mod reply_output;

pub use chef_page::{ChefPage, INTRO};
pub use example_prompts::{ExamplePrompts, EXAMPLES};
pub use prompt_form::{PromptForm, PROMPT_PLACEHOLDER};
pub use reply_output::ReplyOutput;
