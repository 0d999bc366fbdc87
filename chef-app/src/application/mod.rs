mod ask_chef;

pub use ask_chef::AskChef;
