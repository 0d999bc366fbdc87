mod home;

pub use home::{ask_chef, AskChefFn, HomePage};
