pub mod prompts;
pub mod quiz;
