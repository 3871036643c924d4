//! Interactive prompts for typed values
//!
//! [`PromptService`] asks a question, reads one line and converts it,
//! asking again until the answer is valid. Input and output handles are
//! passed in, so a session can run against stdin/stdout or against in-memory
//! buffers in tests without touching process-wide state.

mod options;
mod service;

#[cfg(test)]
mod tests;

pub use options::PromptOptions;
pub use service::PromptService;
