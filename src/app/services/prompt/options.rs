use serde::{Deserialize, Serialize};

/// Question text plus the message shown after an invalid answer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromptOptions {
    /// Printed before every attempt, without a trailing newline
    pub prompt: String,

    /// Printed on its own line after an invalid answer; silent when `None`
    pub on_invalid: Option<String>,
}

impl PromptOptions {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            on_invalid: None,
        }
    }

    /// Set the message shown after an invalid answer
    pub fn with_invalid(mut self, message: impl Into<String>) -> Self {
        self.on_invalid = Some(message.into());
        self
    }
}

impl From<&str> for PromptOptions {
    fn from(prompt: &str) -> Self {
        Self::new(prompt)
    }
}
