//! Chat messages, the README prompt, and the text-generation seam.

pub mod gemini;

pub use gemini::GeminiClient;

use anyhow::Result;

/// Fixed instructions sent ahead of every payload
pub const README_INSTRUCTIONS: [&str; 4] = [
    concat!(
        "Create a README text for the project that will be represented by the code ",
        "in the document provided."
    ),
    concat!(
        "The README text should include: Project's Title, Project Description, ",
        "Table of Contents, How to run the Project (only if stated in the project), ",
        "Badges, Conclusion."
    ),
    concat!(
        "The Badges should include things from imports, Conclusion should describe ",
        "things that the user learned from this project preparations."
    ),
    "The format of the README text should be in markdown format.",
];

/// Role of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    System,
    User,
}

/// One role-tagged message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Anything that turns an ordered list of messages into generated text
pub trait TextGenerator {
    fn generate(&self, messages: &[ChatMessage]) -> Result<String>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    fn generate(&self, messages: &[ChatMessage]) -> Result<String> {
        (**self).generate(messages)
    }
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn generate(&self, messages: &[ChatMessage]) -> Result<String> {
        (**self).generate(messages)
    }
}

/// The README instructions followed by one user message carrying `payload`
pub fn build_messages(payload: &str) -> Vec<ChatMessage> {
    README_INSTRUCTIONS
        .iter()
        .map(|instruction| ChatMessage::system(*instruction))
        .chain(std::iter::once(ChatMessage::user(payload)))
        .collect()
}
