//! Promptnik Core Library
//!
//! Client for a prompt-generation backend: submit a video link and prompt
//! settings as one JSON POST, get back a list of ready-to-paste prompts and
//! a final text.

pub mod client;
pub mod error;
pub mod format;
pub mod session;
pub mod types;

// Re-export commonly used items at crate root
pub use client::SubmissionClient;
pub use error::{PromptnikError, Result};
pub use format::format_result_readable;
pub use session::FormSession;
pub use types::{FormInput, SubmissionResult};
