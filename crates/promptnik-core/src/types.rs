use serde::{Deserialize, Serialize};

/// The five user-editable fields sent to the backend.
///
/// All fields start empty and are passed through verbatim; `chunk_size`
/// stays a string on the wire even though it looks numeric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub video_link: String,
    pub chunk_size: String,
    pub language: String,
    pub prompt: String,
    pub end_prompt: String,
}

/// What the backend returns for one successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub prompts: Vec<String>,
    pub final_text: String,
}
