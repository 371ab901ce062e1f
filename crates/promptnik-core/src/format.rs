use crate::types::SubmissionResult;

/// Format a submission result as human-readable markdown.
pub fn format_result_readable(result: &SubmissionResult) -> String {
    let mut output = String::new();
    let total = result.prompts.len();

    for (i, prompt) in result.prompts.iter().enumerate() {
        output.push_str(&format!("## Prompt {}/{}\n\n", i + 1, total));
        output.push_str(prompt);
        output.push_str("\n\n");
    }

    output.push_str("## Final text\n\n");
    output.push_str(&result.final_text);
    output.push('\n');

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_prompts_and_appends_final_text() {
        let result = SubmissionResult {
            prompts: vec!["alpha".to_string(), "beta".to_string()],
            final_text: "wrap up".to_string(),
        };

        let readable = format_result_readable(&result);

        assert!(readable.contains("## Prompt 1/2\n\nalpha"));
        assert!(readable.contains("## Prompt 2/2\n\nbeta"));
        assert!(readable.ends_with("## Final text\n\nwrap up\n"));
    }

    #[test]
    fn empty_prompt_list_still_renders_final_text() {
        let result = SubmissionResult {
            prompts: vec![],
            final_text: "done".to_string(),
        };

        let readable = format_result_readable(&result);

        assert!(!readable.contains("## Prompt"));
        assert!(readable.contains("## Final text\n\ndone"));
    }
}
