//! Prompt construction for feedback analysis

/// Build the fixed analysis prompt embedding the feedback text verbatim
///
/// The prompt demands a response that is only a single JSON object with
/// exactly four keys and explicitly forbids commentary and markdown
/// fencing. Models honor this most of the time; the parser handles the
/// rest.
pub fn feedback_prompt(text: &str) -> String {
    let mut prompt = String::with_capacity(
        ANALYSIS_INSTRUCTIONS.len() + OUTPUT_FORMAT.len() + text.len() + 32,
    );

    prompt.push_str(ANALYSIS_INSTRUCTIONS);
    prompt.push_str("\nFeedback: \"");
    prompt.push_str(text);
    prompt.push_str("\"\n\n");
    prompt.push_str(OUTPUT_FORMAT);

    prompt
}

const ANALYSIS_INSTRUCTIONS: &str =
    "You are a text analysis expert. Analyze the following customer feedback.";

const OUTPUT_FORMAT: &str = r#"Your entire response must be ONLY a single, valid JSON object and nothing else. Do not add any explanation, commentary, or markdown formatting like ```json.

The JSON object must have these exact keys:
"sentiment": (string: "positive", "negative", or "neutral")
"sentiment_score": (float between 0.0 and 1.0)
"topics": (array of strings)
"urgency": (string: "low", "medium", or "high")"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_text_verbatim() {
        let prompt = feedback_prompt("The checkout page keeps crashing on mobile.");
        assert!(prompt.contains("The checkout page keeps crashing on mobile."));
    }

    #[test]
    fn test_prompt_declares_the_four_keys() {
        let prompt = feedback_prompt("some feedback");
        assert!(prompt.contains("\"sentiment\""));
        assert!(prompt.contains("\"sentiment_score\""));
        assert!(prompt.contains("\"topics\""));
        assert!(prompt.contains("\"urgency\""));
    }

    #[test]
    fn test_prompt_forbids_commentary_and_fencing() {
        let prompt = feedback_prompt("some feedback");
        assert!(prompt.contains("ONLY a single, valid JSON object"));
        assert!(prompt.contains("markdown formatting"));
    }
}
