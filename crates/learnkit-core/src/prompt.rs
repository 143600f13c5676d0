//! Prompt templates, one per task kind.
//!
//! Templates are pure: the same input always yields the same prompt.

pub fn ask_prompt(question: &str) -> String {
    format!(
        "You are an expert educational assistant. Answer the following question clearly \
         with examples if helpful.\n\nQuestion: {}",
        question
    )
}

pub fn summarize_prompt(text: &str) -> String {
    format!(
        "Summarize the following text with main points and a concise paragraph:\n\nText:\n{}",
        text
    )
}

pub fn quiz_prompt(text: &str) -> String {
    format!(
        r#"Based on the content below, create 5 multiple-choice questions in JSON format.

Respond with a JSON array only, no prose. Each element must look like:
{{"id": "q1", "question": "...", "options": ["...", "...", "...", "..."], "correctAnswer": 0, "explanation": "..."}}
Every question has exactly 4 options. "correctAnswer" is the 0-based index of the correct option.

Content:
{}"#,
        text
    )
}

pub fn roadmap_prompt(topic: &str, level: &str) -> String {
    format!(
        r#"Create a learning roadmap for "{topic}" at {level} level in JSON format with 5-7 steps.

Respond with a single JSON object only, no prose, shaped like:
{{"topic": "{topic}", "level": "{level}", "totalDuration": "...", "description": "...", "steps": [{{"id": "step-1", "title": "...", "description": "...", "duration": "...", "difficulty": "...", "topics": ["..."], "resources": ["..."], "skills": ["..."]}}]}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_prompt_embeds_question() {
        let prompt = ask_prompt("What is 2+2?");
        assert!(prompt.starts_with("You are an expert educational assistant."));
        assert!(prompt.ends_with("Question: What is 2+2?"));
    }

    #[test]
    fn test_summarize_prompt_embeds_text_verbatim() {
        let text = "  Line one.\nLine two.  ";
        assert!(summarize_prompt(text).ends_with(text));
    }

    #[test]
    fn test_quiz_prompt_describes_schema() {
        let prompt = quiz_prompt("Cells divide by mitosis.");
        assert!(prompt.contains("5 multiple-choice questions"));
        assert!(prompt.contains("\"correctAnswer\""));
        assert!(prompt.contains("exactly 4 options"));
        assert!(prompt.ends_with("Cells divide by mitosis."));
    }

    #[test]
    fn test_roadmap_prompt_embeds_topic_and_level() {
        let prompt = roadmap_prompt("Rust", "beginner");
        assert!(prompt.starts_with(
            "Create a learning roadmap for \"Rust\" at beginner level in JSON format with 5-7 steps."
        ));
        assert!(prompt.contains("\"steps\""));
        assert!(prompt.contains("\"topic\": \"Rust\""));
    }

    #[test]
    fn test_templates_are_deterministic() {
        assert_eq!(quiz_prompt("x"), quiz_prompt("x"));
        assert_eq!(roadmap_prompt("a", "b"), roadmap_prompt("a", "b"));
    }
}
