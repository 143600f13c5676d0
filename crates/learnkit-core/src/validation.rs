//! Input validation. Runs before any model call.

use learnkit_protocols::{MIN_SUMMARY_INPUT_CHARS, TaskError, TaskKind, TaskRequest};

pub const QUESTION_REQUIRED: &str = "Question is required";
pub const SUMMARY_TEXT_REQUIRED: &str = "Text content is required for summarization";
pub const SUMMARY_TEXT_TOO_SHORT: &str = "Text must be at least 100 characters long";
pub const QUIZ_TEXT_REQUIRED: &str = "Text content is required to generate quiz questions";
pub const TOPIC_REQUIRED: &str = "Learning topic is required";

/// Validate a task request.
pub fn validate(request: &TaskRequest) -> Result<(), TaskError> {
    match request {
        TaskRequest::AskQuestion { question } => validate_question(question),
        TaskRequest::Summarize { text } => validate_summary_text(text),
        TaskRequest::GenerateQuiz { source_text } => validate_quiz_text(source_text),
        TaskRequest::GenerateRoadmap { topic, .. } => validate_topic(topic),
    }
}

pub fn validate_question(question: &str) -> Result<(), TaskError> {
    require(TaskKind::Ask, question, QUESTION_REQUIRED)
}

/// Summaries need at least [`MIN_SUMMARY_INPUT_CHARS`] characters once
/// surrounding whitespace is removed.
pub fn validate_summary_text(text: &str) -> Result<(), TaskError> {
    require(TaskKind::Summarize, text, SUMMARY_TEXT_REQUIRED)?;
    if text.trim().chars().count() < MIN_SUMMARY_INPUT_CHARS {
        return Err(TaskError::invalid_input(
            TaskKind::Summarize,
            SUMMARY_TEXT_TOO_SHORT,
        ));
    }
    Ok(())
}

pub fn validate_quiz_text(text: &str) -> Result<(), TaskError> {
    require(TaskKind::Quiz, text, QUIZ_TEXT_REQUIRED)
}

pub fn validate_topic(topic: &str) -> Result<(), TaskError> {
    require(TaskKind::Roadmap, topic, TOPIC_REQUIRED)
}

fn require(kind: TaskKind, value: &str, message: &str) -> Result<(), TaskError> {
    if value.trim().is_empty() {
        Err(TaskError::invalid_input(kind, message))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(result: Result<(), TaskError>) -> String {
        match result {
            Err(TaskError::InvalidInput { message, .. }) => message,
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_inputs_are_rejected() {
        for blank in ["", "   ", "\n\t "] {
            assert_eq!(message_of(validate(&TaskRequest::ask(blank))), QUESTION_REQUIRED);
            assert_eq!(
                message_of(validate(&TaskRequest::summarize(blank))),
                SUMMARY_TEXT_REQUIRED
            );
            assert_eq!(message_of(validate(&TaskRequest::quiz(blank))), QUIZ_TEXT_REQUIRED);
            assert_eq!(
                message_of(validate(&TaskRequest::roadmap(blank, None))),
                TOPIC_REQUIRED
            );
        }
    }

    #[test]
    fn test_summary_length_boundary() {
        let short = "a".repeat(MIN_SUMMARY_INPUT_CHARS - 1);
        assert_eq!(
            message_of(validate_summary_text(&short)),
            SUMMARY_TEXT_TOO_SHORT
        );

        let exact = "a".repeat(MIN_SUMMARY_INPUT_CHARS);
        assert!(validate_summary_text(&exact).is_ok());
    }

    #[test]
    fn test_summary_length_ignores_surrounding_whitespace() {
        let padded = format!("   {}   ", "a".repeat(MIN_SUMMARY_INPUT_CHARS - 1));
        assert!(validate_summary_text(&padded).is_err());
    }

    #[test]
    fn test_summary_length_counts_characters() {
        let text = "é".repeat(MIN_SUMMARY_INPUT_CHARS);
        assert!(validate_summary_text(&text).is_ok());
    }

    #[test]
    fn test_valid_inputs_pass() {
        assert!(validate(&TaskRequest::ask("What is 2+2?")).is_ok());
        assert!(validate(&TaskRequest::quiz("Photosynthesis converts light.")).is_ok());
        assert!(validate(&TaskRequest::roadmap("Rust", Some("advanced".into()))).is_ok());
    }
}
