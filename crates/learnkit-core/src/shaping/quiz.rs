use serde::Deserialize;
use serde_json::Value;

use learnkit_protocols::{QUIZ_OPTION_COUNT, QuizQuestion, TaskError, TaskKind};

use super::{id_from_value, strip_code_fence};

/// Question as the model emits it, before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    #[serde(default)]
    id: Option<Value>,
    question: String,
    options: Vec<String>,
    #[serde(alias = "correct_answer", alias = "answerIndex")]
    correct_answer: i64,
    #[serde(default)]
    explanation: Option<String>,
}

/// Parse model output into quiz questions.
///
/// Accepts a bare array of questions or an object with a `questions`
/// array, optionally wrapped in a code fence.
pub fn parse_quiz(raw: &str) -> Result<Vec<QuizQuestion>, TaskError> {
    let malformed = |reason: String| TaskError::malformed(TaskKind::Quiz, reason);

    let value: Value = serde_json::from_str(strip_code_fence(raw))
        .map_err(|e| malformed(format!("invalid JSON: {}", e)))?;

    let items = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => map
            .remove("questions")
            .ok_or_else(|| malformed("object has no `questions` field".to_string()))?,
        other => {
            return Err(malformed(format!(
                "expected an array of questions, got {}",
                json_type(&other)
            )));
        }
    };

    let raw_questions: Vec<RawQuestion> =
        serde_json::from_value(items).map_err(|e| malformed(e.to_string()))?;

    if raw_questions.is_empty() {
        return Err(malformed("quiz contains no questions".to_string()));
    }

    raw_questions
        .into_iter()
        .enumerate()
        .map(|(index, raw)| shape_question(index + 1, raw).map_err(malformed))
        .collect()
}

fn shape_question(number: usize, raw: RawQuestion) -> Result<QuizQuestion, String> {
    if raw.question.trim().is_empty() {
        return Err(format!("question {} has no text", number));
    }

    if raw.options.len() != QUIZ_OPTION_COUNT {
        return Err(format!(
            "question {} has {} options, expected {}",
            number,
            raw.options.len(),
            QUIZ_OPTION_COUNT
        ));
    }

    if raw.options.iter().any(|o| o.trim().is_empty()) {
        return Err(format!("question {} has an empty option", number));
    }

    let correct_answer = usize::try_from(raw.correct_answer)
        .ok()
        .filter(|&i| i < raw.options.len())
        .ok_or_else(|| {
            format!(
                "question {} has correctAnswer {} outside 0..{}",
                number, raw.correct_answer, QUIZ_OPTION_COUNT
            )
        })?;

    Ok(QuizQuestion {
        id: id_from_value(raw.id).unwrap_or_else(|| format!("q{}", number)),
        question: raw.question.trim().to_string(),
        options: raw.options.into_iter().map(|o| o.trim().to_string()).collect(),
        correct_answer,
        explanation: raw.explanation.unwrap_or_default().trim().to_string(),
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "quiz_tests.rs"]
mod tests;
