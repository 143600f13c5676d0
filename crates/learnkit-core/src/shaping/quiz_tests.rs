use super::*;

fn question_json(id: &str, correct: i64) -> String {
    format!(
        r#"{{"id": {id}, "question": "What is 2+2?", "options": ["3", "4", "5", "22"], "correctAnswer": {correct}, "explanation": "Basic addition."}}"#
    )
}

fn five_questions() -> String {
    let items: Vec<String> = (1..=5)
        .map(|n| question_json(&format!("\"q{}\"", n), 1))
        .collect();
    format!("[{}]", items.join(", "))
}

fn reason_of(err: TaskError) -> String {
    match err {
        TaskError::MalformedModelOutput { kind, reason } => {
            assert_eq!(kind, TaskKind::Quiz);
            reason
        }
        other => panic!("expected MalformedModelOutput, got {:?}", other),
    }
}

#[test]
fn test_parse_bare_array() {
    let questions = parse_quiz(&five_questions()).unwrap();
    assert_eq!(questions.len(), 5);
    assert_eq!(questions[0].id, "q1");
    assert_eq!(questions[0].options[questions[0].correct_answer], "4");
    assert_eq!(questions[4].explanation, "Basic addition.");
}

#[test]
fn test_fenced_output_equals_unfenced() {
    let plain = parse_quiz(&five_questions()).unwrap();
    for fenced in [
        format!("```json\n{}\n```", five_questions()),
        format!("```\n{}\n```", five_questions()),
        format!("```JSON\n{}", five_questions()),
    ] {
        assert_eq!(parse_quiz(&fenced).unwrap(), plain);
    }
}

#[test]
fn test_parse_wrapped_object() {
    let wrapped = format!(r#"{{"questions": {}}}"#, five_questions());
    assert_eq!(parse_quiz(&wrapped).unwrap().len(), 5);
}

#[test]
fn test_missing_and_numeric_ids() {
    let raw = r#"[
        {"question": "A?", "options": ["a", "b", "c", "d"], "correctAnswer": 0},
        {"id": 7, "question": "B?", "options": ["a", "b", "c", "d"], "correctAnswer": 3}
    ]"#;
    let questions = parse_quiz(raw).unwrap();
    assert_eq!(questions[0].id, "q1");
    assert_eq!(questions[0].explanation, "");
    assert_eq!(questions[1].id, "7");
    assert_eq!(questions[1].correct_answer, 3);
}

#[test]
fn test_invalid_json_is_malformed() {
    let reason = reason_of(parse_quiz("```json\n[{\"question\": \n```").unwrap_err());
    assert!(reason.starts_with("invalid JSON"));
}

#[test]
fn test_prose_reply_is_malformed() {
    assert!(parse_quiz("Sorry, I cannot create a quiz from that.").is_err());
}

#[test]
fn test_empty_array_is_malformed() {
    let reason = reason_of(parse_quiz("[]").unwrap_err());
    assert!(reason.contains("no questions"));
}

#[test]
fn test_object_without_questions_is_malformed() {
    let reason = reason_of(parse_quiz(r#"{"quiz": []}"#).unwrap_err());
    assert!(reason.contains("questions"));
}

#[test]
fn test_scalar_is_malformed() {
    let reason = reason_of(parse_quiz("42").unwrap_err());
    assert!(reason.contains("a number"));
}

#[test]
fn test_wrong_option_count_is_malformed() {
    let raw = r#"[{"question": "A?", "options": ["a", "b", "c"], "correctAnswer": 0}]"#;
    let reason = reason_of(parse_quiz(raw).unwrap_err());
    assert!(reason.contains("3 options"));
}

#[test]
fn test_blank_option_is_malformed() {
    let raw = r#"[{"question": "A?", "options": ["a", " ", "c", "d"], "correctAnswer": 0}]"#;
    assert!(parse_quiz(raw).is_err());
}

#[test]
fn test_correct_answer_out_of_range_is_malformed() {
    for correct in [-1, 4, 10] {
        let raw = format!("[{}]", question_json("\"q1\"", correct));
        let reason = reason_of(parse_quiz(&raw).unwrap_err());
        assert!(reason.contains("correctAnswer"), "{}", reason);
    }
}

#[test]
fn test_missing_required_field_is_malformed() {
    let raw = r#"[{"question": "A?", "correctAnswer": 0}]"#;
    let reason = reason_of(parse_quiz(raw).unwrap_err());
    assert!(reason.contains("options"));
}

#[test]
fn test_prose_prefixed_reply_with_backticks_in_strings() {
    let raw = r#"Sure: [{"question": "How do you mark a code block?", "options": ["a", "b", "c", "d"], "correctAnswer": 0, "explanation": "use ``` blocks"}]"#;
    let questions = parse_quiz(raw).unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].explanation, "use ``` blocks");
}
