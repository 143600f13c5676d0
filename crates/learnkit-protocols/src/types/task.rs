//! Task requests and their results.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{QuizQuestion, Roadmap};

/// Level used for roadmaps when the caller does not pick one.
pub const DEFAULT_ROADMAP_LEVEL: &str = "beginner";

/// Minimum length (in characters, after trimming) of text to summarize.
pub const MIN_SUMMARY_INPUT_CHARS: usize = 100;

/// The four learning tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Ask,
    Summarize,
    Quiz,
    Roadmap,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ask => "ask",
            Self::Summarize => "summarize",
            Self::Quiz => "quiz",
            Self::Roadmap => "roadmap",
        }
    }

    /// Whether the model is expected to answer with JSON for this task.
    pub fn expects_json(&self) -> bool {
        matches!(self, Self::Quiz | Self::Roadmap)
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request for one learning task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskRequest {
    AskQuestion { question: String },
    Summarize { text: String },
    GenerateQuiz { source_text: String },
    GenerateRoadmap { topic: String, level: String },
}

impl TaskRequest {
    pub fn ask(question: impl Into<String>) -> Self {
        Self::AskQuestion {
            question: question.into(),
        }
    }

    pub fn summarize(text: impl Into<String>) -> Self {
        Self::Summarize { text: text.into() }
    }

    pub fn quiz(source_text: impl Into<String>) -> Self {
        Self::GenerateQuiz {
            source_text: source_text.into(),
        }
    }

    /// Build a roadmap request. A missing or blank level becomes
    /// [`DEFAULT_ROADMAP_LEVEL`].
    pub fn roadmap(topic: impl Into<String>, level: Option<String>) -> Self {
        let level = level
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_ROADMAP_LEVEL.to_string());
        Self::GenerateRoadmap {
            topic: topic.into(),
            level,
        }
    }

    pub fn kind(&self) -> TaskKind {
        match self {
            Self::AskQuestion { .. } => TaskKind::Ask,
            Self::Summarize { .. } => TaskKind::Summarize,
            Self::GenerateQuiz { .. } => TaskKind::Quiz,
            Self::GenerateRoadmap { .. } => TaskKind::Roadmap,
        }
    }
}

/// Answer to a free-form question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub answer: String,
    pub timestamp: DateTime<Utc>,
}

/// Summary of a submitted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub summary: String,
    /// Character count of the text as submitted.
    pub original_length: usize,
    pub timestamp: DateTime<Utc>,
}

/// Generated multiple-choice quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub questions: Vec<QuizQuestion>,
    pub total_questions: usize,
    pub timestamp: DateTime<Utc>,
}

impl QuizResult {
    pub fn new(questions: Vec<QuizQuestion>, timestamp: DateTime<Utc>) -> Self {
        Self {
            total_questions: questions.len(),
            questions,
            timestamp,
        }
    }
}

/// Generated learning roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapResult {
    #[serde(flatten)]
    pub roadmap: Roadmap,
    pub timestamp: DateTime<Utc>,
}

/// Result of a learning task. Serializes to the bare response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TaskResult {
    Answer(AnswerResult),
    Summary(SummaryResult),
    Quiz(QuizResult),
    Roadmap(RoadmapResult),
}

impl TaskResult {
    pub fn kind(&self) -> TaskKind {
        match self {
            Self::Answer(_) => TaskKind::Ask,
            Self::Summary(_) => TaskKind::Summarize,
            Self::Quiz(_) => TaskKind::Quiz,
            Self::Roadmap(_) => TaskKind::Roadmap,
        }
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
