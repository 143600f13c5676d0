//! Task orchestration.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use learnkit_protocols::{
    AnswerResult, CompletionProvider, CompletionRequest, DEFAULT_ROADMAP_LEVEL, ProviderError,
    QuizResult, RoadmapResult, SummaryResult, TaskError, TaskKind, TaskRequest, TaskResult,
};

use crate::prompt;
use crate::shaping::{parse_quiz, parse_roadmap};
use crate::validation;

/// Runs learning tasks against an injected completion provider.
///
/// Stateless between invocations; share it behind an `Arc`.
pub struct Orchestrator {
    provider: Arc<dyn CompletionProvider>,
    model: String,
}

impl Orchestrator {
    pub fn new(provider: Arc<dyn CompletionProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider_id(&self) -> &str {
        self.provider.id()
    }

    /// Run any task, dispatching on its kind.
    pub async fn run(&self, request: TaskRequest) -> Result<TaskResult, TaskError> {
        match request {
            TaskRequest::AskQuestion { question } => {
                self.ask_question(&question).await.map(TaskResult::Answer)
            }
            TaskRequest::Summarize { text } => self.summarize(&text).await.map(TaskResult::Summary),
            TaskRequest::GenerateQuiz { source_text } => {
                self.generate_quiz(&source_text).await.map(TaskResult::Quiz)
            }
            TaskRequest::GenerateRoadmap { topic, level } => self
                .generate_roadmap(&topic, Some(level.as_str()))
                .await
                .map(TaskResult::Roadmap),
        }
    }

    /// Answer a free-form question. The model's text is returned verbatim.
    pub async fn ask_question(&self, question: &str) -> Result<AnswerResult, TaskError> {
        validation::validate_question(question)?;
        let answer = self
            .invoke(TaskKind::Ask, prompt::ask_prompt(question))
            .await?;
        Ok(AnswerResult {
            answer,
            timestamp: Utc::now(),
        })
    }

    /// Summarize a text of at least 100 characters.
    pub async fn summarize(&self, text: &str) -> Result<SummaryResult, TaskError> {
        validation::validate_summary_text(text)?;
        let summary = self
            .invoke(TaskKind::Summarize, prompt::summarize_prompt(text))
            .await?;
        Ok(SummaryResult {
            summary,
            original_length: text.chars().count(),
            timestamp: Utc::now(),
        })
    }

    /// Generate multiple-choice questions about `text`.
    pub async fn generate_quiz(&self, text: &str) -> Result<QuizResult, TaskError> {
        validation::validate_quiz_text(text)?;
        let raw = self
            .invoke(TaskKind::Quiz, prompt::quiz_prompt(text))
            .await?;
        let questions = parse_quiz(&raw).inspect_err(|e| log_malformed(e, &raw))?;
        Ok(QuizResult::new(questions, Utc::now()))
    }

    /// Generate a learning roadmap. A missing or blank `level` means
    /// beginner.
    pub async fn generate_roadmap(
        &self,
        topic: &str,
        level: Option<&str>,
    ) -> Result<RoadmapResult, TaskError> {
        validation::validate_topic(topic)?;
        let topic = topic.trim();
        let level = level
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_ROADMAP_LEVEL);

        let raw = self
            .invoke(TaskKind::Roadmap, prompt::roadmap_prompt(topic, level))
            .await?;
        let roadmap =
            parse_roadmap(&raw, topic, level).inspect_err(|e| log_malformed(e, &raw))?;
        Ok(RoadmapResult {
            roadmap,
            timestamp: Utc::now(),
        })
    }

    /// Make the single outbound call for a task.
    async fn invoke(&self, kind: TaskKind, prompt: String) -> Result<String, TaskError> {
        let mut request = CompletionRequest::new(&self.model, prompt);
        if kind.expects_json() {
            request = request.with_json_mode();
        }

        debug!(task = %kind, model = %self.model, provider = self.provider.id(), "Invoking model");

        let response = self.provider.complete(request).await.map_err(|e| {
            error!(task = %kind, error = %e, "Model call failed");
            TaskError::upstream(kind, e)
        })?;

        if response.is_blank() {
            warn!(task = %kind, "Model returned an empty completion");
            return Err(TaskError::upstream(kind, ProviderError::EmptyResponse));
        }

        if let Some(usage) = response.usage {
            debug!(task = %kind, total_tokens = usage.total_tokens, "Model usage");
        }
        info!(task = %kind, chars = response.text.len(), "Task completion received");

        Ok(response.text)
    }
}

fn log_malformed(err: &TaskError, raw: &str) {
    error!(task = %err.kind(), error = %err, raw_len = raw.len(), "Could not shape model output");
    debug!(raw = %raw, "Unshaped model output");
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
