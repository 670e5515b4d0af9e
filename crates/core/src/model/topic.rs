use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{TopicId, TopicTranslations};

//
// ─── TOPIC CONTENT TYPES ───────────────────────────────────────────────────────
//

/// The two opposing arguments of a prompt and the writer's position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicMap {
    pub view_a: String,
    pub view_b: String,
    pub position: String,
}

/// A single multiple-choice exercise.
///
/// `answer` must be one of `options` by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuizQuestion {
    /// Checks that the declared answer is one of the declared options.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::AnswerNotAnOption` otherwise.
    pub fn validate(&self) -> Result<(), PracticeError> {
        if self.options.iter().any(|opt| opt == &self.answer) {
            Ok(())
        } else {
            Err(PracticeError::AnswerNotAnOption {
                answer: self.answer.clone(),
            })
        }
    }
}

/// Text with blanks: `text_parts` has one more fragment than `answers`,
/// each answer filling the blank between two adjacent fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapFill {
    pub text_parts: Vec<String>,
    pub answers: Vec<String>,
}

impl GapFill {
    /// Number of blanks in the exercise.
    #[must_use]
    pub fn blanks(&self) -> usize {
        self.answers.len()
    }

    /// Checks the fragment/answer interleaving shape.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::EmptyGap` when there is nothing to reveal,
    /// `PracticeError::GapShapeMismatch` when the counts do not interleave.
    pub fn validate(&self) -> Result<(), PracticeError> {
        if self.answers.is_empty() {
            return Err(PracticeError::EmptyGap);
        }
        if self.text_parts.len() != self.answers.len() + 1 {
            return Err(PracticeError::GapShapeMismatch {
                parts: self.text_parts.len(),
                answers: self.answers.len(),
            });
        }
        Ok(())
    }
}

/// The bundle of four practice exercises attached to a topic.
///
/// Gating is all-or-nothing: a topic either carries the whole chamber or
/// none of it. Partial chambers are not a supported configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeChamber {
    pub logic: QuizQuestion,
    pub trap: QuizQuestion,
    pub vocab: QuizQuestion,
    pub gap: GapFill,
}

impl PracticeChamber {
    /// Validates all four exercises.
    ///
    /// # Errors
    ///
    /// Returns the first `PracticeError` encountered.
    pub fn validate(&self) -> Result<(), PracticeError> {
        self.logic.validate()?;
        self.trap.validate()?;
        self.vocab.validate()?;
        self.gap.validate()
    }
}

//
// ─── TOPIC ─────────────────────────────────────────────────────────────────────
//

/// One self-contained lesson unit: prompt, analysis, and optional practice.
///
/// Topics are immutable once constructed; the catalog defines them at
/// process start and the live tutor produces them from gateway replies.
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    pub id: TopicId,
    pub year: String,
    pub title: String,
    pub prompt: String,
    pub specific_question: String,
    pub trap: String,
    pub logic_map: LogicMap,
    /// May carry inline `**word**` emphasis markers.
    pub introduction: String,
    pub practice: Option<PracticeChamber>,
    pub translations: Option<TopicTranslations>,
}

impl Topic {
    /// Validates the practice chamber, when present.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError` for a malformed exercise.
    pub fn validate(&self) -> Result<(), PracticeError> {
        match &self.practice {
            Some(chamber) => chamber.validate(),
            None => Ok(()),
        }
    }
}

//
// ─── PRACTICE VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PracticeError {
    #[error("quiz answer {answer:?} is not one of the declared options")]
    AnswerNotAnOption { answer: String },

    #[error("gap fill has {parts} text parts for {answers} answers")]
    GapShapeMismatch { parts: usize, answers: usize },

    #[error("gap fill has no blanks")]
    EmptyGap,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
