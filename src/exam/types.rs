//! Exam content, attempts and grades.

use crate::core::balance::ExamBalance;
use serde::{Deserialize, Serialize};

/// An exam as configured by the content layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamConfig {
    pub id: String,
    /// The full question pool.
    pub question_ids: Vec<String>,
    /// Questions per attempt.
    pub question_count: usize,
    /// Minimum score (0..=100) to pass.
    pub pass_score: u32,
}

impl ExamConfig {
    /// Exam with the configured default length and pass mark.
    pub fn new(id: impl Into<String>, question_ids: Vec<String>, balance: &ExamBalance) -> Self {
        Self {
            id: id.into(),
            question_ids,
            question_count: balance.default_question_count,
            pass_score: balance.default_pass_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamOption {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExamQuestion {
    SingleChoice {
        id: String,
        prompt: String,
        options: Vec<ExamOption>,
        correct: String,
    },
    MultiChoice {
        id: String,
        prompt: String,
        options: Vec<ExamOption>,
        correct: Vec<String>,
    },
    Ordering {
        id: String,
        prompt: String,
        items: Vec<ExamOption>,
        correct_order: Vec<String>,
    },
    CaseDecision {
        id: String,
        prompt: String,
        case_text: String,
        options: Vec<ExamOption>,
        correct: String,
    },
}

impl ExamQuestion {
    pub fn id(&self) -> &str {
        match self {
            ExamQuestion::SingleChoice { id, .. }
            | ExamQuestion::MultiChoice { id, .. }
            | ExamQuestion::Ordering { id, .. }
            | ExamQuestion::CaseDecision { id, .. } => id,
        }
    }
}

/// A player's answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamAnswer {
    /// Single choice or case decision.
    Choice(String),
    /// Multi choice.
    Choices(Vec<String>),
    /// Ordering.
    Order(Vec<String>),
}

/// The question list of one attempt. Discarded when the next attempt starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamSession {
    pub exam_id: String,
    pub attempt_index: u32,
    pub seed: String,
    pub question_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeResult {
    pub score: u32,
    pub passed: bool,
    pub correct_count: usize,
    pub total: usize,
}
