//! Grading a finished attempt.

use super::types::{ExamAnswer, ExamConfig, ExamQuestion, ExamSession, GradeResult};
use std::collections::{HashMap, HashSet};

/// Whether `answer` is right for `question`. An answer of the wrong shape
/// is simply wrong.
pub fn is_correct(question: &ExamQuestion, answer: &ExamAnswer) -> bool {
    match (question, answer) {
        (ExamQuestion::SingleChoice { correct, .. }, ExamAnswer::Choice(choice))
        | (ExamQuestion::CaseDecision { correct, .. }, ExamAnswer::Choice(choice)) => {
            choice == correct
        }
        (ExamQuestion::MultiChoice { correct, .. }, ExamAnswer::Choices(choices)) => {
            let picked: HashSet<&str> = choices.iter().map(String::as_str).collect();
            let expected: HashSet<&str> = correct.iter().map(String::as_str).collect();
            picked == expected
        }
        (ExamQuestion::Ordering { correct_order, .. }, ExamAnswer::Order(order)) => {
            order == correct_order
        }
        (ExamQuestion::SingleChoice { .. }, _)
        | (ExamQuestion::CaseDecision { .. }, _)
        | (ExamQuestion::MultiChoice { .. }, _)
        | (ExamQuestion::Ordering { .. }, _) => false,
    }
}

/// Grades the session's questions against the player's answers, keyed by
/// question id.
///
/// Session ids missing from `questions` are skipped and do not count toward
/// the total. The score is `floor(correct * 100 / total)`, or zero when
/// nothing could be graded.
pub fn grade_attempt(
    exam: &ExamConfig,
    session: &ExamSession,
    questions: &[ExamQuestion],
    answers: &HashMap<String, ExamAnswer>,
) -> GradeResult {
    let by_id: HashMap<&str, &ExamQuestion> = questions.iter().map(|q| (q.id(), q)).collect();

    let mut total = 0usize;
    let mut correct_count = 0usize;
    for id in &session.question_ids {
        let Some(question) = by_id.get(id.as_str()) else {
            if cfg!(debug_assertions) {
                tracing::warn!(exam = %exam.id, question = %id, "question missing from catalog, skipped");
            }
            continue;
        };
        total += 1;
        if answers.get(id).is_some_and(|answer| is_correct(question, answer)) {
            correct_count += 1;
        }
    }

    let score = if total == 0 {
        0
    } else {
        (correct_count * 100 / total) as u32
    };
    let passed = total > 0 && score >= exam.pass_score;
    tracing::debug!(exam = %exam.id, score, passed, correct_count, total, "exam graded");

    GradeResult {
        score,
        passed,
        correct_count,
        total,
    }
}
