//! Building the question list for an attempt.

use super::types::{ExamConfig, ExamSession};
use crate::core::rng::{derive_seed, shuffle, SeedRng};

/// Picks and orders the questions of one attempt.
///
/// The pool is shuffled with `seed:{exam_id}:{attempt_index}`. A pool at
/// least as large as the question count yields a prefix of the shuffle; a
/// smaller pool is cycled, repeating ids, until the count is reached. An
/// empty pool yields an empty session.
pub fn build_session(exam: &ExamConfig, seed: &str, attempt_index: u32) -> ExamSession {
    let session_seed = derive_seed(seed, &[&exam.id, &attempt_index.to_string()]);
    let mut rng = SeedRng::from_seed(&session_seed);
    let mut pool = exam.question_ids.clone();
    shuffle(&mut rng, &mut pool);

    let question_ids = if pool.is_empty() {
        Vec::new()
    } else {
        pool.iter().cycle().take(exam.question_count).cloned().collect()
    };

    ExamSession {
        exam_id: exam.id.clone(),
        attempt_index,
        seed: session_seed,
        question_ids,
    }
}
