//! Answer checking and result summarization.

use std::time::Duration;

use crate::generate::QuizQuestion;

/// Exact-match grading: an answer is correct when it equals the question's
/// correct title, case and all, since answers are picked from the options.
#[must_use]
pub fn check_answer(question: &QuizQuestion, answer: &str) -> bool {
    question.correct_answer == answer
}

/// Integer score percentage, rounded half-up. Zero answered means zero.
#[must_use]
pub const fn score_percent(correct: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (correct * 100 + total / 2) / total
}

/// Elapsed quiz time as `MM:SS`, zero-padded. Minutes grow past 99 rather
/// than wrapping.
#[must_use]
pub fn format_duration(elapsed: Duration) -> String {
    let total_seconds = elapsed.as_secs();
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}
