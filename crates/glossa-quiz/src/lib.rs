#![forbid(unsafe_code)]
//! glossa-quiz: randomized multiple-choice quizzes over glossary terms.
//!
//! # Overview
//!
//! Works directly on a category's terms (not the reference graph). A quiz
//! shows a definition value, stripped of markup, and asks which term it
//! belongs to; the options are the correct title plus up to three other
//! titles from the same category.
//!
//! ```text
//! Vec<Term> + QuizPlan (count, focus, distractor floor)
//!        ↓  generate::eligible_pool()
//! (term, field) candidates with enough distractors available
//!        ↓  Fisher–Yates shuffle, take N
//! Vec<QuizQuestion> { questionText, options, correctAnswer }
//! ```
//!
//! Randomness comes from a caller-supplied [`rand::Rng`], so a seeded run
//! reproduces its question set and option order exactly. An empty pool
//! yields zero questions, never an error.

pub mod generate;
pub mod score;
pub mod strip;

pub use generate::{
    DEFAULT_QUESTION_COUNT, MAX_DISTRACTORS, QuestionFocus, QuizPlan, QuizQuestion,
    eligible_pool_size, generate_questions,
};
pub use score::{check_answer, format_duration, score_percent};
pub use strip::strip_html;
