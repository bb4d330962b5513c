//! Question pool construction and sampling.
//!
//! A quiz candidate is a `(term, field)` pair whose field value is actually
//! provided. The pool is shuffled with Fisher–Yates and the first N become
//! questions; a pool smaller than N yields fewer questions, never padding
//! and never an error.
//!
//! A candidate only enters the pool when its category offers at least
//! [`QuizPlan::min_distractors`] other distinct titles, so a generated
//! question always has enough wrong options to be worth asking.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use glossa_core::model::{DefinitionField, Term, valid_terms};

use crate::strip::strip_html;

/// Questions per quiz when the caller does not say otherwise.
pub const DEFAULT_QUESTION_COUNT: usize = 5;
/// Wrong options per question, at most.
pub const MAX_DISTRACTORS: usize = 3;
/// Distractor floor applied when a plan does not set one.
pub const DEFAULT_MIN_DISTRACTORS: usize = 2;

// ---------------------------------------------------------------------------
// QuestionFocus
// ---------------------------------------------------------------------------

/// Which definition fields a quiz draws its questions from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "field", rename_all = "camelCase")]
pub enum QuestionFocus {
    /// One specific field: every eligible term contributes one candidate.
    Specific(DefinitionField),
    /// Any field: a term contributes one candidate per provided field.
    Any,
}

impl QuestionFocus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Specific(field) => field.key(),
            Self::Any => "any",
        }
    }
}

impl fmt::Display for QuestionFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionFocus {
    type Err = <DefinitionField as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("any") || s.eq_ignore_ascii_case("random") {
            return Ok(Self::Any);
        }
        DefinitionField::from_str(s).map(Self::Specific)
    }
}

// ---------------------------------------------------------------------------
// QuizPlan / QuizQuestion
// ---------------------------------------------------------------------------

/// Parameters for one quiz generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizPlan {
    /// Desired question count; the pool may supply fewer.
    pub question_count: usize,
    /// Field selection for the pool.
    pub focus: QuestionFocus,
    /// Candidates need at least this many distinct other titles available.
    pub min_distractors: usize,
}

impl Default for QuizPlan {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
            focus: QuestionFocus::Any,
            min_distractors: DEFAULT_MIN_DISTRACTORS,
        }
    }
}

/// One rendered multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    /// Id of the term being asked about.
    pub term_id: String,
    /// Title of that term; always equal to `correct_answer`.
    pub term_title: String,
    /// The definition field the question text was taken from.
    pub field: DefinitionField,
    /// Prompt with inline markup (`<br/>`, `<em>`), definition already
    /// stripped of its own tags.
    pub question_text: String,
    /// All options in display order, the correct answer among them.
    pub options: Vec<String>,
    pub correct_answer: String,
}

// ---------------------------------------------------------------------------
// Pool construction
// ---------------------------------------------------------------------------

/// How many `(term, field)` candidates a quiz over `terms` could draw from.
///
/// Counts exactly what [`generate_questions`] would sample: provided fields
/// matching `focus`, on terms with at least `min_distractors` other
/// distinct titles in the category.
#[must_use]
pub fn eligible_pool_size(terms: &[Term], focus: QuestionFocus, min_distractors: usize) -> usize {
    eligible_pool(terms, focus, min_distractors).len()
}

fn eligible_pool(
    terms: &[Term],
    focus: QuestionFocus,
    min_distractors: usize,
) -> Vec<(usize, DefinitionField)> {
    let titled: Vec<&Term> = valid_terms(terms).collect();

    let mut pool: Vec<(usize, DefinitionField)> = Vec::new();
    for (pos, term) in titled.iter().enumerate() {
        if distractor_pool(&titled, &term.title).len() < min_distractors {
            continue;
        }
        match focus {
            QuestionFocus::Specific(field) => {
                if term.definitions.provided(field).is_some() {
                    pool.push((pos, field));
                }
            }
            QuestionFocus::Any => {
                for (field, _) in term.definitions.provided_fields() {
                    pool.push((pos, field));
                }
            }
        }
    }
    pool
}

/// Distinct other titles available as wrong options, in first-seen order.
fn distractor_pool<'a>(titled: &[&'a Term], correct_title: &str) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for term in titled {
        let title = term.title.as_str();
        if title != correct_title && !seen.contains(&title) {
            seen.push(title);
        }
    }
    seen
}

const fn question_prefix(field: DefinitionField) -> &'static str {
    match field {
        DefinitionField::Istilah => "Term for this definition:",
        DefinitionField::Bahasa => "Term for this language meaning:",
        DefinitionField::KenapaAda => "Term for this rationale:",
        DefinitionField::Contoh => "Term for this example:",
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate up to `plan.question_count` questions from one category.
///
/// The pool is shuffled and truncated, so two runs with the same seeded
/// `rng` produce identical quizzes. An empty pool returns an empty vec.
pub fn generate_questions<R: Rng>(terms: &[Term], plan: &QuizPlan, rng: &mut R) -> Vec<QuizQuestion> {
    let titled: Vec<&Term> = valid_terms(terms).collect();

    let mut pool = eligible_pool(terms, plan.focus, plan.min_distractors);
    pool.shuffle(rng);
    pool.truncate(plan.question_count);

    let questions: Vec<QuizQuestion> = pool
        .into_iter()
        .filter_map(|(pos, field)| {
            let term = titled.get(pos)?;
            let raw = term.definitions.provided(field)?;

            let mut distractors = distractor_pool(&titled, &term.title);
            distractors.shuffle(rng);
            distractors.truncate(MAX_DISTRACTORS);

            let mut options: Vec<String> = distractors.into_iter().map(str::to_string).collect();
            options.push(term.title.clone());
            options.shuffle(rng);

            Some(QuizQuestion {
                term_id: term.id.clone(),
                term_title: term.title.clone(),
                field,
                question_text: format!(
                    "{}<br/><em>\"{}\"</em>",
                    question_prefix(field),
                    strip_html(raw),
                ),
                options,
                correct_answer: term.title.clone(),
            })
        })
        .collect();

    debug!(
        requested = plan.question_count,
        generated = questions.len(),
        focus = %plan.focus,
        "generated quiz"
    );
    questions
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
