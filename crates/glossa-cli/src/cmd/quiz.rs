//! `glossa quiz` — multiple-choice quizzes over a category.
//!
//! The default mode prints the generated questions (machine-readable with
//! `--json`); `--play` runs an interactive session on stdin/stdout and
//! reports the score.

use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;

use clap::Args;
use glossa_core::GlossaryStore;
use glossa_core::config::load_config;
use glossa_quiz::{
    QuestionFocus, QuizPlan, QuizQuestion, check_answer, eligible_pool_size, format_duration,
    generate_questions, score_percent, strip_html,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::cmd::load_document;
use crate::output::{OutputMode, render};
use crate::resolve;

const LETTERS: [&str; 4] = ["a", "b", "c", "d"];

#[derive(Args, Debug)]
pub struct QuizArgs {
    /// Category id, name, or unique id prefix.
    pub category: String,

    /// Number of questions (default comes from `glossa.toml`).
    #[arg(short = 'n', long = "questions", value_name = "COUNT")]
    pub questions: Option<usize>,

    /// Definition field to quiz on: istilah, bahasa, kenapa-ada, contoh,
    /// or `any`.
    #[arg(long, default_value = "any", value_name = "FIELD")]
    pub focus: QuestionFocus,

    /// Seed for reproducible question selection.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Print the answer key after the questions.
    #[arg(long)]
    pub answers: bool,

    /// Answer interactively and get a score.
    #[arg(long)]
    pub play: bool,
}

#[derive(Debug, Serialize)]
struct QuizReport {
    category_id: String,
    pool_size: usize,
    questions: Vec<QuizQuestion>,
}

#[derive(Debug, Serialize)]
struct PlayReport {
    questions: usize,
    correct: usize,
    score_percent: usize,
    elapsed: String,
}

/// Generate a quiz for a category. Quiz sizing defaults come from the
/// `[quiz]` section of `glossa.toml`.
pub fn run_quiz(
    args: &QuizArgs,
    output: OutputMode,
    store: &impl GlossaryStore,
    config_dir: &Path,
) -> anyhow::Result<()> {
    let config = load_config(config_dir)?;
    let data = load_document(store, output)?;
    let category = resolve::require_category(&data, &args.category, output)?;

    let plan = QuizPlan {
        question_count: args.questions.unwrap_or(config.quiz.default_questions),
        focus: args.focus,
        min_distractors: config.quiz.clamped_min_distractors(),
    };
    let pool_size = eligible_pool_size(&category.terms, plan.focus, plan.min_distractors);
    let questions = match args.seed {
        Some(seed) => {
            generate_questions(&category.terms, &plan, &mut StdRng::seed_from_u64(seed))
        }
        None => generate_questions(&category.terms, &plan, &mut rand::thread_rng()),
    };

    if args.play && !questions.is_empty() {
        return run_play(&questions, output);
    }

    let report = QuizReport {
        category_id: category.id.clone(),
        pool_size,
        questions,
    };
    let category_name = category.name.clone();
    let show_answers = args.answers;
    render(output, &report, move |quiz, w| {
        render_quiz_human(quiz, &category_name, show_answers, w)
    })
}

fn run_play(questions: &[QuizQuestion], output: OutputMode) -> anyhow::Result<()> {
    let started = Instant::now();
    let correct = {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut stdout = std::io::stdout();
        play_session(questions, &mut input, &mut stdout)?
    };

    let report = PlayReport {
        questions: questions.len(),
        correct,
        score_percent: score_percent(correct, questions.len()),
        elapsed: format_duration(started.elapsed()),
    };
    render(output, &report, |played, w| {
        writeln!(w)?;
        writeln!(
            w,
            "Score: {}/{} ({}%) in {}",
            played.correct, played.questions, played.score_percent, played.elapsed
        )
    })
}

/// Ask every question on `input`, echoing feedback to `out`, and return
/// the number answered correctly. End of input counts the remaining
/// questions as wrong.
fn play_session(
    questions: &[QuizQuestion],
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> std::io::Result<usize> {
    let mut correct = 0;
    for (number, question) in questions.iter().enumerate() {
        writeln!(out)?;
        render_question(number, question, out)?;
        write!(out, "Your answer: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            writeln!(out, "(end of input; remaining questions count as wrong)")?;
            break;
        }

        match pick_option(&question.options, &line) {
            Some(choice) if check_answer(question, choice) => {
                correct += 1;
                writeln!(out, "✓ Correct")?;
            }
            _ => writeln!(out, "✗ Wrong. The answer is '{}'.", question.correct_answer)?,
        }
    }
    Ok(correct)
}

/// Map raw input to an option: a single letter picks by position, anything
/// else matches the option text case-insensitively.
fn pick_option<'a>(options: &'a [String], raw: &str) -> Option<&'a str> {
    let trimmed = raw.trim();
    if trimmed.len() == 1 {
        let byte = trimmed.as_bytes()[0].to_ascii_lowercase();
        let index = byte.checked_sub(b'a')? as usize;
        return options.get(index).map(String::as_str);
    }
    options
        .iter()
        .map(String::as_str)
        .find(|option| option.eq_ignore_ascii_case(trimmed))
}

fn render_quiz_human(
    report: &QuizReport,
    category_name: &str,
    show_answers: bool,
    w: &mut dyn Write,
) -> std::io::Result<()> {
    if report.questions.is_empty() {
        writeln!(w, "No quizzable terms in '{category_name}'.")?;
        writeln!(
            w,
            "Eligible pool: {} candidate(s). A term needs a provided definition \
             field and enough other titles to serve as wrong options.",
            report.pool_size
        )?;
        return Ok(());
    }

    writeln!(
        w,
        "Quiz for '{category_name}' ({} questions, pool of {})",
        report.questions.len(),
        report.pool_size
    )?;
    for (number, question) in report.questions.iter().enumerate() {
        writeln!(w)?;
        render_question(number, question, w)?;
    }

    if show_answers {
        writeln!(w)?;
        writeln!(w, "Answer key:")?;
        for (number, question) in report.questions.iter().enumerate() {
            writeln!(
                w,
                "  Q{}: {}) {}",
                number + 1,
                answer_letter(question),
                question.correct_answer
            )?;
        }
    }
    Ok(())
}

fn render_question(
    number: usize,
    question: &QuizQuestion,
    w: &mut dyn Write,
) -> std::io::Result<()> {
    writeln!(w, "Q{}.", number + 1)?;
    let prompt = strip_html(&question.question_text.replace("<br/>", "\n"));
    for line in prompt.lines() {
        writeln!(w, "  {line}")?;
    }
    for (letter, option) in LETTERS.iter().zip(&question.options) {
        writeln!(w, "    {letter}) {option}")?;
    }
    Ok(())
}

fn answer_letter(question: &QuizQuestion) -> &'static str {
    question
        .options
        .iter()
        .position(|option| option == &question.correct_answer)
        .and_then(|index| LETTERS.get(index))
        .map_or("?", |letter| *letter)
}
