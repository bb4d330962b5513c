//! Project configuration (`glossa.toml`), sitting next to the glossary
//! document. Every field is defaulted so a missing or partial file works.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up in the glossary document's directory.
pub const CONFIG_FILE: &str = "glossa.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub graph: GraphConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Question count used when `-n` is not given.
    #[serde(default = "default_question_count")]
    pub default_questions: usize,
    /// Minimum distinct distractors required per question (clamped to 1..=3).
    #[serde(default = "default_min_distractors")]
    pub min_distractors: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_questions: default_question_count(),
            min_distractors: default_min_distractors(),
        }
    }
}

impl QuizConfig {
    /// Config values are clamped rather than rejected; a typo'd
    /// `min_distractors = 9` degrades to 3, not a broken quiz.
    #[must_use]
    pub fn clamped_min_distractors(&self) -> usize {
        self.min_distractors.clamp(1, 3)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Base node radius in the visualization payload.
    #[serde(default = "default_base_radius")]
    pub base_radius: f64,
    /// Radius added per edge touching a node.
    #[serde(default = "default_radius_per_link")]
    pub radius_per_link: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            base_radius: default_base_radius(),
            radius_per_link: default_radius_per_link(),
        }
    }
}

fn default_question_count() -> usize {
    5
}

fn default_min_distractors() -> usize {
    2
}

fn default_base_radius() -> f64 {
    8.0
}

fn default_radius_per_link() -> f64 {
    1.5
}

/// Load `glossa.toml` from `dir`, falling back to defaults when absent.
///
/// # Errors
///
/// Returns an error only when the file exists but cannot be read or parsed.
pub fn load_config(dir: &Path) -> Result<ProjectConfig> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<ProjectConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
