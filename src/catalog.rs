//! Static catalog of training modules and their lessons.
//!
//! Catalog data is supplied by an external content source (built directly
//! or deserialized from JSON) and is only ever read here. Wire names are
//! camelCase to match the content pipeline.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub modules: Vec<Module>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse module catalog")
    }

    /// Look a lesson up across every module.
    pub fn find_lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.modules
            .iter()
            .flat_map(|m| m.lessons.iter())
            .find(|l| l.id == lesson_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub title: String,
    pub description: String,
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    /// Markup body rendered by the host UI; stripped to plain text for the
    /// spoken rendition.
    pub content: String,
    #[serde(default)]
    pub key_takeaways: Vec<String>,
    #[serde(default)]
    pub quiz: Option<Quiz>,
}

/// Single-question quiz attached to a lesson.
///
/// `correct_answer_index < options.len()` is a content-authoring
/// precondition and is not re-checked at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
}
