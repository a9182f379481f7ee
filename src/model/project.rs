use super::types::ProjectCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub long_description: String,

    #[serde(default)]
    pub tech_stack: Vec<String>,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,

    pub category: ProjectCategory,
    pub cover_image: String,
    pub year: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_code: Option<String>,
}

impl Project {
    /// Deep-link path for this project's detail page.
    pub fn href(&self) -> String {
        format!("/project/{}", self.slug)
    }
}
