use super::types::SkillCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,

    /// Proficiency in percent. Only technical skills carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Skill {
    pub fn technical(name: &str, level: u8, color: &str) -> Self {
        Self {
            name: name.to_string(),
            category: SkillCategory::Technical,
            level: Some(level),
            color: Some(color.to_string()),
        }
    }

    pub fn soft(name: &str) -> Self {
        Self {
            name: name.to_string(),
            category: SkillCategory::Soft,
            level: None,
            color: None,
        }
    }

    pub fn language(name: &str) -> Self {
        Self {
            name: name.to_string(),
            category: SkillCategory::Language,
            level: None,
            color: None,
        }
    }
}
