use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    App,
    Ai,
    Web,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::App,
        ProjectCategory::Ai,
        ProjectCategory::Web,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::App => "app",
            ProjectCategory::Ai => "ai",
            ProjectCategory::Web => "web",
        }
    }

    /// Human-facing badge label used on project cards.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::App => "Mobile App",
            ProjectCategory::Ai => "AI / ML",
            ProjectCategory::Web => "Web",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "app" => Ok(ProjectCategory::App),
            "ai" => Ok(ProjectCategory::Ai),
            "web" => Ok(ProjectCategory::Web),
            _ => Err(FolioError::Validation(format!(
                "Invalid project category: {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
    Language,
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillCategory::Technical => write!(f, "technical"),
            SkillCategory::Soft => write!(f, "soft"),
            SkillCategory::Language => write!(f, "language"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_category_parse_is_case_insensitive() {
        assert_eq!("AI".parse::<ProjectCategory>().unwrap(), ProjectCategory::Ai);
        assert_eq!("web".parse::<ProjectCategory>().unwrap(), ProjectCategory::Web);
        assert!("desktop".parse::<ProjectCategory>().is_err());
    }

    #[test]
    fn test_skill_category_display_matches_serde() {
        for category in [
            SkillCategory::Technical,
            SkillCategory::Soft,
            SkillCategory::Language,
        ] {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }
}
