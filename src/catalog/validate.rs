//! Catalog integrity checks.

use std::collections::HashSet;
use std::fmt;

use url::Url;

use super::Catalog;
use crate::error::{FolioError, Result};
use crate::model::SkillCategory;

/// Upper bound for a technical skill's level.
pub const MAX_SKILL_LEVEL: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    DuplicateSlug(String),
    DuplicateProjectId(String),
    UnsafeSlug(String),
    MissingSkillLevel(String),
    SkillLevelOutOfRange { skill: String, level: u8 },
    UnexpectedSkillLevel { skill: String, category: SkillCategory },
    DuplicateCertificateId(String),
    InvalidUrl { field: String, value: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DuplicateSlug(slug) => write!(f, "duplicate project slug '{}'", slug),
            Violation::DuplicateProjectId(id) => write!(f, "duplicate project id '{}'", id),
            Violation::UnsafeSlug(slug) => write!(f, "slug '{}' is not URL-safe", slug),
            Violation::MissingSkillLevel(name) => {
                write!(f, "technical skill '{}' has no level", name)
            }
            Violation::SkillLevelOutOfRange { skill, level } => write!(
                f,
                "skill '{}' level {} exceeds {}",
                skill, level, MAX_SKILL_LEVEL
            ),
            Violation::UnexpectedSkillLevel { skill, category } => {
                write!(f, "{} skill '{}' must not carry a level", category, skill)
            }
            Violation::DuplicateCertificateId(id) => {
                write!(f, "duplicate certificate id '{}'", id)
            }
            Violation::InvalidUrl { field, value } => {
                write!(f, "{} is not a valid URL: '{}'", field, value)
            }
        }
    }
}

/// A slug is URL-safe when slugifying it is a no-op.
pub fn is_url_safe_slug(candidate: &str) -> bool {
    !candidate.is_empty() && slug::slugify(candidate) == candidate
}

fn is_http_url(value: &str) -> bool {
    Url::parse(value)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

impl Catalog {
    /// Every integrity violation in the catalog, in discovery order.
    pub fn violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        let mut slugs = HashSet::new();
        let mut ids = HashSet::new();
        for project in &self.projects {
            if !slugs.insert(project.slug.as_str()) {
                violations.push(Violation::DuplicateSlug(project.slug.clone()));
            }
            if !ids.insert(project.id.as_str()) {
                violations.push(Violation::DuplicateProjectId(project.id.clone()));
            }
            if !is_url_safe_slug(&project.slug) {
                violations.push(Violation::UnsafeSlug(project.slug.clone()));
            }
            if let Some(ref source) = project.source_code
                && !is_http_url(source)
            {
                violations.push(Violation::InvalidUrl {
                    field: format!("project '{}' source_code", project.slug),
                    value: source.clone(),
                });
            }
        }

        for skill in &self.skills {
            match (skill.category, skill.level) {
                (SkillCategory::Technical, None) => {
                    violations.push(Violation::MissingSkillLevel(skill.name.clone()))
                }
                (SkillCategory::Technical, Some(level)) if level > MAX_SKILL_LEVEL => {
                    violations.push(Violation::SkillLevelOutOfRange {
                        skill: skill.name.clone(),
                        level,
                    })
                }
                (SkillCategory::Technical, Some(_)) => {}
                (category, Some(_)) => violations.push(Violation::UnexpectedSkillLevel {
                    skill: skill.name.clone(),
                    category,
                }),
                (_, None) => {}
            }
        }

        let mut certificate_ids = HashSet::new();
        for certificate in &self.certificates {
            if !certificate_ids.insert(certificate.id.as_str()) {
                violations.push(Violation::DuplicateCertificateId(certificate.id.clone()));
            }
        }

        let contact = &self.profile.contact;
        let links = [
            ("profile linkedin", Some(&contact.linkedin)),
            ("profile github", contact.github.as_ref()),
        ];
        for (field, value) in links {
            if let Some(value) = value
                && !is_http_url(value)
            {
                violations.push(Violation::InvalidUrl {
                    field: field.to_string(),
                    value: value.clone(),
                });
            }
        }

        violations
    }

    pub fn validate(&self) -> Result<()> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(FolioError::Catalog(
                violations.iter().map(|v| v.to_string()).collect(),
            ))
        }
    }
}
