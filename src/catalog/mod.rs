//! Read-only content catalog.
//!
//! The catalog owns every profile, project, skill and certificate record for
//! the lifetime of the process. It is built once at startup, either from the
//! authored content in [`builtin`] or from a YAML file (see [`Catalog::load`]),
//! validated, and then shared behind an `Arc` without locking.
//!
//! Lookups preserve authored order; nothing here sorts.

mod builtin;
mod loader;
mod validate;

pub use validate::Violation;

use crate::model::{
    Certificate, DeveloperProfile, Project, ProjectCategory, Skill, SkillCategory,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: DeveloperProfile,

    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub skills: Vec<Skill>,

    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

impl Catalog {
    /// The authored content shipped with the binary.
    pub fn builtin() -> Self {
        builtin::builtin()
    }

    pub fn profile(&self) -> &DeveloperProfile {
        &self.profile
    }

    /// Exact, case-sensitive match on `slug`. A miss is a normal outcome.
    pub fn find_project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    pub fn list_projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn projects_in(&self, category: ProjectCategory) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn list_skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn list_certificates(&self) -> &[Certificate] {
        &self.certificates
    }
}

/// Skills partitioned by category, each group in authored order.
#[derive(Debug, Clone, Default)]
pub struct SkillGroups<'a> {
    pub technical: Vec<&'a Skill>,
    pub soft: Vec<&'a Skill>,
    pub languages: Vec<&'a Skill>,
}

impl<'a> SkillGroups<'a> {
    pub fn partition(skills: &'a [Skill]) -> Self {
        let mut groups = Self::default();
        for skill in skills {
            match skill.category {
                SkillCategory::Technical => groups.technical.push(skill),
                SkillCategory::Soft => groups.soft.push(skill),
                SkillCategory::Language => groups.languages.push(skill),
            }
        }
        groups
    }

    pub fn len(&self) -> usize {
        self.technical.len() + self.soft.len() + self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
