//! Data models for the portfolio.
//!
//! - [`DeveloperProfile`]: the site owner, with contact channels and education
//! - [`Project`]: a portfolio entry addressed by its slug
//! - [`Skill`]: a technical, soft or language skill
//! - [`Certificate`]: a certificate shown in the gallery

mod certificate;
mod profile;
mod project;
mod skill;
mod types;

pub use certificate::Certificate;
pub use profile::{ContactChannels, DeveloperProfile, EducationEntry};
pub use project::Project;
pub use skill::Skill;
pub use types::{ProjectCategory, SkillCategory};
