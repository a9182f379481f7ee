// Askama page templates. Every page extends `base.html`, which reads `title`
// and `chrome`.

use askama::Template;

use super::chrome::Chrome;
use crate::catalog::SkillGroups;
use crate::contact::{ContactForm, FieldError};
use crate::model::{Certificate, DeveloperProfile, Project, ProjectCategory};

pub struct CategoryFilter {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomePage<'a> {
    pub title: String,
    pub chrome: Chrome,
    pub profile: &'a DeveloperProfile,
    pub skills: SkillGroups<'a>,
    pub featured: Vec<&'a Project>,
}

#[derive(Template)]
#[template(path = "pages/portfolio.html")]
pub struct PortfolioPage<'a> {
    pub title: String,
    pub chrome: Chrome,
    pub projects: Vec<&'a Project>,
    pub filters: Vec<CategoryFilter>,
    pub skills: SkillGroups<'a>,
}

#[derive(Template)]
#[template(path = "pages/project.html")]
pub struct ProjectPage<'a> {
    pub title: String,
    pub chrome: Chrome,
    pub project: &'a Project,
}

#[derive(Template)]
#[template(path = "pages/project_missing.html")]
pub struct ProjectMissingPage {
    pub title: String,
    pub chrome: Chrome,
    pub slug: String,
}

#[derive(Template)]
#[template(path = "pages/about.html")]
pub struct AboutPage<'a> {
    pub title: String,
    pub chrome: Chrome,
    pub profile: &'a DeveloperProfile,
    pub paragraphs: Vec<&'a str>,
    pub skills: SkillGroups<'a>,
}

#[derive(Template)]
#[template(path = "pages/certificates.html")]
pub struct CertificatesPage<'a> {
    pub title: String,
    pub chrome: Chrome,
    pub certificates: &'a [Certificate],
}

#[derive(Template)]
#[template(path = "pages/contact.html")]
pub struct ContactPage<'a> {
    pub title: String,
    pub chrome: Chrome,
    pub profile: &'a DeveloperProfile,
    pub form: ContactForm,
    pub errors: Vec<FieldError>,
    pub can_submit: bool,
}

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundPage {
    pub title: String,
    pub chrome: Chrome,
    pub path: String,
}

pub fn category_filters(active: Option<ProjectCategory>) -> Vec<CategoryFilter> {
    let mut filters = vec![CategoryFilter {
        label: "All",
        href: "/portfolio".to_string(),
        active: active.is_none(),
    }];
    filters.extend(ProjectCategory::ALL.iter().map(|category| CategoryFilter {
        label: category.label(),
        href: format!("/portfolio?category={}", category),
        active: active == Some(*category),
    }));
    filters
}
