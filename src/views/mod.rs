//! Page views.
//!
//! A [`View`] is picked by matching on a [`Route`] and then rendered inside
//! the shared [`Chrome`]. Views only read the catalog; the one decision they
//! make is whether a project slug resolved.

mod chrome;
mod pages;

pub use chrome::{Chrome, FooterLink, NavItem};

use askama::Template;

use crate::catalog::{Catalog, SkillGroups};
use crate::contact::{ContactForm, FieldError, Notice};
use crate::error::Result;
use crate::model::{Project, ProjectCategory};
use crate::router::{Location, Route};
use crate::theme::ThemeStore;

use pages::*;

/// How many projects the landing page features.
const FEATURED_PROJECTS: usize = 3;

/// Everything a view needs besides the catalog.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub location: Location,
    pub theme: ThemeStore,
    pub notice: Option<Notice>,
}

impl PageContext {
    pub fn new(location: Location, theme: ThemeStore) -> Self {
        Self {
            location,
            theme,
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}

#[derive(Debug, Clone)]
pub enum View<'a> {
    Home,
    Portfolio {
        category: Option<ProjectCategory>,
    },
    ProjectDetail(&'a Project),
    ProjectMissing {
        slug: String,
    },
    About,
    Certificates,
    Contact {
        form: ContactForm,
        errors: Vec<FieldError>,
        can_submit: bool,
    },
    NotFound {
        path: String,
    },
}

impl<'a> View<'a> {
    /// Selects the view for a route, resolving project slugs against the
    /// catalog.
    pub fn for_route(route: &Route, catalog: &'a Catalog, location: &Location) -> Self {
        match route {
            Route::Home => View::Home,
            Route::Portfolio => View::Portfolio { category: None },
            Route::Project { slug } => match catalog.find_project_by_slug(slug) {
                Some(project) => View::ProjectDetail(project),
                None => View::ProjectMissing { slug: slug.clone() },
            },
            Route::About => View::About,
            Route::Certificates => View::Certificates,
            Route::Contact => View::contact(ContactForm::default(), Vec::new(), true),
            Route::NotFound => View::NotFound {
                path: location.path.clone(),
            },
        }
    }

    pub fn contact(form: ContactForm, errors: Vec<FieldError>, can_submit: bool) -> Self {
        View::Contact {
            form,
            errors,
            can_submit,
        }
    }

    pub fn title(&self, catalog: &Catalog) -> String {
        let page = match self {
            View::Home => return catalog.profile().name.clone(),
            View::Portfolio { .. } => "Projects",
            View::ProjectDetail(project) => project.title.as_str(),
            View::ProjectMissing { .. } => "Project Not Found",
            View::About => "About",
            View::Certificates => "Certificates",
            View::Contact { .. } => "Contact",
            View::NotFound { .. } => "Page Not Found",
        };
        format!("{} | {}", page, catalog.profile().name)
    }

    /// Text for the page's `<meta name="description">`.
    pub fn description(&self, catalog: &Catalog) -> String {
        let profile = catalog.profile();
        match self {
            View::Home => profile.hero_introduction.clone(),
            View::Portfolio { .. } => format!(
                "Browse {}'s projects including mobile apps, AI solutions, and web development work.",
                profile.name
            ),
            View::ProjectDetail(project) => project.description.clone(),
            View::ProjectMissing { .. } => {
                "The project you're looking for doesn't exist.".to_string()
            }
            View::About => format!("Learn more about {}, {}.", profile.name, profile.title),
            View::Certificates => format!(
                "Professional certifications and achievements of {}.",
                profile.name
            ),
            View::Contact { .. } => format!(
                "Get in touch with {} for app development projects, collaborations, and opportunities.",
                profile.name
            ),
            View::NotFound { .. } => "The page you're looking for doesn't exist.".to_string(),
        }
    }

    pub fn render(&self, catalog: &'a Catalog, ctx: &PageContext) -> Result<String> {
        let title = self.title(catalog);
        let chrome = Chrome::new(
            catalog,
            &ctx.location,
            ctx.theme,
            ctx.notice.clone(),
            self.description(catalog),
        );
        let profile = catalog.profile();

        let html = match self {
            View::Home => HomePage {
                title,
                chrome,
                profile,
                skills: SkillGroups::partition(catalog.list_skills()),
                featured: catalog
                    .list_projects()
                    .iter()
                    .take(FEATURED_PROJECTS)
                    .collect(),
            }
            .render()?,
            View::Portfolio { category } => PortfolioPage {
                title,
                chrome,
                projects: match category {
                    Some(c) => catalog.projects_in(*c),
                    None => catalog.list_projects().iter().collect(),
                },
                filters: category_filters(*category),
                skills: SkillGroups::partition(catalog.list_skills()),
            }
            .render()?,
            View::ProjectDetail(project) => ProjectPage {
                title,
                chrome,
                project,
            }
            .render()?,
            View::ProjectMissing { slug } => ProjectMissingPage {
                title,
                chrome,
                slug: slug.clone(),
            }
            .render()?,
            View::About => AboutPage {
                title,
                chrome,
                profile,
                paragraphs: profile.biography_paragraphs(),
                skills: SkillGroups::partition(catalog.list_skills()),
            }
            .render()?,
            View::Certificates => CertificatesPage {
                title,
                chrome,
                certificates: catalog.list_certificates(),
            }
            .render()?,
            View::Contact {
                form,
                errors,
                can_submit,
            } => ContactPage {
                title,
                chrome,
                profile,
                form: form.clone(),
                errors: errors.clone(),
                can_submit: *can_submit,
            }
            .render()?,
            View::NotFound { path } => NotFoundPage {
                title,
                chrome,
                path: path.clone(),
            }
            .render()?,
        };
        Ok(html)
    }
}

/// Resolves and renders `location` in one step.
pub fn render_location(catalog: &Catalog, ctx: &PageContext) -> Result<String> {
    let route = ctx.location.route();
    View::for_route(&route, catalog, &ctx.location).render(catalog, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;

    fn ctx(target: &str) -> PageContext {
        PageContext::new(Location::parse(target), ThemeStore::new(ThemeMode::Dark))
    }

    fn render(target: &str) -> String {
        render_location(&Catalog::builtin(), &ctx(target)).unwrap()
    }

    #[test]
    fn test_project_detail_renders_title() {
        let html = render("/project/quantum96");
        assert!(html.contains("Quantum96"));
        assert!(html.contains("XGBoost"));
        assert!(!html.contains("Project Not Found"));
    }

    #[test]
    fn test_meta_description_follows_page() {
        let html = render("/project/quantum96");
        assert!(html.contains(
            r#"<meta name="description" content="Smart Investment Tracker with AI-driven forecasting">"#
        ));

        let catalog = Catalog::builtin();
        let about = View::About.description(&catalog);
        assert!(about.starts_with("Learn more about Durai Raj S"));
        assert_ne!(about, View::Home.description(&catalog));
        assert_ne!(about, View::Certificates.description(&catalog));
    }

    #[test]
    fn test_missing_project_renders_not_found_branch() {
        let html = render("/project/does-not-exist");
        assert!(html.contains("Project Not Found"));
        assert!(html.contains("href=\"/portfolio\""));
    }

    #[test]
    fn test_unknown_route_renders_not_found_page() {
        let html = render("/nope");
        assert!(html.contains("Page Not Found"));
        assert!(html.contains("nope"));
    }

    #[test]
    fn test_home_has_skills_anchor() {
        let html = render("/");
        assert!(html.contains("id=\"skills\""));
        assert!(html.contains("Durai Raj S"));
    }

    #[test]
    fn test_view_selection_is_a_plain_match() {
        let catalog = Catalog::builtin();
        let location = Location::parse("/project/quantum96");
        let view = View::for_route(&location.route(), &catalog, &location);
        assert!(matches!(view, View::ProjectDetail(p) if p.slug == "quantum96"));

        let location = Location::parse("/project/missing");
        let view = View::for_route(&location.route(), &catalog, &location);
        assert!(matches!(view, View::ProjectMissing { ref slug } if slug == "missing"));
    }

    #[test]
    fn test_portfolio_filter() {
        let catalog = Catalog::builtin();
        let html = View::Portfolio {
            category: Some(ProjectCategory::Ai),
        }
        .render(&catalog, &ctx("/portfolio"))
        .unwrap();
        assert!(html.contains("Accident Detection System"));
        assert!(!html.contains("Scientific Calculator"));
    }

    #[test]
    fn test_user_values_are_escaped() {
        let catalog = Catalog::builtin();
        let view = View::contact(
            ContactForm::new("<script>alert(1)</script>", "", "", ""),
            Vec::new(),
            true,
        );
        let html = view.render(&catalog, &ctx("/contact")).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_notice_is_rendered_once() {
        let catalog = Catalog::builtin();
        let html = View::contact(ContactForm::default(), Vec::new(), true)
            .render(&catalog, &ctx("/contact").with_notice(Notice::sent()))
            .unwrap();
        assert_eq!(html.matches("role=\"status\"").count(), 1);
        assert!(html.contains("Message sent!"));
    }

    #[test]
    fn test_theme_is_applied() {
        let catalog = Catalog::builtin();
        let light = PageContext::new(Location::parse("/"), ThemeStore::new(ThemeMode::Light));
        let html = render_location(&catalog, &light).unwrap();
        assert!(html.contains("data-theme=\"light\""));
        assert!(html.contains("Switch to dark mode"));
    }
}
