use chrono::{Datelike, Utc};

use crate::catalog::Catalog;
use crate::contact::Notice;
use crate::router::{HashScroller, Location, NAV_LINKS};
use crate::theme::ThemeStore;

#[derive(Debug, Clone)]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: String,
}

/// Shared page furniture: header, theme toggle, notices and footer.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub site_name: String,
    /// Per-page `<meta name="description">` text.
    pub description: String,
    pub current_path: String,
    pub theme: ThemeStore,
    pub nav: Vec<NavItem>,
    pub footer_links: Vec<FooterLink>,
    pub resume_url: String,
    pub notice: Option<Notice>,
    pub scroll_script: String,
    pub year: i32,
    /// True on the landing page before scrolling; the header starts see-through.
    pub transparent_header: bool,
}

impl Chrome {
    pub fn new(
        catalog: &Catalog,
        location: &Location,
        theme: ThemeStore,
        notice: Option<Notice>,
        description: String,
    ) -> Self {
        let profile = catalog.profile();
        let nav = NAV_LINKS
            .iter()
            .map(|link| NavItem {
                name: link.name,
                path: link.path,
                active: link.is_active(location),
            })
            .collect();

        let mut footer_links = vec![
            FooterLink {
                label: "Email",
                href: profile.mailto(),
            },
            FooterLink {
                label: "LinkedIn",
                href: profile.contact.linkedin.clone(),
            },
        ];
        if let Some(ref github) = profile.contact.github {
            footer_links.push(FooterLink {
                label: "GitHub",
                href: github.clone(),
            });
        }

        Self {
            site_name: profile.name.clone(),
            description,
            current_path: location.path.clone(),
            theme,
            nav,
            footer_links,
            resume_url: profile.resume_url.clone(),
            notice,
            scroll_script: HashScroller::default().script(),
            year: Utc::now().year(),
            transparent_header: location.is_root(),
        }
    }
}
