//! Client-side navigation contract.
//!
//! [`Route`] maps a request path onto one of the fixed page variants. The
//! `/project/{slug}` variant carries the slug as an opaque string; whether it
//! names a project is decided by the catalog lookup, never here.
//!
//! [`Location`] and [`ScrollIntent`] describe what the viewport should do
//! after a navigation, and [`HashScroller`] implements the bounded retry used
//! when the anchor is not rendered yet.

mod scroll;

pub use scroll::{
    AnchorTarget, HEADER_OFFSET, HashScroller, MAX_ATTEMPTS, POLL_INTERVAL, ScrollOutcome,
};

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Portfolio,
    Project { slug: String },
    About,
    Certificates,
    Contact,
    NotFound,
}

impl Route {
    /// Resolves a request path. Unknown paths fall through to [`Route::NotFound`].
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Route::Home,
            "/portfolio" => Route::Portfolio,
            "/about" => Route::About,
            "/certificates" => Route::Certificates,
            "/contact" => Route::Contact,
            _ => match trimmed.strip_prefix("/project/") {
                Some(slug) if !slug.is_empty() && !slug.contains('/') => Route::Project {
                    slug: slug.to_string(),
                },
                _ => Route::NotFound,
            },
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Portfolio => "/portfolio".to_string(),
            Route::Project { slug } => format!("/project/{}", slug),
            Route::About => "/about".to_string(),
            Route::Certificates => "/certificates".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Portfolio => "Projects",
            Route::Project { .. } => "Project",
            Route::About => "About",
            Route::Certificates => "Certificates",
            Route::Contact => "Contact",
            Route::NotFound => "Page Not Found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// A navigation target split into path and fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub fragment: Option<String>,
}

impl Location {
    pub fn parse(target: &str) -> Self {
        let (rest, fragment) = match target.split_once('#') {
            Some((rest, fragment)) if !fragment.is_empty() => {
                (rest, Some(fragment.to_string()))
            }
            Some((rest, _)) => (rest, None),
            None => (target, None),
        };
        let path = rest.split('?').next().unwrap_or("");
        let path = if path.is_empty() { "/" } else { path };

        Self {
            path: path.to_string(),
            fragment,
        }
    }

    pub fn route(&self) -> Route {
        Route::resolve(&self.path)
    }

    pub fn is_root(&self) -> bool {
        self.path == "/"
    }
}

/// What the viewport does once a navigation lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollIntent {
    /// Align the element with this DOM id below the fixed header.
    ToAnchor(String),
    /// Reset to the top of the document.
    Top,
    /// Leave the scroll position alone.
    Keep,
}

impl ScrollIntent {
    pub fn for_location(location: &Location) -> Self {
        match &location.fragment {
            Some(id) => ScrollIntent::ToAnchor(id.clone()),
            None if location.is_root() => ScrollIntent::Top,
            None => ScrollIntent::Keep,
        }
    }
}

/// Header navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub path: &'static str,
}

impl NavLink {
    pub fn is_hash(&self) -> bool {
        self.path.contains('#')
    }

    /// Whether this link is the current page. Hash links match on path plus
    /// fragment, the bare root only matches without a fragment.
    pub fn is_active(&self, location: &Location) -> bool {
        let target = Location::parse(self.path);
        if self.is_hash() {
            target == *location
        } else {
            target.path == location.path && location.fragment.is_none()
        }
    }
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { name: "Home", path: "/" },
    NavLink { name: "About Me", path: "/about" },
    NavLink { name: "Skills", path: "/#skills" },
    NavLink { name: "Projects", path: "/portfolio" },
    NavLink { name: "Certificates", path: "/certificates" },
    NavLink { name: "Contact", path: "/contact" },
];
