//! # Folio - a server-rendered developer portfolio
//!
//! Folio serves a single developer's portfolio site: a landing page, a
//! filterable project list with per-project detail pages, an about page,
//! certificates and a contact form that hands messages to an email-delivery
//! service. The same content is available from the command line.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the site on http://127.0.0.1:3000
//! folio serve
//!
//! # Inspect the content catalog
//! folio projects
//! folio show quantum96
//!
//! # Validate a custom catalog referenced from .folio.yml
//! folio check
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: The content catalog and its integrity rules
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: `.folio.yml` loading and discovery
//! - [`contact`]: Contact form validation and submission
//! - [`error`]: Error types and result aliases
//! - [`model`]: Content records (projects, skills, certificates, profile)
//! - [`router`]: Route resolution and hash-anchor scrolling
//! - [`server`]: The axum HTTP server
//! - [`theme`]: Light/dark theme preference
//! - [`views`]: Page composition and templates

/// Read-only content catalog.
///
/// Projects, skills, certificates and the developer profile, either built in
/// or loaded from a YAML file.
pub mod catalog;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.folio.yml` files and upward discovery.
pub mod config;

/// Contact form validation and single-attempt submission.
pub mod contact;

/// Error types and result aliases.
///
/// Defines `FolioError` enum and `Result<T>` type alias.
pub mod error;

/// Tracing subscriber setup: stderr plus an optional rolling JSON file.
pub mod logging;

/// Content records.
pub mod model;

/// Path-to-page resolution and scroll behavior on navigation.
pub mod router;

/// HTTP server built on axum.
pub mod server;

/// Light/dark theme preference persisted in a cookie.
pub mod theme;

/// Page composition and rendering.
pub mod views;
