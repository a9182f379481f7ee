use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, Uri, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use super::AppState;
use super::error::AppError;
use crate::contact::{ContactForm, Notice};
use crate::error::FolioError;
use crate::model::ProjectCategory;
use crate::router::{Location, Route};
use crate::theme::ThemeStore;
use crate::views::{PageContext, View, render_location};

fn page_context(state: &AppState, headers: &HeaderMap, uri: &Uri) -> PageContext {
    PageContext::new(
        Location::parse(uri.path()),
        ThemeStore::from_headers(headers, state.default_theme),
    )
}

/// Renders whatever the path resolves to. Unknown paths get the not-found
/// page with a 200, like any other soft-rendered view.
pub async fn page(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    let ctx = page_context(&state, &headers, &uri);
    Ok(Html(render_location(&state.catalog, &ctx)?))
}

#[derive(Debug, Deserialize)]
pub struct PortfolioQuery {
    pub category: Option<String>,
}

pub async fn portfolio(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Query(query): Query<PortfolioQuery>,
) -> Result<Html<String>, AppError> {
    let ctx = page_context(&state, &headers, &uri);
    // An unknown category shows everything rather than an error page.
    let category = query
        .category
        .as_deref()
        .and_then(|c| c.parse::<ProjectCategory>().ok());
    let html = View::Portfolio { category }.render(&state.catalog, &ctx)?;
    Ok(Html(html))
}

pub async fn project(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let ctx = page_context(&state, &headers, &uri);
    let view = match state.catalog.find_project_by_slug(&slug) {
        Some(project) => View::ProjectDetail(project),
        None => {
            tracing::debug!(slug = %slug, "Unknown project slug");
            View::ProjectMissing { slug }
        }
    };
    Ok(Html(view.render(&state.catalog, &ctx)?))
}

pub async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let ctx = page_context(&state, &headers, &uri);

    let errors = form.field_errors();
    if !errors.is_empty() {
        let notice = Notice::invalid(errors[0].message.clone());
        let html = View::contact(form, errors, state.contact.can_submit())
            .render(&state.catalog, &ctx.with_notice(notice))?;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
    }

    match state.contact.submit(form.clone()).await {
        Ok(submission) => {
            let html = View::contact(submission.form, Vec::new(), state.contact.can_submit())
                .render(&state.catalog, &ctx.with_notice(submission.notice))?;
            Ok(Html(html).into_response())
        }
        Err(FolioError::SubmissionInProgress) => {
            let html = View::contact(form, Vec::new(), state.contact.can_submit())
                .render(&state.catalog, &ctx.with_notice(Notice::busy()))?;
            Ok((StatusCode::CONFLICT, Html(html)).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ThemeToggle {
    pub back: Option<String>,
}

/// Only same-site paths that resolve to a page are followed. The result is
/// the parsed path, never the raw candidate.
fn safe_redirect_target(candidate: &str) -> Option<String> {
    if !candidate.starts_with('/')
        || candidate.starts_with("//")
        || candidate.contains('\\')
        || candidate.chars().any(char::is_control)
    {
        return None;
    }
    let location = Location::parse(candidate);
    (location.route() != Route::NotFound).then_some(location.path)
}

fn referer_path(headers: &HeaderMap) -> Option<String> {
    let referer = headers.get(header::REFERER)?.to_str().ok()?;
    let url = url::Url::parse(referer).ok()?;
    Some(url.path().to_string())
}

pub async fn toggle_theme(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(toggle): Form<ThemeToggle>,
) -> Response {
    let mut theme = ThemeStore::from_headers(&headers, state.default_theme);
    let mode = theme.toggle();
    tracing::debug!(theme = %mode, "Theme toggled");

    let back = toggle
        .back
        .or_else(|| referer_path(&headers))
        .and_then(|b| safe_redirect_target(&b))
        .unwrap_or_else(|| "/".to_string());

    (
        [(header::SET_COOKIE, theme.persist_cookie())],
        Redirect::to(&back),
    )
        .into_response()
}

/// Stylesheet compiled into the binary, so a bare `folio serve` is styled.
const SITE_CSS: &str = include_str!("../../assets/site.css");

/// Serves bundled assets. Anything else under `/assets` is a plain 404,
/// never the page fallback.
pub async fn bundled_asset(uri: Uri) -> Response {
    let path = uri.path();
    match path.strip_prefix("/assets").unwrap_or(path) {
        "/site.css" => (
            [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
            SITE_CSS,
        )
            .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

pub async fn api_projects(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.list_projects().to_vec())
}

pub async fn api_project(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.catalog.find_project_by_slug(&slug) {
        Some(project) => Json(project.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("Project not found: {}", slug) })),
        )
            .into_response(),
    }
}
