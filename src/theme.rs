//! Light/dark theme preference.
//!
//! The preference is persisted client-side in the `portfolio-theme` cookie.
//! [`ThemeStore`] is created per request from the incoming headers and handed
//! to the views explicitly.

use std::{fmt, str::FromStr};

use axum::http::{HeaderMap, header};
use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

pub const THEME_COOKIE: &str = "portfolio-theme";

/// One year, in seconds.
const COOKIE_MAX_AGE: u32 = 31_536_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(FolioError::Validation(format!("Invalid theme: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeStore {
    mode: ThemeMode,
}

impl ThemeStore {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Reads the persisted preference, falling back to `default` when the
    /// cookie is missing or holds an unknown value.
    pub fn from_headers(headers: &HeaderMap, default: ThemeMode) -> Self {
        let mode = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(cookie_value)
            .and_then(|value| value.parse().ok())
            .unwrap_or(default);
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// `Set-Cookie` value persisting the current mode.
    pub fn persist_cookie(&self) -> String {
        format!(
            "{}={}; Path=/; Max-Age={}; SameSite=Lax",
            THEME_COOKIE, self.mode, COOKIE_MAX_AGE
        )
    }

    /// Label for the toggle control.
    pub fn toggle_label(&self) -> String {
        format!("Switch to {} mode", self.mode.toggled())
    }
}

fn cookie_value(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name.trim() == THEME_COOKIE).then(|| value.trim())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_defaults_without_cookie() {
        let store = ThemeStore::from_headers(&HeaderMap::new(), ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_reads_persisted_preference() {
        let headers = headers_with_cookie("session=abc; portfolio-theme=light; other=1");
        let store = ThemeStore::from_headers(&headers, ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_invalid_cookie_falls_back_to_default() {
        let headers = headers_with_cookie("portfolio-theme=sepia");
        let store = ThemeStore::from_headers(&headers, ThemeMode::Light);
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let mut store = ThemeStore::new(ThemeMode::Dark);
        assert_eq!(store.toggle_label(), "Switch to light mode");
        assert_eq!(store.toggle(), ThemeMode::Light);
        assert_eq!(
            store.persist_cookie(),
            "portfolio-theme=light; Path=/; Max-Age=31536000; SameSite=Lax"
        );
        assert_eq!(store.toggle(), ThemeMode::Dark);
    }
}
