use std::path::Path;

use super::Catalog;
use crate::error::Result;

impl Catalog {
    /// Reads a catalog from a YAML file and validates it.
    ///
    /// A file that parses but violates an integrity rule is rejected as a
    /// whole.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let catalog: Catalog = serde_yaml::from_str(content)?;
        catalog.validate()?;
        tracing::debug!(
            projects = catalog.projects.len(),
            skills = catalog.skills.len(),
            certificates = catalog.certificates.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// The YAML file at `path` when given, otherwise the built-in content.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let catalog = Self::builtin();
                catalog.validate()?;
                Ok(catalog)
            }
        }
    }
}
