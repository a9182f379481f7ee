mod certificates;
mod check;
mod contact;
mod projects;
mod serve;
mod show;
mod skills;
mod utils;

pub use certificates::handle_certificates;
pub use check::handle_check;
pub use contact::handle_contact;
pub use projects::handle_projects;
pub use serve::handle_serve;
pub use show::handle_show;
pub use skills::handle_skills;

use crate::catalog::Catalog;
use crate::config::FolioConfig;
use crate::error::Result;
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: FolioConfig,
    pub root: PathBuf,
}

impl CommandContext {
    pub fn new(config: FolioConfig, root: PathBuf) -> Self {
        Self { config, root }
    }

    /// The configured catalog, validated.
    pub fn catalog(&self) -> Result<Catalog> {
        Catalog::load_or_builtin(self.config.content_path(&self.root).as_deref())
    }
}
