use anyhow::{Result, bail};
use colored::Colorize;

use super::CommandContext;
use crate::error::FolioError;

pub fn handle_check(ctx: &CommandContext) -> Result<()> {
    let source = match ctx.config.content_path(&ctx.root) {
        Some(path) => path.display().to_string(),
        None => "built-in content".to_string(),
    };

    match ctx.catalog() {
        Ok(catalog) => {
            println!(
                "{} {} ({} projects, {} skills, {} certificates)",
                "✓".green(),
                source,
                catalog.list_projects().len(),
                catalog.list_skills().len(),
                catalog.list_certificates().len()
            );
            let credentials = ctx.config.contact.credentials();
            match credentials {
                Ok(_) => println!("{} contact delivery configured", "✓".green()),
                Err(e) => println!("{} {}", "!".yellow(), e),
            }
            Ok(())
        }
        Err(FolioError::Catalog(violations)) => {
            println!("{} {}", "✗".red(), source);
            for violation in &violations {
                println!("  {} {}", "-".red(), violation);
            }
            bail!("{} catalog problem(s) found", violations.len());
        }
        Err(e) => Err(e.into()),
    }
}
