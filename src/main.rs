use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use folio::cli::handlers::{self, CommandContext};
use folio::cli::{Cli, Commands};
use folio::config::{ContactOverrides, FolioConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    folio::logging::init(cli.verbose, cli.log_file.map(PathBuf::from));

    let cwd = std::env::current_dir()?;
    let explicit = cli.config.as_deref().map(Path::new);
    let (mut config, root) = FolioConfig::discover(explicit, &cwd)
        .context("Failed to load folio configuration")?;

    match cli.command {
        Commands::Serve { host, port, email } => {
            config.contact.apply(ContactOverrides::from(email));
            handlers::handle_serve(CommandContext::new(config, root), host, port)
        }
        Commands::Projects { category, json } => handlers::handle_projects(
            &CommandContext::new(config, root),
            category.map(Into::into),
            json,
        ),
        Commands::Show { slug, json } => {
            handlers::handle_show(&CommandContext::new(config, root), slug, json)
        }
        Commands::Skills { json } => handlers::handle_skills(&CommandContext::new(config, root), json),
        Commands::Certificates { json } => {
            handlers::handle_certificates(&CommandContext::new(config, root), json)
        }
        Commands::Check => handlers::handle_check(&CommandContext::new(config, root)),
        Commands::Contact {
            name,
            email,
            subject,
            message,
            credentials,
        } => {
            config.contact.apply(ContactOverrides::from(credentials));
            handlers::handle_contact(
                &CommandContext::new(config, root),
                name,
                email,
                subject,
                message,
            )
        }
    }
}
