use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::ContactOverrides;
use crate::model::ProjectCategory;

#[derive(Parser)]
#[command(name = "folio")]
#[command(
    author,
    version,
    about = "A server-rendered developer portfolio with a content catalog and contact form"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .folio.yml by default)
    #[arg(long, global = true, env = "FOLIO_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the portfolio site
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        #[command(flatten)]
        email: EmailArgs,
    },

    /// List projects in authored order
    #[command(visible_alias = "ls")]
    Projects {
        /// Only projects in this category
        #[arg(short, long, value_enum)]
        category: Option<ProjectCategoryArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a project by slug
    Show {
        /// Project slug, as used in /project/{slug}
        slug: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List skills grouped by category
    Skills {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List certificates
    Certificates {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the content catalog
    Check,

    /// Send a message through the contact form flow
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        /// Message body (use '-' to read from stdin)
        #[arg(short, long)]
        message: String,

        #[command(flatten)]
        credentials: EmailArgs,
    },
}

/// Email-delivery credentials, usually supplied through the environment.
#[derive(Args, Clone, Debug, Default)]
pub struct EmailArgs {
    /// Email service id
    #[arg(long, env = "FOLIO_EMAIL_SERVICE_ID", hide_env_values = true)]
    pub email_service_id: Option<String>,

    /// Email template id
    #[arg(long, env = "FOLIO_EMAIL_TEMPLATE_ID", hide_env_values = true)]
    pub email_template_id: Option<String>,

    /// Email service public key
    #[arg(long, env = "FOLIO_EMAIL_PUBLIC_KEY", hide_env_values = true)]
    pub email_public_key: Option<String>,
}

impl From<EmailArgs> for ContactOverrides {
    fn from(args: EmailArgs) -> Self {
        ContactOverrides {
            service_id: args.email_service_id,
            template_id: args.email_template_id,
            public_key: args.email_public_key,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ProjectCategoryArg {
    App,
    Ai,
    Web,
}

impl From<ProjectCategoryArg> for ProjectCategory {
    fn from(arg: ProjectCategoryArg) -> Self {
        match arg {
            ProjectCategoryArg::App => ProjectCategory::App,
            ProjectCategoryArg::Ai => ProjectCategory::Ai,
            ProjectCategoryArg::Web => ProjectCategory::Web,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["folio", "show", "quantum96", "--json"]).unwrap();
        match cli.command {
            Commands::Show { slug, json } => {
                assert_eq!(slug, "quantum96");
                assert!(json);
            }
            _ => panic!("expected show"),
        }
    }
}
