use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_certificates(ctx: &CommandContext, json: bool) -> Result<()> {
    let catalog = ctx.catalog()?;
    let certificates = catalog.list_certificates();

    if json {
        println!("{}", serde_json::to_string_pretty(certificates)?);
        return Ok(());
    }

    for certificate in certificates {
        println!(
            "{} {} {}",
            certificate.title.bold(),
            format!("({})", certificate.issuer).dimmed(),
            certificate.date.cyan()
        );
        if let Some(ref url) = certificate.credential_url {
            println!("  {}", url.underline());
        }
    }
    Ok(())
}
