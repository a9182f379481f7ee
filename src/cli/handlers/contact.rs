use std::io::{self, Read};

use anyhow::{Result, bail};
use colored::Colorize;

use super::CommandContext;
use crate::contact::{ContactFlow, ContactForm, delivery_from_settings};

/// Message body from the argument, or stdin when it is `-`.
fn resolve_message(message: String) -> Result<String> {
    if message == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return Ok(content.trim().to_string());
    }
    Ok(message)
}

pub fn handle_contact(
    ctx: &CommandContext,
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<()> {
    let form = ContactForm::new(&name, &email, &subject, &resolve_message(message)?);
    let errors = form.field_errors();
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("{} {}: {}", "✗".red(), error.field, error.message);
        }
        bail!("Contact form is invalid");
    }

    let recipient = match ctx.config.contact.recipient_name.clone() {
        Some(name) => name,
        None => ctx.catalog()?.profile().name.clone(),
    };
    let flow = ContactFlow::new(delivery_from_settings(&ctx.config.contact), recipient);

    let submission = tokio::runtime::Runtime::new()?.block_on(flow.submit(form))?;
    let delivered = submission.succeeded();
    let notice = submission.notice;
    if delivered {
        println!("{} {}", notice.title.green().bold(), notice.description);
        Ok(())
    } else {
        eprintln!("{} {}", notice.title.red().bold(), notice.description);
        bail!("Message was not delivered");
    }
}
