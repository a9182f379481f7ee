use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::format_category;
use crate::model::{Project, ProjectCategory};

pub fn handle_projects(
    ctx: &CommandContext,
    category: Option<ProjectCategory>,
    json: bool,
) -> Result<()> {
    let catalog = ctx.catalog()?;
    let projects: Vec<&Project> = match category {
        Some(category) => catalog.projects_in(category),
        None => catalog.list_projects().iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("{}", "No projects found".dimmed());
        return Ok(());
    }

    for project in projects {
        println!(
            "{:<24} {} {} {}",
            project.slug.cyan(),
            format!("[{}]", format_category(project.category)),
            project.title.bold(),
            project.year.dimmed()
        );
    }
    Ok(())
}
