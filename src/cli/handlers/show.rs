use anyhow::{Result, bail};
use colored::Colorize;

use super::CommandContext;
use super::utils::format_category;
use crate::model::Project;

pub fn handle_show(ctx: &CommandContext, slug: String, json: bool) -> Result<()> {
    let catalog = ctx.catalog()?;
    let Some(project) = catalog.find_project_by_slug(&slug) else {
        bail!("Project not found: {}", slug);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(project)?);
    } else {
        print_project(project);
    }
    Ok(())
}

fn print_project(project: &Project) {
    println!("{} {}", project.slug.cyan().bold(), project.title.bold());
    println!("Category: {}", format_category(project.category));
    println!("Year:     {}", project.year);
    println!("Path:     {}", project.href());
    if !project.tech_stack.is_empty() {
        println!("Stack:    {}", project.tech_stack.join(", ").magenta());
    }
    if let Some(ref source) = project.source_code {
        println!("Source:   {}", source.underline());
    }

    println!("\n{}", project.long_description);

    if !project.features.is_empty() {
        println!("\n{}", "Key features".bold());
        for feature in &project.features {
            println!("  • {}", feature);
        }
    }

    if let Some(ref impact) = project.impact {
        println!("\n{}", "Impact".bold());
        println!("  {}", impact);
    }
}
