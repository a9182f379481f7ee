use colored::{ColoredString, Colorize};

use crate::model::{ProjectCategory, Skill};

pub fn format_category(category: ProjectCategory) -> ColoredString {
    match category {
        ProjectCategory::App => category.label().green(),
        ProjectCategory::Ai => category.label().magenta(),
        ProjectCategory::Web => category.label().blue(),
    }
}

/// A ten-cell bar for a 0..=100 skill level.
pub fn format_level(level: u8) -> String {
    let filled = usize::from(level.min(100)).div_ceil(10);
    format!(
        "{}{} {:>3}%",
        "█".repeat(filled).cyan(),
        "░".repeat(10 - filled).dimmed(),
        level
    )
}

pub fn print_skill_line(skill: &Skill) {
    match skill.level {
        Some(level) => println!("  {:<24} {}", skill.name, format_level(level)),
        None => println!("  {}", skill.name),
    }
}

pub fn print_heading(text: &str) {
    println!("{}", text.bold().underline());
}
