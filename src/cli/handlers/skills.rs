use anyhow::Result;

use super::CommandContext;
use super::utils::{print_heading, print_skill_line};
use crate::catalog::SkillGroups;
use crate::model::Skill;

pub fn handle_skills(ctx: &CommandContext, json: bool) -> Result<()> {
    let catalog = ctx.catalog()?;
    let groups = SkillGroups::partition(catalog.list_skills());

    if json {
        let value = serde_json::json!({
            "technical": groups.technical,
            "soft": groups.soft,
            "languages": groups.languages,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let sections: [(&str, &[&Skill]); 3] = [
        ("Technical Skills", &groups.technical),
        ("Soft Skills", &groups.soft),
        ("Languages", &groups.languages),
    ];
    let mut first = true;
    for (heading, skills) in sections {
        if skills.is_empty() {
            continue;
        }
        if !first {
            println!();
        }
        first = false;
        print_heading(heading);
        for skill in skills {
            print_skill_line(skill);
        }
    }
    Ok(())
}
