use crate::profile::domain::entities::{Skill, SkillCategory};

#[derive(Debug, Clone)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub title: &'static str,
    pub skills: Vec<Skill>,
}

/// Pure grouping for the about view: categories come out in the fixed
/// display order, skills keep their arrival order within a category, and
/// categories with no skills are omitted entirely (never rendered empty).
pub fn group_by_category(skills: &[Skill]) -> Vec<SkillGroup> {
    SkillCategory::DISPLAY_ORDER
        .iter()
        .filter_map(|&category| {
            let members: Vec<Skill> = skills
                .iter()
                .filter(|skill| skill.category == category)
                .cloned()
                .collect();

            if members.is_empty() {
                None
            } else {
                Some(SkillGroup {
                    category,
                    title: category.label(),
                    skills: members,
                })
            }
        })
        .collect()
}
