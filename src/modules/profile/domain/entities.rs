use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed category set the site renders. The API may grow new values before
/// the client does, so anything unrecognized buckets to `Tools` instead of
/// failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Mobile,
    Ai,
    Tools,
}

impl From<String> for SkillCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "frontend" => SkillCategory::Frontend,
            "backend" => SkillCategory::Backend,
            "mobile" => SkillCategory::Mobile,
            "ai" => SkillCategory::Ai,
            _ => SkillCategory::Tools,
        }
    }
}

impl SkillCategory {
    /// Display order is fixed; it never follows arrival order.
    pub const DISPLAY_ORDER: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Mobile,
        SkillCategory::Ai,
        SkillCategory::Tools,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Mobile => "Mobile",
            SkillCategory::Ai => "AI / Automation",
            SkillCategory::Tools => "DevOps / Workflow",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    #[serde(default)]
    pub icon_url: String,
    /// Proficiency score from 0-100, drives the progress bar width.
    #[serde(default)]
    pub proficiency_level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub start_year: u16,
    pub end_year: Option<u16>,
    #[serde(default)]
    pub description: String,
}

impl EducationEntry {
    /// "2018 - 2022", or "2018 - Present" while the entry is ongoing.
    pub fn period_label(&self) -> String {
        match self.end_year {
            Some(end) => format!("{} - {}", self.start_year, end),
            None => format!("{} - Present", self.start_year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_deserialize_exactly() {
        let skill: Skill = serde_json::from_str(
            r#"{
                "id": "7f1a2b3c-4d5e-6f70-8192-a3b4c5d6e7f8",
                "name": "React",
                "category": "frontend",
                "icon_url": "",
                "proficiency_level": 95
            }"#,
        )
        .unwrap();

        assert_eq!(skill.category, SkillCategory::Frontend);
        assert_eq!(skill.proficiency_level, 95);
    }

    #[test]
    fn unrecognized_category_buckets_to_tools() {
        let skill: Skill = serde_json::from_str(
            r#"{
                "id": "7f1a2b3c-4d5e-6f70-8192-a3b4c5d6e7f8",
                "name": "Kubernetes",
                "category": "cloud-native",
                "proficiency_level": 60
            }"#,
        )
        .unwrap();

        assert_eq!(skill.category, SkillCategory::Tools);
    }

    #[test]
    fn category_serializes_back_to_the_wire_value() {
        let json = serde_json::to_string(&SkillCategory::Ai).unwrap();
        assert_eq!(json, r#""ai""#);
    }

    #[test]
    fn ongoing_education_renders_present() {
        let entry = EducationEntry {
            id: Uuid::new_v4(),
            degree: "BSc Computer Science".to_string(),
            institution: "State University".to_string(),
            start_year: 2021,
            end_year: None,
            description: String::new(),
        };

        assert_eq!(entry.period_label(), "2021 - Present");
    }

    #[test]
    fn finished_education_renders_both_years() {
        let entry = EducationEntry {
            id: Uuid::new_v4(),
            degree: "MSc Software Engineering".to_string(),
            institution: "State University".to_string(),
            start_year: 2016,
            end_year: Some(2018),
            description: "Thesis on distributed tracing".to_string(),
        };

        assert_eq!(entry.period_label(), "2016 - 2018");
    }
}
