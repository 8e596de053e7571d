pub mod skill_grouping;

pub use skill_grouping::{group_by_category, SkillGroup};
