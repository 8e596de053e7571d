pub mod fetch_education;
pub mod fetch_home_skills;
pub mod fetch_skills;

pub use fetch_education::{FetchEducationError, FetchEducationUseCase, IFetchEducationUseCase};
pub use fetch_home_skills::{
    FetchHomeSkillsError, FetchHomeSkillsUseCase, IFetchHomeSkillsUseCase,
};
pub use fetch_skills::{FetchSkillsError, FetchSkillsUseCase, IFetchSkillsUseCase};
