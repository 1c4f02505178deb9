pub mod record;
pub mod validate;

pub use record::{
    description_bullets, EducationEntry, ExperienceEntry, PersonalInfo, Record, SkillCategory,
    Skills,
};
