//! Compiled-in portfolio content

mod profile;
mod projects;

pub use profile::{
    Channel, FocusArea, Skill, TimelineEntry, AFFILIATION, BIO, BOOT_MESSAGES, CHANNELS,
    FIRST_NAME, FOCUS_AREAS, LAST_NAME, NOT_FOUND_DIAGNOSTICS, ROLE, SKILLS, STATUS, TIMELINE,
};
pub use projects::{filter_projects, project_by_id, ContentBlock, Project, ProjectFilter, PROJECTS};
