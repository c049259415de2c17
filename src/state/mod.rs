pub mod contribution_reward; // RewardType, ContributionReward
pub mod project;             // ProjectState, ProjectConfig, Project

// Re-export the types so everyone can `use crate::state::{...}`.
pub use contribution_reward::{ContributionReward, RewardType};
pub use project::{Project, ProjectConfig, ProjectState};
