/// PDA prefix for project accounts: `["project", seed]`.
pub const PROJECT_SEED: &[u8] = b"project";
/// PDA prefix for reward accounts: `["contribution_reward", project, [index]]`.
pub const CONTRIBUTION_REWARD_SEED: &[u8] = b"contribution_reward";

// A single PDA seed can't exceed 32 bytes, so neither can the project seed.
pub const MAX_SEED_LEN: usize = 32;

// First byte of every account this program owns.
pub const PROJECT_DISCRIMINATOR: u8 = 1;
pub const CONTRIBUTION_REWARD_DISCRIMINATOR: u8 = 2;
