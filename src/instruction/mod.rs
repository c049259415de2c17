use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

use crate::helpers::ByteReader;
use crate::state::RewardType;

pub mod initialize;
pub use initialize::*;

pub mod create_project;
pub use create_project::*;

pub mod add_contribution_reward;
pub use add_contribution_reward::*;

pub mod start_raising;
pub use start_raising::*;

pub mod mark_funded;
pub use mark_funded::*;

pub mod complete_project;
pub use complete_project::*;

#[cfg(feature = "std")]
pub mod wire;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankInstruction)]
pub enum IdeaPadInstruction {
    /// No-op liveness check; takes no accounts.
    Initialize,

    #[account(0, writable, signer, name = "payer", desc = "Funds the project account")]
    #[account(1, signer, name = "authority", desc = "Project authority")]
    #[account(2, writable, name = "project", desc = "Project PDA [\"project\", seed]")]
    #[account(3, name = "system_program", desc = "System program")]
    CreateProject,

    #[account(0, writable, signer, name = "payer", desc = "Funds the reward account")]
    #[account(1, signer, name = "authority", desc = "Project authority")]
    #[account(2, writable, name = "project", desc = "Project in Draft")]
    #[account(3, writable, name = "contribution_reward", desc = "Reward PDA [\"contribution_reward\", project, index]")]
    #[account(4, name = "reward_collection_mint", desc = "Initialized SPL mint of the reward collection")]
    #[account(5, name = "system_program", desc = "System program")]
    AddContributionReward,

    #[account(0, signer, name = "authority", desc = "Project authority")]
    #[account(1, writable, name = "project", desc = "Project in Draft")]
    StartRaising,

    #[account(0, signer, name = "authority", desc = "Project authority")]
    #[account(1, writable, name = "project", desc = "Project in Raising")]
    MarkFunded,

    #[account(0, signer, name = "authority", desc = "Project authority")]
    #[account(1, writable, name = "project", desc = "Project in Funded")]
    CompleteProject,
}

impl TryFrom<&u8> for IdeaPadInstruction {
    type Error = ProgramError;

    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match *value {
            0 => Ok(IdeaPadInstruction::Initialize),
            1 => Ok(IdeaPadInstruction::CreateProject),
            2 => Ok(IdeaPadInstruction::AddContributionReward),
            3 => Ok(IdeaPadInstruction::StartRaising),
            4 => Ok(IdeaPadInstruction::MarkFunded),
            5 => Ok(IdeaPadInstruction::CompleteProject),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

/// CreateProject payload: `seed_len u8 | seed | Option<i64> | u64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreateProjectData<'a> {
    pub seed: &'a [u8],
    pub redemption_stamp: Option<i64>,
    pub min_stake_amount: u64,
}

impl<'a> CreateProjectData<'a> {
    pub fn parse(data: &'a [u8]) -> Result<Self, ProgramError> {
        let mut r = ByteReader::new(data);
        let seed_len = r.read_u8()? as usize;
        let seed = r.read_bytes(seed_len)?;
        let redemption_stamp = r.read_option_i64()?;
        let min_stake_amount = r.read_u64()?;
        r.finish()?;

        Ok(Self {
            seed,
            redemption_stamp,
            min_stake_amount,
        })
    }
}

/// AddContributionReward payload: `reward_type u8 | cost u64 | Option<u32>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddContributionRewardData {
    pub reward_type: RewardType,
    pub cost: u64,
    pub quantity: Option<u32>,
}

impl AddContributionRewardData {
    pub fn parse(data: &[u8]) -> Result<Self, ProgramError> {
        let mut r = ByteReader::new(data);
        let reward_type = RewardType::try_from(r.read_u8()?)?;
        let cost = r.read_u64()?;
        let quantity = r.read_option_u32()?;
        r.finish()?;

        Ok(Self {
            reward_type,
            cost,
            quantity,
        })
    }
}

/// Instructions without a payload reject any trailing bytes.
pub fn expect_empty(payload: &[u8]) -> Result<(), ProgramError> {
    ByteReader::new(payload).finish()
}
