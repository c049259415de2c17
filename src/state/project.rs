use pinocchio::{program_error::ProgramError, pubkey::Pubkey, ProgramResult};
use shank::{ShankAccount, ShankType};

use crate::error::IdeaPadError;
use crate::helpers::{ByteReader, ByteWriter, MAX_SEED_LEN, PROJECT_DISCRIMINATOR};

/// Where a project sits in its funding lifecycle.
///
/// The only legal path is Draft -> Raising -> Funded -> Complete.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ShankType)]
pub enum ProjectState {
    #[default]
    Draft = 0,
    Raising = 1,
    Funded = 2,
    Complete = 3,
}

impl ProjectState {
    pub const fn next(self) -> Option<Self> {
        match self {
            ProjectState::Draft => Some(ProjectState::Raising),
            ProjectState::Raising => Some(ProjectState::Funded),
            ProjectState::Funded => Some(ProjectState::Complete),
            ProjectState::Complete => None,
        }
    }

    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }
}

impl TryFrom<u8> for ProjectState {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ProjectState::Draft),
            1 => Ok(ProjectState::Raising),
            2 => Ok(ProjectState::Funded),
            3 => Ok(ProjectState::Complete),
            _ => Err(ProgramError::InvalidAccountData),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ShankType)]
pub struct ProjectConfig {
    /// Unix timestamp before which the project can't complete.
    pub redemption_stamp: Option<i64>,
    /// Minimum lamports a single contribution must stake.
    pub min_stake_amount: u64,
}

/// Project account, a PDA at `["project", seed]`.
///
/// Layout (little-endian):
/// `disc u8 | state u8 | authority [32] | redemption_stamp (tag u8, i64) |
/// min_stake_amount u64 | raising_at (tag u8, i64) | contribution_reward_count u8 |
/// bump u8 | seed_len u8 | seed [seed_len]`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ShankAccount)]
pub struct Project {
    pub state: ProjectState,
    pub authority: Pubkey,
    pub config: ProjectConfig,
    pub raising_at: Option<i64>,
    /// Index of the next contribution reward PDA.
    pub contribution_reward_count: u8,
    pub bump: u8,
    pub seed_len: u8,
    pub seed: [u8; 32], // MAX_SEED_LEN; shank requires a literal length
}

impl Project {
    /// Bytes before the variable-length seed.
    pub const HEADER_LEN: usize = 1 + 1 + 32 + (1 + 8) + 8 + (1 + 8) + 1 + 1 + 1;

    pub fn init(
        &mut self,
        authority: Pubkey,
        redemption_stamp: Option<i64>,
        min_stake_amount: u64,
        seed: &[u8],
        bump: u8,
    ) -> ProgramResult {
        Self::validate_seed(seed)?;

        self.state = ProjectState::Draft;
        self.authority = authority;
        self.config = ProjectConfig {
            redemption_stamp,
            min_stake_amount,
        };
        self.raising_at = None;
        self.contribution_reward_count = 0;
        self.bump = bump;
        self.seed = [0u8; MAX_SEED_LEN];
        self.seed[..seed.len()].copy_from_slice(seed);
        self.seed_len = seed.len() as u8;
        Ok(())
    }

    pub fn validate_seed(seed: &[u8]) -> ProgramResult {
        if seed.is_empty() || seed.len() > MAX_SEED_LEN {
            return Err(IdeaPadError::InvalidSeed.into());
        }
        Ok(())
    }

    /// Exact account size for a project created with `seed`.
    pub const fn space(seed: &[u8]) -> usize {
        Self::HEADER_LEN + seed.len()
    }

    pub fn seed(&self) -> &[u8] {
        &self.seed[..self.seed_len as usize]
    }

    /// Bumps the reward counter and returns the new count.
    pub fn increment_contribution_reward_count(&mut self) -> Result<u8, ProgramError> {
        self.contribution_reward_count = self
            .contribution_reward_count
            .checked_add(1)
            .ok_or(IdeaPadError::NumericalOverflow)?;
        Ok(self.contribution_reward_count)
    }

    pub fn transition(&mut self, target: ProjectState) -> ProgramResult {
        if !self.state.can_transition_to(target) {
            return Err(IdeaPadError::InvalidStateTransition.into());
        }
        self.state = target;
        Ok(())
    }

    pub fn start_raising(&mut self, now: i64) -> ProgramResult {
        self.transition(ProjectState::Raising)?;
        self.raising_at = Some(now);
        Ok(())
    }

    pub fn mark_funded(&mut self) -> ProgramResult {
        self.transition(ProjectState::Funded)
    }

    pub fn complete(&mut self, now: i64) -> ProgramResult {
        if !self.state.can_transition_to(ProjectState::Complete) {
            return Err(IdeaPadError::InvalidStateTransition.into());
        }
        if let Some(stamp) = self.config.redemption_stamp {
            if now < stamp {
                return Err(IdeaPadError::RedemptionNotReached.into());
            }
        }
        self.state = ProjectState::Complete;
        Ok(())
    }

    pub fn serialize(&self, dst: &mut [u8]) -> ProgramResult {
        let mut w = ByteWriter::new(dst);
        w.write_u8(PROJECT_DISCRIMINATOR)?;
        w.write_u8(self.state as u8)?;
        w.write_bytes(&self.authority)?;
        w.write_fixed_option_i64(self.config.redemption_stamp)?;
        w.write_u64(self.config.min_stake_amount)?;
        w.write_fixed_option_i64(self.raising_at)?;
        w.write_u8(self.contribution_reward_count)?;
        w.write_u8(self.bump)?;
        w.write_u8(self.seed_len)?;
        w.write_bytes(self.seed())
    }

    pub fn deserialize(src: &[u8]) -> Result<Self, ProgramError> {
        Self::read(&mut ByteReader::new(src)).map_err(|_| ProgramError::InvalidAccountData)
    }

    fn read(r: &mut ByteReader) -> Result<Self, ProgramError> {
        if r.read_u8()? != PROJECT_DISCRIMINATOR {
            return Err(ProgramError::InvalidAccountData);
        }
        let state = ProjectState::try_from(r.read_u8()?)?;
        let authority = r.read_pubkey()?;
        let redemption_stamp = r.read_fixed_option_i64()?;
        let min_stake_amount = r.read_u64()?;
        let raising_at = r.read_fixed_option_i64()?;
        let contribution_reward_count = r.read_u8()?;
        let bump = r.read_u8()?;
        let seed_len = r.read_u8()?;
        if seed_len == 0 || seed_len as usize > MAX_SEED_LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        let mut seed = [0u8; MAX_SEED_LEN];
        seed[..seed_len as usize].copy_from_slice(r.read_bytes(seed_len as usize)?);

        Ok(Self {
            state,
            authority,
            config: ProjectConfig {
                redemption_stamp,
                min_stake_amount,
            },
            raising_at,
            contribution_reward_count,
            bump,
            seed_len,
            seed,
        })
    }
}
