use pinocchio::{program_error::ProgramError, pubkey::Pubkey, ProgramResult};
use shank::{ShankAccount, ShankType};

use crate::error::IdeaPadError;
use crate::helpers::{ByteReader, ByteWriter, CONTRIBUTION_REWARD_DISCRIMINATOR};

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankType)]
pub enum RewardType {
    /// Holder also receives every reward up to this one.
    Additive = 0,
    /// Holder receives only this reward.
    Exclusive = 1,
}

impl TryFrom<u8> for RewardType {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RewardType::Additive),
            1 => Ok(RewardType::Exclusive),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

/// A reward tier of a project, a PDA at `["contribution_reward", project, [index]]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankAccount)]
pub struct ContributionReward {
    pub reward_type: RewardType,
    pub project: Pubkey,
    /// Collection whose NFTs grant access to the reward.
    pub reward_collection_mint: Pubkey,
    pub cost: u64,
    /// `None` means unlimited.
    pub quantity: Option<u32>,
    pub bump: u8,
}

impl ContributionReward {
    pub const LEN: usize = 1 + 1 + 32 + 32 + 8 + (1 + 4) + 1;

    pub fn new(
        reward_type: RewardType,
        project: Pubkey,
        reward_collection_mint: Pubkey,
        cost: u64,
        quantity: Option<u32>,
        bump: u8,
    ) -> Result<Self, ProgramError> {
        if cost == 0 {
            return Err(IdeaPadError::InvalidRewardCost.into());
        }
        if quantity == Some(0) {
            return Err(IdeaPadError::InvalidRewardQuantity.into());
        }
        Ok(Self {
            reward_type,
            project,
            reward_collection_mint,
            cost,
            quantity,
            bump,
        })
    }

    pub fn serialize(&self, dst: &mut [u8]) -> ProgramResult {
        let mut w = ByteWriter::new(dst);
        w.write_u8(CONTRIBUTION_REWARD_DISCRIMINATOR)?;
        w.write_u8(self.reward_type as u8)?;
        w.write_bytes(&self.project)?;
        w.write_bytes(&self.reward_collection_mint)?;
        w.write_u64(self.cost)?;
        w.write_fixed_option_u32(self.quantity)?;
        w.write_u8(self.bump)
    }

    pub fn deserialize(src: &[u8]) -> Result<Self, ProgramError> {
        Self::read(&mut ByteReader::new(src)).map_err(|_| ProgramError::InvalidAccountData)
    }

    fn read(r: &mut ByteReader) -> Result<Self, ProgramError> {
        if r.read_u8()? != CONTRIBUTION_REWARD_DISCRIMINATOR {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(Self {
            reward_type: RewardType::try_from(r.read_u8()?)?,
            project: r.read_pubkey()?,
            reward_collection_mint: r.read_pubkey()?,
            cost: r.read_u64()?,
            quantity: r.read_fixed_option_u32()?,
            bump: r.read_u8()?,
        })
    }
}
