//! Bincode wire form of the instruction set, accepted by host (std) builds
//! ahead of the compact single-byte-discriminator format.

use serde::{Deserialize, Serialize};

use super::{AddContributionRewardData, CreateProjectData};
use crate::state::RewardType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireRewardType {
    Additive,
    Exclusive,
}

impl From<WireRewardType> for RewardType {
    fn from(w: WireRewardType) -> Self {
        match w {
            WireRewardType::Additive => RewardType::Additive,
            WireRewardType::Exclusive => RewardType::Exclusive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdeaPadInstruction {
    Initialize,
    CreateProject {
        seed: Vec<u8>,
        redemption_stamp: Option<i64>,
        min_stake_amount: u64,
    },
    AddContributionReward {
        reward_type: WireRewardType,
        cost: u64,
        quantity: Option<u32>,
    },
    StartRaising,
    MarkFunded,
    CompleteProject,
}

impl IdeaPadInstruction {
    /// Decodes `data` only if it is exactly one bincode-encoded instruction.
    pub fn decode(data: &[u8]) -> Option<Self> {
        let ix: Self = bincode::deserialize(data).ok()?;
        let consumed = bincode::serialized_size(&ix).ok()?;
        (consumed == data.len() as u64).then_some(ix)
    }

    pub fn create_project_data(&self) -> Option<CreateProjectData<'_>> {
        match self {
            IdeaPadInstruction::CreateProject {
                seed,
                redemption_stamp,
                min_stake_amount,
            } => Some(CreateProjectData {
                seed,
                redemption_stamp: *redemption_stamp,
                min_stake_amount: *min_stake_amount,
            }),
            _ => None,
        }
    }

    pub fn add_contribution_reward_data(&self) -> Option<AddContributionRewardData> {
        match *self {
            IdeaPadInstruction::AddContributionReward {
                reward_type,
                cost,
                quantity,
            } => Some(AddContributionRewardData {
                reward_type: reward_type.into(),
                cost,
                quantity,
            }),
            _ => None,
        }
    }
}
