use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use super::{program_id, project_pda, reward_pda};

fn push_option_i64(data: &mut Vec<u8>, value: Option<i64>) {
    match value {
        Some(v) => {
            data.push(1);
            data.extend_from_slice(&v.to_le_bytes());
        }
        None => data.push(0),
    }
}

fn push_option_u32(data: &mut Vec<u8>, value: Option<u32>) {
    match value {
        Some(v) => {
            data.push(1);
            data.extend_from_slice(&v.to_le_bytes());
        }
        None => data.push(0),
    }
}

pub fn initialize() -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: vec![],
        data: vec![0],
    }
}

pub fn create_project_data(seed: &[u8], redemption_stamp: Option<i64>, min_stake_amount: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(1 + 1 + seed.len() + 9 + 8);
    data.push(1);
    data.push(u8::try_from(seed.len()).unwrap());
    data.extend_from_slice(seed);
    push_option_i64(&mut data, redemption_stamp);
    data.extend_from_slice(&min_stake_amount.to_le_bytes());
    data
}

pub fn create_project(
    payer: &Pubkey,
    authority: &Pubkey,
    seed: &[u8],
    redemption_stamp: Option<i64>,
    min_stake_amount: u64,
) -> Instruction {
    create_project_at(payer, authority, &project_pda(seed).0, seed, redemption_stamp, min_stake_amount)
}

// Same as `create_project` but lets the caller pick the project address.
pub fn create_project_at(
    payer: &Pubkey,
    authority: &Pubkey,
    project: &Pubkey,
    seed: &[u8],
    redemption_stamp: Option<i64>,
    min_stake_amount: u64,
) -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*project, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: create_project_data(seed, redemption_stamp, min_stake_amount),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn add_contribution_reward(
    payer: &Pubkey,
    authority: &Pubkey,
    project: &Pubkey,
    index: u8,
    mint: &Pubkey,
    reward_type: u8,
    cost: u64,
    quantity: Option<u32>,
) -> Instruction {
    let mut data = Vec::with_capacity(1 + 1 + 8 + 5);
    data.push(2);
    data.push(reward_type);
    data.extend_from_slice(&cost.to_le_bytes());
    push_option_u32(&mut data, quantity);

    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*project, false),
            AccountMeta::new(reward_pda(project, index).0, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

fn lifecycle(disc: u8, authority: &Pubkey, project: &Pubkey) -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*project, false),
        ],
        data: vec![disc],
    }
}

pub fn start_raising(authority: &Pubkey, project: &Pubkey) -> Instruction {
    lifecycle(3, authority, project)
}

pub fn mark_funded(authority: &Pubkey, project: &Pubkey) -> Instruction {
    lifecycle(4, authority, project)
}

pub fn complete_project(authority: &Pubkey, project: &Pubkey) -> Instruction {
    lifecycle(5, authority, project)
}
