use pinocchio::{
    account_info::AccountInfo, msg, program_error::ProgramError, pubkey::Pubkey, ProgramResult,
};

use crate::instruction::{
    self, expect_empty, AddContributionRewardData, CreateProjectData, IdeaPadInstruction,
};

// Entrypoint macro
#[cfg(not(feature = "no-entrypoint"))]
pinocchio::program_entrypoint!(process_instruction);

#[inline(always)]
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if *program_id != crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    // Host builds also take the bincode wire form
    #[cfg(feature = "std")]
    {
        if let Some(wire_ix) = instruction::wire::IdeaPadInstruction::decode(instruction_data) {
            return dispatch_wire_instruction(accounts, &wire_ix);
        }
    }

    let (disc, payload) = instruction_data
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;

    match IdeaPadInstruction::try_from(disc)? {
        IdeaPadInstruction::Initialize => {
            msg!("Instruction: Initialize");
            expect_empty(payload)?;
            instruction::initialize::process_initialize(accounts)
        }
        IdeaPadInstruction::CreateProject => {
            msg!("Instruction: CreateProject");
            let args = CreateProjectData::parse(payload)?;
            instruction::create_project::process_create_project(accounts, args)
        }
        IdeaPadInstruction::AddContributionReward => {
            msg!("Instruction: AddContributionReward");
            let args = AddContributionRewardData::parse(payload)?;
            instruction::add_contribution_reward::process_add_contribution_reward(accounts, args)
        }
        IdeaPadInstruction::StartRaising => {
            msg!("Instruction: StartRaising");
            expect_empty(payload)?;
            instruction::start_raising::process_start_raising(accounts)
        }
        IdeaPadInstruction::MarkFunded => {
            msg!("Instruction: MarkFunded");
            expect_empty(payload)?;
            instruction::mark_funded::process_mark_funded(accounts)
        }
        IdeaPadInstruction::CompleteProject => {
            msg!("Instruction: CompleteProject");
            expect_empty(payload)?;
            instruction::complete_project::process_complete_project(accounts)
        }
    }
}

#[cfg(feature = "std")]
fn dispatch_wire_instruction(
    accounts: &[AccountInfo],
    ix: &instruction::wire::IdeaPadInstruction,
) -> ProgramResult {
    use instruction::wire::IdeaPadInstruction as Wire;

    match ix {
        Wire::Initialize => {
            msg!("Instruction: Initialize");
            instruction::initialize::process_initialize(accounts)
        }
        Wire::CreateProject { .. } => {
            msg!("Instruction: CreateProject");
            let args = ix
                .create_project_data()
                .ok_or(ProgramError::InvalidInstructionData)?;
            instruction::create_project::process_create_project(accounts, args)
        }
        Wire::AddContributionReward { .. } => {
            msg!("Instruction: AddContributionReward");
            let args = ix
                .add_contribution_reward_data()
                .ok_or(ProgramError::InvalidInstructionData)?;
            instruction::add_contribution_reward::process_add_contribution_reward(accounts, args)
        }
        Wire::StartRaising => {
            msg!("Instruction: StartRaising");
            instruction::start_raising::process_start_raising(accounts)
        }
        Wire::MarkFunded => {
            msg!("Instruction: MarkFunded");
            instruction::mark_funded::process_mark_funded(accounts)
        }
        Wire::CompleteProject => {
            msg!("Instruction: CompleteProject");
            instruction::complete_project::process_complete_project(accounts)
        }
    }
}
