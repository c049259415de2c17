use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    program_error::ProgramError,
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_system::instructions::{Allocate, Assign, CreateAccount, Transfer};

use crate::error::IdeaPadError;
use crate::state::{ContributionReward, Project};
use crate::ID;

pub fn check_system_program(system_program_info: &AccountInfo) -> ProgramResult {
    if system_program_info.key() != &pinocchio_system::ID {
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

// A PDA is free to create while it is an empty system account, funded or not.
pub fn check_uninitialized(account_info: &AccountInfo) -> ProgramResult {
    if account_info.data_len() != 0 || *account_info.owner() != pinocchio_system::ID {
        return Err(ProgramError::AccountAlreadyInitialized);
    }
    if !account_info.is_writable() {
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(())
}

/// Allocate `space` bytes at a PDA owned by this program, rent-exempt, paid by `payer`.
///
/// An address that already holds lamports can't take `CreateAccount`, so it is
/// topped up to the rent-exempt minimum and then allocated and assigned in place.
pub fn create_pda_account(
    payer_info: &AccountInfo,
    account_info: &AccountInfo,
    space: usize,
    seeds: &[Seed],
) -> ProgramResult {
    let rent = Rent::get()?;
    let required = rent.minimum_balance(space);
    let current = account_info.lamports();

    if current == 0 {
        return CreateAccount {
            from: payer_info,
            to: account_info,
            lamports: required,
            space: space as u64,
            owner: &ID,
        }
        .invoke_signed(&[Signer::from(seeds)]);
    }

    let shortfall = required.saturating_sub(current);
    if shortfall > 0 {
        Transfer {
            from: payer_info,
            to: account_info,
            lamports: shortfall,
        }
        .invoke()?;
    }

    Allocate {
        account: account_info,
        space: space as u64,
    }
    .invoke_signed(&[Signer::from(seeds)])?;

    Assign {
        account: account_info,
        owner: &ID,
    }
    .invoke_signed(&[Signer::from(seeds)])
}

// Load project state from account via manual deserialize
pub fn get_project(project_info: &AccountInfo) -> Result<Project, ProgramError> {
    if *project_info.owner() != ID {
        return Err(ProgramError::InvalidAccountOwner);
    }
    let data = project_info.try_borrow_data()?;
    Project::deserialize(&data)
}

// Write project state back into account via manual serialize
pub fn set_project(project_info: &AccountInfo, project: &Project) -> ProgramResult {
    let mut data = project_info.try_borrow_mut_data()?;
    project.serialize(&mut data)
}

pub fn set_contribution_reward(
    reward_info: &AccountInfo,
    reward: &ContributionReward,
) -> ProgramResult {
    let mut data = reward_info.try_borrow_mut_data()?;
    reward.serialize(&mut data)
}

/// Loads a writable project whose stored authority signed this instruction.
pub fn load_authorized_project(
    authority_info: &AccountInfo,
    project_info: &AccountInfo,
) -> Result<Project, ProgramError> {
    if !authority_info.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    if !project_info.is_writable() {
        return Err(ProgramError::InvalidAccountData);
    }

    let project = get_project(project_info)?;
    if project.authority != *authority_info.key() {
        return Err(IdeaPadError::Unauthorized.into());
    }
    Ok(project)
}
