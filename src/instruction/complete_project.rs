use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    sysvars::{clock::Clock, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;

use crate::helpers::{load_authorized_project, set_project};

/// Funded -> Complete, once the redemption timestamp (if any) has passed.
pub fn process_complete_project(accounts: &[AccountInfo]) -> ProgramResult {
    let [authority_info, project_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let mut project = load_authorized_project(authority_info, project_info)?;
    let clock = Clock::get()?;
    project.complete(clock.unix_timestamp)?;
    set_project(project_info, &project)?;

    log!("complete_project: completed_at={}", clock.unix_timestamp);
    Ok(())
}
