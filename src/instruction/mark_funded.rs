use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};
use pinocchio_log::log;

use crate::helpers::{load_authorized_project, set_project};

pub fn process_mark_funded(accounts: &[AccountInfo]) -> ProgramResult {
    let [authority_info, project_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let mut project = load_authorized_project(authority_info, project_info)?;
    project.mark_funded()?;
    set_project(project_info, &project)?;

    log!("mark_funded: state=Funded");
    Ok(())
}
