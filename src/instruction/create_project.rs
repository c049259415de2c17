use pinocchio::{
    account_info::AccountInfo,
    instruction::Seed,
    program_error::ProgramError,
    pubkey::find_program_address,
    ProgramResult,
};
use pinocchio_log::log;

use crate::{
    helpers::{check_system_program, check_uninitialized, create_pda_account, set_project, PROJECT_SEED},
    instruction::CreateProjectData,
    state::Project,
    ID,
};

pub fn process_create_project(accounts: &[AccountInfo], args: CreateProjectData) -> ProgramResult {
    let [payer_info, authority_info, project_info, system_program_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !payer_info.is_signer() || !authority_info.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    check_system_program(system_program_info)?;

    // Seed length is checked before derivation; oversized seeds can't form a PDA.
    Project::validate_seed(args.seed)?;

    let (expected_project, bump) = find_program_address(&[PROJECT_SEED, args.seed], &ID);
    if project_info.key() != &expected_project {
        return Err(ProgramError::InvalidSeeds);
    }
    check_uninitialized(project_info)?;

    let mut project = Project::default();
    project.init(
        *authority_info.key(),
        args.redemption_stamp,
        args.min_stake_amount,
        args.seed,
        bump,
    )?;

    let bump_seed = [bump];
    let seeds = [
        Seed::from(PROJECT_SEED),
        Seed::from(args.seed),
        Seed::from(&bump_seed),
    ];
    create_pda_account(payer_info, project_info, Project::space(args.seed), &seeds)?;
    set_project(project_info, &project)?;

    log!(
        "create_project: seed_len={} min_stake={}",
        args.seed.len(),
        args.min_stake_amount
    );
    Ok(())
}
