use pinocchio::{
    account_info::AccountInfo,
    instruction::Seed,
    program_error::ProgramError,
    pubkey::find_program_address,
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_token::state::Mint;

use crate::{
    error::IdeaPadError,
    helpers::{
        check_system_program, check_uninitialized, create_pda_account, load_authorized_project,
        set_contribution_reward, set_project, CONTRIBUTION_REWARD_SEED,
    },
    instruction::AddContributionRewardData,
    state::{ContributionReward, ProjectState},
    ID,
};

pub fn process_add_contribution_reward(
    accounts: &[AccountInfo],
    args: AddContributionRewardData,
) -> ProgramResult {
    let [payer_info, authority_info, project_info, reward_info, mint_info, system_program_info, _rest @ ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !payer_info.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    check_system_program(system_program_info)?;

    let mut project = load_authorized_project(authority_info, project_info)?;
    if project.state != ProjectState::Draft {
        return Err(IdeaPadError::InvalidProjectState.into());
    }

    // Owner and length are checked by the token crate.
    if !Mint::from_account_info(mint_info)?.is_initialized() {
        return Err(ProgramError::UninitializedAccount);
    }

    let index = project.contribution_reward_count;
    let index_seed = [index];
    let (expected_reward, bump) = find_program_address(
        &[CONTRIBUTION_REWARD_SEED, project_info.key().as_ref(), index_seed.as_ref()],
        &ID,
    );
    if reward_info.key() != &expected_reward {
        return Err(ProgramError::InvalidSeeds);
    }
    check_uninitialized(reward_info)?;

    let reward = ContributionReward::new(
        args.reward_type,
        *project_info.key(),
        *mint_info.key(),
        args.cost,
        args.quantity,
        bump,
    )?;
    project.increment_contribution_reward_count()?;

    let bump_seed = [bump];
    let seeds = [
        Seed::from(CONTRIBUTION_REWARD_SEED),
        Seed::from(project_info.key()),
        Seed::from(&index_seed),
        Seed::from(&bump_seed),
    ];
    create_pda_account(payer_info, reward_info, ContributionReward::LEN, &seeds)?;
    set_contribution_reward(reward_info, &reward)?;
    set_project(project_info, &project)?;

    log!("add_contribution_reward: index={} cost={}", index, args.cost);
    Ok(())
}
