#![allow(dead_code)]

use solana_program_test::{ProgramTest, ProgramTestBanksClientExt};
use std::{env, path::Path};

pub use ideapad_programs::state::{ContributionReward, Project, ProjectState, RewardType};
pub use solana_program_test::{BanksClient, BanksClientError, ProgramTestContext};
pub use solana_sdk::{
    account::Account,
    instruction::{Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_program,
    transaction::{Transaction, TransactionError},
};

// Shared instruction builders matching the program's compact wire format
pub mod ix;

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(ideapad_programs::ID)
}

pub fn token_program_id() -> Pubkey {
    Pubkey::new_from_array(pinocchio_token::ID)
}

pub fn program_test() -> ProgramTest {
    let deploy_dir = format!("{}/target/deploy", env!("CARGO_MANIFEST_DIR"));
    env::set_var("BPF_OUT_DIR", &deploy_dir);
    let so_path = Path::new(&deploy_dir).join("ideapad_programs.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf`",
        so_path.display()
    );

    let mut pt = ProgramTest::default();
    pt.prefer_bpf(true);
    pt.set_compute_max_units(400_000);
    pt.add_upgradeable_program_to_genesis("ideapad_programs", &program_id());
    pt
}

/// SPL mint account data (82-byte layout).
pub fn mint_data(authority: &Pubkey, initialized: bool) -> Vec<u8> {
    let mut data = Vec::with_capacity(82);
    data.extend_from_slice(&1u32.to_le_bytes()); // mint_authority: Some
    data.extend_from_slice(authority.as_ref());
    data.extend_from_slice(&0u64.to_le_bytes()); // supply
    data.push(0); // decimals
    data.push(initialized as u8);
    data.extend_from_slice(&0u32.to_le_bytes()); // freeze_authority: None
    data.extend_from_slice(&[0u8; 32]);
    data
}

pub fn add_data_account(pt: &mut ProgramTest, address: &Pubkey, owner: &Pubkey, data: Vec<u8>) {
    pt.add_account(
        *address,
        Account {
            lamports: 1_461_600,
            data,
            owner: *owner,
            executable: false,
            rent_epoch: 0,
        },
    );
}

/// Genesis account holding an initialized SPL mint.
pub fn add_mint(pt: &mut ProgramTest, mint: &Pubkey, authority: &Pubkey) {
    add_data_account(pt, mint, &token_program_id(), mint_data(authority, true));
}

/// Empty system account holding `lamports`, e.g. a PDA someone funded early.
pub fn add_funded_address(pt: &mut ProgramTest, address: &Pubkey, lamports: u64) {
    pt.add_account(
        *address,
        Account {
            lamports,
            data: vec![],
            owner: system_program::id(),
            executable: false,
            rent_epoch: 0,
        },
    );
}

pub fn project_pda(seed: &[u8]) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"project", seed], &program_id())
}

pub fn reward_pda(project: &Pubkey, index: u8) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[b"contribution_reward", project.as_ref(), &[index]],
        &program_id(),
    )
}

pub async fn refresh_blockhash(ctx: &mut ProgramTestContext) {
    ctx.last_blockhash = ctx
        .banks_client
        .get_new_latest_blockhash(&ctx.last_blockhash)
        .await
        .unwrap();
}

/// Sign with the payer plus `signers` and submit on a fresh blockhash, so
/// repeating an identical instruction is never deduplicated.
pub async fn process(
    ctx: &mut ProgramTestContext,
    instructions: &[Instruction],
    signers: &[&Keypair],
) -> Result<(), BanksClientError> {
    refresh_blockhash(ctx).await;
    let mut all_signers: Vec<&Keypair> = vec![&ctx.payer];
    all_signers.extend_from_slice(signers);
    let tx = Transaction::new_signed_with_payer(
        instructions,
        Some(&ctx.payer.pubkey()),
        all_signers.as_slice(),
        ctx.last_blockhash,
    );
    ctx.banks_client.process_transaction(tx).await
}

pub fn assert_ix_error(res: Result<(), BanksClientError>, expected: InstructionError) {
    let err = res.expect_err("transaction should fail").unwrap();
    assert_eq!(err, TransactionError::InstructionError(0, expected));
}

pub fn assert_custom_error(res: Result<(), BanksClientError>, code: u32) {
    assert_ix_error(res, InstructionError::Custom(code));
}

pub async fn get_project(ctx: &mut ProgramTestContext, address: &Pubkey) -> Project {
    let account = ctx
        .banks_client
        .get_account(*address)
        .await
        .unwrap()
        .expect("project account exists");
    assert_eq!(account.owner, program_id());
    Project::deserialize(&account.data).unwrap()
}

pub async fn get_contribution_reward(
    ctx: &mut ProgramTestContext,
    address: &Pubkey,
) -> ContributionReward {
    let account = ctx
        .banks_client
        .get_account(*address)
        .await
        .unwrap()
        .expect("reward account exists");
    assert_eq!(account.owner, program_id());
    ContributionReward::deserialize(&account.data).unwrap()
}

/// Creates a project whose payer is also its authority.
pub async fn create_project(
    ctx: &mut ProgramTestContext,
    seed: &[u8],
    redemption_stamp: Option<i64>,
    min_stake_amount: u64,
) -> Pubkey {
    let payer = ctx.payer.pubkey();
    let ix = ix::create_project(&payer, &payer, seed, redemption_stamp, min_stake_amount);
    process(ctx, &[ix], &[]).await.unwrap();
    project_pda(seed).0
}
