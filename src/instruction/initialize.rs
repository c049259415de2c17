use pinocchio::{account_info::AccountInfo, ProgramResult};
use pinocchio_log::log;

/// Liveness check: touches no state and accepts any (or no) accounts.
pub fn process_initialize(accounts: &[AccountInfo]) -> ProgramResult {
    log!("initialize: {} accounts supplied", accounts.len());
    Ok(())
}
