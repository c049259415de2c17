use pinocchio::program_error::ProgramError;

/// Program-specific failures, surfaced as `ProgramError::Custom(code)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum IdeaPadError {
    /// Checked arithmetic overflowed (e.g. more than 255 rewards).
    NumericalOverflow = 0,
    /// Project seed is empty or longer than a PDA seed may be.
    InvalidSeed = 1,
    /// Signer is not the project's authority.
    Unauthorized = 2,
    /// Operation is not allowed in the project's current state.
    InvalidProjectState = 3,
    /// Requested lifecycle step does not follow the current state.
    InvalidStateTransition = 4,
    /// Reward cost must be non-zero.
    InvalidRewardCost = 5,
    /// Reward quantity, when limited, must be non-zero.
    InvalidRewardQuantity = 6,
    /// Project cannot complete before its redemption timestamp.
    RedemptionNotReached = 7,
}

// map internal errors to standard program error
pub fn to_program_error(err: IdeaPadError) -> ProgramError {
    ProgramError::Custom(err as u32)
}

impl From<IdeaPadError> for ProgramError {
    fn from(err: IdeaPadError) -> Self {
        to_program_error(err)
    }
}
