use anchor_lang::prelude::*;

/// Custom error codes for the lockup token program.
#[error_code]
pub enum LockupError {
    #[msg("Unauthorized: owner signature required")]
    Unauthorized,

    #[msg("Account is the zero address")]
    ZeroAccount,

    #[msg("timelockUntil already passed")]
    TimelockInPast,

    #[msg("percUnlockedAtTimeUnlock and vestingDurationDays are zero")]
    DegenerateRule,

    #[msg("percUnlockedAtTimeUnlock above 100%")]
    PercentageOutOfRange,

    #[msg("Account already has outbound rule")]
    DuplicateOutboundRule,

    #[msg("Insufficient unlocked tokens")]
    InsufficientUnlocked,

    #[msg("Transfer amount exceeds balance")]
    InsufficientBalance,

    #[msg("Transfer amount exceeds allowance")]
    InsufficientAllowance,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Sender and recipient are the same holder")]
    SelfTransfer,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Math overflow")]
    MathOverflow,
}

/// Result of the pure rule/lock/gate logic; converts into an Anchor error with `?`.
pub type LockupResult<T> = std::result::Result<T, LockupError>;
