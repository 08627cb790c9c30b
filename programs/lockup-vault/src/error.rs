use anchor_lang::prelude::*;

// NOTE: Anchor adds 6000 to user error codes
#[error_code]
pub enum ErrorCode {
    #[msg("Amount must be greater than zero")]
    InvalidAmount, // 6000 0x1770

    #[msg("Tier is outside the configured rate table")]
    InvalidTier, // 6001 0x1771

    #[msg("Not enough uncommitted rewards in the budget")]
    InsufficientRewardBudget,

    #[msg("Position id list is empty")]
    EmptyPositionIdList,

    #[msg("Position id not found for this staker")]
    UnknownPosition,

    #[msg("Position is still locked")]
    PositionStillLocked,

    #[msg("Position is no longer locked, use withdraw")]
    PositionNotLocked,

    #[msg("Extension exceeds the maximum lock duration")]
    LockExtensionTooLong,

    #[msg("Staker reached the maximum number of open positions")]
    MaxPositionsReached,

    #[msg("Rate table length must be between 1 and the tier maximum")]
    InvalidRateTableLength,

    #[msg("Rate table length cannot change once set")]
    RateTableLengthChanged,

    #[msg("Rate must be in (0, 10000] basis points")]
    RateOutOfRange,

    #[msg("Rates must be strictly ascending by tier")]
    RatesNotAscending,

    #[msg("Penalty rate above the configured ceiling")]
    PenaltyRateTooHigh,

    #[msg("Not enough accumulated penalty")]
    InsufficientPenaltyBalance,

    #[msg("Base lock duration above the 365-day cap")]
    BaseLockDurationTooLong,

    #[msg("Signer is not the vault admin")]
    Unauthorized,
}
