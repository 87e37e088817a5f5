use anchor_lang::prelude::*;

/// Custom error codes for the presale vesting program.
#[error_code]
pub enum SaleError {
    #[msg("Price numerator and denominator must both be non-zero")]
    ZeroPrice,

    #[msg("Advance and release fractions must sum to exactly 10000 basis points")]
    FractionsAreNot100Percents,

    #[msg("Release schedule exceeds the maximum entry count")]
    ScheduleTooLong,

    #[msg("Unauthorized: sale authority signature required")]
    Unauthorized,

    #[msg("Sale is not active")]
    SaleNotActive,

    #[msg("Sale is already active")]
    SaleAlreadyActive,

    #[msg("Payment amount is below the sale minimum")]
    PaymentBelowMinimum,

    #[msg("Sale has an empty release schedule; vesting is never required")]
    NoVestingSchedule,

    #[msg("Purchase has a vesting component but the vesting account was not provided")]
    VestingNotInitialized,

    #[msg("Vesting schedule times do not match the sale release schedule")]
    ScheduleMismatch,

    #[msg("No matured unclaimed amount to claim")]
    NothingToClaim,

    #[msg("Vesting ledger still holds unclaimed tokens")]
    VestingNotDrained,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Payment destination does not match the sale configuration")]
    InvalidPaymentAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
