use anchor_lang::prelude::*;

/// Space Factions Error Codes
///
/// Rejected contributions surface one of these to the caller. The
/// transaction is rolled back, so no account changes when one is returned.
#[error_code]
pub enum ErrorCode {
    #[msg("Invalid faction ID")]
    InvalidFaction,

    #[msg("Invalid support amount (must be 1..=1000)")]
    InvalidSupportAmount,

    #[msg("Math overflow")]
    MathOverflow,
}
