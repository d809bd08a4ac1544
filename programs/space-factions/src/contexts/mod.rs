use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

// ACCOUNTS - Instruction account validation structs

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = payer,
        space = DISCRIMINATOR_LEN + FactionsState::LEN,
        seeds = [FACTIONS_STATE_SEED],
        bump
    )]
    pub factions_state: Account<'info, FactionsState>,
    #[account(mut)]
    pub payer: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// AddSupport - credit `caller`'s contribution to a faction
///
/// user_support is created on the caller's first contribution. If the
/// contribution is rejected the whole transaction fails, so the account
/// is never left behind for a rejected request.
#[derive(Accounts)]
pub struct AddSupport<'info> {
    #[account(mut, seeds = [FACTIONS_STATE_SEED], bump = factions_state.bump)]
    pub factions_state: Account<'info, FactionsState>,
    #[account(
        init_if_needed,
        payer = caller,
        space = DISCRIMINATOR_LEN + UserSupport::LEN,
        seeds = [USER_SUPPORT_SEED, caller.key().as_ref()],
        bump
    )]
    pub user_support: Account<'info, UserSupport>,
    #[account(mut)]
    pub caller: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// AddMessageStart - store a message in the start-zone ring
///
/// The state account is resized to fit the log after the write; the
/// caller pays (or is refunded) the rent difference.
#[derive(Accounts)]
#[instruction(message: String)]
pub struct AddMessageStart<'info> {
    #[account(
        mut,
        seeds = [FACTIONS_STATE_SEED],
        bump = factions_state.bump,
        realloc = factions_state.space_after_message(&message),
        realloc::payer = caller,
        realloc::zero = false
    )]
    pub factions_state: Account<'info, FactionsState>,
    #[account(mut)]
    pub caller: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// Read-only access to totals and messages
#[derive(Accounts)]
pub struct ReadFactions<'info> {
    #[account(seeds = [FACTIONS_STATE_SEED], bump = factions_state.bump)]
    pub factions_state: Account<'info, FactionsState>,
}

#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct ReadUserSupport<'info> {
    /// CHECK: Record PDA for `account`; may not exist yet.
    /// Owner and discriminator are checked in UserSupport::load.
    #[account(seeds = [USER_SUPPORT_SEED, account.as_ref()], bump)]
    pub user_support: UncheckedAccount<'info>,
}
