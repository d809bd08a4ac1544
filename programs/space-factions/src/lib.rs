use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BVZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod state;

#[cfg(test)]
mod formal_verification;

pub use constants::*;
pub use contexts::*;
pub use errors::ErrorCode;
pub use events::*;
pub use helpers::ledger::SupportReceipt;
pub use helpers::messages::MessageWrite;
pub use helpers::query::MessagePage;
pub use state::*;

use helpers::{ledger, messages, query};

#[program]
pub mod space_factions {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        let state = &mut ctx.accounts.factions_state;
        let clock = Clock::get()?;

        state.bump = ctx.bumps.factions_state;
        state.initialized_at = clock.unix_timestamp;
        state.totals = FactionTotals::default();
        state.messages = MessageLog::default();

        emit!(FactionsInitialized {
            factions_state: state.key(),
            payer: ctx.accounts.payer.key(),
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════
    // MUTATIONS
    // ══════════════════════════════════════════════════════════════════════

    /// Send `support` to faction 1 (square), 2 (circle) or 3 (triangle).
    /// Amounts outside 1..=1000 and unknown factions fail the transaction.
    pub fn add_support(ctx: Context<AddSupport>, support: i64, faction: u8) -> Result<()> {
        let caller = ctx.accounts.caller.key();
        let user_support = &mut ctx.accounts.user_support;

        let receipt = ledger::add_support(
            &mut ctx.accounts.factions_state.totals,
            &mut **user_support,
            caller,
            support,
            faction,
        )?;
        user_support.bump = ctx.bumps.user_support;

        emit!(SupportAdded {
            account: caller,
            faction: receipt.faction.tag(),
            amount: receipt.amount,
            faction_total: receipt.faction_total,
            account_total: receipt.record.get(receipt.faction),
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    pub fn add_message_start(ctx: Context<AddMessageStart>, message: String) -> Result<()> {
        let caller = ctx.accounts.caller.key();
        let write = messages::add_message_start(
            &mut ctx.accounts.factions_state.messages,
            &caller,
            message,
        );

        emit!(MessageAdded {
            account: caller,
            slot: write.slot as u8,
            overwritten: write.overwritten,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════
    // VIEWS (returned via return data, call through simulation)
    // ══════════════════════════════════════════════════════════════════════

    pub fn get_supporters_square(ctx: Context<ReadFactions>) -> Result<u64> {
        query::supporters(&ctx.accounts.factions_state.totals, FACTION_SQUARE)
    }

    pub fn get_supporters_circle(ctx: Context<ReadFactions>) -> Result<u64> {
        query::supporters(&ctx.accounts.factions_state.totals, FACTION_CIRCLE)
    }

    pub fn get_supporters_triangle(ctx: Context<ReadFactions>) -> Result<u64> {
        query::supporters(&ctx.accounts.factions_state.totals, FACTION_TRIANGLE)
    }

    pub fn get_faction_supporters(ctx: Context<ReadFactions>, faction: u8) -> Result<u64> {
        query::supporters(&ctx.accounts.factions_state.totals, faction)
    }

    pub fn get_supporters_data(ctx: Context<ReadFactions>) -> Result<[u64; 3]> {
        Ok(query::supporters_data(&ctx.accounts.factions_state.totals))
    }

    /// Whole log in slot order. Bounded by the 1024-byte return data limit;
    /// page with get_messages_start_page once the log outgrows it.
    pub fn get_messages_start(ctx: Context<ReadFactions>) -> Result<Vec<String>> {
        Ok(query::messages(&ctx.accounts.factions_state.messages))
    }

    pub fn get_message_start(ctx: Context<ReadFactions>, slot: u8) -> Result<Option<String>> {
        Ok(query::message(&ctx.accounts.factions_state.messages, slot))
    }

    pub fn get_messages_start_page(ctx: Context<ReadFactions>, start: u8) -> Result<MessagePage> {
        Ok(query::messages_page(&ctx.accounts.factions_state.messages, start))
    }

    pub fn get_user_support_data(
        ctx: Context<ReadUserSupport>,
        account: Pubkey,
    ) -> Result<UserSupportData> {
        let stored = UserSupport::load(&ctx.accounts.user_support.to_account_info())?;
        Ok(query::user_support_data(&stored, account))
    }
}
