use anchor_lang::prelude::*;
use super::{FactionTotals, MessageLog};
use crate::constants::*;

/// Global factions state
///
/// Holds the three faction totals and the start-zone message ring.
/// Only one FactionsState account exists per program instance.
///
/// PDA Seeds: ["factions_v1"]
#[account]
pub struct FactionsState {
    /// PDA bump seed
    pub bump: u8,

    /// Timestamp when the state was initialized
    pub initialized_at: i64,

    /// Aggregate support per faction
    pub totals: FactionTotals,

    /// Start-zone messages with overwrite cursor
    pub messages: MessageLog,
}

impl FactionsState {
    /// Account size calculation (empty message log):
    /// - bump: 1 byte
    /// - initialized_at: 8 bytes (i64)
    /// - totals: 24 bytes (3 * u64)
    /// - messages: 82 bytes (20 string prefixes + len + cursor)
    /// Total: 115 bytes
    ///
    /// The account grows with message content; see `space_after_message`.
    pub const LEN: usize = 1 + 8 + FactionTotals::LEN + MessageLog::EMPTY_LEN;

    /// Full account size (discriminator included) once `message` is written
    pub fn space_after_message(&self, message: &str) -> usize {
        DISCRIMINATOR_LEN + Self::LEN - MessageLog::EMPTY_LEN
            + self.messages.serialized_len_after(message)
    }
}
