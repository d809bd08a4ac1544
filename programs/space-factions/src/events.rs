use anchor_lang::prelude::*;

// ══════════════════════════════════════════════════════════════════════════════
// INITIALIZATION EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when the global factions state is created
#[event]
pub struct FactionsInitialized {
    pub factions_state: Pubkey,
    pub payer: Pubkey,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// SUPPORT EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when a contribution is accepted
#[event]
pub struct SupportAdded {
    pub account: Pubkey,
    pub faction: u8,
    pub amount: u64,
    pub faction_total: u64,
    pub account_total: u64,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// MESSAGE EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when a start-zone message is stored
#[event]
pub struct MessageAdded {
    pub account: Pubkey,
    pub slot: u8,
    pub overwritten: bool,
    pub timestamp: i64,
}
