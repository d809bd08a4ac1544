// ══════════════════════════════════════════════════════════════════════════════
// PDA SEEDS
// ══════════════════════════════════════════════════════════════════════════════

/// Global factions state: ["factions_v1"]
pub const FACTIONS_STATE_SEED: &[u8] = b"factions_v1";

/// Per-account support record: ["user_support_v1", account]
pub const USER_SUPPORT_SEED: &[u8] = b"user_support_v1";

// ══════════════════════════════════════════════════════════════════════════════
// FACTIONS
// ══════════════════════════════════════════════════════════════════════════════

/// Wire tag for the square faction
pub const FACTION_SQUARE: u8 = 1;

/// Wire tag for the circle faction
pub const FACTION_CIRCLE: u8 = 2;

/// Wire tag for the triangle faction
pub const FACTION_TRIANGLE: u8 = 3;

// ══════════════════════════════════════════════════════════════════════════════
// SUPPORT LIMITS
// ══════════════════════════════════════════════════════════════════════════════

/// Largest single contribution accepted by add_support (inclusive)
pub const MAX_SUPPORT_AMOUNT: i64 = 1000;

/// Contributions must be strictly greater than this
pub const MIN_SUPPORT_EXCLUSIVE: i64 = 0;

// ══════════════════════════════════════════════════════════════════════════════
// MESSAGE LOG
// ══════════════════════════════════════════════════════════════════════════════

/// Capacity of the start-zone message ring
pub const MAX_MESSAGES: usize = 20;

/// Borsh length prefix of a String
pub const STRING_PREFIX_LEN: usize = 4;

/// Borsh length prefix of a Vec
pub const VEC_PREFIX_LEN: usize = 4;

/// Largest program return data the runtime accepts (views return through it)
pub const MAX_RETURN_DATA: usize = 1024;

/// Anchor account discriminator
pub const DISCRIMINATOR_LEN: usize = 8;
