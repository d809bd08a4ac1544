use anchor_lang::prelude::*;
use crate::constants::*;

/// One of the three factions a contribution can be attributed to
///
/// Never serialized; the wire carries the u8 tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Faction {
    Square,
    Circle,
    Triangle,
}

impl Faction {
    pub const ALL: [Faction; 3] = [Faction::Square, Faction::Circle, Faction::Triangle];

    /// Decode the wire tag (1=square, 2=circle, 3=triangle)
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            FACTION_SQUARE => Some(Faction::Square),
            FACTION_CIRCLE => Some(Faction::Circle),
            FACTION_TRIANGLE => Some(Faction::Triangle),
            _ => None,
        }
    }

    pub fn tag(self) -> u8 {
        match self {
            Faction::Square => FACTION_SQUARE,
            Faction::Circle => FACTION_CIRCLE,
            Faction::Triangle => FACTION_TRIANGLE,
        }
    }
}

/// Aggregate support per faction
///
/// Each counter equals the sum of the matching counter over every
/// materialized UserSupport record.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FactionTotals {
    pub square: u64,
    pub circle: u64,
    pub triangle: u64,
}

impl FactionTotals {
    /// 3 u64 counters: 8 * 3 = 24 bytes
    pub const LEN: usize = 8 * 3;

    pub fn get(&self, faction: Faction) -> u64 {
        match faction {
            Faction::Square => self.square,
            Faction::Circle => self.circle,
            Faction::Triangle => self.triangle,
        }
    }

    pub fn set(&mut self, faction: Faction, value: u64) {
        match faction {
            Faction::Square => self.square = value,
            Faction::Circle => self.circle = value,
            Faction::Triangle => self.triangle = value,
        }
    }

    /// Ordered (square, circle, triangle)
    pub fn as_array(&self) -> [u64; 3] {
        [self.square, self.circle, self.triangle]
    }
}
