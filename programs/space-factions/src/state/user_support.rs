use anchor_lang::prelude::*;
use std::collections::BTreeMap;
use super::Faction;

/// Per-account support record
///
/// Created by the first accepted add_support from `account`. A freshly
/// allocated account still carries the default key in `account` and is
/// treated as not materialized.
///
/// PDA Seeds: ["user_support_v1", account]
#[account]
pub struct UserSupport {
    /// PDA bump seed
    pub bump: u8,

    /// The supporter's wallet address
    pub account: Pubkey,

    /// Lifetime support sent to each faction
    pub support_square: u64,
    pub support_circle: u64,
    pub support_triangle: u64,
}

impl UserSupport {
    /// Account size calculation:
    /// - bump: 1 byte
    /// - account: 32 bytes (Pubkey)
    /// - support_square/circle/triangle: 3 * 8 bytes (u64)
    /// Total: 57 bytes
    pub const LEN: usize = 1 + 32 + 8 * 3;

    pub fn is_materialized(&self) -> bool {
        self.account != Pubkey::default()
    }

    pub fn data(&self) -> UserSupportData {
        UserSupportData {
            account_id: self.account,
            support_square: self.support_square,
            support_circle: self.support_circle,
            support_triangle: self.support_triangle,
        }
    }

    /// Read a record PDA that may not exist yet.
    ///
    /// Empty or foreign-owned addresses read as `None`.
    pub fn load(info: &AccountInfo) -> Result<Option<Self>> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return Ok(None);
        }
        let data = info.try_borrow_data()?;
        let record = Self::try_deserialize(&mut &data[..])?;
        Ok(Some(record))
    }
}

/// Returned projection of a support record
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserSupportData {
    pub account_id: Pubkey,
    pub support_square: u64,
    pub support_circle: u64,
    pub support_triangle: u64,
}

impl UserSupportData {
    /// Record for an account that has never contributed
    pub fn zeroed(account_id: Pubkey) -> Self {
        Self {
            account_id,
            support_square: 0,
            support_circle: 0,
            support_triangle: 0,
        }
    }

    pub fn get(&self, faction: Faction) -> u64 {
        match faction {
            Faction::Square => self.support_square,
            Faction::Circle => self.support_circle,
            Faction::Triangle => self.support_triangle,
        }
    }

    pub fn set(&mut self, faction: Faction, value: u64) {
        match faction {
            Faction::Square => self.support_square = value,
            Faction::Circle => self.support_circle = value,
            Faction::Triangle => self.support_triangle = value,
        }
    }
}

/// Keyed lookup of support records
///
/// `None` means no record was ever written for the key. Implementations
/// must not synthesize zero-valued records on a miss.
pub trait SupportRecords {
    fn get(&self, account: &Pubkey) -> Option<UserSupportData>;
}

/// Keyed write access to support records
pub trait SupportRecordsMut: SupportRecords {
    fn set(&mut self, record: UserSupportData);
}

impl SupportRecords for BTreeMap<Pubkey, UserSupportData> {
    fn get(&self, account: &Pubkey) -> Option<UserSupportData> {
        BTreeMap::get(self, account).copied()
    }
}

impl SupportRecordsMut for BTreeMap<Pubkey, UserSupportData> {
    fn set(&mut self, record: UserSupportData) {
        self.insert(record.account_id, record);
    }
}

/// A single record PDA answers only for its own key
impl SupportRecords for UserSupport {
    fn get(&self, account: &Pubkey) -> Option<UserSupportData> {
        (self.is_materialized() && self.account == *account).then(|| self.data())
    }
}

impl SupportRecordsMut for UserSupport {
    fn set(&mut self, record: UserSupportData) {
        self.account = record.account_id;
        self.support_square = record.support_square;
        self.support_circle = record.support_circle;
        self.support_triangle = record.support_triangle;
    }
}

/// A record account that may not exist; `None` misses every lookup
impl<R: SupportRecords> SupportRecords for Option<R> {
    fn get(&self, account: &Pubkey) -> Option<UserSupportData> {
        self.as_ref().and_then(|records| records.get(account))
    }
}
