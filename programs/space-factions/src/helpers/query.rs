use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::state::*;

/// One return-data-sized run of messages
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MessagePage {
    pub messages: Vec<String>,
    /// Slot to continue from, None once the page reaches the end of the log
    pub next_start: Option<u8>,
}

impl MessagePage {
    /// Vec prefix + Option<u8> (tag + value)
    pub const OVERHEAD: usize = VEC_PREFIX_LEN + 2;
}

/// Total for one faction by wire tag
pub fn supporters(totals: &FactionTotals, faction_tag: u8) -> Result<u64> {
    let faction = Faction::from_tag(faction_tag).ok_or(ErrorCode::InvalidFaction)?;
    Ok(totals.get(faction))
}

/// (square, circle, triangle)
pub fn supporters_data(totals: &FactionTotals) -> [u64; 3] {
    totals.as_array()
}

/// Messages in storage-slot order
///
/// Returned through return data, so only usable while
/// `messages_fit_return_data` holds; use `messages_page` otherwise.
pub fn messages(log: &MessageLog) -> Vec<String> {
    log.as_slice().to_vec()
}

/// Whether the full snapshot serializes within MAX_RETURN_DATA
pub fn messages_fit_return_data(log: &MessageLog) -> bool {
    let entries: usize = log
        .as_slice()
        .iter()
        .map(|message| STRING_PREFIX_LEN + message.len())
        .sum();
    VEC_PREFIX_LEN + entries <= MAX_RETURN_DATA
}

/// Single slot in storage order, None if unoccupied
pub fn message(log: &MessageLog, slot: u8) -> Option<String> {
    log.as_slice().get(slot as usize).cloned()
}

/// Longest run of whole entries from `start` that fits in MAX_RETURN_DATA.
///
/// An occupied `start` always yields at least one entry. A single entry
/// fits on its own since a transaction cannot carry a longer message.
pub fn messages_page(log: &MessageLog, start: u8) -> MessagePage {
    let entries = log.as_slice();
    let start = (start as usize).min(entries.len());

    let mut used = MessagePage::OVERHEAD;
    let mut end = start;
    while end < entries.len() {
        let cost = STRING_PREFIX_LEN + entries[end].len();
        if end > start && used + cost > MAX_RETURN_DATA {
            break;
        }
        used += cost;
        end += 1;
    }

    MessagePage {
        messages: entries[start..end].to_vec(),
        next_start: (end < entries.len()).then_some(end as u8),
    }
}

/// Support record for `account`, zero-valued if it never contributed
pub fn user_support_data<R: SupportRecords>(records: &R, account: Pubkey) -> UserSupportData {
    records
        .get(&account)
        .unwrap_or_else(|| UserSupportData::zeroed(account))
}
