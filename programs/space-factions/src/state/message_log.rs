use anchor_lang::prelude::*;
use crate::constants::*;

/// Fixed-capacity start-zone message storage
///
/// Slots `[0, len)` hold messages, slots past `len` are empty strings.
/// `cursor` is the next slot to overwrite once the log is full; it is
/// only meaningful when `len == MAX_MESSAGES`.
///
/// This is pure storage: the append-or-overwrite policy lives in
/// `helpers::messages`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageLog {
    pub entries: [String; MAX_MESSAGES],
    pub len: u8,
    pub cursor: u8,
}

impl MessageLog {
    /// Serialized size of an empty log:
    /// - entries: 20 empty strings, 4-byte length prefix each = 80 bytes
    /// - len: 1 byte
    /// - cursor: 1 byte
    /// Total: 82 bytes
    pub const EMPTY_LEN: usize = STRING_PREFIX_LEN * MAX_MESSAGES + 1 + 1;

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() >= MAX_MESSAGES
    }

    pub fn cursor(&self) -> usize {
        self.cursor as usize
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor as u8;
    }

    /// Write into the first unused slot. Caller guarantees the log is not full.
    pub fn append(&mut self, message: String) -> usize {
        let slot = self.len();
        self.entries[slot] = message;
        self.len += 1;
        slot
    }

    /// Replace an occupied slot, returning the previous entry
    pub fn replace(&mut self, slot: usize, message: String) -> String {
        std::mem::replace(&mut self.entries[slot], message)
    }

    /// Slot the next write lands in
    pub fn next_slot(&self) -> usize {
        if self.is_full() {
            self.cursor()
        } else {
            self.len()
        }
    }

    /// Occupied slots in storage order
    pub fn as_slice(&self) -> &[String] {
        &self.entries[..self.len()]
    }

    /// Current Borsh-serialized size
    pub fn serialized_len(&self) -> usize {
        Self::EMPTY_LEN + self.entries.iter().map(String::len).sum::<usize>()
    }

    /// Borsh-serialized size after `message` is written into `next_slot()`
    pub fn serialized_len_after(&self, message: &str) -> usize {
        let slot = self.next_slot();
        self.serialized_len() - self.entries[slot].len() + message.len()
    }
}
