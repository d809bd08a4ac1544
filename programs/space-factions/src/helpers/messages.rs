use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::MessageLog;

/// Where a message landed in the ring
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageWrite {
    pub slot: usize,
    /// True once the log is full and an older entry was replaced
    pub overwritten: bool,
}

/// Append a start-zone message.
///
/// Below capacity the message goes to the end. At capacity it replaces the
/// slot under the cursor and the cursor advances, wrapping at
/// MAX_MESSAGES. The first overwrite after filling is always slot 0, so
/// after wraparound storage order is no longer arrival order.
///
/// No message is ever rejected.
pub fn add_message_start(log: &mut MessageLog, caller: &Pubkey, message: String) -> MessageWrite {
    msg!("{} added message {}", caller, message);

    if !log.is_full() {
        let slot = log.append(message);
        return MessageWrite { slot, overwritten: false };
    }

    let slot = log.cursor();
    log.replace(slot, message);
    log.set_cursor((slot + 1) % MAX_MESSAGES);

    #[cfg(feature = "verbose")]
    msg!("Message log full: overwrote slot {}, cursor now {}", slot, log.cursor());

    MessageWrite { slot, overwritten: true }
}
