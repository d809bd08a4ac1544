use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::state::*;

/// Outcome of an accepted contribution
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SupportReceipt {
    pub faction: Faction,
    pub amount: u64,
    /// Faction total after the contribution
    pub faction_total: u64,
    /// Caller's record after the contribution
    pub record: UserSupportData,
}

/// Check a contribution request.
///
/// The faction is checked before the amount; each failure is logged
/// before it is returned.
pub fn validate_support(caller: &Pubkey, amount: i64, faction_tag: u8) -> Result<(Faction, u64)> {
    let Some(faction) = Faction::from_tag(faction_tag) else {
        msg!("Invalid faction ID {}", faction_tag);
        return err!(ErrorCode::InvalidFaction);
    };

    if amount <= MIN_SUPPORT_EXCLUSIVE || amount > MAX_SUPPORT_AMOUNT {
        msg!("{} sent an invalid support amount: {}", caller, amount);
        return err!(ErrorCode::InvalidSupportAmount);
    }

    Ok((faction, amount as u64))
}

/// Apply a contribution from `caller` to the faction totals and the
/// caller's support record.
///
/// Both new counter values are computed before anything is written, so
/// a rejected or overflowing request leaves `totals` and `records`
/// untouched.
pub fn add_support<R: SupportRecordsMut>(
    totals: &mut FactionTotals,
    records: &mut R,
    caller: Pubkey,
    amount: i64,
    faction_tag: u8,
) -> Result<SupportReceipt> {
    let (faction, amount) = validate_support(&caller, amount, faction_tag)?;

    let mut record = match records.get(&caller) {
        Some(record) => record,
        None => {
            #[cfg(feature = "verbose")]
            msg!("First contribution from {}", caller);
            UserSupportData::zeroed(caller)
        }
    };

    let (Some(faction_total), Some(user_total)) = (
        totals.get(faction).checked_add(amount),
        record.get(faction).checked_add(amount),
    ) else {
        msg!("{} support {} for faction {} overflows the counters", caller, amount, faction_tag);
        return err!(ErrorCode::MathOverflow);
    };

    msg!("{} sent support {} for faction {}", caller, amount, faction_tag);

    totals.set(faction, faction_total);
    record.set(faction, user_total);
    records.set(record);

    Ok(SupportReceipt {
        faction,
        amount,
        faction_total,
        record,
    })
}
