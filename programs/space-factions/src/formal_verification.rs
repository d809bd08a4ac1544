// ============================================================================
// FORMAL VERIFICATION & PROPERTY-BASED TESTS
// ============================================================================
//
// Run with: cargo test --lib formal_verification
//
// This module implements:
// 1. Ledger invariants over long deterministic operation sequences
// 2. Message ring model checking against a reference slot formula
// ============================================================================

#[cfg(test)]
mod formal_tests {
    use crate::constants::*;
    use crate::helpers::{ledger, messages, query};
    use crate::state::*;
    use anchor_lang::prelude::Pubkey;
    use std::collections::BTreeMap;

    type Records = BTreeMap<Pubkey, UserSupportData>;

    /// Deterministic pseudo-random stream (64-bit LCG)
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self) -> u64 {
            self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            self.0 >> 33
        }

        fn below(&mut self, n: u64) -> u64 {
            self.next() % n
        }
    }

    fn faction_sums(records: &Records) -> FactionTotals {
        let mut sums = FactionTotals::default();
        for record in records.values() {
            for faction in Faction::ALL {
                sums.set(faction, sums.get(faction) + record.get(faction));
            }
        }
        sums
    }

    // ========================================================================
    // SECTION 1: LEDGER INVARIANTS
    // ========================================================================

    mod ledger_invariants {
        use super::*;

        /// INV-1: Conservation
        /// Each faction total equals the sum of that faction over all records
        #[test]
        fn inv1_totals_equal_record_sums() {
            let accounts: Vec<Pubkey> = (0..6).map(|_| Pubkey::new_unique()).collect();
            let mut totals = FactionTotals::default();
            let mut records = Records::new();
            let mut rng = Lcg(7);

            for _ in 0..2_000 {
                let caller = accounts[rng.below(accounts.len() as u64) as usize];
                // Amounts span invalid values on both sides of the range
                let amount = rng.below(1_400) as i64 - 200;
                // Tags 0..=4 include two invalid factions
                let tag = rng.below(5) as u8;

                let _ = ledger::add_support(&mut totals, &mut records, caller, amount, tag);

                assert_eq!(totals, faction_sums(&records), "INV-1 violated");
            }
        }

        /// INV-2: Monotonicity
        /// No counter ever decreases
        #[test]
        fn inv2_counters_never_decrease() {
            let accounts: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();
            let mut totals = FactionTotals::default();
            let mut records = Records::new();
            let mut rng = Lcg(42);

            for _ in 0..1_000 {
                let caller = accounts[rng.below(accounts.len() as u64) as usize];
                let before_totals = totals;
                let before_record = query::user_support_data(&records, caller);

                let _ = ledger::add_support(
                    &mut totals,
                    &mut records,
                    caller,
                    rng.below(1_100) as i64,
                    1 + rng.below(3) as u8,
                );

                let after_record = query::user_support_data(&records, caller);
                for faction in Faction::ALL {
                    assert!(totals.get(faction) >= before_totals.get(faction));
                    assert!(after_record.get(faction) >= before_record.get(faction));
                }
            }
        }

        /// INV-3: Exact application
        /// A valid request moves exactly one total and one record counter by `amount`
        #[test]
        fn inv3_valid_request_moves_exactly_one_counter() {
            let caller = Pubkey::new_unique();

            for faction in Faction::ALL {
                for amount in [1i64, 2, 499, 999, MAX_SUPPORT_AMOUNT] {
                    let mut totals = FactionTotals { square: 5, circle: 6, triangle: 7 };
                    let mut records = Records::new();
                    records.insert(caller, UserSupportData {
                        account_id: caller,
                        support_square: 1,
                        support_circle: 2,
                        support_triangle: 3,
                    });
                    let before_totals = totals;
                    let before_record = records[&caller];

                    ledger::add_support(&mut totals, &mut records, caller, amount, faction.tag())
                        .unwrap();

                    for other in Faction::ALL {
                        let delta = if other == faction { amount as u64 } else { 0 };
                        assert_eq!(totals.get(other), before_totals.get(other) + delta);
                        assert_eq!(records[&caller].get(other), before_record.get(other) + delta);
                    }
                }
            }
        }

        /// INV-4: Rejection is total
        /// An invalid request changes nothing and materializes nothing
        #[test]
        fn inv4_invalid_request_changes_nothing() {
            let caller = Pubkey::new_unique();
            let invalid: Vec<(i64, u8)> = vec![
                (0, FACTION_SQUARE),
                (-1, FACTION_CIRCLE),
                (MAX_SUPPORT_AMOUNT + 1, FACTION_TRIANGLE),
                (10, 0),
                (10, 4),
                (0, 0),
            ];

            for (amount, tag) in invalid {
                let mut totals = FactionTotals { square: 10, circle: 0, triangle: 50 };
                let mut records = Records::new();

                assert!(ledger::add_support(&mut totals, &mut records, caller, amount, tag).is_err());
                assert_eq!(totals, FactionTotals { square: 10, circle: 0, triangle: 50 });
                assert!(records.is_empty());
            }
        }
    }

    // ========================================================================
    // SECTION 2: MESSAGE RING MODEL
    // ========================================================================

    mod ring_model {
        use super::*;

        /// Slot the n-th message (0-based) lands in
        fn expected_slot(n: usize) -> usize {
            if n < MAX_MESSAGES {
                n
            } else {
                (n - MAX_MESSAGES) % MAX_MESSAGES
            }
        }

        /// RING-1: Every write lands where the reference formula says
        /// and the log never exceeds capacity
        #[test]
        fn ring1_matches_reference_model() {
            let caller = Pubkey::new_unique();
            let mut log = MessageLog::default();
            let mut model: Vec<String> = Vec::new();

            for n in 0..(MAX_MESSAGES * 3 + 7) {
                let message = format!("m{}", n);
                let write = messages::add_message_start(&mut log, &caller, message.clone());

                let slot = expected_slot(n);
                assert_eq!(write.slot, slot);
                assert_eq!(write.overwritten, n >= MAX_MESSAGES);
                if slot < model.len() {
                    model[slot] = message;
                } else {
                    model.push(message);
                }

                assert!(log.len() <= MAX_MESSAGES);
                assert_eq!(query::messages(&log), model);
            }
        }

        /// RING-2: The cursor stays in range and only moves once full
        #[test]
        fn ring2_cursor_in_range() {
            let caller = Pubkey::new_unique();
            let mut log = MessageLog::default();

            for n in 0..(MAX_MESSAGES * 4) {
                messages::add_message_start(&mut log, &caller, String::from("x"));
                assert!(log.cursor() < MAX_MESSAGES);
                if n < MAX_MESSAGES {
                    assert_eq!(log.cursor(), 0);
                } else {
                    assert_eq!(log.cursor(), (n - MAX_MESSAGES + 1) % MAX_MESSAGES);
                }
            }
        }

        /// RING-3: Reads do not move the cursor
        #[test]
        fn ring3_queries_are_pure() {
            let caller = Pubkey::new_unique();
            let mut log = MessageLog::default();
            for n in 0..(MAX_MESSAGES + 3) {
                messages::add_message_start(&mut log, &caller, format!("m{}", n));
            }

            let before = log.clone();
            let _ = query::messages(&log);
            let _ = query::messages(&log);
            assert_eq!(log, before);
        }
    }
}
