//! Running balance calculation.
//!
//! A ledger's running balance starts at its opening balance and moves by the
//! normal-side delta of each posting:
//! - Debit-normal: balance += debit - credit
//! - Credit-normal: balance += credit - debit

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounts::NormalSide;

/// Running balance of one account while walking its postings in date order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningBalance {
    side: NormalSide,
    current: Decimal,
}

impl RunningBalance {
    /// Starts a walk at the opening balance.
    #[must_use]
    pub fn starting_at(side: NormalSide, opening: Decimal) -> Self {
        Self {
            side,
            current: opening,
        }
    }

    /// Applies one posting and returns the balance after it.
    ///
    /// - current[N] = current[N-1] + change
    /// - current[0] = opening
    pub fn apply(&mut self, debit: Decimal, credit: Decimal) -> Decimal {
        self.current += self.side.balance_change(debit, credit);
        self.current
    }

    /// Steps over a posting that carries no movement (a displayed opening)
    /// and returns the unchanged balance.
    #[must_use]
    pub const fn carry(&self) -> Decimal {
        self.current
    }

    /// The balance after the last applied posting.
    #[must_use]
    pub const fn current(&self) -> Decimal {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    /// Strategy for posting amounts (non-negative, cents).
    fn amount_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..100_000i64).prop_map(|n| Decimal::new(n, 2))
    }

    /// Strategy for opening balances (either sign).
    fn opening_strategy() -> impl Strategy<Value = Decimal> {
        (-100_000i64..100_000i64).prop_map(|n| Decimal::new(n, 2))
    }

    fn side_strategy() -> impl Strategy<Value = NormalSide> {
        prop_oneof![Just(NormalSide::Debit), Just(NormalSide::Credit)]
    }

    fn postings_strategy(max_len: usize) -> impl Strategy<Value = Vec<(Decimal, Decimal)>> {
        prop::collection::vec((amount_strategy(), amount_strategy()), 0..=max_len)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Each step equals the previous balance plus the normal-side delta.
        #[test]
        fn prop_step_equals_previous_plus_change(
            side in side_strategy(),
            opening in opening_strategy(),
            postings in postings_strategy(20),
        ) {
            let mut walk = RunningBalance::starting_at(side, opening);
            for (debit, credit) in postings {
                let previous = walk.current();
                let after = walk.apply(debit, credit);
                prop_assert_eq!(after, previous + side.balance_change(debit, credit));
            }
        }

        /// The final balance equals opening plus the signed sum of postings.
        #[test]
        fn prop_final_equals_opening_plus_signed_sum(
            side in side_strategy(),
            opening in opening_strategy(),
            postings in postings_strategy(20),
        ) {
            let mut walk = RunningBalance::starting_at(side, opening);
            for (debit, credit) in &postings {
                walk.apply(*debit, *credit);
            }

            let signed_sum: Decimal = postings
                .iter()
                .map(|(d, c)| side.balance_change(*d, *c))
                .sum();
            prop_assert_eq!(walk.current(), opening + signed_sum);
        }

        /// Carried postings never move the balance.
        #[test]
        fn prop_carry_preserves_balance(
            side in side_strategy(),
            opening in opening_strategy(),
        ) {
            let mut walk = RunningBalance::starting_at(side, opening);
            prop_assert_eq!(walk.carry(), opening);
            prop_assert_eq!(walk.apply(Decimal::ZERO, Decimal::ZERO), opening);
            prop_assert_eq!(walk.carry(), walk.current());
        }
    }

    #[test]
    fn test_empty_walk_is_opening() {
        let walk = RunningBalance::starting_at(NormalSide::Credit, dec!(-150));
        assert_eq!(walk.current(), dec!(-150));
        assert_eq!(walk.carry(), dec!(-150));
    }

    #[test]
    fn test_debit_normal_chain() {
        let mut walk = RunningBalance::starting_at(NormalSide::Debit, dec!(0));
        assert_eq!(walk.apply(dec!(500), dec!(0)), dec!(500));
        assert_eq!(walk.apply(dec!(0), dec!(200)), dec!(300));
    }

    #[test]
    fn test_credit_normal_chain() {
        let mut walk = RunningBalance::starting_at(NormalSide::Credit, dec!(100));
        assert_eq!(walk.apply(dec!(0), dec!(500)), dec!(600));
        assert_eq!(walk.apply(dec!(30), dec!(0)), dec!(570));
        assert_eq!(walk.current() - dec!(100), dec!(470));
    }
}
