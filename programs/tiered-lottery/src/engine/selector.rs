use std::collections::BTreeSet;

use anchor_lang::prelude::*;
use solana_program::keccak;

use crate::error::LotteryError;
use crate::events::TierDrawn;
use crate::state::*;

/// Offset in `[0, span)` of the candidate drawn at attempt `counter`.
/// Pure in its inputs, so a draw can be replayed off chain.
pub fn candidate_offset(salt: &[u8; 32], tier_index: u8, counter: u64, span: u64) -> u64 {
    let hash = keccak::hashv(&[&salt[..], &[tier_index], &counter.to_le_bytes()]);
    let mut word = [0u8; 16];
    word.copy_from_slice(&hash.to_bytes()[..16]);
    (u128::from_le_bytes(word) % span as u128) as u64
}

/// Hash attempts still allowed in the current call.
pub(crate) struct Budget {
    remaining: Option<u64>,
}

impl Budget {
    /// `0` means unbounded.
    pub(crate) fn new(max_attempts: u64) -> Self {
        Self {
            remaining: (max_attempts > 0).then_some(max_attempts),
        }
    }

    pub(crate) fn unbounded() -> Self {
        Self { remaining: None }
    }

    fn take(&mut self) -> bool {
        match &mut self.remaining {
            None => true,
            Some(0) => false,
            Some(left) => {
                *left -= 1;
                true
            }
        }
    }
}

impl Lottery {
    /// Continues selection of tier `index` within `budget`. Returns whether
    /// the tier is resolved.
    pub(crate) fn advance_tier(&mut self, index: usize, budget: &mut Budget) -> Result<bool> {
        let salt = self.random_salt()?;
        let tier = self
            .tiers
            .get(index)
            .ok_or_else(|| error!(LotteryError::UnknownTier))?;
        if tier.is_resolved() {
            return Ok(true);
        }
        require!(
            index == 0 || self.tiers[index - 1].is_resolved(),
            LotteryError::TierOutOfOrder
        );

        let earlier: BTreeSet<u64> = self.tiers[..index]
            .iter()
            .flat_map(|tier| tier.winners().iter().copied())
            .collect();
        let mut taken = earlier.clone();
        taken.extend(self.tiers[index].winners().iter().copied());

        let supply = self.total_supply;
        let organizations = &self.organizations;
        let tier = &mut self.tiers[index];
        let tier_index = index as u8;
        let draw = &mut tier.draw;

        match tier.kind {
            TierKind::Jackpot | TierKind::RandomShare => {
                while draw.winners.len() < tier.winners_count as usize {
                    if !budget.take() {
                        return Ok(false);
                    }
                    let id = candidate_offset(&salt, tier_index, draw.counter, supply);
                    draw.counter += 1;
                    if taken.insert(id) {
                        draw.winners.push(id);
                    }
                }
            }
            TierKind::FixedCount => {
                while (draw.organization_cursor as usize) < organizations.len() {
                    let cursor = draw.organization_cursor as usize;
                    let range = organizations[cursor].range;
                    // Tickets won in earlier tiers can't win again.
                    let free = range.len() - earlier.range(range.start..range.end).count() as u64;
                    let quota = (tier.organization_quotas[cursor] as u64).min(free) as u32;

                    while draw.organization_found < quota {
                        if !budget.take() {
                            return Ok(false);
                        }
                        let id = range.start
                            + candidate_offset(&salt, tier_index, draw.counter, range.len());
                        draw.counter += 1;
                        if taken.insert(id) {
                            draw.winners.push(id);
                            draw.organization_found += 1;
                        }
                    }
                    draw.organization_cursor += 1;
                    draw.organization_found = 0;
                }
            }
        }
        draw.resolved = true;

        msg!(
            "Tier {} drawn: {} winners in {} attempts",
            index,
            draw.winners.len(),
            draw.counter
        );
        emit!(TierDrawn {
            tier: tier_index,
            kind: tier.kind,
            winners: draw.winners.len() as u32,
            attempts: draw.counter,
        });
        Ok(true)
    }

    /// Selects winners of one tier using at most `max_attempts` hash
    /// evaluations (0 = unbounded). Progress persists across calls.
    pub fn select_tier_winners(&mut self, tier_index: u8, max_attempts: u64) -> Result<bool> {
        self.advance_tier(tier_index as usize, &mut Budget::new(max_attempts))
    }

    /// Advances selection from the first unresolved tier. Returns the number
    /// of resolved tiers.
    pub fn draw_winners(&mut self, caller: &Pubkey, max_attempts: u64) -> Result<u8> {
        self.authorize(caller, Action::Draw)?;
        self.random_salt()?;

        let mut budget = Budget::new(max_attempts);
        for index in 0..self.tiers.len() {
            if !self.advance_tier(index, &mut budget)? {
                break;
            }
        }

        let resolved = self.tiers.iter().filter(|tier| tier.is_resolved()).count() as u8;
        msg!("{}/{} tiers drawn", resolved, self.tiers.len());
        Ok(resolved)
    }

    pub fn tier_winners(&self, tier_index: u8) -> Result<&[u64]> {
        Ok(self.tier(tier_index)?.winners())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::*;
    use proptest::prelude::*;

    fn all_winners(lottery: &Lottery) -> Vec<Vec<u64>> {
        lottery
            .tiers
            .iter()
            .map(|tier| tier.winners().to_vec())
            .collect()
    }

    #[test]
    fn test_candidate_stays_in_span() {
        for counter in 0..64 {
            assert!(candidate_offset(&[3u8; 32], 1, counter, 7) < 7);
        }
        assert_eq!(
            candidate_offset(&[3u8; 32], 1, 5, 1_000),
            candidate_offset(&[3u8; 32], 1, 5, 1_000)
        );
    }

    #[test]
    fn test_selection_before_salt_fails() {
        let mut fixture = Fixture::standard();
        fixture.setup(&standard_tiers(), &STANDARD_SHARES).unwrap();
        fixture.initialize(0).unwrap();
        fixture.run().unwrap();

        assert_error(
            fixture.lottery.select_tier_winners(0, 0),
            LotteryError::RandomnessNotFulfilled,
        );
        assert_error(
            fixture.lottery.draw_winners(&authority(), 0),
            LotteryError::RandomnessNotFulfilled,
        );
    }

    #[test]
    fn test_tiers_resolve_in_order() {
        let mut fixture = Fixture::drawn([7u8; 32]);
        assert_error(
            fixture.lottery.select_tier_winners(1, 0),
            LotteryError::TierOutOfOrder,
        );
        assert_error(
            fixture.lottery.select_tier_winners(3, 0),
            LotteryError::UnknownTier,
        );

        assert!(fixture.lottery.select_tier_winners(0, 0).unwrap());
        let jackpot = fixture.lottery.tier_winners(0).unwrap().to_vec();
        assert_eq!(jackpot.len(), 1);

        // Re-selecting a resolved tier is a no-op.
        assert!(fixture.lottery.select_tier_winners(0, 0).unwrap());
        assert_eq!(fixture.lottery.tier_winners(0).unwrap(), &jackpot[..]);
    }

    #[test]
    fn test_draw_is_reproducible() {
        let mut first = Fixture::drawn([7u8; 32]);
        let mut second = Fixture::drawn([7u8; 32]);
        assert_eq!(first.lottery.draw_winners(&authority(), 0).unwrap(), 3);
        assert_eq!(second.lottery.draw_winners(&authority(), 0).unwrap(), 3);
        assert_eq!(all_winners(&first.lottery), all_winners(&second.lottery));

        let mut other = Fixture::drawn([8u8; 32]);
        other.lottery.draw_winners(&authority(), 0).unwrap();
        assert_ne!(all_winners(&first.lottery), all_winners(&other.lottery));
    }

    #[test]
    fn test_chunked_draw_matches_single_pass() {
        let mut whole = Fixture::drawn([7u8; 32]);
        whole.lottery.draw_winners(&authority(), 0).unwrap();

        let mut chunked = Fixture::drawn([7u8; 32]);
        let mut calls = 0;
        while chunked.lottery.draw_winners(&authority(), 3).unwrap() < 3 {
            calls += 1;
            assert!(calls < 1_000);
        }
        assert!(calls > 1);
        assert_eq!(all_winners(&whole.lottery), all_winners(&chunked.lottery));
    }

    #[test]
    fn test_fixed_tier_meets_quotas_when_tickets_allow() {
        let mut fixture = Fixture::standard();
        fixture
            .setup(
                &[TierConfig::jackpot(100), TierConfig::fixed_count(10, 1)],
                &STANDARD_SHARES,
            )
            .unwrap();
        fixture.initialize(0).unwrap();
        fixture.run().unwrap();
        fixture.fulfill([7u8; 32]).unwrap();
        fixture.lottery.draw_winners(&authority(), 0).unwrap();

        let winners = fixture.lottery.tier_winners(1).unwrap();
        let in_first = winners.iter().filter(|&&id| id < 10).count();
        let in_second = winners.iter().filter(|&&id| id >= 10).count();
        assert_eq!((in_first, in_second), (8, 2));
    }

    #[test]
    fn test_fixed_tier_capped_by_free_tickets() {
        // Every ticket wins: earlier tiers eat into organization ranges, so
        // the FixedCount tier realizes at most what is left in each one.
        let mut fixture = Fixture::drawn([7u8; 32]);
        fixture.lottery.draw_winners(&authority(), 0).unwrap();

        let lottery = &fixture.lottery;
        let earlier: BTreeSet<u64> = lottery.tiers[..2]
            .iter()
            .flat_map(|tier| tier.winners().iter().copied())
            .collect();
        assert_eq!(earlier.len(), 10);

        let fixed = lottery.tier_winners(2).unwrap();
        for (index, quota) in [(0usize, 8u64), (1, 2)] {
            let range = lottery.organizations[index].range;
            let free = range.len() - earlier.range(range.start..range.end).count() as u64;
            let realized = fixed.iter().filter(|&&id| range.contains(id)).count() as u64;
            assert_eq!(realized, quota.min(free));
        }
    }

    #[test]
    fn test_draw_requires_operator() {
        let mut fixture = Fixture::drawn([7u8; 32]);
        assert_error(
            fixture.lottery.draw_winners(&user1(), 0),
            LotteryError::Unauthorized,
        );
        fixture
            .lottery
            .grant_role(&authority(), operator(), Role::Operator)
            .unwrap();
        assert_eq!(fixture.lottery.draw_winners(&operator(), 0).unwrap(), 3);
    }

    proptest! {
        #[test]
        fn winners_are_unique_across_tiers(salt in any::<[u8; 32]>()) {
            let mut fixture = Fixture::drawn(salt);
            fixture.lottery.draw_winners(&authority(), 0).unwrap();

            let lottery = &fixture.lottery;
            let mut seen = BTreeSet::new();
            for tier in &lottery.tiers {
                for &id in tier.winners() {
                    prop_assert!(id < lottery.total_supply);
                    prop_assert!(seen.insert(id));
                }
            }
            prop_assert_eq!(lottery.tiers[0].winners().len(), 1);
            prop_assert_eq!(lottery.tiers[1].winners().len(), 9);
            prop_assert!(lottery.tiers[2].winners().len() <= 10);
        }

        #[test]
        fn chunking_never_changes_the_draw(salt in any::<[u8; 32]>(), chunk in 1u64..16) {
            let mut whole = Fixture::drawn(salt);
            whole.lottery.draw_winners(&authority(), 0).unwrap();

            let mut chunked = Fixture::drawn(salt);
            while chunked.lottery.draw_winners(&authority(), chunk).unwrap() < 3 {}
            prop_assert_eq!(all_winners(&whole.lottery), all_winners(&chunked.lottery));
        }
    }
}
