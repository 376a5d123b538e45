use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::LotteryError;
use crate::events::LotterySetUp;
use crate::state::*;

impl Lottery {
    /// Validates and stores the reward configuration. May be repeated until
    /// initialization completes; the latest valid configuration wins.
    #[allow(clippy::too_many_arguments)]
    pub fn setup_lottery(
        &mut self,
        caller: &Pubkey,
        now: i64,
        reward_mint: Pubkey,
        reward_mint_deployed: bool,
        cap: u64,
        tiers: &[TierConfig],
        organization_shares: &[u16],
    ) -> Result<()> {
        self.authorize(caller, Action::Setup)?;
        require!(now < self.lottery_time, LotteryError::SetupAfterLotteryTime);
        require!(self.phase.accepts_setup(), LotteryError::SetupFrozen);
        require!(reward_mint_deployed, LotteryError::RewardTokenNotDeployed);
        require!(cap > 0, LotteryError::ZeroLotteryCap);
        require!(
            organization_shares.len() == self.organizations.len(),
            LotteryError::IncorrectOrganizationSharesCount
        );

        let mut shares_sum = 0u64;
        for &share in organization_shares {
            require!(
                share > 0 && share as u64 <= BPS_DENOMINATOR,
                LotteryError::IncorrectOrganizationShare
            );
            shares_sum += share as u64;
        }
        require!(
            shares_sum == BPS_DENOMINATOR,
            LotteryError::OrganizationSharesNotFull
        );

        let tiers = validate_tiers(tiers, organization_shares)?;

        let mut next = self.clone();
        next.reward_mint = reward_mint;
        next.cap = cap;
        for (organization, &share) in next.organizations.iter_mut().zip(organization_shares) {
            organization.share_bps = share;
        }
        next.tiers = tiers;
        if next.phase == LotteryPhase::Created {
            next.advance_phase(LotteryPhase::Configured)?;
        }
        *self = next;

        msg!(
            "Lottery set up: {} tiers, cap {}, reward mint {}",
            self.tiers.len(),
            cap,
            reward_mint
        );
        emit!(LotterySetUp {
            reward_mint,
            cap,
            tiers: self.tiers.len() as u8,
            organizations: self.organizations.len() as u16,
        });
        Ok(())
    }

    /// Sizes RandomShare tiers from the final supply and checks that every
    /// tier can be drawn without reusing a ticket.
    pub(crate) fn resolve_tiers(&mut self) -> Result<()> {
        let supply = self.total_supply;
        let mut total = 0u64;

        for tier in self.tiers.iter_mut() {
            if tier.kind == TierKind::RandomShare {
                let count =
                    supply as u128 * tier.winners_share as u128 / BPS_DENOMINATOR as u128;
                tier.winners_count =
                    u32::try_from(count).map_err(|_| error!(LotteryError::MathOverflow))?;
            }

            let count = tier.winners_count as u64;
            require!(count <= supply, LotteryError::NotEnoughTickets);
            require!(
                count as usize <= MAX_TIER_WINNERS,
                LotteryError::TooManyWinners
            );
            total += count;
        }

        require!(total <= supply, LotteryError::NotEnoughTickets);
        require!(
            total as usize <= MAX_TOTAL_WINNERS,
            LotteryError::TooManyWinners
        );
        Ok(())
    }

    pub fn tier(&self, index: u8) -> Result<&Tier> {
        self.tiers
            .get(index as usize)
            .ok_or_else(|| error!(LotteryError::UnknownTier))
    }

    pub fn tiers_count(&self) -> u8 {
        self.tiers.len() as u8
    }
}

/// Checks tier order and values, and splits FixedCount tiers across
/// organizations by `shares`.
pub fn validate_tiers(tiers: &[TierConfig], shares: &[u16]) -> Result<Vec<Tier>> {
    require!(tiers.len() <= MAX_TIERS, LotteryError::TooManyTiers);

    let mut validated = Vec::with_capacity(tiers.len());
    for (index, config) in tiers.iter().enumerate() {
        if index == 0 {
            require!(
                config.kind == TierKind::Jackpot,
                LotteryError::FirstTierNotJackpot
            );
            require!(
                config.winners_count == 1,
                LotteryError::JackpotWinnersCount
            );
        }
        require!(config.reward_amount > 0, LotteryError::IncorrectTierValues);
        if index > 0 {
            require!(
                config.kind != TierKind::Jackpot && config.kind >= tiers[index - 1].kind,
                LotteryError::IncorrectTierOrder
            );
        }

        let mut tier = Tier {
            kind: config.kind,
            winners_share: 0,
            winners_count: 0,
            reward_amount: config.reward_amount,
            organization_quotas: Vec::new(),
            draw: TierDraw::default(),
        };
        match config.kind {
            TierKind::Jackpot => tier.winners_count = 1,
            TierKind::RandomShare => {
                require!(config.winners_share > 0, LotteryError::ZeroRandomTierShare);
                require!(
                    config.winners_share as u64 <= BPS_DENOMINATOR,
                    LotteryError::RandomTierShareTooHigh
                );
                tier.winners_share = config.winners_share;
            }
            TierKind::FixedCount => {
                require!(config.winners_count > 0, LotteryError::ZeroFixedTierWinners);
                require!(
                    config.winners_count <= MAX_FIXED_TIER_WINNERS,
                    LotteryError::FixedTierWinnersTooHigh
                );

                let quotas = organization_quotas(config.winners_count, shares);
                require!(
                    quotas.iter().all(|&quota| quota > 0),
                    LotteryError::ZeroOrganizationQuota
                );
                require!(
                    quotas.iter().sum::<u32>() == config.winners_count,
                    LotteryError::OrganizationQuotaMismatch
                );
                tier.winners_count = config.winners_count;
                tier.organization_quotas = quotas;
            }
        }
        validated.push(tier);
    }
    Ok(validated)
}

/// `floor(winners_count * share / 10000)` per organization.
pub fn organization_quotas(winners_count: u32, shares: &[u16]) -> Vec<u32> {
    shares
        .iter()
        .map(|&share| (winners_count as u64 * share as u64 / BPS_DENOMINATOR) as u32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::*;

    #[test]
    fn test_share_sum_must_be_full() {
        let mut fixture = Fixture::standard();
        assert_error(
            fixture.setup(&standard_tiers(), &[8000, 1999]),
            LotteryError::OrganizationSharesNotFull,
        );
        assert_error(
            fixture.setup(&standard_tiers(), &[8000, 2001]),
            LotteryError::OrganizationSharesNotFull,
        );
        fixture.setup(&standard_tiers(), &STANDARD_SHARES).unwrap();
        assert_eq!(fixture.lottery.phase, LotteryPhase::Configured);
        assert_eq!(fixture.lottery.organization_shares(), vec![8000, 2000]);
    }

    #[test]
    fn test_setup_preconditions() {
        let mut fixture = Fixture::standard();
        let tiers = standard_tiers();

        assert_error(
            fixture.lottery.setup_lottery(
                &operator(),
                FREEZE_TIME,
                reward_mint(),
                true,
                1_000,
                &tiers,
                &STANDARD_SHARES,
            ),
            LotteryError::Unauthorized,
        );
        assert_error(
            fixture.lottery.setup_lottery(
                &authority(),
                LOTTERY_TIME,
                reward_mint(),
                true,
                1_000,
                &tiers,
                &STANDARD_SHARES,
            ),
            LotteryError::SetupAfterLotteryTime,
        );
        assert_error(
            fixture.lottery.setup_lottery(
                &authority(),
                FREEZE_TIME,
                reward_mint(),
                false,
                1_000,
                &tiers,
                &STANDARD_SHARES,
            ),
            LotteryError::RewardTokenNotDeployed,
        );
        assert_error(
            fixture.lottery.setup_lottery(
                &authority(),
                FREEZE_TIME,
                reward_mint(),
                true,
                0,
                &tiers,
                &STANDARD_SHARES,
            ),
            LotteryError::ZeroLotteryCap,
        );
        assert_error(
            fixture.setup(&tiers, &[10_000]),
            LotteryError::IncorrectOrganizationSharesCount,
        );
        assert_error(
            fixture.setup(&tiers, &[10_000, 0]),
            LotteryError::IncorrectOrganizationShare,
        );
        assert_error(
            fixture.setup(&tiers, &[10_001, 2000]),
            LotteryError::IncorrectOrganizationShare,
        );
        assert_eq!(fixture.lottery.phase, LotteryPhase::Created);
    }

    #[test]
    fn test_tier_validation_errors() {
        let mut fixture = Fixture::standard();
        let cases = [
            (
                vec![TierConfig::random_share(4500, 10)],
                LotteryError::FirstTierNotJackpot,
            ),
            (
                vec![TierConfig {
                    winners_count: 2,
                    ..TierConfig::jackpot(100)
                }],
                LotteryError::JackpotWinnersCount,
            ),
            (
                vec![TierConfig::jackpot(100), TierConfig::random_share(4500, 0)],
                LotteryError::IncorrectTierValues,
            ),
            (
                vec![
                    TierConfig::jackpot(100),
                    TierConfig::fixed_count(10, 1),
                    TierConfig::random_share(4500, 10),
                ],
                LotteryError::IncorrectTierOrder,
            ),
            (
                vec![TierConfig::jackpot(100), TierConfig::jackpot(100)],
                LotteryError::IncorrectTierOrder,
            ),
            (
                vec![TierConfig::jackpot(100), TierConfig::random_share(0, 10)],
                LotteryError::ZeroRandomTierShare,
            ),
            (
                vec![TierConfig::jackpot(100), TierConfig::random_share(10_001, 10)],
                LotteryError::RandomTierShareTooHigh,
            ),
            (
                vec![TierConfig::jackpot(100), TierConfig::fixed_count(0, 1)],
                LotteryError::ZeroFixedTierWinners,
            ),
            (
                vec![TierConfig::jackpot(100), TierConfig::fixed_count(101, 1)],
                LotteryError::FixedTierWinnersTooHigh,
            ),
            (
                // 4 * 2000 / 10000 rounds down to zero.
                vec![TierConfig::jackpot(100), TierConfig::fixed_count(4, 1)],
                LotteryError::ZeroOrganizationQuota,
            ),
        ];

        for (tiers, expected) in cases {
            assert_error(fixture.setup(&tiers, &STANDARD_SHARES), expected);
        }
        assert_eq!(fixture.lottery.phase, LotteryPhase::Created);
        assert!(fixture.lottery.tiers.is_empty());
    }

    #[test]
    fn test_quota_rounding_must_add_up() {
        let mut fixture = Fixture::standard();
        // 7 * 8000 / 10000 = 5 and 7 * 2000 / 10000 = 1.
        assert_error(
            fixture.setup(
                &[TierConfig::jackpot(100), TierConfig::fixed_count(7, 1)],
                &STANDARD_SHARES,
            ),
            LotteryError::OrganizationQuotaMismatch,
        );
        assert_eq!(organization_quotas(10, &STANDARD_SHARES), vec![8, 2]);
    }

    #[test]
    fn test_too_many_tiers() {
        let mut tiers = vec![TierConfig::jackpot(100)];
        tiers.extend((0..MAX_TIERS).map(|_| TierConfig::random_share(100, 1)));
        assert_error(
            validate_tiers(&tiers, &STANDARD_SHARES),
            LotteryError::TooManyTiers,
        );
    }

    #[test]
    fn test_setup_can_be_replaced_until_initialized() {
        let mut fixture = Fixture::standard();
        fixture.setup(&standard_tiers(), &STANDARD_SHARES).unwrap();
        fixture
            .setup(&[TierConfig::jackpot(500)], &[5000, 5000])
            .unwrap();
        assert_eq!(fixture.lottery.tiers.len(), 1);
        assert_eq!(fixture.lottery.tier(0).unwrap().reward_amount, 500);

        fixture.initialize(0).unwrap();
        assert_error(
            fixture.setup(&standard_tiers(), &STANDARD_SHARES),
            LotteryError::SetupFrozen,
        );
    }

    #[test]
    fn test_random_share_resolves_from_supply() {
        let mut fixture = Fixture::standard();
        fixture.setup(&standard_tiers(), &STANDARD_SHARES).unwrap();
        fixture.initialize(0).unwrap();

        let tier = fixture.lottery.tier(1).unwrap();
        assert_eq!(tier.kind, TierKind::RandomShare);
        assert_eq!(tier.winners_count, 9);
        assert_error(fixture.lottery.tier(3), LotteryError::UnknownTier);
    }

    #[test]
    fn test_oversubscribed_tiers_fail_initialization() {
        let mut fixture = Fixture::standard();
        fixture
            .setup(
                &[
                    TierConfig::jackpot(100),
                    TierConfig::random_share(6000, 10),
                    TierConfig::fixed_count(10, 1),
                ],
                &STANDARD_SHARES,
            )
            .unwrap();

        // 1 + 12 + 10 winners for 20 tickets.
        assert_error(fixture.initialize(0), LotteryError::NotEnoughTickets);
        assert_eq!(fixture.lottery.phase, LotteryPhase::Configured);
        assert_eq!(fixture.lottery.total_supply, 0);
        assert_eq!(fixture.lottery.initialized_organizations, 0);
    }
}
