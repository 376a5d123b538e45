use anchor_lang::prelude::*;

use crate::constants::*;

/// Winner-count policy of a tier. Declaration order is the required tier order.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, InitSpace,
)]
#[repr(u8)]
pub enum TierKind {
    /// Exactly one winner drawn from the whole population.
    Jackpot = 0,
    /// A basis-point share of the final ticket supply.
    RandomShare = 1,
    /// A fixed count split across organizations by their shares.
    FixedCount = 2,
}

/// Tier as submitted to `setup_lottery`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierConfig {
    pub kind: TierKind,
    /// Basis points of the ticket supply, RandomShare only.
    pub winners_share: u16,
    /// Jackpot and FixedCount only; ignored for RandomShare.
    pub winners_count: u32,
    /// Paid per winning ticket.
    pub reward_amount: u64,
}

impl TierConfig {
    pub fn jackpot(reward_amount: u64) -> Self {
        Self {
            kind: TierKind::Jackpot,
            winners_share: 0,
            winners_count: 1,
            reward_amount,
        }
    }

    pub fn random_share(winners_share: u16, reward_amount: u64) -> Self {
        Self {
            kind: TierKind::RandomShare,
            winners_share,
            winners_count: 0,
            reward_amount,
        }
    }

    pub fn fixed_count(winners_count: u32, reward_amount: u64) -> Self {
        Self {
            kind: TierKind::FixedCount,
            winners_share: 0,
            winners_count,
            reward_amount,
        }
    }
}

/// Resumable selection progress of one tier.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct TierDraw {
    /// Hash attempts consumed so far.
    pub counter: u64,

    /// FixedCount: organization currently being filled.
    pub organization_cursor: u16,

    /// FixedCount: winners found for the current organization.
    pub organization_found: u32,

    /// Lottery ticket ids drawn so far, in draw order.
    #[max_len(MAX_TIER_WINNERS)]
    pub winners: Vec<u64>,

    pub resolved: bool,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct Tier {
    pub kind: TierKind,

    pub winners_share: u16,

    /// For RandomShare tiers this stays 0 until initialization completes.
    pub winners_count: u32,

    pub reward_amount: u64,

    /// FixedCount only: winners owed to each organization, by index.
    #[max_len(MAX_ORGANIZATIONS)]
    pub organization_quotas: Vec<u32>,

    pub draw: TierDraw,
}

impl Tier {
    pub fn is_resolved(&self) -> bool {
        self.draw.resolved
    }

    pub fn winners(&self) -> &[u64] {
        &self.draw.winners
    }
}
