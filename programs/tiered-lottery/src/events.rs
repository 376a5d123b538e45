use anchor_lang::prelude::*;

use crate::state::{Role, TierKind};

#[event]
pub struct LotteryCreated {
    pub lottery: Pubkey,
    pub authority: Pubkey,
    pub ticket_program: Pubkey,
    pub ticket_freeze_time: i64,
    pub lottery_time: i64,
}

#[event]
pub struct RoleChanged {
    pub account: Pubkey,
    pub role: Role,
    pub granted: bool,
}

#[event]
pub struct TicketContractRegistered {
    pub ticket_contract: Pubkey,
    pub campaign: Pubkey,
    pub organization: Pubkey,
    /// Position of the campaign in the global campaign table.
    pub campaign_index: u16,
}

#[event]
pub struct LotterySetUp {
    pub reward_mint: Pubkey,
    pub cap: u64,
    pub tiers: u8,
    pub organizations: u16,
}

/// One organization's ticket range has been frozen.
#[event]
pub struct OrganizationInitialized {
    pub organization: Pubkey,
    pub first_ticket_id: u64,
    pub ticket_count: u64,
}

/// Every range is frozen and tier sizes are final.
#[event]
pub struct LotteryInitialized {
    pub total_supply: u64,
    pub total_winners: u64,
}

#[event]
pub struct RandomnessRequested {
    pub request_id: Pubkey,
}

#[event]
pub struct RandomnessFulfilled {
    pub request_id: Pubkey,
    pub salt: [u8; 32],
}

#[event]
pub struct TierDrawn {
    pub tier: u8,
    pub kind: TierKind,
    pub winners: u32,
    pub attempts: u64,
}

#[event]
pub struct WinnerRewarded {
    pub tier: u8,
    pub ticket_id: u64,
    pub owner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct OverCapWinnerQueued {
    pub tier: u8,
    pub ticket_id: u64,
    pub owner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct OverCapWinnerRewarded {
    pub tier: u8,
    pub ticket_id: u64,
    pub owner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct TokensWithdrawn {
    pub recipient: Pubkey,
    pub amount: u64,
}
