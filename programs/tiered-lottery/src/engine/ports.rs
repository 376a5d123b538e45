use anchor_lang::prelude::*;

use crate::state::CampaignTickets;

/// Read access to campaign ticket books.
pub trait TicketResolver {
    /// Tickets currently alive in the campaign (minted minus burned).
    fn ticket_count(&self, campaign: &CampaignTickets) -> Result<u64>;

    /// Current holder of the campaign-local ticket `local_id`.
    fn resolve_owner(&self, campaign: &CampaignTickets, local_id: u64) -> Result<Pubkey>;
}

/// Decides whether an owner may be paid above the cap without confirmation.
pub trait PayoutEligibility {
    fn is_eligible_for_direct_payout(&self, owner: &Pubkey) -> bool;
}

/// Escrow holding the reward tokens of one lottery.
pub trait RewardVault {
    fn balance(&self) -> u64;

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

pub trait RandomnessPort {
    /// Commits to a future random value and returns the request id.
    fn request_random_number(&mut self) -> Result<Pubkey>;

    /// Raw 32-byte word delivered for `request_id`.
    fn random_word(&self, request_id: &Pubkey) -> Result<[u8; 32]>;
}

/// No owner is pre-verified: every payout above the cap waits for a rewarder.
pub struct CapOnly;

impl PayoutEligibility for CapOnly {
    fn is_eligible_for_direct_payout(&self, _owner: &Pubkey) -> bool {
        false
    }
}
