use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::*;

/// State of one lottery instance. Too large for CPI allocation, so the client
/// creates it with `8 + Lottery::INIT_SPACE` bytes before `create_lottery`.
#[account]
#[derive(InitSpace)]
pub struct Lottery {
    /// The authority or admin responsible for managing this lottery.
    /// Holds every role implicitly.
    pub authority: Pubkey,

    /// Bump of the vault authority PDA `[VAULT_AUTHORITY_SEED, lottery]`.
    pub vault_bump: u8,

    /// Additional role holders.
    #[max_len(MAX_ROLE_GRANTS)]
    pub role_grants: Vec<RoleGrant>,

    /// Program owning every registered ticket book account.
    pub ticket_program: Pubkey,

    /// UNIX timestamp after which ticket counts are final (end of the burn period).
    pub ticket_freeze_time: i64,

    /// UNIX timestamp from which the draw may run; setup closes here.
    pub lottery_time: i64,

    pub phase: LotteryPhase,

    /// Mint paid out to winners. Default until setup.
    pub reward_mint: Pubkey,

    /// Largest amount one owner may receive in a settlement call without
    /// confirmation, unless the owner is eligible for direct payout.
    pub cap: u64,

    /// Append-only, in order of first registration.
    #[max_len(MAX_ORGANIZATIONS)]
    pub organizations: Vec<Organization>,

    /// Append-only, in registration order.
    #[max_len(MAX_CAMPAIGNS)]
    pub campaigns: Vec<CampaignTickets>,

    pub initialized_organizations: u16,

    /// Number of lottery tickets allocated so far; also the next free id.
    pub total_supply: u64,

    #[max_len(MAX_TIERS)]
    pub tiers: Vec<Tier>,

    /// First tier not yet settled.
    pub next_tier: u8,

    pub randomness: RandomnessState,

    /// Paid records, in payment order.
    #[max_len(MAX_TOTAL_WINNERS)]
    pub winners: Vec<WinnerRecord>,

    /// Pending records waiting for a rewarder.
    #[max_len(MAX_TOTAL_WINNERS)]
    pub over_cap_winners: Vec<WinnerRecord>,
}
