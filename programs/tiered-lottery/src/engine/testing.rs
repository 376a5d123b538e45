//! In-memory ports and a lottery fixture shared by the engine tests.

use std::collections::{BTreeMap, BTreeSet};

use anchor_lang::prelude::*;

use crate::engine::*;
use crate::error::LotteryError;
use crate::state::*;

pub const FREEZE_TIME: i64 = 1_000;
pub const LOTTERY_TIME: i64 = 2_000;
pub const VAULT_BALANCE: u64 = 10_000;
pub const STANDARD_SHARES: [u16; 2] = [8000, 2000];

pub fn key(n: u8) -> Pubkey {
    Pubkey::new_from_array([n; 32])
}

pub fn authority() -> Pubkey {
    key(1)
}

pub fn operator() -> Pubkey {
    key(2)
}

pub fn rewarder() -> Pubkey {
    key(3)
}

pub fn registrar() -> Pubkey {
    key(4)
}

pub fn ticket_program() -> Pubkey {
    key(5)
}

pub fn reward_mint() -> Pubkey {
    key(9)
}

pub fn user1() -> Pubkey {
    key(10)
}

pub fn user2() -> Pubkey {
    key(11)
}

pub fn organization(n: u8) -> Pubkey {
    key(20 + n)
}

pub fn ticket_contract(n: u8) -> Pubkey {
    key(40 + n)
}

pub fn campaign(n: u8) -> Pubkey {
    key(80 + n)
}

pub fn request() -> Pubkey {
    key(120)
}

/// Jackpot(100), RandomShare(45%, 10), FixedCount(10, 1).
pub fn standard_tiers() -> Vec<TierConfig> {
    vec![
        TierConfig::jackpot(100),
        TierConfig::random_share(4500, 10),
        TierConfig::fixed_count(10, 1),
    ]
}

pub fn assert_error<T>(result: Result<T>, expected: LotteryError) {
    match result {
        Ok(_) => panic!("expected {:?}, got Ok", expected),
        Err(error) => assert_eq!(error, Error::from(expected)),
    }
}

/// Holder list per ticket contract; the index is the local ticket id.
#[derive(Default)]
pub struct StubTickets {
    holders: BTreeMap<Pubkey, Vec<Pubkey>>,
}

impl StubTickets {
    pub fn set_holders(&mut self, ticket_contract: Pubkey, holders: Vec<Pubkey>) {
        self.holders.insert(ticket_contract, holders);
    }
}

impl TicketResolver for StubTickets {
    fn ticket_count(&self, campaign: &CampaignTickets) -> Result<u64> {
        Ok(self
            .holders
            .get(&campaign.ticket_contract)
            .map_or(0, |holders| holders.len() as u64))
    }

    fn resolve_owner(&self, campaign: &CampaignTickets, local_id: u64) -> Result<Pubkey> {
        self.holders
            .get(&campaign.ticket_contract)
            .and_then(|holders| holders.get(local_id as usize))
            .copied()
            .ok_or_else(|| error!(LotteryError::TicketNotFound))
    }
}

pub struct StubVault {
    pub balance: u64,
    pub transfers: Vec<(Pubkey, u64)>,
}

impl RewardVault for StubVault {
    fn balance(&self) -> u64 {
        self.balance
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require!(
            amount <= self.balance,
            LotteryError::InsufficientRewardBalance
        );
        self.balance -= amount;
        self.transfers.push((*to, amount));
        Ok(())
    }
}

pub struct Everyone;

impl PayoutEligibility for Everyone {
    fn is_eligible_for_direct_payout(&self, _owner: &Pubkey) -> bool {
        true
    }
}

pub struct Verified(pub BTreeSet<Pubkey>);

impl PayoutEligibility for Verified {
    fn is_eligible_for_direct_payout(&self, owner: &Pubkey) -> bool {
        self.0.contains(owner)
    }
}

/// Answers the single request with `word` once it is set.
pub struct StubOracle {
    pub word: Option<[u8; 32]>,
    pub requests: u32,
}

impl RandomnessPort for StubOracle {
    fn request_random_number(&mut self) -> Result<Pubkey> {
        self.requests += 1;
        Ok(request())
    }

    fn random_word(&self, request_id: &Pubkey) -> Result<[u8; 32]> {
        require_keys_eq!(
            *request_id,
            request(),
            LotteryError::UnknownRandomnessRequest
        );
        self.word
            .ok_or_else(|| error!(LotteryError::RandomnessNotResolved))
    }
}

pub struct Fixture {
    pub lottery: Lottery,
    pub tickets: StubTickets,
    pub vault: StubVault,
    pub oracle: StubOracle,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            lottery: Lottery::new(authority(), ticket_program(), FREEZE_TIME, LOTTERY_TIME, 255)
                .unwrap(),
            tickets: StubTickets::default(),
            vault: StubVault {
                balance: VAULT_BALANCE,
                transfers: Vec::new(),
            },
            oracle: StubOracle {
                word: None,
                requests: 0,
            },
        }
    }

    /// Two organizations with two campaigns of five tickets each. The first
    /// organization's tickets are held by `user1`, the second's by `user2`.
    pub fn standard() -> Self {
        let mut fixture = Self::new();
        fixture.add_campaign(0, 0, vec![user1(); 5]);
        fixture.add_campaign(1, 0, vec![user1(); 5]);
        fixture.add_campaign(2, 1, vec![user2(); 5]);
        fixture.add_campaign(3, 1, vec![user2(); 5]);
        fixture
    }

    /// `standard` with the standard tiers, initialized and holding `word`.
    pub fn drawn(word: [u8; 32]) -> Self {
        let mut fixture = Self::standard();
        fixture.setup(&standard_tiers(), &STANDARD_SHARES).unwrap();
        fixture.initialize(0).unwrap();
        fixture.run().unwrap();
        fixture.fulfill(word).unwrap();
        fixture
    }

    pub fn add_campaign(&mut self, n: u8, organization_n: u8, holders: Vec<Pubkey>) {
        let ticket = TicketContract {
            key: ticket_contract(n),
            campaign: campaign(n),
            organization: organization(organization_n),
        };
        self.lottery
            .register_ticket_contract(&authority(), ticket)
            .unwrap();
        self.tickets.set_holders(ticket.key, holders);
    }

    pub fn setup(&mut self, tiers: &[TierConfig], shares: &[u16]) -> Result<()> {
        self.lottery.setup_lottery(
            &authority(),
            FREEZE_TIME,
            reward_mint(),
            true,
            1_000,
            tiers,
            shares,
        )
    }

    pub fn initialize(&mut self, max_organizations: u16) -> Result<()> {
        self.lottery
            .initialize_lottery(&authority(), FREEZE_TIME, max_organizations, &self.tickets)
    }

    pub fn run(&mut self) -> Result<Pubkey> {
        self.lottery
            .run_lottery(&authority(), LOTTERY_TIME, &mut self.oracle)
    }

    pub fn fulfill(&mut self, word: [u8; 32]) -> Result<[u8; 32]> {
        self.oracle.word = Some(word);
        self.lottery.consume_randomness(&self.oracle)
    }

    pub fn settle(
        &mut self,
        tier_batch_count: u8,
        eligibility: &impl PayoutEligibility,
    ) -> Result<Payouts> {
        self.lottery.reward_winners(
            &authority(),
            tier_batch_count,
            &self.tickets,
            eligibility,
            &mut self.vault,
        )
    }
}
