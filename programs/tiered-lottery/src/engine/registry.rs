use anchor_lang::prelude::*;

use crate::constants::*;
use crate::engine::TicketResolver;
use crate::error::LotteryError;
use crate::events::{LotteryInitialized, OrganizationInitialized, TicketContractRegistered};
use crate::state::*;

impl Lottery {
    /// Records a campaign ticket contract. The first contract of an
    /// organization appends the organization itself.
    pub fn register_ticket_contract(
        &mut self,
        caller: &Pubkey,
        ticket: TicketContract,
    ) -> Result<u16> {
        self.authorize(caller, Action::RegisterTickets)?;
        require!(
            self.phase.accepts_registrations(),
            LotteryError::RegistrationClosed
        );
        require!(
            !self
                .campaigns
                .iter()
                .any(|campaign| campaign.ticket_contract == ticket.key),
            LotteryError::TicketContractAlreadyRegistered
        );
        require!(
            self.campaigns.len() < MAX_CAMPAIGNS,
            LotteryError::CapacityExceeded
        );

        let organization = match self.organization_index(&ticket.organization) {
            Some(index) => {
                require!(
                    self.organizations[index].campaigns.len() < MAX_CAMPAIGNS_PER_ORGANIZATION,
                    LotteryError::CapacityExceeded
                );
                index
            }
            None => {
                require!(
                    self.organizations.len() < MAX_ORGANIZATIONS,
                    LotteryError::CapacityExceeded
                );
                self.organizations.push(Organization {
                    key: ticket.organization,
                    share_bps: 0,
                    campaigns: Vec::new(),
                    range: TicketRange::default(),
                    initialized: false,
                });
                self.organizations.len() - 1
            }
        };

        let campaign_index = self.campaigns.len() as u16;
        self.campaigns.push(CampaignTickets {
            ticket_contract: ticket.key,
            campaign: ticket.campaign,
            organization: organization as u16,
            range: TicketRange::default(),
        });
        self.organizations[organization].campaigns.push(campaign_index);

        msg!(
            "Registered ticket contract {} for organization {}",
            ticket.key,
            ticket.organization
        );
        emit!(TicketContractRegistered {
            ticket_contract: ticket.key,
            campaign: ticket.campaign,
            organization: ticket.organization,
            campaign_index,
        });
        Ok(campaign_index)
    }

    /// Freezes the ticket ranges of up to `max_organizations` organizations
    /// (0 means all remaining). The call finishing the last organization also
    /// resolves the tier sizes.
    pub fn initialize_lottery(
        &mut self,
        caller: &Pubkey,
        now: i64,
        max_organizations: u16,
        tickets: &impl TicketResolver,
    ) -> Result<()> {
        self.authorize(caller, Action::Initialize)?;
        match self.phase {
            LotteryPhase::Created => return err!(LotteryError::LotteryNotSetUp),
            LotteryPhase::Configured | LotteryPhase::Initializing => {}
            _ => return err!(LotteryError::LotteryAlreadyInitialized),
        }
        require!(
            now >= self.ticket_freeze_time,
            LotteryError::TicketPeriodNotFinished
        );
        self.check_shares_current()?;

        let budget = match max_organizations {
            0 => usize::MAX,
            n => n as usize,
        };

        let mut next = self.clone();
        let pending: Vec<usize> = next
            .organizations
            .iter()
            .enumerate()
            .filter(|(_, organization)| !organization.initialized)
            .map(|(index, _)| index)
            .take(budget)
            .collect();
        for &index in &pending {
            next.initialize_organization(index, tickets)?;
        }

        let completed = next.initialized_organizations as usize == next.organizations.len();
        if completed {
            next.resolve_tiers()?;
            next.advance_phase(LotteryPhase::Initialized)?;
        } else if next.phase == LotteryPhase::Configured {
            next.advance_phase(LotteryPhase::Initializing)?;
        }
        *self = next;

        for &index in &pending {
            let organization = &self.organizations[index];
            emit!(OrganizationInitialized {
                organization: organization.key,
                first_ticket_id: organization.range.start,
                ticket_count: organization.range.len(),
            });
        }
        if completed {
            let total_winners: u64 = self
                .tiers
                .iter()
                .map(|tier| tier.winners_count as u64)
                .sum();
            msg!(
                "Lottery initialized: {} tickets, {} winners",
                self.total_supply,
                total_winners
            );
            emit!(LotteryInitialized {
                total_supply: self.total_supply,
                total_winners,
            });
        }
        Ok(())
    }

    fn initialize_organization(
        &mut self,
        index: usize,
        tickets: &impl TicketResolver,
    ) -> Result<()> {
        let start = self.total_supply;
        let mut cursor = start;

        for &campaign_index in &self.organizations[index].campaigns {
            let campaign = &mut self.campaigns[campaign_index as usize];
            let count = tickets.ticket_count(campaign)?;
            let end = cursor
                .checked_add(count)
                .ok_or_else(|| error!(LotteryError::MathOverflow))?;
            campaign.range = TicketRange { start: cursor, end };
            cursor = end;
        }

        let organization = &mut self.organizations[index];
        organization.range = TicketRange { start, end: cursor };
        organization.initialized = true;
        self.initialized_organizations += 1;
        self.total_supply = cursor;

        msg!(
            "Organization {} owns tickets [{}, {})",
            organization.key,
            start,
            cursor
        );
        Ok(())
    }

    /// Shares and FixedCount quotas must cover every registered organization.
    fn check_shares_current(&self) -> Result<()> {
        let organizations = self.organizations.len();
        let shares_current = self
            .organizations
            .iter()
            .all(|organization| organization.share_bps > 0);
        let quotas_current = self
            .tiers
            .iter()
            .filter(|tier| tier.kind == TierKind::FixedCount)
            .all(|tier| tier.organization_quotas.len() == organizations);
        require!(
            shares_current && quotas_current,
            LotteryError::OrganizationSharesOutdated
        );
        Ok(())
    }

    pub(crate) fn organization_index(&self, key: &Pubkey) -> Option<usize> {
        self.organizations
            .iter()
            .position(|organization| organization.key == *key)
    }

    /// Campaign holding `lottery_ticket_id` and the campaign-local id.
    pub fn locate_ticket(&self, lottery_ticket_id: u64) -> Result<(&CampaignTickets, u64)> {
        require!(
            lottery_ticket_id < self.total_supply,
            LotteryError::TicketNotFound
        );

        let organization = self
            .organizations
            .iter()
            .find(|organization| organization.range.contains(lottery_ticket_id))
            .ok_or_else(|| error!(LotteryError::TicketNotFound))?;
        organization
            .campaigns
            .iter()
            .map(|&index| &self.campaigns[index as usize])
            .find(|campaign| campaign.range.contains(lottery_ticket_id))
            .map(|campaign| (campaign, lottery_ticket_id - campaign.range.start))
            .ok_or_else(|| error!(LotteryError::TicketNotFound))
    }

    /// `(ticket contract, local ticket id)` behind a lottery ticket id.
    pub fn resolve_ticket(&self, lottery_ticket_id: u64) -> Result<(Pubkey, u64)> {
        let (campaign, local_id) = self.locate_ticket(lottery_ticket_id)?;
        Ok((campaign.ticket_contract, local_id))
    }

    pub fn lottery_ticket_id(&self, ticket_contract: &Pubkey, local_id: u64) -> Result<u64> {
        let campaign = self
            .campaigns
            .iter()
            .find(|campaign| campaign.ticket_contract == *ticket_contract)
            .ok_or_else(|| error!(LotteryError::TicketContractNotRegistered))?;
        require!(
            local_id < campaign.range.len(),
            LotteryError::TicketNotFound
        );
        Ok(campaign.range.start + local_id)
    }

    pub fn campaigns_of(&self, organization: &Pubkey) -> Vec<&CampaignTickets> {
        match self.organization_index(organization) {
            Some(index) => self.organizations[index]
                .campaigns
                .iter()
                .map(|&campaign| &self.campaigns[campaign as usize])
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn organization_range(&self, organization: &Pubkey) -> Option<TicketRange> {
        self.organization_index(organization)
            .map(|index| self.organizations[index].range)
    }

    pub fn organization_shares(&self) -> Vec<u16> {
        self.organizations
            .iter()
            .map(|organization| organization.share_bps)
            .collect()
    }
}
