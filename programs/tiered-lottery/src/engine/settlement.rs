use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::constants::MAX_TOTAL_WINNERS;
use crate::engine::{Budget, PayoutEligibility, RewardVault, TicketResolver};
use crate::error::LotteryError;
use crate::events::{OverCapWinnerQueued, OverCapWinnerRewarded, TokensWithdrawn, WinnerRewarded};
use crate::state::*;

/// Amount owed to each owner by one settlement call.
pub type Payouts = BTreeMap<Pubkey, u64>;

impl Lottery {
    /// Pays the winners of up to `tier_batch_count` tiers (0 = all remaining),
    /// drawing any tier not drawn yet. Payouts that would push an owner over
    /// the cap within this call are queued unless `eligibility` allows them.
    ///
    /// The cap counts only what the owner accumulates in this call. Settling
    /// in smaller batches restarts the count each call, so fewer payouts are
    /// queued and more leave the vault without confirmation.
    pub fn reward_winners(
        &mut self,
        caller: &Pubkey,
        tier_batch_count: u8,
        tickets: &impl TicketResolver,
        eligibility: &impl PayoutEligibility,
        vault: &mut impl RewardVault,
    ) -> Result<Payouts> {
        self.authorize(caller, Action::RewardWinners)?;
        require!(
            self.phase != LotteryPhase::Settled,
            LotteryError::LotteryAlreadyProcessed
        );
        self.random_salt()?;

        let mut next = self.clone();
        let remaining = next.tiers.len() - next.next_tier as usize;
        let batch = match tier_batch_count as usize {
            0 => remaining,
            n => n.min(remaining),
        };

        let mut payouts = Payouts::new();
        let mut paid = Vec::with_capacity(MAX_TOTAL_WINNERS);
        let mut queued = Vec::new();
        for _ in 0..batch {
            let index = next.next_tier as usize;
            next.advance_tier(index, &mut Budget::unbounded())?;

            let tier = &next.tiers[index];
            for &ticket_id in tier.winners() {
                let owner = next.ticket_owner(ticket_id, tickets)?;
                let mut record = WinnerRecord {
                    tier: index as u8,
                    ticket_id,
                    amount: tier.reward_amount,
                    paid: false,
                };

                let accumulated = payouts.get(&owner).copied().unwrap_or_default();
                let total = accumulated
                    .checked_add(record.amount)
                    .ok_or_else(|| error!(LotteryError::MathOverflow))?;
                if eligibility.is_eligible_for_direct_payout(&owner) || total <= next.cap {
                    payouts.insert(owner, total);
                    record.paid = true;
                    paid.push((record, owner));
                } else {
                    queued.push((record, owner));
                }
            }
            next.next_tier += 1;
        }

        next.winners.extend(paid.iter().map(|(record, _)| *record));
        next.over_cap_winners
            .extend(queued.iter().map(|(record, _)| *record));
        if next.next_tier as usize == next.tiers.len() {
            next.advance_phase(LotteryPhase::Settled)?;
        }

        let total = sum_payouts(&payouts)?;
        require!(
            vault.balance() >= total,
            LotteryError::InsufficientRewardBalance
        );
        *self = next;

        for (owner, amount) in &payouts {
            vault.transfer(owner, *amount)?;
        }

        for (record, owner) in &paid {
            emit!(WinnerRewarded {
                tier: record.tier,
                ticket_id: record.ticket_id,
                owner: *owner,
                amount: record.amount,
            });
        }
        for (record, owner) in &queued {
            emit!(OverCapWinnerQueued {
                tier: record.tier,
                ticket_id: record.ticket_id,
                owner: *owner,
                amount: record.amount,
            });
        }
        msg!(
            "Rewarded {} winners ({} tokens), {} queued, next tier {}",
            paid.len(),
            total,
            queued.len(),
            self.next_tier
        );
        Ok(payouts)
    }

    /// Confirms pending over-cap payouts. Any unknown id aborts the batch.
    pub fn reward_over_cap_winners(
        &mut self,
        caller: &Pubkey,
        ticket_ids: &[u64],
        tickets: &impl TicketResolver,
        vault: &mut impl RewardVault,
    ) -> Result<Payouts> {
        self.authorize(caller, Action::RewardOverCap)?;

        let mut next = self.clone();
        let mut payouts = Payouts::new();
        let mut rewarded = Vec::with_capacity(ticket_ids.len());
        for &ticket_id in ticket_ids {
            let position = next
                .over_cap_winners
                .iter()
                .position(|record| record.ticket_id == ticket_id)
                .ok_or_else(|| error!(LotteryError::OverCapWinnerNotFound))?;
            let mut record = next.over_cap_winners.remove(position);
            record.paid = true;

            let owner = next.ticket_owner(ticket_id, tickets)?;
            let owed = payouts.entry(owner).or_default();
            *owed = owed
                .checked_add(record.amount)
                .ok_or_else(|| error!(LotteryError::MathOverflow))?;

            next.winners.push(record);
            rewarded.push((record, owner));
        }

        let total = sum_payouts(&payouts)?;
        require!(
            vault.balance() >= total,
            LotteryError::InsufficientRewardBalance
        );
        *self = next;

        for (owner, amount) in &payouts {
            vault.transfer(owner, *amount)?;
        }
        for (record, owner) in &rewarded {
            emit!(OverCapWinnerRewarded {
                tier: record.tier,
                ticket_id: record.ticket_id,
                owner: *owner,
                amount: record.amount,
            });
        }
        msg!("Confirmed {} over-cap winners ({} tokens)", rewarded.len(), total);
        Ok(payouts)
    }

    pub fn reward_over_cap_winner(
        &mut self,
        caller: &Pubkey,
        ticket_id: u64,
        tickets: &impl TicketResolver,
        vault: &mut impl RewardVault,
    ) -> Result<Payouts> {
        self.reward_over_cap_winners(caller, &[ticket_id], tickets, vault)
    }

    pub fn withdraw_tokens(
        &self,
        caller: &Pubkey,
        recipient: &Pubkey,
        amount: u64,
        vault: &mut impl RewardVault,
    ) -> Result<()> {
        self.authorize(caller, Action::Withdraw)?;
        require!(
            vault.balance() >= amount,
            LotteryError::InsufficientRewardBalance
        );

        vault.transfer(recipient, amount)?;
        msg!("Withdrew {} tokens to {}", amount, recipient);
        emit!(TokensWithdrawn {
            recipient: *recipient,
            amount,
        });
        Ok(())
    }

    pub fn withdraw_all_tokens(
        &self,
        caller: &Pubkey,
        recipient: &Pubkey,
        vault: &mut impl RewardVault,
    ) -> Result<u64> {
        let amount = vault.balance();
        self.withdraw_tokens(caller, recipient, amount, vault)?;
        Ok(amount)
    }

    pub(crate) fn ticket_owner(
        &self,
        lottery_ticket_id: u64,
        tickets: &impl TicketResolver,
    ) -> Result<Pubkey> {
        let (campaign, local_id) = self.locate_ticket(lottery_ticket_id)?;
        tickets.resolve_owner(campaign, local_id)
    }

    pub fn winners_count(&self) -> usize {
        self.winners.len()
    }

    pub fn over_cap_winners_count(&self) -> usize {
        self.over_cap_winners.len()
    }

    /// Reward recorded for `ticket_id`, paid or pending; 0 if it did not win.
    pub fn winner_amount(&self, ticket_id: u64) -> u64 {
        self.winners
            .iter()
            .chain(self.over_cap_winners.iter())
            .find(|record| record.ticket_id == ticket_id)
            .map_or(0, |record| record.amount)
    }
}

fn sum_payouts(payouts: &Payouts) -> Result<u64> {
    payouts.values().try_fold(0u64, |sum, amount| {
        sum.checked_add(*amount)
            .ok_or_else(|| error!(LotteryError::MathOverflow))
    })
}
