use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::LotteryError;
use crate::events::RoleChanged;
use crate::state::*;

impl Lottery {
    /// Fresh lottery owned by `authority`. Tickets become final at
    /// `ticket_freeze_time`; the draw may run from `lottery_time`.
    pub fn new(
        authority: Pubkey,
        ticket_program: Pubkey,
        ticket_freeze_time: i64,
        lottery_time: i64,
        vault_bump: u8,
    ) -> Result<Self> {
        require!(
            ticket_freeze_time > 0 && lottery_time > ticket_freeze_time,
            LotteryError::InvalidTimeValues
        );

        Ok(Self {
            authority,
            vault_bump,
            role_grants: Vec::new(),
            ticket_program,
            ticket_freeze_time,
            lottery_time,
            phase: LotteryPhase::Created,
            reward_mint: Pubkey::default(),
            cap: 0,
            organizations: Vec::new(),
            campaigns: Vec::new(),
            initialized_organizations: 0,
            total_supply: 0,
            tiers: Vec::new(),
            next_tier: 0,
            randomness: RandomnessState::default(),
            winners: Vec::new(),
            over_cap_winners: Vec::new(),
        })
    }

    pub fn is_authorized(&self, caller: &Pubkey, action: Action) -> bool {
        if *caller == self.authority {
            return true;
        }
        match action.required_role() {
            Some(role) => self
                .role_grants
                .iter()
                .any(|grant| grant.account == *caller && grant.role == role),
            None => false,
        }
    }

    pub fn authorize(&self, caller: &Pubkey, action: Action) -> Result<()> {
        if !self.is_authorized(caller, action) {
            msg!("{} is not allowed to {:?}", caller, action);
            return err!(LotteryError::Unauthorized);
        }
        Ok(())
    }

    pub fn grant_role(&mut self, caller: &Pubkey, account: Pubkey, role: Role) -> Result<()> {
        self.authorize(caller, Action::ManageRoles)?;

        let grant = RoleGrant { account, role };
        require!(
            !self.role_grants.contains(&grant),
            LotteryError::RoleAlreadyGranted
        );
        require!(
            self.role_grants.len() < MAX_ROLE_GRANTS,
            LotteryError::CapacityExceeded
        );

        self.role_grants.push(grant);
        msg!("Granted {:?} to {}", role, account);
        emit!(RoleChanged {
            account,
            role,
            granted: true,
        });
        Ok(())
    }

    pub fn revoke_role(&mut self, caller: &Pubkey, account: Pubkey, role: Role) -> Result<()> {
        self.authorize(caller, Action::ManageRoles)?;

        let position = self
            .role_grants
            .iter()
            .position(|grant| grant.account == account && grant.role == role)
            .ok_or_else(|| error!(LotteryError::RoleNotFound))?;

        self.role_grants.remove(position);
        msg!("Revoked {:?} from {}", role, account);
        emit!(RoleChanged {
            account,
            role,
            granted: false,
        });
        Ok(())
    }

    pub(crate) fn advance_phase(&mut self, next: LotteryPhase) -> Result<()> {
        require!(
            self.phase.can_transition_to(next),
            LotteryError::InvalidPhaseTransition
        );
        msg!("Lottery phase: {:?} -> {:?}", self.phase, next);
        self.phase = next;
        Ok(())
    }
}
