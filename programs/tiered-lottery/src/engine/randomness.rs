use anchor_lang::prelude::*;

use crate::engine::RandomnessPort;
use crate::error::LotteryError;
use crate::events::{RandomnessFulfilled, RandomnessRequested};
use crate::state::*;

/// Zero is not a usable salt; it maps to 1 (little-endian).
pub fn normalize_salt(raw: [u8; 32]) -> [u8; 32] {
    if raw == [0u8; 32] {
        let mut salt = [0u8; 32];
        salt[0] = 1;
        salt
    } else {
        raw
    }
}

impl Lottery {
    /// Requests the single random value of the draw.
    pub fn run_lottery(
        &mut self,
        caller: &Pubkey,
        now: i64,
        randomness: &mut impl RandomnessPort,
    ) -> Result<Pubkey> {
        self.authorize(caller, Action::Run)?;
        match self.phase {
            LotteryPhase::Created | LotteryPhase::Configured | LotteryPhase::Initializing => {
                return err!(LotteryError::LotteryNotFullyInitialized)
            }
            LotteryPhase::Initialized => {}
            _ => return err!(LotteryError::LotteryAlreadyRun),
        }
        require!(now >= self.lottery_time, LotteryError::LotteryTimeNotReached);

        let request_id = randomness.request_random_number()?;
        self.advance_phase(LotteryPhase::AwaitingRandomness)?;
        self.randomness.request_id = Some(request_id);

        msg!("Randomness requested: {}", request_id);
        emit!(RandomnessRequested { request_id });
        Ok(request_id)
    }

    /// Records the random word delivered for the pending request.
    pub fn fulfill_random_number(&mut self, request_id: &Pubkey, raw: [u8; 32]) -> Result<[u8; 32]> {
        require!(
            self.randomness.salt.is_none(),
            LotteryError::RandomnessAlreadyFulfilled
        );
        require!(
            self.randomness.request_id == Some(*request_id),
            LotteryError::UnknownRandomnessRequest
        );

        let salt = normalize_salt(raw);
        self.advance_phase(LotteryPhase::Drawn)?;
        self.randomness.salt = Some(salt);

        msg!("Randomness fulfilled for {}", request_id);
        emit!(RandomnessFulfilled {
            request_id: *request_id,
            salt,
        });
        Ok(salt)
    }

    /// Pulls the word for the pending request from `randomness` and records it.
    pub fn consume_randomness(&mut self, randomness: &impl RandomnessPort) -> Result<[u8; 32]> {
        require!(
            self.randomness.salt.is_none(),
            LotteryError::RandomnessAlreadyFulfilled
        );
        let request_id = self
            .randomness
            .request_id
            .ok_or_else(|| error!(LotteryError::UnknownRandomnessRequest))?;

        let raw = randomness.random_word(&request_id)?;
        self.fulfill_random_number(&request_id, raw)
    }

    pub fn random_salt(&self) -> Result<[u8; 32]> {
        self.randomness
            .salt
            .ok_or_else(|| error!(LotteryError::RandomnessNotFulfilled))
    }
}
