use anchor_lang::prelude::*;

/// Lifecycle of a single lottery draw. Phases only move forward.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Default, InitSpace)]
#[repr(u8)]
pub enum LotteryPhase {
    /// Account created, tickets may be registered, no tiers yet.
    #[default]
    Created = 0,
    /// Tiers, cap and shares validated; may still be replaced.
    Configured = 1,
    /// Some organizations have their ticket ranges frozen.
    Initializing = 2,
    /// Every range is frozen and RandomShare tiers are resolved.
    Initialized = 3,
    /// Randomness requested, waiting for the oracle callback.
    AwaitingRandomness = 4,
    /// Salt recorded; winners may be drawn and paid.
    Drawn = 5,
    /// Every tier has been paid out or queued.
    Settled = 6,
}

impl LotteryPhase {
    pub fn can_transition_to(self, next: LotteryPhase) -> bool {
        use LotteryPhase::*;
        matches!(
            (self, next),
            (Created, Configured)
                | (Configured, Initializing)
                | (Configured, Initialized)
                | (Initializing, Initialized)
                | (Initialized, AwaitingRandomness)
                | (AwaitingRandomness, Drawn)
                | (Drawn, Settled)
        )
    }

    /// Ticket contracts can only join before any range is frozen.
    pub fn accepts_registrations(self) -> bool {
        matches!(self, LotteryPhase::Created | LotteryPhase::Configured)
    }

    /// Tiers and shares can be replaced until initialization completes.
    pub fn accepts_setup(self) -> bool {
        matches!(
            self,
            LotteryPhase::Created | LotteryPhase::Configured | LotteryPhase::Initializing
        )
    }

    pub fn has_salt(self) -> bool {
        matches!(self, LotteryPhase::Drawn | LotteryPhase::Settled)
    }
}
