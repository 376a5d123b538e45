use anchor_lang::prelude::*;

use crate::constants::*;

/// Half-open range `[start, end)` of lottery ticket ids.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct TicketRange {
    pub start: u64,
    pub end: u64,
}

impl TicketRange {
    pub fn new(start: u64, len: u64) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, id: u64) -> bool {
        id >= self.start && id < self.end
    }

    /// Inclusive `(first, last)` view, `None` for an empty range.
    pub fn bounds(&self) -> Option<(u64, u64)> {
        if self.is_empty() {
            None
        } else {
            Some((self.start, self.end - 1))
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct Organization {
    /// Key identifying the organization in the enrollment hierarchy.
    pub key: Pubkey,

    /// Share of every FixedCount tier, in basis points. Zero until setup.
    pub share_bps: u16,

    /// Indices into `Lottery::campaigns`, in registration order.
    #[max_len(MAX_CAMPAIGNS_PER_ORGANIZATION)]
    pub campaigns: Vec<u16>,

    /// Global ticket-id range, set when the organization is initialized.
    pub range: TicketRange,

    pub initialized: bool,
}

/// One registered campaign ticket contract and its slice of the id space.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct CampaignTickets {
    /// Account holding the campaign's ticket book.
    pub ticket_contract: Pubkey,

    pub campaign: Pubkey,

    /// Index into `Lottery::organizations`.
    pub organization: u16,

    /// Nested inside the organization's range once initialized.
    pub range: TicketRange,
}

/// What a ticket contract reports about itself at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicketContract {
    pub key: Pubkey,
    pub campaign: Pubkey,
    pub organization: Pubkey,
}
