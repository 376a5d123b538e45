use anchor_lang::prelude::*;

/// Campaign ticket book kept by the ticket program. The lottery reads it in
/// place to size a campaign and to find the current holder of a ticket, so
/// the field order is fixed.
#[account]
pub struct TicketBook {
    pub organization: Pubkey,
    pub campaign: Pubkey,
    /// Holder of every live ticket, indexed by local ticket id.
    pub holders: Vec<Pubkey>,
}
