use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct WinnerRecord {
    pub tier: u8,
    pub ticket_id: u64,
    pub amount: u64,
    /// `false` while the record waits in the over-cap queue.
    pub paid: bool,
}

/// Randomness request bookkeeping for the single draw of a lottery.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct RandomnessState {
    /// Oracle account the request was committed to.
    pub request_id: Option<Pubkey>,

    /// Normalized salt, little-endian, never zero once set.
    pub salt: Option<[u8; 32]>,
}
