/// Seed of the PDA that owns every reward vault of a lottery.
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault";

/// Basis-point denominator used by organization shares and RandomShare tiers.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Upper bound on winners of a single FixedCount tier.
pub const MAX_FIXED_TIER_WINNERS: u32 = 100;

pub const MAX_ORGANIZATIONS: usize = 32;
pub const MAX_CAMPAIGNS: usize = 128;
pub const MAX_CAMPAIGNS_PER_ORGANIZATION: usize = 16;
pub const MAX_TIERS: usize = 8;
pub const MAX_ROLE_GRANTS: usize = 16;

/// Storage bound on the winner list of one tier, RandomShare tiers included.
pub const MAX_TIER_WINNERS: usize = 128;

/// Storage bound on winner records (paid and pending) across all tiers. A
/// settlement call at this bound must fit in `HEAP_FRAME_BYTES`.
pub const MAX_TOTAL_WINNERS: usize = 128;

/// Heap the program allocates from. Every transaction calling the program
/// requests a heap frame of this size through the compute budget program.
pub const HEAP_FRAME_BYTES: usize = 256 * 1024;
