use anchor_lang::prelude::*;

use crate::instructions::ports::is_deployed_mint;
use crate::state::*;

/// Accounts required to configure rewards.
#[derive(Accounts)]
pub struct SetupLottery<'info> {
    pub authority: Signer<'info>,

    #[account(mut)]
    pub lottery: Account<'info, Lottery>,

    /// CHECK: Must be an initialized token mint; checked in the handler.
    pub reward_mint: UncheckedAccount<'info>,
}

/// Stores the reward mint, the per-owner cap, the tier list and the share of
/// every registered organization (same order as registration).
pub fn process_setup_lottery(
    ctx: Context<SetupLottery>,
    cap: u64,
    tiers: Vec<TierConfig>,
    organization_shares: Vec<u16>,
) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();
    let reward_mint = ctx.accounts.reward_mint.key();
    let deployed = is_deployed_mint(&ctx.accounts.reward_mint);

    ctx.accounts.lottery.setup_lottery(
        &authority,
        clock.unix_timestamp,
        reward_mint,
        deployed,
        cap,
        &tiers,
        &organization_shares,
    )
}
