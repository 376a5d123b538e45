use anchor_lang::prelude::*;

use crate::instructions::ports::SwitchboardRandomness;
use crate::state::*;

/// Accounts required to record the revealed randomness. Anyone may submit
/// it; the value can only come from the committed account.
#[derive(Accounts)]
pub struct FulfillRandomNumber<'info> {
    #[account(mut)]
    pub lottery: Account<'info, Lottery>,

    /// CHECK: Must be the account committed by `run_lottery`; checked in the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

pub fn process_fulfill_random_number(ctx: Context<FulfillRandomNumber>) -> Result<()> {
    let clock = Clock::get()?;
    let randomness = SwitchboardRandomness::new(&ctx.accounts.randomness_account_data, clock.slot)?;

    ctx.accounts.lottery.consume_randomness(&randomness)?;
    Ok(())
}
