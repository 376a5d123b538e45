use anchor_lang::prelude::*;

use crate::instructions::ports::SwitchboardRandomness;
use crate::state::*;

/// Accounts required to commit the draw to a randomness account.
///
/// The randomness account must have been committed in the previous slot and
/// not revealed yet.
#[derive(Accounts)]
pub struct RunLottery<'info> {
    /// Lottery authority or an operator.
    pub caller: Signer<'info>,

    #[account(mut)]
    pub lottery: Account<'info, Lottery>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's owner and data are validated in the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

pub fn process_run_lottery(ctx: Context<RunLottery>) -> Result<()> {
    let clock = Clock::get()?;
    let caller = ctx.accounts.caller.key();
    let mut randomness = SwitchboardRandomness::new(&ctx.accounts.randomness_account_data, clock.slot)?;

    ctx.accounts
        .lottery
        .run_lottery(&caller, clock.unix_timestamp, &mut randomness)?;
    Ok(())
}
