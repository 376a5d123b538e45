use anchor_lang::prelude::*;

use crate::state::*;

#[derive(Accounts)]
pub struct DrawWinners<'info> {
    /// Lottery authority or an operator.
    pub caller: Signer<'info>,

    #[account(mut)]
    pub lottery: Account<'info, Lottery>,
}

/// Draws winners with at most `max_attempts` hash evaluations (0 = no limit),
/// so large tiers can be spread over several transactions.
pub fn process_draw_winners(ctx: Context<DrawWinners>, max_attempts: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts.lottery.draw_winners(&caller, max_attempts)?;
    Ok(())
}
