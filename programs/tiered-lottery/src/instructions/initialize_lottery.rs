use anchor_lang::prelude::*;

use crate::instructions::ports::TicketBooks;
use crate::state::*;

/// Accounts required to freeze ticket ranges.
///
/// The ticket books of every organization being initialized are passed as
/// remaining accounts.
#[derive(Accounts)]
pub struct InitializeLottery<'info> {
    /// Lottery authority or an operator.
    pub caller: Signer<'info>,

    #[account(mut)]
    pub lottery: Account<'info, Lottery>,
}

pub fn process_initialize_lottery<'info>(
    ctx: Context<'_, '_, '_, 'info, InitializeLottery<'info>>,
    max_organizations: u16,
) -> Result<()> {
    let clock = Clock::get()?;
    let caller = ctx.accounts.caller.key();
    let lottery = &mut ctx.accounts.lottery;
    let books = TicketBooks::load(ctx.remaining_accounts, &lottery.ticket_program)?;

    lottery.initialize_lottery(&caller, clock.unix_timestamp, max_organizations, &books)
}
