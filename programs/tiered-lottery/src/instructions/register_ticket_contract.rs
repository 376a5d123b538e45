use anchor_lang::prelude::*;

use crate::instructions::ports::load_ticket_book;
use crate::state::*;

/// Accounts required to register a campaign ticket book.
#[derive(Accounts)]
pub struct RegisterTicketContract<'info> {
    /// Lottery authority or a registrar.
    pub caller: Signer<'info>,

    #[account(mut)]
    pub lottery: Account<'info, Lottery>,

    /// CHECK: Must be a `TicketBook` owned by `lottery.ticket_program`; checked in the handler.
    pub ticket_book: UncheckedAccount<'info>,
}

pub fn process_register_ticket_contract(ctx: Context<RegisterTicketContract>) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let lottery = &mut ctx.accounts.lottery;
    let book = load_ticket_book(&ctx.accounts.ticket_book, &lottery.ticket_program)?;

    lottery.register_ticket_contract(
        &caller,
        TicketContract {
            key: ctx.accounts.ticket_book.key(),
            campaign: book.campaign,
            organization: book.organization,
        },
    )?;
    Ok(())
}
