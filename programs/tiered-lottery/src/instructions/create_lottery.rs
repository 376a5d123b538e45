use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::LotteryCreated;
use crate::state::*;

/// Accounts required to create a lottery.
///
/// The lottery account is too large to be allocated through CPI, so the
/// client creates it beforehand with `8 + Lottery::INIT_SPACE` bytes owned by
/// this program.
#[derive(Accounts)]
pub struct CreateLottery<'info> {
    /// Becomes the lottery authority.
    pub authority: Signer<'info>,

    #[account(zero)]
    pub lottery: Account<'info, Lottery>,

    /// PDA owning the reward vault token account.
    /// CHECK: Holds no data; only its address and bump are used.
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, lottery.key().as_ref()],
        bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,
}

pub fn process_create_lottery(
    ctx: Context<CreateLottery>,
    ticket_program: Pubkey,
    ticket_freeze_time: i64,
    lottery_time: i64,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let lottery = Lottery::new(
        authority,
        ticket_program,
        ticket_freeze_time,
        lottery_time,
        ctx.bumps.vault_authority,
    )?;
    ctx.accounts.lottery.set_inner(lottery);

    msg!(
        "Lottery created: freeze at {}, draw from {}",
        ticket_freeze_time,
        lottery_time
    );
    emit!(LotteryCreated {
        lottery: ctx.accounts.lottery.key(),
        authority,
        ticket_program,
        ticket_freeze_time,
        lottery_time,
    });
    Ok(())
}
