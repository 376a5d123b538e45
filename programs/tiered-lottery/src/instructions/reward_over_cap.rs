use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::instructions::ports::{TicketBooks, TokenVault};
use crate::state::*;

/// Accounts required to confirm pending over-cap payouts.
///
/// Remaining accounts carry the ticket books of the confirmed tickets and
/// the reward token account of each of their owners.
#[derive(Accounts)]
pub struct RewardOverCapWinners<'info> {
    /// Lottery authority or a rewarder.
    pub caller: Signer<'info>,

    #[account(mut, has_one = reward_mint)]
    pub lottery: Account<'info, Lottery>,

    pub reward_mint: InterfaceAccount<'info, Mint>,

    /// CHECK: PDA signing vault transfers.
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, lottery.key().as_ref()],
        bump = lottery.vault_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = reward_mint,
        associated_token::authority = vault_authority,
        associated_token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn process_reward_over_cap_winner<'info>(
    ctx: Context<'_, '_, '_, 'info, RewardOverCapWinners<'info>>,
    ticket_id: u64,
) -> Result<()> {
    process_reward_over_cap_winners(ctx, vec![ticket_id])
}

pub fn process_reward_over_cap_winners<'info>(
    ctx: Context<'_, '_, '_, 'info, RewardOverCapWinners<'info>>,
    ticket_ids: Vec<u64>,
) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let lottery_key = ctx.accounts.lottery.key();
    let bump = [ctx.accounts.lottery.vault_bump];
    let seeds: &[&[u8]] = &[VAULT_AUTHORITY_SEED, lottery_key.as_ref(), &bump];
    let signer_seeds = &[seeds];

    let mut vault = TokenVault::new(
        &ctx.accounts.vault,
        &ctx.accounts.reward_mint,
        ctx.accounts.vault_authority.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        ctx.remaining_accounts,
        signer_seeds,
    );
    let lottery = &mut ctx.accounts.lottery;
    let books = TicketBooks::load(ctx.remaining_accounts, &lottery.ticket_program)?;

    lottery.reward_over_cap_winners(&caller, &ticket_ids, &books, &mut vault)?;
    Ok(())
}
