use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::instructions::ports::TokenVault;
use crate::state::*;

/// Accounts required to move reward tokens out of the vault.
#[derive(Accounts)]
pub struct WithdrawTokens<'info> {
    pub authority: Signer<'info>,

    #[account(has_one = reward_mint)]
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

    /// Token account receiving the withdrawn tokens.
    #[account(
        mut,
        token::mint = reward_mint,
        token::token_program = token_program,
    )]
    pub destination: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn process_withdraw_tokens(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
    withdraw(ctx, Some(amount))
}

pub fn process_withdraw_all_tokens(ctx: Context<WithdrawTokens>) -> Result<()> {
    withdraw(ctx, None)
}

/// `None` empties the vault.
fn withdraw(ctx: Context<WithdrawTokens>, amount: Option<u64>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let recipient = ctx.accounts.destination.owner;
    let lottery_key = ctx.accounts.lottery.key();
    let bump = [ctx.accounts.lottery.vault_bump];
    let seeds: &[&[u8]] = &[VAULT_AUTHORITY_SEED, lottery_key.as_ref(), &bump];
    let signer_seeds = &[seeds];
    let recipients = [ctx.accounts.destination.to_account_info()];

    let mut vault = TokenVault::new(
        &ctx.accounts.vault,
        &ctx.accounts.reward_mint,
        ctx.accounts.vault_authority.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        &recipients,
        signer_seeds,
    );
    let lottery = &ctx.accounts.lottery;
    match amount {
        Some(amount) => lottery.withdraw_tokens(&authority, &recipient, amount, &mut vault),
        None => lottery
            .withdraw_all_tokens(&authority, &recipient, &mut vault)
            .map(|_| ()),
    }
}
