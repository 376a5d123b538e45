use anchor_lang::prelude::*;

use crate::state::*;

#[derive(Accounts)]
pub struct ManageRoles<'info> {
    pub authority: Signer<'info>,

    #[account(mut)]
    pub lottery: Account<'info, Lottery>,
}

pub fn process_grant_role(ctx: Context<ManageRoles>, account: Pubkey, role: Role) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    ctx.accounts.lottery.grant_role(&authority, account, role)
}

pub fn process_revoke_role(ctx: Context<ManageRoles>, account: Pubkey, role: Role) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    ctx.accounts.lottery.revoke_role(&authority, account, role)
}
