use anchor_lang::prelude::*;
pub use instructions::*;
use state::*;

pub mod constants;
pub mod engine;
pub mod error;
pub mod events;
pub mod heap;
pub mod instructions;
pub mod state;

declare_id!("6rFpSsHFGG2eYz53KP4WSjBZpEgEMeRnMYsnhtBKmokt");

#[program]
pub mod tiered_lottery {
    use super::*;

    pub fn create_lottery(
        ctx: Context<CreateLottery>,
        ticket_program: Pubkey,
        ticket_freeze_time: i64,
        lottery_time: i64,
    ) -> Result<()> {
        process_create_lottery(ctx, ticket_program, ticket_freeze_time, lottery_time)
    }

    pub fn grant_role(ctx: Context<ManageRoles>, account: Pubkey, role: Role) -> Result<()> {
        process_grant_role(ctx, account, role)
    }

    pub fn revoke_role(ctx: Context<ManageRoles>, account: Pubkey, role: Role) -> Result<()> {
        process_revoke_role(ctx, account, role)
    }

    pub fn register_ticket_contract(ctx: Context<RegisterTicketContract>) -> Result<()> {
        process_register_ticket_contract(ctx)
    }

    pub fn setup_lottery(
        ctx: Context<SetupLottery>,
        cap: u64,
        tiers: Vec<TierConfig>,
        organization_shares: Vec<u16>,
    ) -> Result<()> {
        process_setup_lottery(ctx, cap, tiers, organization_shares)
    }

    pub fn initialize_lottery<'info>(
        ctx: Context<'_, '_, '_, 'info, InitializeLottery<'info>>,
        max_organizations: u16,
    ) -> Result<()> {
        process_initialize_lottery(ctx, max_organizations)
    }

    pub fn run_lottery(ctx: Context<RunLottery>) -> Result<()> {
        process_run_lottery(ctx)
    }

    pub fn fulfill_random_number(ctx: Context<FulfillRandomNumber>) -> Result<()> {
        process_fulfill_random_number(ctx)
    }

    pub fn draw_winners(ctx: Context<DrawWinners>, max_attempts: u64) -> Result<()> {
        process_draw_winners(ctx, max_attempts)
    }

    pub fn reward_winners<'info>(
        ctx: Context<'_, '_, '_, 'info, RewardWinners<'info>>,
        tier_batch_count: u8,
    ) -> Result<()> {
        process_reward_winners(ctx, tier_batch_count)
    }

    pub fn reward_over_cap_winner<'info>(
        ctx: Context<'_, '_, '_, 'info, RewardOverCapWinners<'info>>,
        ticket_id: u64,
    ) -> Result<()> {
        process_reward_over_cap_winner(ctx, ticket_id)
    }

    pub fn reward_over_cap_winners<'info>(
        ctx: Context<'_, '_, '_, 'info, RewardOverCapWinners<'info>>,
        ticket_ids: Vec<u64>,
    ) -> Result<()> {
        process_reward_over_cap_winners(ctx, ticket_ids)
    }

    pub fn withdraw_tokens(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
        process_withdraw_tokens(ctx, amount)
    }

    pub fn withdraw_all_tokens(ctx: Context<WithdrawTokens>) -> Result<()> {
        process_withdraw_all_tokens(ctx)
    }
}
