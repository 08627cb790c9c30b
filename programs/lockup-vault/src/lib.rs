pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod util;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod lockup_vault {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        base_lock_duration: u64,
        penalty_rate_bp: u16,
    ) -> Result<()> {
        initialize::handle_initialize(ctx, base_lock_duration, penalty_rate_bp)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64, tier: u8) -> Result<()> {
        deposit::handle_deposit(ctx, amount, tier)
    }

    pub fn withdraw(ctx: Context<Withdraw>, position_ids: Vec<u64>) -> Result<()> {
        withdraw::handle_withdraw(ctx, position_ids)
    }

    pub fn early_withdraw(ctx: Context<EarlyWithdraw>, position_id: u64) -> Result<()> {
        early_withdraw::handle_early_withdraw(ctx, position_id)
    }

    pub fn extend_lock(ctx: Context<ExtendLock>, position_id: u64, new_tier: u8) -> Result<()> {
        extend_lock::handle_extend_lock(ctx, position_id, new_tier)
    }

    pub fn set_rate_table(ctx: Context<SetRateTable>, rates: Vec<u16>) -> Result<()> {
        configure_vault::handle_set_rate_table(ctx, rates)
    }

    pub fn set_penalty_rate(ctx: Context<SetPenaltyRate>, penalty_rate_bp: u16) -> Result<()> {
        configure_vault::handle_set_penalty_rate(ctx, penalty_rate_bp)
    }

    pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        configure_vault::handle_transfer_admin(ctx, new_admin)
    }

    pub fn deposit_reward_budget(ctx: Context<DepositRewardBudget>, amount: u64) -> Result<()> {
        reward_budget::handle_deposit_reward_budget(ctx, amount)
    }

    pub fn withdraw_reward_budget(ctx: Context<WithdrawRewardBudget>, amount: u64) -> Result<()> {
        reward_budget::handle_withdraw_reward_budget(ctx, amount)
    }

    pub fn withdraw_penalty(ctx: Context<WithdrawPenalty>, amount: u64) -> Result<()> {
        penalty_pool::handle_withdraw_penalty(ctx, amount)
    }

    pub fn burn_penalty(ctx: Context<BurnPenalty>, amount: u64) -> Result<()> {
        penalty_pool::handle_burn_penalty(ctx, amount)
    }

    pub fn convert_penalty_into_rewards(
        ctx: Context<ConvertPenaltyIntoRewards>,
        amount: u64,
    ) -> Result<()> {
        penalty_pool::handle_convert_penalty_into_rewards(ctx, amount)
    }
}
