use crate::util::compound_reward;
use crate::{constants::*, StakerAccount, VaultState};
/// Re-lock a position for a new tier: the extra compounding reward is
/// committed on the current balance (principal + already-accrued reward).
/// A locked position extends in place, an unlocked one restarts from now.
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ExtendLock<'info> {
    #[account(mut)]
    pub main_state: Account<'info, VaultState>,

    #[account(mut)]
    pub staker: Signer<'info>,

    #[account(
        mut,
        seeds = [
            &main_state.key().to_bytes(),
            &staker.key().to_bytes(),
            STAKER_ACCOUNT_SEED
        ],
        bump
    )]
    pub staker_account: Account<'info, StakerAccount>,
}

pub fn handle_extend_lock(ctx: Context<ExtendLock>, position_id: u64, new_tier: u8) -> Result<()> {
    let now = Clock::get().unwrap().unix_timestamp as u64;

    let rate_bp = ctx.accounts.main_state.rate_for_tier(new_tier)?;
    let added = ctx.accounts.main_state.lock_duration(new_tier);
    let max_lock = ctx.accounts.main_state.max_lock_duration();

    // validate everything before mutating position or treasury
    let position = ctx.accounts.staker_account.position(position_id)?;
    let extra_reward = compound_reward(position.balance(), new_tier, rate_bp);
    let (lock_start, unlock_time) = position.extended_times(now, added, max_lock)?;

    ctx.accounts.main_state.register_extend(extra_reward)?;

    let position = ctx.accounts.staker_account.position_mut(position_id)?;
    position.lock_start = lock_start;
    position.unlock_time = unlock_time;
    position.accrued_reward += extra_reward;

    emit!(crate::events::ExtendLockEvent {
        main_state: ctx.accounts.main_state.key(),
        staker: ctx.accounts.staker.key(),
        position_id,
        new_tier,
        extra_reward,
        lock_start,
        unlock_time,
        total_staked: ctx.accounts.main_state.total_staked,
        rewards_available: ctx.accounts.main_state.rewards_available,
    });
    Ok(())
}
