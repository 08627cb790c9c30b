use crate::util::decay_penalty;
use crate::{constants::*, StakerAccount, VaultState};
/// Exit a still-locked position at a time-decaying penalty on principal.
/// The committed reward is never penalized: it returns whole to the budget.
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct EarlyWithdraw<'info> {
    #[account(mut, has_one = token_mint)]
    pub main_state: Account<'info, VaultState>,

    #[account()]
    pub token_mint: Box<Account<'info, Mint>>,

    /// CHECK: Auth PDA
    #[account(
        seeds = [
            &main_state.key().to_bytes(),
            VAULT_ATA_AUTH_SEED
        ],
        bump
    )]
    pub vault_ata_auth: UncheckedAccount<'info>,
    #[account(mut, associated_token::mint = token_mint, associated_token::authority = vault_ata_auth)]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub staker: Signer<'info>,
    #[account(mut, token::mint = token_mint, token::authority = staker)]
    pub staker_token_account: Account<'info, TokenAccount>,

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

    pub token_program: Program<'info, Token>,
}

pub fn handle_early_withdraw(ctx: Context<EarlyWithdraw>, position_id: u64) -> Result<()> {
    let now = Clock::get().unwrap().unix_timestamp as u64;

    // only still-locked positions qualify; unlocked ones use withdraw
    let position = ctx.accounts.staker_account.take_locked(position_id, now)?;

    let penalty = decay_penalty(
        position.principal,
        position.lock_start,
        position.unlock_time,
        now,
        ctx.accounts.main_state.penalty_rate_bp,
    );
    // penalty_rate_bp <= 2000, so penalty < principal
    let payout = position.principal - penalty;

    ctx.accounts.main_state.register_early_withdraw(
        position.balance(),
        position.accrued_reward,
        penalty,
    );

    let main_state_key = ctx.accounts.main_state.key();
    let signer_seeds: &[&[&[u8]]] = &[&[
        main_state_key.as_ref(),
        VAULT_ATA_AUTH_SEED,
        &[ctx.bumps.vault_ata_auth],
    ]];
    {
        let transfer_instruction = Transfer {
            from: ctx.accounts.vault_token_account.to_account_info(),
            to: ctx.accounts.staker_token_account.to_account_info(),
            authority: ctx.accounts.vault_ata_auth.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            transfer_instruction,
            signer_seeds,
        );
        anchor_spl::token::transfer(cpi_ctx, payout)?;
    }

    emit!(crate::events::EarlyWithdrawEvent {
        main_state: main_state_key,
        staker: ctx.accounts.staker.key(),
        position_id,
        principal: position.principal,
        penalty,
        payout,
        reward_released: position.accrued_reward,
        total_staked: ctx.accounts.main_state.total_staked,
        rewards_available: ctx.accounts.main_state.rewards_available,
        total_penalty: ctx.accounts.main_state.total_penalty,
    });
    Ok(())
}
