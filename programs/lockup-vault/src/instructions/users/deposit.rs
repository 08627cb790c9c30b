use crate::util::compound_reward;
use crate::{constants::*, error::ErrorCode, StakePosition, StakerAccount, VaultState};
/// Deposit tokens under a tier-selected lock; the compounding reward is
/// committed from the budget now and paid at withdrawal.
use anchor_lang::prelude::*;
use anchor_lang::solana_program::pubkey::Pubkey;
use anchor_spl::token::{Mint, Token, TokenAccount, Transfer};
use anchor_spl::associated_token::AssociatedToken;

#[derive(Accounts)]
pub struct Deposit<'info> {
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
    pub depositor: Signer<'info>,
    #[account(mut, token::mint = token_mint, token::authority = depositor)]
    pub depositor_token_account: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = depositor,
        space = 8 + StakerAccount::INIT_SPACE,
        seeds = [
            &main_state.key().to_bytes(),
            &depositor.key().to_bytes(),
            STAKER_ACCOUNT_SEED
        ],
        bump
    )]
    pub staker_account: Account<'info, StakerAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handle_deposit(ctx: Context<Deposit>, amount: u64, tier: u8) -> Result<()> {
    require_gte!(amount, 1, ErrorCode::InvalidAmount);

    // tier must index the rate table
    let rate_bp = ctx.accounts.main_state.rate_for_tier(tier)?;

    // reward is fixed now, for the whole lock, from the uncommitted budget
    let reward = compound_reward(amount, tier, rate_bp);
    ctx.accounts.main_state.register_deposit(amount, reward)?;

    let now = Clock::get().unwrap().unix_timestamp as u64;
    let position_id = ctx.accounts.main_state.issue_position_id();
    let unlock_time = now + ctx.accounts.main_state.lock_duration(tier);

    let staker_account = &mut ctx.accounts.staker_account;
    if staker_account.owner == Pubkey::default() {
        // first deposit for this owner
        staker_account.main_state = ctx.accounts.main_state.key();
        staker_account.owner = ctx.accounts.depositor.key();
    }
    staker_account.push_position(StakePosition {
        id: position_id,
        principal: amount,
        accrued_reward: reward,
        lock_start: now,
        unlock_time,
    })?;

    // pull the principal into the vault
    {
        let transfer_instruction = Transfer {
            from: ctx.accounts.depositor_token_account.to_account_info(),
            to: ctx.accounts.vault_token_account.to_account_info(),
            authority: ctx.accounts.depositor.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            transfer_instruction,
        );
        anchor_spl::token::transfer(cpi_ctx, amount)?;
    }

    emit!(crate::events::DepositEvent {
        main_state: ctx.accounts.main_state.key(),
        depositor: ctx.accounts.depositor.key(),
        position_id,
        tier,
        amount,
        reward,
        lock_start: now,
        unlock_time,
        total_staked: ctx.accounts.main_state.total_staked,
        rewards_available: ctx.accounts.main_state.rewards_available,
    });
    Ok(())
}
