use crate::{constants::*, error::ErrorCode, state::VaultState};
/// Admin funding and defunding of the uncommitted reward budget.
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct DepositRewardBudget<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(mut, has_one = admin @ ErrorCode::Unauthorized, has_one = token_mint)]
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

    #[account(mut, token::mint = token_mint, token::authority = admin)]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handle_deposit_reward_budget(ctx: Context<DepositRewardBudget>, amount: u64) -> Result<()> {
    ctx.accounts.main_state.fund_reward_budget(amount)?;

    {
        let transfer_instruction = Transfer {
            from: ctx.accounts.admin_token_account.to_account_info(),
            to: ctx.accounts.vault_token_account.to_account_info(),
            authority: ctx.accounts.admin.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            transfer_instruction,
        );
        anchor_spl::token::transfer(cpi_ctx, amount)?;
    }

    emit!(crate::events::RewardBudgetDepositedEvent {
        main_state: ctx.accounts.main_state.key(),
        admin: ctx.accounts.admin.key(),
        amount,
        rewards_available: ctx.accounts.main_state.rewards_available,
        total_rewards_deposited: ctx.accounts.main_state.total_rewards_deposited,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawRewardBudget<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(mut, has_one = admin @ ErrorCode::Unauthorized, has_one = token_mint)]
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

    #[account(mut, token::mint = token_mint, token::authority = admin)]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handle_withdraw_reward_budget(
    ctx: Context<WithdrawRewardBudget>,
    amount: u64,
) -> Result<()> {
    ctx.accounts.main_state.withdraw_reward_budget(amount)?;

    let main_state_key = ctx.accounts.main_state.key();
    let signer_seeds: &[&[&[u8]]] = &[&[
        main_state_key.as_ref(),
        VAULT_ATA_AUTH_SEED,
        &[ctx.bumps.vault_ata_auth],
    ]];
    {
        let transfer_instruction = Transfer {
            from: ctx.accounts.vault_token_account.to_account_info(),
            to: ctx.accounts.admin_token_account.to_account_info(),
            authority: ctx.accounts.vault_ata_auth.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            transfer_instruction,
            signer_seeds,
        );
        anchor_spl::token::transfer(cpi_ctx, amount)?;
    }

    emit!(crate::events::RewardBudgetWithdrawnEvent {
        main_state: main_state_key,
        admin: ctx.accounts.admin.key(),
        amount,
        rewards_available: ctx.accounts.main_state.rewards_available,
        total_rewards_deposited: ctx.accounts.main_state.total_rewards_deposited,
    });
    Ok(())
}
