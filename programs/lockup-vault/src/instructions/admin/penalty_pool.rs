use crate::{constants::*, error::ErrorCode, state::VaultState};
/// Disposition of accumulated early-exit penalty: withdraw to the admin,
/// destroy via token burn, or recycle into the reward budget.
use anchor_lang::prelude::*;
use anchor_spl::token::{burn, Burn, Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct WithdrawPenalty<'info> {
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

pub fn handle_withdraw_penalty(ctx: Context<WithdrawPenalty>, amount: u64) -> Result<()> {
    ctx.accounts.main_state.withdraw_penalty(amount)?;

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

    emit!(crate::events::PenaltyWithdrawnEvent {
        main_state: main_state_key,
        admin: ctx.accounts.admin.key(),
        amount,
        total_penalty: ctx.accounts.main_state.total_penalty,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct BurnPenalty<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(mut, has_one = admin @ ErrorCode::Unauthorized, has_one = token_mint)]
    pub main_state: Account<'info, VaultState>,

    #[account(mut)]
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

    pub token_program: Program<'info, Token>,
}

pub fn handle_burn_penalty(ctx: Context<BurnPenalty>, amount: u64) -> Result<()> {
    ctx.accounts.main_state.burn_penalty(amount)?;

    let main_state_key = ctx.accounts.main_state.key();
    let signer_seeds: &[&[&[u8]]] = &[&[
        main_state_key.as_ref(),
        VAULT_ATA_AUTH_SEED,
        &[ctx.bumps.vault_ata_auth],
    ]];
    burn(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.token_mint.to_account_info(),
                from: ctx.accounts.vault_token_account.to_account_info(),
                authority: ctx.accounts.vault_ata_auth.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(crate::events::PenaltyBurnedEvent {
        main_state: main_state_key,
        admin: ctx.accounts.admin.key(),
        amount,
        total_penalty: ctx.accounts.main_state.total_penalty,
        total_penalty_burned: ctx.accounts.main_state.total_penalty_burned,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ConvertPenaltyIntoRewards<'info> {
    #[account()]
    pub admin: Signer<'info>,

    #[account(mut, has_one = admin @ ErrorCode::Unauthorized)]
    pub main_state: Account<'info, VaultState>,
}

/// pure accounting move, the tokens never leave the vault
pub fn handle_convert_penalty_into_rewards(
    ctx: Context<ConvertPenaltyIntoRewards>,
    amount: u64,
) -> Result<()> {
    ctx.accounts.main_state.convert_penalty_into_rewards(amount)?;

    emit!(crate::events::PenaltyConvertedEvent {
        main_state: ctx.accounts.main_state.key(),
        admin: ctx.accounts.admin.key(),
        amount,
        total_penalty: ctx.accounts.main_state.total_penalty,
        rewards_available: ctx.accounts.main_state.rewards_available,
    });
    Ok(())
}
