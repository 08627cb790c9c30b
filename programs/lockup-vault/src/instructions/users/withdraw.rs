use crate::{constants::*, StakerAccount, VaultState};
/// Withdraw a batch of unlocked positions: each pays out its full
/// principal + committed reward. The batch is all-or-nothing.
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct Withdraw<'info> {
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

    // PDA seeded by the signer: ownership check is structural
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

pub fn handle_withdraw(ctx: Context<Withdraw>, position_ids: Vec<u64>) -> Result<()> {
    let now = Clock::get().unwrap().unix_timestamp as u64;

    // validates every id before removing any position
    let total_amount = ctx.accounts.staker_account.take_unlocked(&position_ids, now)?;
    ctx.accounts.main_state.register_withdraw(total_amount);

    // send principal + reward to the staker
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
        anchor_spl::token::transfer(cpi_ctx, total_amount)?;
    }

    emit!(crate::events::WithdrawEvent {
        main_state: main_state_key,
        staker: ctx.accounts.staker.key(),
        position_ids,
        total_amount,
        total_staked: ctx.accounts.main_state.total_staked,
    });
    Ok(())
}
