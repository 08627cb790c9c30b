use crate::constants::*;
use crate::error::ErrorCode;
use crate::state::VaultState;
use anchor_lang::prelude::*;

use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(init, payer = admin, space = 8 + VaultState::INIT_SPACE)]
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
    #[account(
        init,
        payer = admin,
        associated_token::mint = token_mint,
        associated_token::authority = vault_ata_auth
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handle_initialize(
    ctx: Context<Initialize>,
    base_lock_duration: u64,
    penalty_rate_bp: u16,
) -> Result<()> {
    require_gte!(
        MAX_BASE_LOCK_DURATION,
        base_lock_duration,
        ErrorCode::BaseLockDurationTooLong
    );
    require_gte!(
        MAX_PENALTY_RATE_BP,
        penalty_rate_bp,
        ErrorCode::PenaltyRateTooHigh
    );
    ctx.accounts.main_state.set_inner(VaultState {
        admin: ctx.accounts.admin.key(),
        token_mint: ctx.accounts.token_mint.key(),
        base_lock_duration,
        // deposits stay impossible until the admin sets the rate table
        rate_table: Vec::with_capacity(MAX_RATE_TIERS as usize),
        penalty_rate_bp,
        next_position_id: 1,
        total_staked: 0,
        rewards_available: 0,
        total_rewards_deposited: 0,
        total_penalty: 0,
        total_penalty_burned: 0,
    });
    Ok(())
}
