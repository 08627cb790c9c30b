use crate::{error::ErrorCode, state::VaultState};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetRateTable<'info> {
    #[account()]
    pub admin: Signer<'info>,

    #[account(mut, has_one = admin @ ErrorCode::Unauthorized)]
    pub main_state: Account<'info, VaultState>,
}
pub fn handle_set_rate_table(ctx: Context<SetRateTable>, rates: Vec<u16>) -> Result<()> {
    ctx.accounts.main_state.set_rate_table(rates.clone())?;
    emit!(crate::events::RateTableUpdatedEvent {
        main_state: ctx.accounts.main_state.key(),
        rates,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetPenaltyRate<'info> {
    #[account()]
    pub admin: Signer<'info>,

    #[account(mut, has_one = admin @ ErrorCode::Unauthorized)]
    pub main_state: Account<'info, VaultState>,
}
pub fn handle_set_penalty_rate(ctx: Context<SetPenaltyRate>, penalty_rate_bp: u16) -> Result<()> {
    ctx.accounts.main_state.set_penalty_rate(penalty_rate_bp)?;
    emit!(crate::events::PenaltyRateUpdatedEvent {
        main_state: ctx.accounts.main_state.key(),
        penalty_rate_bp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    #[account()]
    pub admin: Signer<'info>,

    #[account(mut, has_one = admin @ ErrorCode::Unauthorized)]
    pub main_state: Account<'info, VaultState>,
}
pub fn handle_transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
    ctx.accounts.main_state.admin = new_admin;
    emit!(crate::events::AdminChangedEvent {
        main_state: ctx.accounts.main_state.key(),
        new_admin,
    });
    Ok(())
}
