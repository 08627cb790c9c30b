use anchor_lang::prelude::*;

#[event]
pub struct DepositEvent {
    pub main_state: Pubkey,
    pub depositor: Pubkey,
    pub position_id: u64,
    pub tier: u8,
    pub amount: u64,
    pub reward: u64,
    pub lock_start: u64,
    pub unlock_time: u64,
    //--- treasury after the deposit
    pub total_staked: u64,
    pub rewards_available: u64,
}

#[event]
pub struct WithdrawEvent {
    pub main_state: Pubkey,
    pub staker: Pubkey,
    pub position_ids: Vec<u64>,
    pub total_amount: u64,
    //--- treasury after the withdraw
    pub total_staked: u64,
}

#[event]
pub struct EarlyWithdrawEvent {
    pub main_state: Pubkey,
    pub staker: Pubkey,
    pub position_id: u64,
    pub principal: u64,
    pub penalty: u64,
    pub payout: u64,
    pub reward_released: u64,
    //--- treasury after the early withdraw
    pub total_staked: u64,
    pub rewards_available: u64,
    pub total_penalty: u64,
}

#[event]
pub struct ExtendLockEvent {
    pub main_state: Pubkey,
    pub staker: Pubkey,
    pub position_id: u64,
    pub new_tier: u8,
    pub extra_reward: u64,
    pub lock_start: u64,
    pub unlock_time: u64,
    //--- treasury after the extension
    pub total_staked: u64,
    pub rewards_available: u64,
}

#[event]
pub struct RewardBudgetDepositedEvent {
    pub main_state: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
    pub rewards_available: u64,
    pub total_rewards_deposited: u64,
}

#[event]
pub struct RewardBudgetWithdrawnEvent {
    pub main_state: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
    pub rewards_available: u64,
    pub total_rewards_deposited: u64,
}

#[event]
pub struct PenaltyWithdrawnEvent {
    pub main_state: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
    pub total_penalty: u64,
}

#[event]
pub struct PenaltyBurnedEvent {
    pub main_state: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
    pub total_penalty: u64,
    pub total_penalty_burned: u64,
}

#[event]
pub struct PenaltyConvertedEvent {
    pub main_state: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
    pub total_penalty: u64,
    pub rewards_available: u64,
}

#[event]
pub struct RateTableUpdatedEvent {
    pub main_state: Pubkey,
    pub rates: Vec<u16>,
}

#[event]
pub struct PenaltyRateUpdatedEvent {
    pub main_state: Pubkey,
    pub penalty_rate_bp: u16,
}

#[event]
pub struct AdminChangedEvent {
    pub main_state: Pubkey,
    pub new_admin: Pubkey,
}
