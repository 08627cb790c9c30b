use anchor_lang::prelude::*;
use anchor_lang::solana_program::pubkey::Pubkey;

use crate::constants::*;
use crate::error::ErrorCode;
use crate::util::BASIS_POINTS_100_PERCENT;

#[account]
#[derive(InitSpace)]
pub struct VaultState {
    pub admin: Pubkey,
    /// the SPL mint this vault custodies
    pub token_mint: Pubkey,

    /// seconds of lock per tier unit, set at initialize, capped at 365 days
    pub base_lock_duration: u64,
    /// per-tier reward rates in basis points, tier k reads index k-1.
    /// Empty until the first set_rate_table; length is frozen at first set.
    /// Each entry in (0, 10000], strictly ascending.
    #[max_len(MAX_RATE_TIERS)]
    pub rate_table: Vec<u16>,
    /// early-exit penalty at lock start, in basis points, decays to 0 at unlock
    pub penalty_rate_bp: u16,

    /// next position id to issue; ids are monotonic and never reused
    pub next_position_id: u64,

    /// sum of all live positions' principal + accrued_reward
    /// invariant: total_staked == sum over every staker account
    pub total_staked: u64,
    /// reward budget not yet committed to a position.
    /// decreases when a position commits a reward, increases when an
    /// early-withdraw returns one or the admin funds/converts more.
    pub rewards_available: u64,
    /// lifetime rewards funded minus budget withdrawn by the admin
    pub total_rewards_deposited: u64,
    /// accumulated early-exit penalty awaiting disposition
    pub total_penalty: u64,
    /// penalty permanently destroyed via token burn
    pub total_penalty_burned: u64,
}

impl VaultState {
    pub fn rate_for_tier(&self, tier: u8) -> Result<u16> {
        require!(
            tier >= 1 && (tier as usize) <= self.rate_table.len(),
            ErrorCode::InvalidTier
        );
        Ok(self.rate_table[tier as usize - 1])
    }

    pub fn lock_duration(&self, tier: u8) -> u64 {
        tier as u64 * self.base_lock_duration
    }

    /// longest lock any position may carry: one full tier ladder
    pub fn max_lock_duration(&self) -> u64 {
        self.rate_table.len() as u64 * self.base_lock_duration
    }

    pub fn issue_position_id(&mut self) -> u64 {
        let id = self.next_position_id;
        self.next_position_id += 1;
        id
    }

    /// commit `reward` from the budget and account the new stake
    pub fn register_deposit(&mut self, amount: u64, reward: u64) -> Result<()> {
        require_gte!(
            self.rewards_available,
            reward,
            ErrorCode::InsufficientRewardBudget
        );
        self.rewards_available -= reward;
        self.total_staked += amount + reward;
        Ok(())
    }

    /// a batch of unlocked positions left the vault, balance paid in full
    pub fn register_withdraw(&mut self, total_balance: u64) {
        self.total_staked -= total_balance;
    }

    /// a locked position left early: its committed reward returns to the
    /// budget and the principal deduction accrues as penalty
    pub fn register_early_withdraw(&mut self, balance: u64, reward: u64, penalty: u64) {
        self.total_staked -= balance;
        self.rewards_available += reward;
        self.total_penalty += penalty;
    }

    /// commit `extra_reward` for a lock extension
    pub fn register_extend(&mut self, extra_reward: u64) -> Result<()> {
        require_gte!(
            self.rewards_available,
            extra_reward,
            ErrorCode::InsufficientRewardBudget
        );
        self.rewards_available -= extra_reward;
        self.total_staked += extra_reward;
        Ok(())
    }

    pub fn fund_reward_budget(&mut self, amount: u64) -> Result<()> {
        require_gte!(amount, 1, ErrorCode::InvalidAmount);
        self.rewards_available += amount;
        self.total_rewards_deposited += amount;
        Ok(())
    }

    pub fn withdraw_reward_budget(&mut self, amount: u64) -> Result<()> {
        require_gte!(amount, 1, ErrorCode::InvalidAmount);
        require_gte!(
            self.rewards_available,
            amount,
            ErrorCode::InsufficientRewardBudget
        );
        self.rewards_available -= amount;
        self.total_rewards_deposited -= amount;
        Ok(())
    }

    pub fn withdraw_penalty(&mut self, amount: u64) -> Result<()> {
        require_gte!(amount, 1, ErrorCode::InvalidAmount);
        require_gte!(
            self.total_penalty,
            amount,
            ErrorCode::InsufficientPenaltyBalance
        );
        self.total_penalty -= amount;
        Ok(())
    }

    pub fn burn_penalty(&mut self, amount: u64) -> Result<()> {
        require_gte!(amount, 1, ErrorCode::InvalidAmount);
        require_gte!(
            self.total_penalty,
            amount,
            ErrorCode::InsufficientPenaltyBalance
        );
        self.total_penalty -= amount;
        self.total_penalty_burned += amount;
        Ok(())
    }

    /// recycle accumulated penalty into the reward budget, no token moves
    pub fn convert_penalty_into_rewards(&mut self, amount: u64) -> Result<()> {
        require_gte!(amount, 1, ErrorCode::InvalidAmount);
        require_gte!(
            self.total_penalty,
            amount,
            ErrorCode::InsufficientPenaltyBalance
        );
        self.total_penalty -= amount;
        self.rewards_available += amount;
        self.total_rewards_deposited += amount;
        Ok(())
    }

    pub fn set_rate_table(&mut self, rates: Vec<u16>) -> Result<()> {
        require!(
            !rates.is_empty() && rates.len() <= MAX_RATE_TIERS as usize,
            ErrorCode::InvalidRateTableLength
        );
        if !self.rate_table.is_empty() {
            require_eq!(
                rates.len(),
                self.rate_table.len(),
                ErrorCode::RateTableLengthChanged
            );
        }
        let mut prev: u16 = 0;
        for &rate in rates.iter() {
            require!(
                rate > 0 && rate <= BASIS_POINTS_100_PERCENT,
                ErrorCode::RateOutOfRange
            );
            require_gt!(rate, prev, ErrorCode::RatesNotAscending);
            prev = rate;
        }
        self.rate_table = rates;
        Ok(())
    }

    pub fn set_penalty_rate(&mut self, penalty_rate_bp: u16) -> Result<()> {
        require_gte!(
            MAX_PENALTY_RATE_BP,
            penalty_rate_bp,
            ErrorCode::PenaltyRateTooHigh
        );
        self.penalty_rate_bp = penalty_rate_bp;
        Ok(())
    }
}
