use anchor_lang::prelude::*;
use anchor_lang::solana_program::pubkey::Pubkey;

use crate::constants::MAX_POSITIONS_PER_STAKER;
use crate::error::ErrorCode;

/// One locked stake. Created whole by deposit, mutated in place by
/// extend_lock, removed whole by withdraw/early_withdraw.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct StakePosition {
    pub id: u64,
    pub principal: u64,
    pub accrued_reward: u64,
    pub lock_start: u64,
    /// invariant: unlock_time >= lock_start
    pub unlock_time: u64,
}

impl StakePosition {
    pub fn balance(&self) -> u64 {
        self.principal + self.accrued_reward
    }

    pub fn is_locked(&self, now: u64) -> bool {
        self.unlock_time > now
    }

    /// Lock times after an extension: the unlock moves further out while
    /// locked, or the lock restarts from `now` when already unlocked.
    /// `added` is the new tier's full duration, `max_lock` the longest lock
    /// the rate table allows. Pure, so callers can validate before they
    /// mutate anything.
    pub fn extended_times(&self, now: u64, added: u64, max_lock: u64) -> Result<(u64, u64)> {
        if self.is_locked(now) {
            let remaining = self.unlock_time - now;
            require_gte!(max_lock, remaining + added, ErrorCode::LockExtensionTooLong);
            Ok((self.lock_start, self.unlock_time + added))
        } else {
            Ok((now, now + added))
        }
    }
}

/// Per-owner position set, address is PDA(main_state, owner, "staker")
#[account]
#[derive(InitSpace)]
pub struct StakerAccount {
    pub main_state: Pubkey,
    pub owner: Pubkey,
    #[max_len(MAX_POSITIONS_PER_STAKER)]
    pub positions: Vec<StakePosition>,
}

impl StakerAccount {
    pub fn position(&self, id: u64) -> Result<&StakePosition> {
        self.positions
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| error!(ErrorCode::UnknownPosition))
    }

    pub fn position_mut(&mut self, id: u64) -> Result<&mut StakePosition> {
        self.positions
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| error!(ErrorCode::UnknownPosition))
    }

    pub fn push_position(&mut self, position: StakePosition) -> Result<()> {
        require_gt!(
            MAX_POSITIONS_PER_STAKER as usize,
            self.positions.len(),
            ErrorCode::MaxPositionsReached
        );
        self.positions.push(position);
        Ok(())
    }

    /// Validate and remove a batch of unlocked positions, returning the sum
    /// of their balances. All-or-nothing: every id is checked before any
    /// position is removed, so a single bad id leaves the set untouched.
    /// A repeated id counts as unknown on its second occurrence.
    pub fn take_unlocked(&mut self, ids: &[u64], now: u64) -> Result<u64> {
        require!(!ids.is_empty(), ErrorCode::EmptyPositionIdList);
        let mut total: u64 = 0;
        for (i, &id) in ids.iter().enumerate() {
            require!(!ids[..i].contains(&id), ErrorCode::UnknownPosition);
            let position = self.position(id)?;
            require_gte!(now, position.unlock_time, ErrorCode::PositionStillLocked);
            total += position.balance();
        }
        self.positions.retain(|p| !ids.contains(&p.id));
        Ok(total)
    }

    /// Remove a single still-locked position for an early exit.
    pub fn take_locked(&mut self, id: u64, now: u64) -> Result<StakePosition> {
        let index = self
            .positions
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| error!(ErrorCode::UnknownPosition))?;
        require_gt!(
            self.positions[index].unlock_time,
            now,
            ErrorCode::PositionNotLocked
        );
        Ok(self.positions.remove(index))
    }

    /// sum of principal + accrued_reward over every owned position
    pub fn staked_balance(&self) -> u64 {
        self.positions.iter().map(|p| p.balance()).sum()
    }
}
