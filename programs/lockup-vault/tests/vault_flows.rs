//! Accounting-engine flows driven through the state API, checking the
//! conservation invariants the on-chain handlers rely on: total_staked
//! always equals the sum of live balances, and committed rewards plus the
//! uncommitted budget never exceed what was funded.

use anchor_lang::prelude::Pubkey;

use lockup_vault::error::ErrorCode;
use lockup_vault::state::{StakePosition, StakerAccount, VaultState};
use lockup_vault::util::{compound_reward, decay_penalty, ONE_DAY_IN_SECONDS};

const YEAR: u64 = 365 * ONE_DAY_IN_SECONDS;
const RATES: [u16; 4] = [1500, 2000, 2500, 3000];

struct Harness {
    vault: VaultState,
    staker: StakerAccount,
    now: u64,
}

impl Harness {
    fn new(budget: u64) -> Self {
        let main_state = Pubkey::new_unique();
        let mut vault = VaultState {
            admin: Pubkey::new_unique(),
            token_mint: Pubkey::new_unique(),
            base_lock_duration: YEAR,
            rate_table: RATES.to_vec(),
            penalty_rate_bp: 2000,
            next_position_id: 1,
            total_staked: 0,
            rewards_available: 0,
            total_rewards_deposited: 0,
            total_penalty: 0,
            total_penalty_burned: 0,
        };
        vault.fund_reward_budget(budget).unwrap();
        Harness {
            vault,
            staker: StakerAccount {
                main_state,
                owner: Pubkey::new_unique(),
                positions: vec![],
            },
            now: 1_700_000_000,
        }
    }

    // the deposit handler minus the token CPI
    fn deposit(&mut self, amount: u64, tier: u8) -> anchor_lang::Result<u64> {
        let rate_bp = self.vault.rate_for_tier(tier)?;
        let reward = compound_reward(amount, tier, rate_bp);
        self.vault.register_deposit(amount, reward)?;
        let id = self.vault.issue_position_id();
        self.staker.push_position(StakePosition {
            id,
            principal: amount,
            accrued_reward: reward,
            lock_start: self.now,
            unlock_time: self.now + self.vault.lock_duration(tier),
        })?;
        Ok(id)
    }

    fn withdraw(&mut self, ids: &[u64]) -> anchor_lang::Result<u64> {
        let total = self.staker.take_unlocked(ids, self.now)?;
        self.vault.register_withdraw(total);
        Ok(total)
    }

    fn early_withdraw(&mut self, id: u64) -> anchor_lang::Result<(u64, u64)> {
        let position = self.staker.take_locked(id, self.now)?;
        let penalty = decay_penalty(
            position.principal,
            position.lock_start,
            position.unlock_time,
            self.now,
            self.vault.penalty_rate_bp,
        );
        self.vault
            .register_early_withdraw(position.balance(), position.accrued_reward, penalty);
        Ok((position.principal - penalty, penalty))
    }

    fn extend_lock(&mut self, id: u64, new_tier: u8) -> anchor_lang::Result<u64> {
        let rate_bp = self.vault.rate_for_tier(new_tier)?;
        let added = self.vault.lock_duration(new_tier);
        let max_lock = self.vault.max_lock_duration();
        let snapshot = self.staker.position(id)?;
        let extra = compound_reward(snapshot.balance(), new_tier, rate_bp);
        let (lock_start, unlock_time) = snapshot.extended_times(self.now, added, max_lock)?;
        self.vault.register_extend(extra)?;
        let position = self.staker.position_mut(id)?;
        position.lock_start = lock_start;
        position.unlock_time = unlock_time;
        position.accrued_reward += extra;
        Ok(extra)
    }

    fn assert_conserved(&self, funded: u64, budget_paid_out: u64) {
        // total_staked mirrors the ledger exactly
        assert_eq!(self.vault.total_staked, self.staker.staked_balance());
        // every funded reward unit is either uncommitted, committed to a
        // live position, or already paid out with a withdrawal
        let committed: u64 = self
            .staker
            .positions
            .iter()
            .map(|p| p.accrued_reward)
            .sum();
        assert_eq!(
            self.vault.rewards_available + committed + budget_paid_out,
            funded
        );
    }
}

#[test]
fn deposit_withdraw_round_trip_conserves_counters() {
    let mut h = Harness::new(1_000);
    let id1 = h.deposit(100, 1).unwrap(); // reward 15
    let id2 = h.deposit(50, 2).unwrap(); // reward 10 + 12 = 22
    h.assert_conserved(1_000, 0);
    assert_eq!(h.vault.total_staked, 187);
    assert_eq!(h.vault.rewards_available, 963);

    h.now += 2 * YEAR; // both positions unlocked
    let total = h.withdraw(&[id1, id2]).unwrap();
    assert_eq!(total, 187);
    // 37 reward units left the system with the payout
    h.assert_conserved(1_000, 37);
    assert_eq!(h.vault.total_staked, 0);
    assert_eq!(h.vault.rewards_available, 963);
}

#[test]
fn early_withdraw_returns_reward_and_books_penalty() {
    let mut h = Harness::new(1_000);
    let id = h.deposit(100, 1).unwrap();

    // exactly at lock start: full 20% of principal
    let (payout, penalty) = h.early_withdraw(id).unwrap();
    assert_eq!(payout, 80);
    assert_eq!(penalty, 20);
    assert_eq!(h.vault.total_penalty, 20);
    assert_eq!(h.vault.rewards_available, 1_000);
    h.assert_conserved(1_000, 0);
}

#[test]
fn early_withdraw_mid_lock_halves_the_penalty() {
    let mut h = Harness::new(1_000);
    let id = h.deposit(100, 1).unwrap();
    h.now += YEAR / 2;
    let (payout, penalty) = h.early_withdraw(id).unwrap();
    assert_eq!(penalty, 10);
    assert_eq!(payout, 90);
    h.assert_conserved(1_000, 0);
}

#[test]
fn early_withdraw_rejects_unlocked_positions() {
    let mut h = Harness::new(1_000);
    let id = h.deposit(100, 1).unwrap();
    h.now += YEAR;
    assert_eq!(
        h.early_withdraw(id).map(|_| ()),
        Err(ErrorCode::PositionNotLocked.into())
    );
    // still withdrawable the normal way
    assert_eq!(h.withdraw(&[id]).unwrap(), 115);
}

#[test]
fn failed_batch_leaves_everything_in_place() {
    let mut h = Harness::new(1_000);
    let id1 = h.deposit(100, 1).unwrap();
    let id2 = h.deposit(200, 1).unwrap();
    h.now += YEAR;
    let staked_before = h.vault.total_staked;
    assert_eq!(
        h.withdraw(&[id1, id2, 12345]),
        Err(ErrorCode::UnknownPosition.into())
    );
    assert_eq!(h.staker.positions.len(), 2);
    assert_eq!(h.vault.total_staked, staked_before);
    h.assert_conserved(1_000, 0);
}

#[test]
fn extend_lock_on_unlocked_position_restarts_from_now() {
    let mut h = Harness::new(1_000);
    let id = h.deposit(100, 1).unwrap(); // reward 15, balance 115
    let lock_start = h.now;
    h.now += YEAR + ONE_DAY_IN_SECONDS;

    let expected_extra = compound_reward(115, 2, RATES[1]); // on current balance
    let extra = h.extend_lock(id, 2).unwrap();
    assert_eq!(extra, expected_extra);

    let position = h.staker.position(id).unwrap();
    assert_eq!(position.lock_start, h.now);
    assert!(position.lock_start > lock_start);
    assert_eq!(position.unlock_time, h.now + 2 * YEAR);
    assert_eq!(position.accrued_reward, 15 + extra);
    h.assert_conserved(1_000, 0);
}

#[test]
fn extend_lock_while_locked_adds_duration_up_to_the_ladder_max() {
    let mut h = Harness::new(10_000);
    let id = h.deposit(1_000, 1).unwrap();
    h.now += YEAR / 2; // 0.5y remaining

    // +3y on top of 0.5y remaining fits the 4y ladder
    h.extend_lock(id, 3).unwrap();
    let unlock = h.staker.position(id).unwrap().unlock_time;
    assert_eq!(unlock, h.now + YEAR / 2 + 3 * YEAR);

    // another 2y would exceed 4y total remaining
    assert_eq!(
        h.extend_lock(id, 2).map(|_| ()),
        Err(ErrorCode::LockExtensionTooLong.into())
    );
    assert_eq!(h.staker.position(id).unwrap().unlock_time, unlock);
    h.assert_conserved(10_000, 0);
}

#[test]
fn reward_budget_is_never_overcommitted() {
    let mut h = Harness::new(20);
    h.deposit(100, 1).unwrap(); // commits 15
    assert_eq!(
        h.deposit(100, 1).map(|_| ()),
        Err(ErrorCode::InsufficientRewardBudget.into())
    );
    // the failed deposit must not have issued an id or touched counters
    assert_eq!(h.staker.positions.len(), 1);
    assert_eq!(h.vault.rewards_available, 5);
    h.assert_conserved(20, 0);

    // a smaller deposit still fits
    h.deposit(30, 1).unwrap(); // reward 4
    assert_eq!(h.vault.rewards_available, 1);
    h.assert_conserved(20, 0);
}

#[test]
fn penalty_lifecycle_with_conversion_back_into_budget() {
    let mut h = Harness::new(1_000);
    let id = h.deposit(500, 1).unwrap(); // reward 75
    let (_, penalty) = h.early_withdraw(id).unwrap(); // full 20% = 100
    assert_eq!(penalty, 100);
    assert_eq!(h.vault.total_penalty, 100);

    h.vault.withdraw_penalty(30).unwrap();
    h.vault.burn_penalty(50).unwrap();
    h.vault.convert_penalty_into_rewards(20).unwrap();
    assert_eq!(h.vault.total_penalty, 0);
    assert_eq!(h.vault.total_penalty_burned, 50);
    assert_eq!(h.vault.rewards_available, 1_020);
    // converted penalty counts as newly funded budget
    h.assert_conserved(1_020, 0);

    // the pot is empty now
    assert_eq!(
        h.vault.withdraw_penalty(1),
        Err(ErrorCode::InsufficientPenaltyBalance.into())
    );
}
