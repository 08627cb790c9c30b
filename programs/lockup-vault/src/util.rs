pub const ONE_DAY_IN_SECONDS: u64 = 60 * 60 * 24;

pub const BASIS_POINTS_100_PERCENT: u16 = 10_000;

pub fn mul_div(amount: u64, numerator: u64, denominator: u64) -> u64 {
    u64::try_from((amount as u128) * (numerator as u128) / (denominator as u128)).unwrap()
}

// apply basis points calculation
pub fn apply_bp(amount: u64, bp: u16) -> u64 {
    mul_div(amount, bp as u64, BASIS_POINTS_100_PERCENT as u64)
}

/// Reward committed for `amount` locked for `tier` base-duration periods
/// at a single flat rate: `tier` successive compounding rounds, each round's
/// increment floored. The returned total is the sum of increments only,
/// principal excluded.
pub fn compound_reward(amount: u64, tier: u8, rate_bp: u16) -> u64 {
    let mut running = amount;
    let mut total_reward: u64 = 0;
    for _ in 0..tier {
        let increment = apply_bp(running, rate_bp);
        running += increment;
        total_reward += increment;
    }
    total_reward
}

/// Early-exit penalty on `principal`, decaying linearly from the full
/// `penalty_rate_bp` at lock start down to zero at unlock time.
/// The remaining-fraction is floored to whole basis points before being
/// applied (the first-revision rounding; see DESIGN.md).
pub fn decay_penalty(
    principal: u64,
    lock_start: u64,
    unlock_time: u64,
    now: u64,
    penalty_rate_bp: u16,
) -> u64 {
    if now >= unlock_time || lock_start >= unlock_time || penalty_rate_bp == 0 {
        return 0;
    }
    let remaining_bp = mul_div(
        penalty_rate_bp as u64,
        unlock_time - now,
        unlock_time - lock_start,
    );
    mul_div(principal, remaining_bp, BASIS_POINTS_100_PERCENT as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: u64 = ONE_DAY_IN_SECONDS;
    const YEAR: u64 = 365 * DAY;

    #[test]
    fn tier_one_reward_is_simple_interest() {
        // 100 units at 1500 bp = exactly 15
        assert_eq!(compound_reward(100, 1, 1500), 15);
        assert_eq!(compound_reward(1_000_000, 1, 2000), 200_000);
    }

    #[test]
    fn higher_tiers_compound() {
        // tier 2 at 2000 bp on 100: 20 then floor(120 * 0.20) = 24
        assert_eq!(compound_reward(100, 2, 2000), 44);
        // strictly exceeds simple interest whenever the rate is non-zero
        for tier in 2..=4u8 {
            let compounded = compound_reward(1_000_000, tier, 2500);
            let simple = apply_bp(1_000_000, 2500) * tier as u64;
            assert!(compounded > simple);
        }
    }

    #[test]
    fn reward_rounds_down_each_round() {
        // 9 * 0.15 = 1.35 -> 1; 10 * 0.15 = 1.5 -> 1
        assert_eq!(compound_reward(9, 1, 1500), 1);
        assert_eq!(compound_reward(9, 2, 1500), 2);
    }

    #[test]
    fn zero_amount_and_zero_tier_give_zero_reward() {
        assert_eq!(compound_reward(0, 4, 3000), 0);
        assert_eq!(compound_reward(100, 0, 3000), 0);
    }

    #[test]
    fn penalty_is_full_rate_at_lock_start() {
        let start = 1_000;
        assert_eq!(decay_penalty(100, start, start + YEAR, start, 2000), 20);
    }

    #[test]
    fn penalty_is_zero_at_and_after_unlock() {
        let start = 1_000;
        assert_eq!(decay_penalty(100, start, start + YEAR, start + YEAR, 2000), 0);
        assert_eq!(decay_penalty(100, start, start + YEAR, start + 2 * YEAR, 2000), 0);
    }

    #[test]
    fn penalty_decays_linearly() {
        let start = 0;
        let unlock = 100 * DAY;
        let full = decay_penalty(1_000_000, start, unlock, start, 2000);
        let half = decay_penalty(1_000_000, start, unlock, 50 * DAY, 2000);
        let late = decay_penalty(1_000_000, start, unlock, 99 * DAY, 2000);
        assert_eq!(full, 200_000);
        assert_eq!(half, 100_000);
        assert!(late > 0 && late < half);
    }

    #[test]
    fn penalty_fraction_floors_to_whole_basis_points() {
        // remaining = 1/3 of the lock: 2000 * 1 / 3 = 666 bp (floored, not 666.66)
        let penalty = decay_penalty(1_000_000, 0, 3 * DAY, 2 * DAY, 2000);
        assert_eq!(penalty, 66_600);
    }

    #[test]
    fn penalty_degenerate_inputs() {
        // zero rate
        assert_eq!(decay_penalty(100, 0, YEAR, 0, 0), 0);
        // lock_start >= unlock_time
        assert_eq!(decay_penalty(100, YEAR, YEAR, 0, 2000), 0);
        assert_eq!(decay_penalty(100, 2 * YEAR, YEAR, 0, 2000), 0);
    }

    #[test]
    fn mul_div_floors() {
        assert_eq!(mul_div(10, 1, 3), 3);
        assert_eq!(apply_bp(999, 1), 0);
    }
}
