use anchor_lang::prelude::*;

use crate::util::ONE_DAY_IN_SECONDS;

#[constant]
pub const MAX_RATE_TIERS: u8 = 4;
#[constant]
pub const MAX_POSITIONS_PER_STAKER: u8 = 32;
#[constant]
pub const MAX_PENALTY_RATE_BP: u16 = 2_000; // 20%
#[constant]
pub const MAX_BASE_LOCK_DURATION: u64 = 365 * ONE_DAY_IN_SECONDS;
#[constant]
pub const VAULT_ATA_AUTH_SEED: &[u8] = b"vault-ata-auth";
#[constant]
pub const STAKER_ACCOUNT_SEED: &[u8] = b"staker";
