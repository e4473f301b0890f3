use soroban_sdk::{Env, I256};

/// Fixed-point scaling factor for `acc_reward_per_share`.
///
/// 10^12 keeps the per-step rounding loss below one token unit for any pool
/// whose `total_staked` stays under 10^12 units.
pub const PRECISION: i128 = 1_000_000_000_000;

/// Lift an `i128` into the 256-bit domain the accumulator lives in.
pub fn wide(env: &Env, value: i128) -> I256 {
    I256::from_i128(env, value)
}

pub fn zero(env: &Env) -> I256 {
    I256::from_i32(env, 0)
}

/// Reward emitted by `reward_per_block` over `elapsed` blocks.
pub fn emission(env: &Env, reward_per_block: i128, elapsed: u32) -> I256 {
    wide(env, reward_per_block).mul(&wide(env, i128::from(elapsed)))
}

/// Accumulator increment for distributing `reward` over `total_staked`.
///
/// ```text
/// Δacc = reward × PRECISION / total_staked      (floor)
/// ```
///
/// Zero when nothing is staked. Every operand is an `i128` or an emission of
/// at most `i128 × u32`, so the product stays well inside 256 bits.
pub fn increment(env: &Env, reward: &I256, total_staked: i128) -> I256 {
    if total_staked <= 0 {
        return zero(env);
    }
    reward
        .mul(&wide(env, PRECISION))
        .div(&wide(env, total_staked))
}

/// Reward already earned by `amount` at accumulator value `acc`, still scaled
/// to 256 bits so large accumulators can be priced into a reward debt.
pub fn accrued(env: &Env, amount: i128, acc: &I256) -> I256 {
    wide(env, amount).mul(acc).div(&wide(env, PRECISION))
}

/// Reward owed to a position that was last checkpointed at `reward_debt`.
///
/// ```text
/// pending = amount × acc / PRECISION − reward_debt
/// ```
///
/// `None` when the owed amount does not fit in an `i128` token amount.
pub fn pending(env: &Env, amount: i128, acc: &I256, reward_debt: &I256) -> Option<i128> {
    accrued(env, amount, acc).sub(reward_debt).to_i128()
}
