use soroban_sdk::{contracttype, Address, Env, I256};

use crate::accumulator;
use crate::ContractError;

/// Accounting state of one staking pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolLedger {
    /// Token accepted by this pool; also the pool's registry key.
    pub stake_token: Address,
    /// Reward-token units emitted per ledger while at least one staker is present.
    pub reward_per_block: i128,
    /// Cumulative reward per staked unit, scaled by `PRECISION`. Kept at 256
    /// bits so a long idle window or a dust-sized pool cannot outgrow it.
    pub acc_reward_per_share: I256,
    /// Ledger sequence the accumulator is current as of.
    pub last_reward_block: u32,
    /// Sum of every position's `amount`.
    pub total_staked: i128,
    /// Gate-token balance a staker must hold to deposit.
    pub min_gate_balance: i128,
    /// Extension slots accepted at creation. Stored as given, never interpreted.
    pub reserved_0: u32,
    pub reserved_1: u32,
}

impl PoolLedger {
    pub fn new(
        env: &Env,
        stake_token: Address,
        reward_per_block: i128,
        start_block: u32,
        min_gate_balance: i128,
        reserved_0: u32,
        reserved_1: u32,
    ) -> Self {
        Self {
            stake_token,
            reward_per_block,
            acc_reward_per_share: accumulator::zero(env),
            last_reward_block: start_block,
            total_staked: 0,
            min_gate_balance,
            reserved_0,
            reserved_1,
        }
    }

    /// Accumulator value the pool would hold if settled at `block`.
    ///
    /// Blocks at or before `last_reward_block` add nothing, and neither does a
    /// window with nobody staked.
    pub fn accumulator_at(&self, env: &Env, block: u32) -> I256 {
        if block <= self.last_reward_block || self.total_staked == 0 {
            return self.acc_reward_per_share.clone();
        }

        let reward = accumulator::emission(
            env,
            self.reward_per_block,
            block - self.last_reward_block,
        );
        self.acc_reward_per_share
            .add(&accumulator::increment(env, &reward, self.total_staked))
    }

    /// Bring the accumulator current with `block`.
    ///
    /// Must run before `total_staked` changes so the elapsed window is split
    /// by the stake that was actually present. Emission over a window with no
    /// stakers is dropped, not carried over to the next depositor.
    ///
    /// Returns the number of blocks forfeited because the pool was empty.
    pub fn settle(&mut self, env: &Env, block: u32) -> u32 {
        if block <= self.last_reward_block {
            return 0;
        }

        let forfeited = if self.total_staked == 0 {
            block - self.last_reward_block
        } else {
            self.acc_reward_per_share = self.accumulator_at(env, block);
            0
        };

        self.last_reward_block = block;
        forfeited
    }

    pub fn add_stake(&mut self, amount: i128) -> Result<(), ContractError> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn remove_stake(&mut self, amount: i128) -> Result<(), ContractError> {
        if amount > self.total_staked {
            return Err(ContractError::InsufficientStake);
        }
        self.total_staked -= amount;
        Ok(())
    }
}
