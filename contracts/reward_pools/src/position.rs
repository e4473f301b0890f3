use soroban_sdk::{contracttype, Env, I256};

use crate::accumulator;
use crate::ContractError;

/// One user's stake in one pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserPosition {
    /// Stake tokens currently deposited.
    pub amount: i128,
    /// `amount × acc / PRECISION` at the last settlement.
    pub reward_debt: I256,
}

impl UserPosition {
    /// An empty position, as seen for an account that never staked.
    pub fn new(env: &Env) -> Self {
        Self {
            amount: 0,
            reward_debt: accumulator::zero(env),
        }
    }

    /// Reward owed at accumulator value `acc`.
    ///
    /// A negative result means the accumulator moved backwards relative to
    /// this checkpoint and is reported rather than paid.
    pub fn pending(&self, env: &Env, acc: &I256) -> Result<i128, ContractError> {
        let pending = accumulator::pending(env, self.amount, acc, &self.reward_debt)
            .ok_or(ContractError::ArithmeticOverflow)?;
        if pending < 0 {
            return Err(ContractError::ArithmeticOverflow);
        }
        Ok(pending)
    }

    /// Price everything up to `acc` into the position.
    pub fn checkpoint(&mut self, env: &Env, acc: &I256) {
        self.reward_debt = accumulator::accrued(env, self.amount, acc);
    }

    pub fn deposit(&mut self, amount: i128) -> Result<(), ContractError> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: i128) -> Result<(), ContractError> {
        if amount > self.amount {
            return Err(ContractError::InsufficientStake);
        }
        self.amount -= amount;
        Ok(())
    }

    pub fn is_staked(&self) -> bool {
        self.amount > 0
    }
}
