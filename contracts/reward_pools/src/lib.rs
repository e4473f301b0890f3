#![no_std]

pub mod accumulator;
pub mod events;
pub mod host;
pub mod pool;
pub mod position;
pub mod storage;

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

pub use accumulator::PRECISION;
pub use pool::PoolLedger;
pub use position::UserPosition;
pub use storage::EngineConfig;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    PoolNotFound = 5,
    PoolAlreadyExists = 6,
    InsufficientGateBalance = 7,
    InsufficientStake = 8,
    TransferFailed = 9,
    TokensIdentical = 10,
    InvalidStartBlock = 11,
    ArithmeticOverflow = 12,
    NoPendingAdmin = 13,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct RewardPoolsContract;

#[contractimpl]
impl RewardPoolsContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the engine.
    ///
    /// * `reward_token` – token every pool pays rewards in. The contract must
    ///   hold enough of it to cover claims.
    /// * `gate_token`   – token whose balance gates `stake`.
    pub fn initialize(
        env: Env,
        admin: Address,
        reward_token: Address,
        gate_token: Address,
    ) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_config(
            &env,
            &EngineConfig {
                reward_token: reward_token.clone(),
                gate_token: gate_token.clone(),
            },
        );

        events::publish_initialized(&env, admin, reward_token, gate_token);

        Ok(())
    }

    // ── Pool registry ───────────────────────────────────────────────────────

    /// Register a pool for `stake_token`.
    ///
    /// * `reward_per_block` – reward units emitted per ledger, shared by the
    ///   pool's stakers.
    /// * `reserved_0`, `reserved_1` – extension slots, stored but unused.
    /// * `start_block` – ledger the accumulator starts from; must not be in
    ///   the future. Blocks between it and the first stake are forfeited.
    /// * `min_gate_balance` – gate-token balance required to stake.
    #[allow(clippy::too_many_arguments)]
    pub fn create_pool(
        env: Env,
        admin: Address,
        stake_token: Address,
        reward_per_block: i128,
        reserved_0: u32,
        reserved_1: u32,
        start_block: u32,
        min_gate_balance: i128,
    ) -> Result<PoolLedger, ContractError> {
        let config = storage::get_config(&env)?;
        admin.require_auth();
        Self::require_admin(&env, &admin)?;

        if reward_per_block < 0 || min_gate_balance < 0 {
            return Err(ContractError::InvalidAmount);
        }
        if stake_token == config.reward_token {
            return Err(ContractError::TokensIdentical);
        }
        if start_block > host::current_block(&env) {
            return Err(ContractError::InvalidStartBlock);
        }
        if storage::has_pool(&env, &stake_token) {
            return Err(ContractError::PoolAlreadyExists);
        }

        let pool = PoolLedger::new(
            &env,
            stake_token.clone(),
            reward_per_block,
            start_block,
            min_gate_balance,
            reserved_0,
            reserved_1,
        );
        storage::set_pool(&env, &pool);
        storage::register_pool(&env, &stake_token);

        log!(&env, "pool created", stake_token, reward_per_block);
        events::publish_pool_created(
            &env,
            stake_token,
            reward_per_block,
            start_block,
            min_gate_balance,
        );

        Ok(pool)
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` of `stake_token` into its pool.
    ///
    /// Reward pending on an existing position is paid out first, so a second
    /// deposit also acts as a claim (without a claim event).
    pub fn stake(
        env: Env,
        staker: Address,
        stake_token: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        let config = storage::get_config(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let mut pool = storage::get_pool(&env, &stake_token)?;

        if pool.min_gate_balance > 0
            && host::gate_balance(&env, &config.gate_token, &staker) < pool.min_gate_balance
        {
            return Err(ContractError::InsufficientGateBalance);
        }

        // 1. Bring the accumulator current before total_staked moves.
        Self::settle(&env, &mut pool);

        // 2. Harvest, then grow the position and re-checkpoint it.
        let mut position = storage::get_position(&env, &stake_token, &staker)
            .unwrap_or_else(|| UserPosition::new(&env));
        let harvest = position.pending(&env, &pool.acc_reward_per_share)?;

        position.deposit(amount)?;
        pool.add_stake(amount)?;
        position.checkpoint(&env, &pool.acc_reward_per_share);

        storage::set_pool(&env, &pool);
        storage::set_position(&env, &stake_token, &staker, &position);

        // 3. Token movements. A rejection unwinds everything above.
        host::push(&env, &config.reward_token, &staker, harvest)?;
        host::pull(&env, &stake_token, &staker, amount)?;

        events::publish_stake_added(&env, staker, stake_token, amount);

        Ok(())
    }

    /// Withdraw `amount` of `stake_token`, harvesting pending reward on the way.
    pub fn unstake(
        env: Env,
        staker: Address,
        stake_token: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        let config = storage::get_config(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let mut pool = storage::get_pool(&env, &stake_token)?;
        let mut position = storage::get_position(&env, &stake_token, &staker)
            .ok_or(ContractError::InsufficientStake)?;
        if amount > position.amount {
            return Err(ContractError::InsufficientStake);
        }

        Self::settle(&env, &mut pool);

        let harvest = position.pending(&env, &pool.acc_reward_per_share)?;

        position.withdraw(amount)?;
        pool.remove_stake(amount)?;
        position.checkpoint(&env, &pool.acc_reward_per_share);

        storage::set_pool(&env, &pool);
        storage::set_position(&env, &stake_token, &staker, &position);

        host::push(&env, &config.reward_token, &staker, harvest)?;
        host::push(&env, &stake_token, &staker, amount)?;

        events::publish_stake_withdrawn(&env, staker, stake_token, amount);

        Ok(())
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Pay `staker` everything accrued in the pool for `stake_token`.
    ///
    /// Anyone may trigger the claim; the reward always goes to `staker`.
    /// A claim with nothing pending succeeds and returns zero.
    pub fn claim_reward(
        env: Env,
        stake_token: Address,
        staker: Address,
    ) -> Result<i128, ContractError> {
        let config = storage::get_config(&env)?;
        let mut pool = storage::get_pool(&env, &stake_token)?;

        Self::settle(&env, &mut pool);
        storage::set_pool(&env, &pool);

        let mut reward = 0;
        if let Some(mut position) = storage::get_position(&env, &stake_token, &staker) {
            reward = position.pending(&env, &pool.acc_reward_per_share)?;
            position.checkpoint(&env, &pool.acc_reward_per_share);
            storage::set_position(&env, &stake_token, &staker, &position);

            host::push(&env, &config.reward_token, &staker, reward)?;
        }

        events::publish_reward_claimed(&env, staker, stake_token, reward);

        Ok(reward)
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn get_pool(env: Env, stake_token: Address) -> Result<PoolLedger, ContractError> {
        storage::get_pool(&env, &stake_token)
    }

    /// Stake tokens of every registered pool, in creation order.
    pub fn get_pools(env: Env) -> Vec<Address> {
        storage::get_pools(&env)
    }

    /// Position of `staker` in the pool; zeroed if they never staked.
    pub fn get_position(env: Env, stake_token: Address, staker: Address) -> UserPosition {
        storage::get_position(&env, &stake_token, &staker)
            .unwrap_or_else(|| UserPosition::new(&env))
    }

    /// Reward `staker` could claim at the current ledger, without settling.
    pub fn pending_reward(
        env: Env,
        stake_token: Address,
        staker: Address,
    ) -> Result<i128, ContractError> {
        let pool = storage::get_pool(&env, &stake_token)?;
        let acc = pool.accumulator_at(&env, host::current_block(&env));
        storage::get_position(&env, &stake_token, &staker)
            .unwrap_or_else(|| UserPosition::new(&env))
            .pending(&env, &acc)
    }

    pub fn get_config(env: Env) -> Result<EngineConfig, ContractError> {
        storage::get_config(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        storage::get_admin(&env)
    }

    pub fn get_pending_admin(env: Env) -> Option<Address> {
        storage::get_pending_admin(&env)
    }

    // ── Admin transfer (two-step) ──────────────────────────────────────────

    /// Propose a new admin. The proposed address must call `accept_admin`.
    pub fn propose_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        current_admin.require_auth();
        Self::require_admin(&env, &current_admin)?;

        storage::set_pending_admin(&env, &new_admin);

        events::publish_admin_transfer_proposed(&env, current_admin, new_admin);

        Ok(())
    }

    pub fn accept_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        new_admin.require_auth();

        let pending = storage::get_pending_admin(&env).ok_or(ContractError::NoPendingAdmin)?;
        if new_admin != pending {
            return Err(ContractError::Unauthorized);
        }

        let old_admin = storage::get_admin(&env)?;
        storage::set_admin(&env, &new_admin);
        storage::clear_pending_admin(&env);

        events::publish_admin_transfer_accepted(&env, old_admin, new_admin);

        Ok(())
    }

    pub fn cancel_admin_transfer(env: Env, current_admin: Address) -> Result<(), ContractError> {
        current_admin.require_auth();
        Self::require_admin(&env, &current_admin)?;

        let pending = storage::get_pending_admin(&env).ok_or(ContractError::NoPendingAdmin)?;
        storage::clear_pending_admin(&env);

        events::publish_admin_transfer_cancelled(&env, current_admin, pending);

        Ok(())
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if *caller != storage::get_admin(env)? {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    /// Settle `pool` at the current ledger.
    fn settle(env: &Env, pool: &mut PoolLedger) {
        let forfeited = pool.settle(env, host::current_block(env));
        if forfeited > 0 {
            log!(env, "empty pool, emission forfeited", pool.stake_token, forfeited);
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_admin;
