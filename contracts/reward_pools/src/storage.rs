use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::pool::PoolLedger;
use crate::position::UserPosition;
use crate::ContractError;

/// TTL constants for persistent and instance storage (in ledgers).
const TTL_THRESHOLD: u32 = 17_280; // ~1 day
const TTL_EXTEND_TO: u32 = 518_400; // ~30 days

/// Engine-wide token configuration, fixed at `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EngineConfig {
    /// Token paid out by every pool.
    pub reward_token: Address,
    /// Token whose balance is compared against a pool's `min_gate_balance`.
    pub gate_token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    PendingAdmin,
    Config,
    /// Registry of stake tokens, in creation order.
    Pools,
    Pool(Address),
    /// (stake_token, staker)
    Position(Address, Address),
}

fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Instance: admin & config ────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<EngineConfig, ContractError> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)?;
    extend_instance(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &EngineConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance(env);
}

pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_pending_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PendingAdmin)
}

pub fn set_pending_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::PendingAdmin, admin);
}

pub fn clear_pending_admin(env: &Env) {
    env.storage().instance().remove(&DataKey::PendingAdmin);
}

// ── Persistent: pools & positions ───────────────────────────────────────────

pub fn has_pool(env: &Env, stake_token: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Pool(stake_token.clone()))
}

pub fn get_pool(env: &Env, stake_token: &Address) -> Result<PoolLedger, ContractError> {
    let key = DataKey::Pool(stake_token.clone());
    let pool = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::PoolNotFound)?;
    extend_persistent(env, &key);
    Ok(pool)
}

pub fn set_pool(env: &Env, pool: &PoolLedger) {
    let key = DataKey::Pool(pool.stake_token.clone());
    env.storage().persistent().set(&key, pool);
    extend_persistent(env, &key);
}

pub fn get_pools(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Pools)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn register_pool(env: &Env, stake_token: &Address) {
    let mut pools = get_pools(env);
    pools.push_back(stake_token.clone());
    env.storage().persistent().set(&DataKey::Pools, &pools);
    extend_persistent(env, &DataKey::Pools);
}

/// Position of `staker` in the pool for `stake_token`, if one was ever opened.
pub fn get_position(env: &Env, stake_token: &Address, staker: &Address) -> Option<UserPosition> {
    let key = DataKey::Position(stake_token.clone(), staker.clone());
    let position = env.storage().persistent().get(&key);
    if position.is_some() {
        extend_persistent(env, &key);
    }
    position
}

pub fn set_position(env: &Env, stake_token: &Address, staker: &Address, position: &UserPosition) {
    let key = DataKey::Position(stake_token.clone(), staker.clone());
    env.storage().persistent().set(&key, position);
    extend_persistent(env, &key);
}
