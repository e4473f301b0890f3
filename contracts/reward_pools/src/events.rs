#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the engine is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub reward_token: Address,
    pub gate_token: Address,
    pub block: u32,
}

/// Fired when a pool is registered for a stake token.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolCreatedEvent {
    pub stake_token: Address,
    pub reward_per_block: i128,
    pub start_block: u32,
    pub min_gate_balance: i128,
}

/// Fired when a user deposits stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeAddedEvent {
    pub staker: Address,
    pub stake_token: Address,
    pub amount: i128,
    pub block: u32,
}

/// Fired when a user withdraws stake. Any reward harvested on the way out is
/// not announced separately.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeWithdrawnEvent {
    pub staker: Address,
    pub stake_token: Address,
    pub amount: i128,
    pub block: u32,
}

/// Fired on every `claim_reward`, including zero-amount claims.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimedEvent {
    pub staker: Address,
    pub stake_token: Address,
    pub amount: i128,
    pub block: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferProposedEvent {
    pub current_admin: Address,
    pub proposed_admin: Address,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferAcceptedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferCancelledEvent {
    pub admin: Address,
    pub cancelled_proposed: Address,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, admin: Address, reward_token: Address, gate_token: Address) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            reward_token,
            gate_token,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_pool_created(
    env: &Env,
    stake_token: Address,
    reward_per_block: i128,
    start_block: u32,
    min_gate_balance: i128,
) {
    env.events().publish(
        (symbol_short!("POOL_NEW"), stake_token.clone()),
        PoolCreatedEvent {
            stake_token,
            reward_per_block,
            start_block,
            min_gate_balance,
        },
    );
}

pub fn publish_stake_added(env: &Env, staker: Address, stake_token: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("STK_ADD"), staker.clone(), stake_token.clone()),
        StakeAddedEvent {
            staker,
            stake_token,
            amount,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_stake_withdrawn(env: &Env, staker: Address, stake_token: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("STK_WDRW"), staker.clone(), stake_token.clone()),
        StakeWithdrawnEvent {
            staker,
            stake_token,
            amount,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_reward_claimed(env: &Env, staker: Address, stake_token: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("RWD_CLMD"), staker.clone(), stake_token.clone()),
        RewardClaimedEvent {
            staker,
            stake_token,
            amount,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_admin_transfer_proposed(env: &Env, current_admin: Address, proposed_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_PROP"), current_admin.clone()),
        AdminTransferProposedEvent {
            current_admin,
            proposed_admin,
        },
    );
}

pub fn publish_admin_transfer_accepted(env: &Env, old_admin: Address, new_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_ACPT"), new_admin.clone()),
        AdminTransferAcceptedEvent {
            old_admin,
            new_admin,
        },
    );
}

pub fn publish_admin_transfer_cancelled(env: &Env, admin: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("ADM_CNCL"), admin.clone()),
        AdminTransferCancelledEvent {
            admin,
            cancelled_proposed,
        },
    );
}
