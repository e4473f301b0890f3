#![allow(dead_code)]

use reward_pools::{RewardPoolsContract, RewardPoolsContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};

/// One whole token at Stellar's 7 decimals.
pub const ONE: i128 = 10_000_000;

/// Ledger at which the default pool is created.
pub const GENESIS: u32 = 100;

pub struct TestContext {
    pub env: Env,
    pub client: RewardPoolsContractClient<'static>,
    pub contract_id: Address,
    pub admin: Address,
    pub stake_token: Address,
    pub reward_token: Address,
    pub gate_token: Address,
}

/// Creates a mocked Soroban environment with stake/reward/gate SAC tokens,
/// deploys and initialises the engine, funds its reward reserve and opens a
/// pool for `stake_token` emitting `reward_per_block` from `GENESIS`.
pub fn setup_test_env(reward_per_block: i128) -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(GENESIS);

    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let gate_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(RewardPoolsContract, ());
    let client = RewardPoolsContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin, &reward_token, &gate_token);
    client.create_pool(
        &admin,
        &stake_token,
        &reward_per_block,
        &1,
        &1,
        &GENESIS,
        &0,
    );

    StellarAssetClient::new(&env, &reward_token).mint(&contract_id, &(i64::MAX as i128));

    TestContext {
        env,
        client,
        contract_id,
        admin,
        stake_token,
        reward_token,
        gate_token,
    }
}

impl TestContext {
    /// Generates a user holding `amount` stake tokens.
    pub fn user_with_stake_tokens(&self, amount: i128) -> Address {
        let user = Address::generate(&self.env);
        self.mint_stake_tokens(&user, amount);
        user
    }

    pub fn mint_stake_tokens(&self, user: &Address, amount: i128) {
        StellarAssetClient::new(&self.env, &self.stake_token).mint(user, &amount);
    }

    pub fn at_block(&self, block: u32) {
        self.env.ledger().set_sequence_number(block);
    }

    pub fn reward_balance(&self, account: &Address) -> i128 {
        TokenClient::new(&self.env, &self.reward_token).balance(account)
    }

    pub fn stake_balance(&self, account: &Address) -> i128 {
        TokenClient::new(&self.env, &self.stake_token).balance(account)
    }

    pub fn stake(&self, user: &Address, amount: i128) {
        self.client.stake(user, &self.stake_token, &amount);
    }

    pub fn unstake(&self, user: &Address, amount: i128) {
        self.client.unstake(user, &self.stake_token, &amount);
    }

    pub fn claim(&self, user: &Address) -> i128 {
        self.client.claim_reward(&self.stake_token, user)
    }

    pub fn pending(&self, user: &Address) -> i128 {
        self.client.pending_reward(&self.stake_token, user)
    }
}
