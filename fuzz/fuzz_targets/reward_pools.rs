#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use reward_pools::{RewardPoolsContract, RewardPoolsContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Env,
};

const USERS: usize = 4;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { user: u8, amount: u32 },
    Unstake { user: u8, amount: u32 },
    Claim { user: u8 },
    Advance { blocks: u8 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(1);

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
    client.create_pool(&admin, &stake_token, &10_000_000i128, &1, &1, &1, &0);
    StellarAssetClient::new(&env, &reward_token).mint(&contract_id, &(i64::MAX as i128));

    let stake_sac = StellarAssetClient::new(&env, &stake_token);
    let users: Vec<Address> = (0..USERS).map(|_| Address::generate(&env)).collect();
    for user in &users {
        stake_sac.mint(user, &(u32::MAX as i128 * 64));
    }

    let mut block = 1u32;
    for action in actions {
        match action {
            FuzzAction::Stake { user, amount } => {
                let user = &users[user as usize % USERS];
                let _ = client.try_stake(user, &stake_token, &(amount as i128));
            }
            FuzzAction::Unstake { user, amount } => {
                let user = &users[user as usize % USERS];
                let _ = client.try_unstake(user, &stake_token, &(amount as i128));
            }
            FuzzAction::Claim { user } => {
                let user = &users[user as usize % USERS];
                let _ = client.try_claim_reward(&stake_token, user);
            }
            FuzzAction::Advance { blocks } => {
                block = block.saturating_add(blocks as u32);
                env.ledger().set_sequence_number(block);
            }
        }

        // The pool total must always match the positions it was built from,
        // and no position may ever owe a negative reward.
        let pool = client.get_pool(&stake_token);
        let mut sum = 0i128;
        for user in &users {
            sum += client.get_position(&stake_token, user).amount;
            assert!(client.pending_reward(&stake_token, user) >= 0);
        }
        assert_eq!(pool.total_staked, sum);
    }
});
