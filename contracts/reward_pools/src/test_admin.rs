extern crate std;

use soroban_sdk::{testutils::Address as _, Address, Env};

use crate::{ContractError, RewardPoolsContract, RewardPoolsContractClient};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn setup() -> (Env, RewardPoolsContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let reward_token = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let gate_token = env.register_stellar_asset_contract_v2(Address::generate(&env));

    let contract_id = env.register(RewardPoolsContract, ());
    let client = RewardPoolsContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin, &reward_token.address(), &gate_token.address());

    (env, client, admin)
}

// ── Two-step handover ────────────────────────────────────────────────────────

#[test]
fn test_propose_and_accept_admin() {
    let (env, client, admin) = setup();
    let successor = Address::generate(&env);

    client.propose_admin(&admin, &successor);
    assert_eq!(client.get_pending_admin(), Some(successor.clone()));
    // Authority does not move until accepted.
    assert_eq!(client.get_admin(), admin);

    client.accept_admin(&successor);
    assert_eq!(client.get_admin(), successor);
    assert_eq!(client.get_pending_admin(), None);
}

#[test]
fn test_new_admin_can_create_pools_and_old_cannot() {
    let (env, client, admin) = setup();
    let successor = Address::generate(&env);
    client.propose_admin(&admin, &successor);
    client.accept_admin(&successor);

    let stake_token = Address::generate(&env);
    match client.try_create_pool(&admin, &stake_token, &1, &1, &1, &0, &0) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }

    client.create_pool(&successor, &stake_token, &1, &1, &1, &0, &0);
    assert_eq!(client.get_pools().len(), 1);
}

#[test]
fn test_propose_by_non_admin_fails() {
    let (env, client, _admin) = setup();
    let intruder = Address::generate(&env);

    match client.try_propose_admin(&intruder, &intruder) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.get_pending_admin(), None);
}

#[test]
fn test_accept_by_wrong_address_fails() {
    let (env, client, admin) = setup();
    let successor = Address::generate(&env);
    let intruder = Address::generate(&env);

    client.propose_admin(&admin, &successor);
    match client.try_accept_admin(&intruder) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.get_admin(), admin);
}

#[test]
fn test_accept_without_proposal_fails() {
    let (env, client, _admin) = setup();
    let someone = Address::generate(&env);

    match client.try_accept_admin(&someone) {
        Err(Ok(e)) => assert_eq!(e, ContractError::NoPendingAdmin),
        _ => unreachable!("Expected NoPendingAdmin error"),
    }
}

#[test]
fn test_cancel_admin_transfer() {
    let (env, client, admin) = setup();
    let successor = Address::generate(&env);

    client.propose_admin(&admin, &successor);
    client.cancel_admin_transfer(&admin);
    assert_eq!(client.get_pending_admin(), None);

    match client.try_accept_admin(&successor) {
        Err(Ok(e)) => assert_eq!(e, ContractError::NoPendingAdmin),
        _ => unreachable!("Expected NoPendingAdmin error"),
    }
    match client.try_cancel_admin_transfer(&admin) {
        Err(Ok(e)) => assert_eq!(e, ContractError::NoPendingAdmin),
        _ => unreachable!("Expected NoPendingAdmin error"),
    }
}
