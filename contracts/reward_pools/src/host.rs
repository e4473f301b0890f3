//! Adapters over the collaborators the engine does not own: token contracts
//! for transfers and balances, and the ledger sequence used as block clock.

use soroban_sdk::{log, token, Address, Env};

use crate::ContractError;

/// Current block index.
pub fn current_block(env: &Env) -> u32 {
    env.ledger().sequence()
}

/// Balance of `account` in the gating token.
pub fn gate_balance(env: &Env, gate_token: &Address, account: &Address) -> i128 {
    token::Client::new(env, gate_token).balance(account)
}

/// Move `amount` of `token` from `from` into the engine's custody.
///
/// Requires `from`'s authorisation on the token contract.
pub fn pull(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), ContractError> {
    let client = token::Client::new(env, token);
    match client.try_transfer(from, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "pull rejected", token, from, amount);
            Err(ContractError::TransferFailed)
        }
    }
}

/// Pay `amount` of `token` out of the engine's own balance. Zero is a no-op.
pub fn push(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
    if amount == 0 {
        return Ok(());
    }
    let client = token::Client::new(env, token);
    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "payout rejected", token, to, amount);
            Err(ContractError::TransferFailed)
        }
    }
}
