use crate::error::Error;
use crate::events;
use crate::guard::ReentrancyGuard;
use crate::storage::get_config;
use soroban_sdk::{log, token, Address, Env};

/// Sweep the contract's entire native balance to `recipient`.
///
/// Admin only. This is an escape hatch for stranded funds and settles
/// nothing: ledger entries stay Open and their liquidity stays with the
/// position manager.
pub fn emergency_withdraw(env: &Env, caller: Address, recipient: Address) -> Result<i128, Error> {
    let _guard = ReentrancyGuard::enter(env)?;
    let config = get_config(env)?;
    if caller != config.admin {
        return Err(Error::Unauthorized);
    }
    caller.require_auth();

    let this = env.current_contract_address();
    let native = token::Client::new(env, &config.native_token);
    let amount = native.balance(&this);
    if amount > 0 {
        native.transfer(&this, &recipient, &amount);
    }

    events::emergency_sweep(env, &recipient, amount);
    log!(env, "emergency sweep", amount);
    Ok(amount)
}
