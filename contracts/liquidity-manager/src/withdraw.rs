use crate::adapters::{PositionAdapter, SwapAdapter};
use crate::error::Error;
use crate::guard::ReentrancyGuard;
use crate::storage::{get_config, record_close};
use crate::{events, ledger, shares};
use lm_types::Settlement;
use soroban_sdk::{log, token, Address, Env};

/// Settle one Open ledger entry back to its owner and the fee receiver.
///
/// Realized amounts are split by the shares frozen at mint. The record is
/// marked Withdrawn before any swap or payout leaves the contract.
/// `min_native_out` is a floor on the owner's native payout when settling
/// in native, and on the native leg otherwise.
pub fn withdraw(
    env: &Env,
    caller: Address,
    position_id: u32,
    min_native_out: i128,
) -> Result<Settlement, Error> {
    let _guard = ReentrancyGuard::enter(env)?;
    let config = get_config(env)?;
    caller.require_auth();

    let record = ledger::get(env, position_id).ok_or(Error::UnknownPosition)?;
    if !record.is_open() {
        return Err(Error::AlreadyWithdrawn);
    }
    if record.owner != caller {
        return Err(Error::Unauthorized);
    }

    let (realized0, realized1) =
        PositionAdapter::new(env, &config).collect_and_burn(position_id, record.liquidity)?;
    let allocation = shares::allocate(realized0, realized1, record.fee_receiving_share)?;

    let record = ledger::mark_withdrawn(env, position_id)?;
    record_close(env, record.amount0, record.amount1)?;

    let native_token = config.native_token.clone();
    let counter_token = config.counter_token();
    let (mut owner_native, mut owner_counter) =
        config.from_pool_order(allocation.owner0, allocation.owner1);

    if config.policy.settle_in_native && owner_counter > 0 {
        let swap_min = min_native_out.saturating_sub(owner_native).max(0);
        owner_native += SwapAdapter::new(env, &config).swap_exact_in(
            &counter_token,
            &native_token,
            owner_counter,
            swap_min,
        )?;
        owner_counter = 0;
    }
    if owner_native < min_native_out {
        return Err(Error::SlippageExceeded);
    }

    pay(env, &native_token, &record.owner, owner_native);
    pay(env, &counter_token, &record.owner, owner_counter);
    pay(env, &config.token0, &config.fee_receiver, allocation.protocol0);
    pay(env, &config.token1, &config.fee_receiver, allocation.protocol1);

    let settlement = Settlement {
        realized0,
        realized1,
        owner_native,
        owner_counter,
        protocol0: allocation.protocol0,
        protocol1: allocation.protocol1,
    };
    events::withdrawal_settled(env, &record, &settlement);
    log!(env, "withdraw settled position", position_id, realized0, realized1);
    Ok(settlement)
}

fn pay(env: &Env, token: &Address, to: &Address, amount: i128) {
    if amount > 0 {
        token::Client::new(env, token).transfer(&env.current_contract_address(), to, &amount);
    }
}
