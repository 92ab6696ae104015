use crate::adapters::{PositionAdapter, SwapAdapter};
use crate::error::Error;
use crate::guard::ReentrancyGuard;
use crate::storage::{get_config, is_halted, record_open};
use crate::{events, ledger, shares};
use lm_types::{PositionRecord, PositionState};
use soroban_sdk::{log, token, Address, Env};

/// Turn one native payment into one new Open ledger entry.
///
/// Pulls `native_amount` from the depositor, swaps the configured share of
/// it into the counter asset, mints a position with both legs and refunds
/// whatever the position manager did not place.
pub fn deposit(
    env: &Env,
    depositor: Address,
    native_amount: i128,
    min_counter_out: i128,
) -> Result<u32, Error> {
    let _guard = ReentrancyGuard::enter(env)?;
    let config = get_config(env)?;
    if is_halted(env) {
        return Err(Error::DepositsHalted);
    }
    depositor.require_auth();

    if native_amount <= 0 {
        return Err(Error::ZeroDeposit);
    }

    let this = env.current_contract_address();
    let native = token::Client::new(env, &config.native_token);
    let balance_before = native.balance(&this);
    native.transfer(&depositor, &this, &native_amount);
    let received = native.balance(&this) - balance_before;
    if received != native_amount {
        log!(env, "deposit payment mismatch", native_amount, received);
        return Err(Error::AmountMismatch);
    }

    let split = shares::split_deposit(native_amount, config.policy.swap_share)?;
    let counter_token = config.counter_token();

    let counter_received = SwapAdapter::new(env, &config).swap_exact_in(
        &config.native_token,
        &counter_token,
        split.swap_leg,
        min_counter_out,
    )?;

    let (desired0, desired1) = config.to_pool_order(split.retained, counter_received);
    let minted = PositionAdapter::new(env, &config).mint(desired0, desired1)?;

    let (lp_share, fee_receiving_share) = shares::position_shares(&config.policy);
    let record = PositionRecord {
        position_id: minted.position_id,
        amount0: minted.amount0,
        amount1: minted.amount1,
        liquidity: minted.liquidity,
        lp_share,
        fee_receiving_share,
        owner: depositor.clone(),
        state: PositionState::Open,
        opened_at: env.ledger().timestamp(),
    };
    ledger::put(env, &record)?;
    record_open(env, record.amount0, record.amount1)?;

    // Unplaced remainder goes back in the asset it is held in
    let (used_native, used_counter) = config.from_pool_order(minted.amount0, minted.amount1);
    let refund_native = split.retained - used_native;
    let refund_counter = counter_received - used_counter;
    if refund_native > 0 {
        native.transfer(&this, &depositor, &refund_native);
    }
    if refund_counter > 0 {
        token::Client::new(env, &counter_token).transfer(&this, &depositor, &refund_counter);
    }

    events::deposit_created(env, &record);
    log!(
        env,
        "deposit opened position",
        record.position_id,
        native_amount,
        refund_native,
        refund_counter
    );
    Ok(record.position_id)
}
