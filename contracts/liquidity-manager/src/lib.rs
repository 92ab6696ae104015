#![no_std]

mod adapters;
mod audit;
mod deposit;
mod emergency;
mod error;
mod events;
mod guard;
mod ledger;
mod shares;
mod storage;
mod withdraw;

#[cfg(test)]
mod test;

pub use error::Error;

use lm_types::{
    full_range_ticks, DepositData, EngineConfig, PositionRecord, Settlement, SharePolicy, Totals,
};
use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};
use storage::{get_config, is_initialized, set_config, set_totals};

#[contract]
pub struct LiquidityManager;

#[contractimpl]
impl LiquidityManager {
    /// Initialize the engine against one managed pool
    ///
    /// Reads token pair, fee tier and tick spacing from `pool`; every
    /// position is minted over the pool's full tick range. Configuration is
    /// immutable afterwards.
    pub fn initialize(
        env: Env,
        admin: Address,
        router: Address,
        position_manager: Address,
        pool: Address,
        native_token: Address,
        fee_receiver: Address,
        policy: SharePolicy,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        if !policy.is_valid() {
            return Err(Error::InvalidConfig);
        }
        let pool_info = adapters::read_pool(&env, &pool).ok_or(Error::InvalidConfig)?;
        if pool_info.token0 >= pool_info.token1 {
            return Err(Error::InvalidConfig);
        }
        if native_token != pool_info.token0 && native_token != pool_info.token1 {
            return Err(Error::InvalidConfig);
        }
        let (tick_lower, tick_upper) = full_range_ticks(pool_info.tick_spacing);
        if tick_lower >= tick_upper {
            return Err(Error::InvalidConfig);
        }

        let config = EngineConfig {
            admin,
            router,
            position_manager,
            pool,
            token0: pool_info.token0,
            token1: pool_info.token1,
            native_token,
            fee: pool_info.fee,
            tick_lower,
            tick_upper,
            fee_receiver,
            policy,
        };
        set_config(&env, &config);
        set_totals(&env, &Totals::default());

        events::initialized(&env, &config);
        log!(&env, "liquidity manager initialized", config.fee, tick_lower, tick_upper);
        Ok(())
    }

    /// Deposit `native_amount` of the native asset and open a position
    ///
    /// # Returns
    /// The position ID; `get_deposit_data` serves its accounting immediately
    pub fn deposit(
        env: Env,
        depositor: Address,
        native_amount: i128,
        min_counter_out: i128,
    ) -> Result<u32, Error> {
        deposit::deposit(&env, depositor, native_amount, min_counter_out)
    }

    /// Exit a position in full. Owner only.
    pub fn withdraw(
        env: Env,
        caller: Address,
        position_id: u32,
        min_native_out: i128,
    ) -> Result<Settlement, Error> {
        withdraw::withdraw(&env, caller, position_id, min_native_out)
    }

    /// Sweep the raw native balance to `recipient`. Admin only; settles no
    /// position.
    pub fn emergency_withdraw(env: Env, caller: Address, recipient: Address) -> Result<i128, Error> {
        emergency::emergency_withdraw(&env, caller, recipient)
    }

    /// Verify an Open position is still held by this contract; halts
    /// deposits and returns false if it is not
    pub fn audit_position(env: Env, position_id: u32) -> Result<bool, Error> {
        audit::audit_position(&env, position_id)
    }

    // === View Functions ===

    /// Deposited amounts and shares of a position
    pub fn get_deposit_data(env: Env, position_id: u32) -> Result<DepositData, Error> {
        ledger::get(&env, position_id)
            .map(|record| record.deposit_data())
            .ok_or(Error::UnknownPosition)
    }

    /// Full ledger record of a position
    pub fn get_position(env: Env, position_id: u32) -> Result<PositionRecord, Error> {
        ledger::get(&env, position_id).ok_or(Error::UnknownPosition)
    }

    /// Positions opened by `owner`, paginated (max 50 per page)
    pub fn positions_of_paginated(env: Env, owner: Address, start_index: u32, limit: u32) -> Vec<u32> {
        ledger::positions_of_paginated(&env, &owner, start_index, limit)
    }

    /// Number of positions ever opened by `owner`
    pub fn position_count_of(env: Env, owner: Address) -> u32 {
        ledger::position_count_of(&env, &owner)
    }

    pub fn get_config(env: Env) -> Result<EngineConfig, Error> {
        get_config(&env)
    }

    pub fn swap_router(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.router)
    }

    pub fn position_manager(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.position_manager)
    }

    pub fn managed_pool(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.pool)
    }

    pub fn get_totals(env: Env) -> Totals {
        storage::get_totals(&env)
    }

    pub fn is_halted(env: Env) -> bool {
        storage::is_halted(&env)
    }

    /// Policy used when none is chosen: half/half split, 95% / 5% shares,
    /// settlement in native
    pub fn default_policy(_env: Env) -> SharePolicy {
        SharePolicy::default_policy()
    }
}
