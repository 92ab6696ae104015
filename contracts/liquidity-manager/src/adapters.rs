// ============================================================================
// VENUE ADAPTERS
// ============================================================================
// The router and position manager are untrusted. Every call is made with
// try_invoke so a venue failure maps to a named error, and every result is
// reconciled against the balance deltas this contract observes itself:
//
// - Swap: output is the measured token_out delta, never the reported value.
// - Mint: reported amounts must be <= requested and equal the measured spend.
// - Collect/burn: realized amounts are the measured deltas; reporting more
//   than was delivered is an invariant violation.
//
// Spending is authorized through token allowances that are cleared once the
// venue call returns.
//
// An InvariantViolation aborts the invocation, so nothing it detects is
// persisted. Halting deposits after a venue breach goes through
// `audit_position`, which commits the halt flag.
// ============================================================================

use crate::error::Error;
use lm_types::{
    CollectParams, DecreaseLiquidityParams, EngineConfig, ExactInputSingleParams, MintParams,
    PositionData,
};
use soroban_sdk::{log, token, Address, Env, IntoVal, Symbol, TryFromVal, Val, Vec};

/// Allowances only need to outlive the current invocation
const ALLOWANCE_LEDGERS: u32 = 1;

/// Result of a successful mint, amounts in pool order
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintOutcome {
    pub position_id: u32,
    pub liquidity: u128,
    pub amount0: i128,
    pub amount1: i128,
}

/// Exact-input swaps through the configured router
pub struct SwapAdapter<'a> {
    env: &'a Env,
    router: Address,
    fee: u32,
}

impl<'a> SwapAdapter<'a> {
    pub fn new(env: &'a Env, config: &EngineConfig) -> Self {
        Self {
            env,
            router: config.router.clone(),
            fee: config.fee,
        }
    }

    /// Swap `amount_in` of `token_in` and return the `token_out` amount that
    /// actually arrived. Fails with `SlippageExceeded` if the router fails or
    /// delivers less than `min_out`.
    pub fn swap_exact_in(
        &self,
        token_in: &Address,
        token_out: &Address,
        amount_in: i128,
        min_out: i128,
    ) -> Result<i128, Error> {
        let env = self.env;
        let this = env.current_contract_address();
        let out_client = token::Client::new(env, token_out);
        let before = out_client.balance(&this);

        approve(env, token_in, &self.router, amount_in);
        let params = ExactInputSingleParams {
            token_in: token_in.clone(),
            token_out: token_out.clone(),
            fee: self.fee,
            recipient: this.clone(),
            deadline: env.ledger().timestamp(),
            amount_in,
            amount_out_minimum: min_out,
            sqrt_price_limit_x96: 0,
        };
        let reported: Option<i128> = try_call(
            env,
            &self.router,
            "exact_input_single",
            (params,).into_val(env),
        );
        approve(env, token_in, &self.router, 0);

        if reported.is_none() {
            log!(env, "swap rejected by router", amount_in, min_out);
            return Err(Error::SlippageExceeded);
        }

        let received = out_client.balance(&this) - before;
        if received < min_out {
            log!(env, "swap output below minimum", received, min_out);
            return Err(Error::SlippageExceeded);
        }
        Ok(received)
    }
}

/// Position lifecycle through the configured position manager
pub struct PositionAdapter<'a> {
    env: &'a Env,
    config: &'a EngineConfig,
}

impl<'a> PositionAdapter<'a> {
    pub fn new(env: &'a Env, config: &'a EngineConfig) -> Self {
        Self { env, config }
    }

    /// Open a position with up to `amount0`/`amount1`. Whatever the manager
    /// does not place stays with this contract for the caller to refund.
    /// A misreporting manager fails the call with `InvariantViolation`;
    /// run `audit_position` on its open positions to halt deposits.
    pub fn mint(&self, amount0: i128, amount1: i128) -> Result<MintOutcome, Error> {
        let env = self.env;
        let config = self.config;
        let manager = &config.position_manager;
        let this = env.current_contract_address();
        let token0 = token::Client::new(env, &config.token0);
        let token1 = token::Client::new(env, &config.token1);
        let before0 = token0.balance(&this);
        let before1 = token1.balance(&this);

        approve(env, &config.token0, manager, amount0);
        approve(env, &config.token1, manager, amount1);
        let params = MintParams {
            token0: config.token0.clone(),
            token1: config.token1.clone(),
            fee: config.fee,
            tick_lower: config.tick_lower,
            tick_upper: config.tick_upper,
            amount0_desired: amount0,
            amount1_desired: amount1,
            amount0_min: 0,
            amount1_min: 0,
            recipient: this.clone(),
            deadline: env.ledger().timestamp(),
        };
        let minted: Option<(u32, u128, i128, i128)> =
            try_call(env, manager, "mint", (params,).into_val(env));
        approve(env, &config.token0, manager, 0);
        approve(env, &config.token1, manager, 0);

        let (position_id, liquidity, actual0, actual1) = minted.ok_or(Error::MintFailed)?;
        if liquidity == 0 {
            return Err(Error::MintFailed);
        }
        if actual0 < 0 || actual1 < 0 || actual0 > amount0 || actual1 > amount1 {
            log!(env, "mint reported out-of-range amounts", actual0, actual1);
            return Err(Error::InvariantViolation);
        }

        let spent0 = before0 - token0.balance(&this);
        let spent1 = before1 - token1.balance(&this);
        if spent0 != actual0 || spent1 != actual1 {
            log!(env, "mint spend does not match report", spent0, spent1);
            return Err(Error::InvariantViolation);
        }

        Ok(MintOutcome {
            position_id,
            liquidity,
            amount0: actual0,
            amount1: actual1,
        })
    }

    /// Collect accrued fees, remove all liquidity, collect the principal and
    /// burn the position. Returns the measured (amount0, amount1) realized.
    /// Over-reporting rolls back with `InvariantViolation` and leaves the
    /// halt flag to `audit_position`.
    pub fn collect_and_burn(&self, position_id: u32, liquidity: u128) -> Result<(i128, i128), Error> {
        let env = self.env;
        let manager = &self.config.position_manager;
        let this = env.current_contract_address();
        let token0 = token::Client::new(env, &self.config.token0);
        let token1 = token::Client::new(env, &self.config.token1);
        let before0 = token0.balance(&this);
        let before1 = token1.balance(&this);

        let (fees0, fees1) = self.collect(position_id)?;

        let decrease = DecreaseLiquidityParams {
            position_id,
            liquidity,
            amount0_min: 0,
            amount1_min: 0,
            deadline: env.ledger().timestamp(),
        };
        let _: (i128, i128) = try_call(env, manager, "decrease_liquidity", (decrease,).into_val(env))
            .ok_or(Error::CollectFailed)?;

        let (principal0, principal1) = self.collect(position_id)?;

        let _: () = try_call(env, manager, "burn", (position_id,).into_val(env))
            .ok_or(Error::CollectFailed)?;

        let realized0 = token0.balance(&this) - before0;
        let realized1 = token1.balance(&this) - before1;
        let reported0 = fees0.checked_add(principal0).ok_or(Error::ArithmeticOverflow)?;
        let reported1 = fees1.checked_add(principal1).ok_or(Error::ArithmeticOverflow)?;
        if realized0 < 0
            || realized1 < 0
            || reported0 > realized0 as u128
            || reported1 > realized1 as u128
        {
            log!(env, "collect reported more than delivered", position_id);
            return Err(Error::InvariantViolation);
        }
        Ok((realized0, realized1))
    }

    fn collect(&self, position_id: u32) -> Result<(u128, u128), Error> {
        let env = self.env;
        let params = CollectParams {
            position_id,
            recipient: env.current_contract_address(),
            amount0_max: u128::MAX,
            amount1_max: u128::MAX,
        };
        try_call(
            env,
            &self.config.position_manager,
            "collect",
            (params,).into_val(env),
        )
        .ok_or(Error::CollectFailed)
    }

    /// Current (owner, liquidity) of a position as the manager reports it,
    /// or None if the manager no longer knows the position
    pub fn holding(&self, position_id: u32) -> Option<(Address, u128)> {
        let env = self.env;
        let manager = &self.config.position_manager;
        let owner: Address = try_call(env, manager, "owner_of", (position_id,).into_val(env))?;
        let data: PositionData =
            try_call(env, manager, "get_position", (position_id,).into_val(env))?;
        Some((owner, data.liquidity))
    }
}

/// Token pair, fee tier and tick spacing of the managed pool
#[derive(Clone, Debug)]
pub struct PoolInfo {
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_spacing: i32,
}

/// Read the pool's immutable views, or None if `pool` does not answer them
pub fn read_pool(env: &Env, pool: &Address) -> Option<PoolInfo> {
    let no_args = || Vec::<Val>::new(env);
    Some(PoolInfo {
        token0: try_call(env, pool, "token0", no_args())?,
        token1: try_call(env, pool, "token1", no_args())?,
        fee: try_call(env, pool, "fee", no_args())?,
        tick_spacing: try_call(env, pool, "tick_spacing", no_args())?,
    })
}

/// Invoke `func` on an untrusted contract; any failure or undecodable result
/// is None
fn try_call<T>(env: &Env, contract: &Address, func: &str, args: Vec<Val>) -> Option<T>
where
    T: TryFromVal<Env, Val>,
{
    match env.try_invoke_contract::<T, Error>(contract, &Symbol::new(env, func), args) {
        Ok(Ok(value)) => Some(value),
        _ => None,
    }
}

fn approve(env: &Env, token: &Address, spender: &Address, amount: i128) {
    let expiration_ledger = env.ledger().sequence() + ALLOWANCE_LEDGERS;
    token::Client::new(env, token).approve(
        &env.current_contract_address(),
        spender,
        &amount,
        &expiration_ledger,
    );
}
