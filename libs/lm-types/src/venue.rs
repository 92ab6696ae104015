// ============================================================================
// VENUE BOUNDARY TYPES
// ============================================================================
// Argument and return shapes of the external router and position manager.
// Soroban encodes contracttype structs as field-name maps, so these must keep
// the exact field names the venue contracts declare.
// ============================================================================

use soroban_sdk::{contracttype, Address};

/// Router: parameters for exact input single swap
#[contracttype]
#[derive(Clone, Debug)]
pub struct ExactInputSingleParams {
    pub token_in: Address,
    pub token_out: Address,
    pub fee: u32,
    pub recipient: Address,
    pub deadline: u64,
    pub amount_in: i128,
    pub amount_out_minimum: i128,
    pub sqrt_price_limit_x96: u128,
}

/// Position manager: mint parameters
#[contracttype]
#[derive(Clone, Debug)]
pub struct MintParams {
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub amount0_desired: i128,
    pub amount1_desired: i128,
    pub amount0_min: i128,
    pub amount1_min: i128,
    pub recipient: Address,
    pub deadline: u64,
}

/// Position manager: decrease liquidity parameters
#[contracttype]
#[derive(Clone, Debug)]
pub struct DecreaseLiquidityParams {
    pub position_id: u32,
    pub liquidity: u128,
    pub amount0_min: i128,
    pub amount1_min: i128,
    pub deadline: u64,
}

/// Position manager: collect parameters
#[contracttype]
#[derive(Clone, Debug)]
pub struct CollectParams {
    pub position_id: u32,
    pub recipient: Address,
    pub amount0_max: u128,
    pub amount1_max: u128,
}

/// Position manager: position metadata
#[contracttype]
#[derive(Clone, Debug)]
pub struct PositionData {
    /// Pool contract address
    pub pool: Address,
    /// Lower tick boundary
    pub tick_lower: i32,
    /// Upper tick boundary
    pub tick_upper: i32,
    /// Liquidity amount
    pub liquidity: u128,
    /// Fee growth inside at last action (token0)
    pub fee_growth_inside_0_last_x128: u128,
    /// Fee growth inside at last action (token1)
    pub fee_growth_inside_1_last_x128: u128,
    /// Tokens owed (token0)
    pub tokens_owed_0: u128,
    /// Tokens owed (token1)
    pub tokens_owed_1: u128,
}
