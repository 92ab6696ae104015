use lm_types::{CollectParams, DecreaseLiquidityParams, MintParams, PositionData};
use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env};

#[contracttype]
#[derive(Clone)]
pub struct MockPosition {
    pub owner: Address,
    pub token0: Address,
    pub token1: Address,
    pub liquidity: u128,
    pub amount0: i128,
    pub amount1: i128,
    pub owed0: i128,
    pub owed1: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    NextPositionId,
    Position(u32),
    /// Fees accrued on a position, paid on the next collect
    Fees(u32),
    /// Share of each desired amount actually placed (basis points)
    FillBps,
    FailMint,
    FailDecrease,
    /// Report one more unit of token0 than was pulled
    Overreport,
}

/// Position manager that places a configurable share of each request and
/// pays principal plus injected fees on collect
#[contract]
pub struct MockPositionManager;

#[contractimpl]
impl MockPositionManager {
    // === Test controls ===

    pub fn set_fill(env: Env, fill_bps: i128) {
        env.storage().instance().set(&DataKey::FillBps, &fill_bps);
    }

    pub fn set_fail_mint(env: Env, fail: bool) {
        env.storage().instance().set(&DataKey::FailMint, &fail);
    }

    pub fn set_fail_decrease(env: Env, fail: bool) {
        env.storage().instance().set(&DataKey::FailDecrease, &fail);
    }

    pub fn set_overreport(env: Env, overreport: bool) {
        env.storage().instance().set(&DataKey::Overreport, &overreport);
    }

    /// Fees must be backed by tokens the manager already holds
    pub fn accrue_fees(env: Env, position_id: u32, fees0: i128, fees1: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::Fees(position_id), &(fees0, fees1));
    }

    /// Reassign a position away from its holder
    pub fn seize(env: Env, position_id: u32, new_owner: Address) {
        let mut position = load(&env, position_id);
        position.owner = new_owner;
        store(&env, position_id, &position);
    }

    // === Position manager interface ===

    pub fn mint(env: Env, params: MintParams) -> (u32, u128, i128, i128) {
        if flag(&env, DataKey::FailMint) {
            panic!("Mint failed");
        }
        let manager = env.current_contract_address();
        let fill: i128 = env
            .storage()
            .instance()
            .get(&DataKey::FillBps)
            .unwrap_or(10_000);
        let amount0 = params.amount0_desired * fill / 10_000;
        let amount1 = params.amount1_desired * fill / 10_000;

        if amount0 > 0 {
            token::Client::new(&env, &params.token0).transfer_from(
                &manager,
                &params.recipient,
                &manager,
                &amount0,
            );
        }
        if amount1 > 0 {
            token::Client::new(&env, &params.token1).transfer_from(
                &manager,
                &params.recipient,
                &manager,
                &amount1,
            );
        }

        let position_id: u32 = env
            .storage()
            .instance()
            .get(&DataKey::NextPositionId)
            .unwrap_or(1);
        env.storage()
            .instance()
            .set(&DataKey::NextPositionId, &(position_id + 1));

        let liquidity = (amount0 + amount1) as u128;
        let position = MockPosition {
            owner: params.recipient,
            token0: params.token0,
            token1: params.token1,
            liquidity,
            amount0,
            amount1,
            owed0: 0,
            owed1: 0,
        };
        store(&env, position_id, &position);

        let reported0 = if flag(&env, DataKey::Overreport) {
            amount0 + 1
        } else {
            amount0
        };
        (position_id, liquidity, reported0, amount1)
    }

    pub fn decrease_liquidity(env: Env, params: DecreaseLiquidityParams) -> (i128, i128) {
        if flag(&env, DataKey::FailDecrease) {
            panic!("Decrease failed");
        }
        let mut position = load(&env, params.position_id);
        if params.liquidity > position.liquidity {
            panic!("Insufficient liquidity");
        }

        let liquidity = params.liquidity as i128;
        let total = position.liquidity as i128;
        let amount0 = position.amount0 * liquidity / total;
        let amount1 = position.amount1 * liquidity / total;

        position.liquidity -= params.liquidity;
        position.amount0 -= amount0;
        position.amount1 -= amount1;
        position.owed0 += amount0;
        position.owed1 += amount1;
        store(&env, params.position_id, &position);

        (amount0, amount1)
    }

    pub fn collect(env: Env, params: CollectParams) -> (u128, u128) {
        let manager = env.current_contract_address();
        let mut position = load(&env, params.position_id);
        let fees_key = DataKey::Fees(params.position_id);
        let (fees0, fees1): (i128, i128) = env.storage().persistent().get(&fees_key).unwrap_or((0, 0));
        env.storage().persistent().remove(&fees_key);

        let out0 = position.owed0 + fees0;
        let out1 = position.owed1 + fees1;
        if out0 > 0 {
            token::Client::new(&env, &position.token0).transfer(&manager, &params.recipient, &out0);
        }
        if out1 > 0 {
            token::Client::new(&env, &position.token1).transfer(&manager, &params.recipient, &out1);
        }

        position.owed0 = 0;
        position.owed1 = 0;
        store(&env, params.position_id, &position);
        (out0 as u128, out1 as u128)
    }

    pub fn burn(env: Env, position_id: u32) {
        let position = load(&env, position_id);
        if position.liquidity != 0 {
            panic!("Position has liquidity");
        }
        if position.owed0 != 0 || position.owed1 != 0 {
            panic!("Position has uncollected tokens");
        }
        env.storage().persistent().remove(&DataKey::Position(position_id));
    }

    pub fn owner_of(env: Env, position_id: u32) -> Address {
        load(&env, position_id).owner
    }

    pub fn get_position(env: Env, position_id: u32) -> PositionData {
        let position = load(&env, position_id);
        PositionData {
            pool: env.current_contract_address(),
            tick_lower: 0,
            tick_upper: 0,
            liquidity: position.liquidity,
            fee_growth_inside_0_last_x128: 0,
            fee_growth_inside_1_last_x128: 0,
            tokens_owed_0: position.owed0 as u128,
            tokens_owed_1: position.owed1 as u128,
        }
    }
}

fn flag(env: &Env, key: DataKey) -> bool {
    env.storage().instance().get(&key).unwrap_or(false)
}

fn load(env: &Env, position_id: u32) -> MockPosition {
    env.storage()
        .persistent()
        .get(&DataKey::Position(position_id))
        .expect("Position not found")
}

fn store(env: &Env, position_id: u32, position: &MockPosition) {
    env.storage()
        .persistent()
        .set(&DataKey::Position(position_id), position);
}
