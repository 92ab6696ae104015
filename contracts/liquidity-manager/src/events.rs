use lm_types::{EngineConfig, PositionRecord, Settlement};
use soroban_sdk::{Address, Env, Symbol};

pub fn initialized(env: &Env, config: &EngineConfig) {
    env.events().publish(
        (Symbol::new(env, "initialized"),),
        (
            config.router.clone(),
            config.position_manager.clone(),
            config.pool.clone(),
            config.native_token.clone(),
            config.policy.swap_share,
            config.policy.fee_receiving_share,
        ),
    );
}

pub fn deposit_created(env: &Env, record: &PositionRecord) {
    env.events().publish(
        (Symbol::new(env, "deposit"), record.owner.clone()),
        (
            record.position_id,
            record.amount0,
            record.amount1,
            record.lp_share,
            record.fee_receiving_share,
        ),
    );
}

pub fn withdrawal_settled(env: &Env, record: &PositionRecord, settlement: &Settlement) {
    env.events().publish(
        (Symbol::new(env, "withdraw"), record.owner.clone()),
        (
            record.position_id,
            settlement.realized0,
            settlement.realized1,
            settlement.owner_native,
            settlement.owner_counter,
            settlement.protocol0,
            settlement.protocol1,
            record.state,
        ),
    );
}

pub fn emergency_sweep(env: &Env, recipient: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "emergency_sweep"),),
        (recipient.clone(), amount),
    );
}

pub fn solvency_breach(env: &Env, position_id: u32, held_liquidity: u128, recorded: u128) {
    env.events().publish(
        (Symbol::new(env, "solvency_breach"),),
        (position_id, held_liquidity, recorded),
    );
}
