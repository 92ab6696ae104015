use crate::error::Error;
use lm_types::{EngineConfig, Totals};
use soroban_sdk::{contracttype, Address, Env};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// - Config, Totals, Halted: instance storage (read on every call)
// - Position(id): persistent storage, one entry per ledger record
// - OwnerPositionCount / OwnerPositionAt: persistent, append-only owner index
// - Locked: temporary storage, lives only for the guarded invocation
// ============================================================================

/// Storage keys for the liquidity manager
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Engine configuration (Instance storage)
    Config,
    /// Aggregate bookkeeping (Instance storage)
    Totals,
    /// Set once a solvency breach is detected (Instance storage)
    Halted,
    /// Reentrancy lock (Temporary storage)
    Locked,
    /// Position ID -> PositionRecord (Persistent storage)
    Position(u32),
    /// Owner -> number of positions ever opened
    OwnerPositionCount(Address),
    /// Owner -> index -> position ID
    OwnerPositionAt(Address, u32),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
pub const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
pub const PERSISTENT_TTL_EXTEND: u32 = 518400;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<EngineConfig, Error> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &EngineConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Totals ===

pub fn get_totals(env: &Env) -> Totals {
    env.storage()
        .instance()
        .get(&DataKey::Totals)
        .unwrap_or_default()
}

pub fn set_totals(env: &Env, totals: &Totals) {
    env.storage().instance().set(&DataKey::Totals, totals);
}

/// Account a newly opened position
pub fn record_open(env: &Env, amount0: i128, amount1: i128) -> Result<Totals, Error> {
    let mut totals = get_totals(env);
    totals.open_positions = totals
        .open_positions
        .checked_add(1)
        .ok_or(Error::ArithmeticOverflow)?;
    totals.total_deposits = totals
        .total_deposits
        .checked_add(1)
        .ok_or(Error::ArithmeticOverflow)?;
    totals.open_amount0 = totals
        .open_amount0
        .checked_add(amount0)
        .ok_or(Error::ArithmeticOverflow)?;
    totals.open_amount1 = totals
        .open_amount1
        .checked_add(amount1)
        .ok_or(Error::ArithmeticOverflow)?;
    set_totals(env, &totals);
    Ok(totals)
}

/// Account a settled position. Open sums can never go negative: every
/// closed amount was added by `record_open` first.
pub fn record_close(env: &Env, amount0: i128, amount1: i128) -> Result<Totals, Error> {
    let mut totals = get_totals(env);
    totals.open_positions = totals
        .open_positions
        .checked_sub(1)
        .ok_or(Error::InvariantViolation)?;
    totals.open_amount0 -= amount0;
    totals.open_amount1 -= amount1;
    if totals.open_amount0 < 0 || totals.open_amount1 < 0 {
        return Err(Error::InvariantViolation);
    }
    set_totals(env, &totals);
    Ok(totals)
}

// === Halt flag ===

pub fn is_halted(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Halted)
        .unwrap_or(false)
}

pub fn set_halted(env: &Env) {
    env.storage().instance().set(&DataKey::Halted, &true);
    extend_instance_ttl(env);
}
