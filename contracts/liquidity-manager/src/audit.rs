use crate::adapters::PositionAdapter;
use crate::error::Error;
use crate::storage::{get_config, set_halted};
use crate::{events, ledger};
use soroban_sdk::{log, Env};

/// Check that an Open record is still backed by the position manager.
///
/// The manager must report this contract as the owner with at least the
/// recorded liquidity. A breach halts all further deposits and returns
/// `Ok(false)` so the halt itself is committed.
pub fn audit_position(env: &Env, position_id: u32) -> Result<bool, Error> {
    let config = get_config(env)?;
    let record = ledger::get(env, position_id).ok_or(Error::UnknownPosition)?;
    if !record.is_open() {
        return Err(Error::AlreadyWithdrawn);
    }

    let this = env.current_contract_address();
    let held = match PositionAdapter::new(env, &config).holding(position_id) {
        Some((owner, liquidity)) if owner == this => liquidity,
        _ => 0,
    };
    if held >= record.liquidity {
        return Ok(true);
    }

    set_halted(env);
    events::solvency_breach(env, position_id, held, record.liquidity);
    log!(env, "solvency breach, deposits halted", position_id);
    Ok(false)
}
