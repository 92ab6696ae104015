// ============================================================================
// POSITION LEDGER
// ============================================================================
// Position ID -> PositionRecord. Structural rules only:
// - one record per position ID
// - Open -> Withdrawn exactly once; Withdrawn records are never removed
// - the owner index is append-only (count + one entry per position)
// ============================================================================

use crate::error::Error;
use crate::storage::{extend_persistent_ttl, DataKey};
use lm_types::{PositionRecord, PositionState};
use soroban_sdk::{Address, Env, Vec};

/// Maximum page size for owner queries (stays within read entry limits)
pub const MAX_PAGE: u32 = 50;

pub fn put(env: &Env, record: &PositionRecord) -> Result<(), Error> {
    let key = DataKey::Position(record.position_id);
    if env.storage().persistent().has(&key) {
        return Err(Error::PositionExists);
    }
    env.storage().persistent().set(&key, record);
    extend_persistent_ttl(env, &key);

    add_position_to_owner(env, &record.owner, record.position_id);
    Ok(())
}

pub fn get(env: &Env, position_id: u32) -> Option<PositionRecord> {
    let key = DataKey::Position(position_id);
    let record = env.storage().persistent().get(&key)?;
    extend_persistent_ttl(env, &key);
    Some(record)
}

/// Move an Open record to Withdrawn and return the updated record
pub fn mark_withdrawn(env: &Env, position_id: u32) -> Result<PositionRecord, Error> {
    let mut record = get(env, position_id).ok_or(Error::UnknownPosition)?;
    if !record.is_open() {
        return Err(Error::AlreadyWithdrawn);
    }
    record.state = PositionState::Withdrawn;

    let key = DataKey::Position(position_id);
    env.storage().persistent().set(&key, &record);
    extend_persistent_ttl(env, &key);
    Ok(record)
}

pub fn position_count_of(env: &Env, owner: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::OwnerPositionCount(owner.clone()))
        .unwrap_or(0)
}

/// Up to `limit` position IDs opened by `owner`, starting at `start_index`
pub fn positions_of_paginated(env: &Env, owner: &Address, start_index: u32, limit: u32) -> Vec<u32> {
    let safe_limit = limit.min(MAX_PAGE);
    let count = position_count_of(env, owner);
    let end_index = start_index.saturating_add(safe_limit).min(count);

    let mut positions: Vec<u32> = Vec::new(env);
    for i in start_index..end_index {
        let key = DataKey::OwnerPositionAt(owner.clone(), i);
        if let Some(position_id) = env.storage().persistent().get(&key) {
            extend_persistent_ttl(env, &key);
            positions.push_back(position_id);
        }
    }
    positions
}

fn add_position_to_owner(env: &Env, owner: &Address, position_id: u32) {
    let count = position_count_of(env, owner);

    let at_key = DataKey::OwnerPositionAt(owner.clone(), count);
    env.storage().persistent().set(&at_key, &position_id);
    extend_persistent_ttl(env, &at_key);

    let count_key = DataKey::OwnerPositionCount(owner.clone());
    env.storage().persistent().set(&count_key, &(count + 1));
    extend_persistent_ttl(env, &count_key);
}
