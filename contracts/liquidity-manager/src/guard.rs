use crate::error::Error;
use crate::storage::DataKey;
use soroban_sdk::Env;

/// Lock held for the duration of a state-mutating entrypoint.
///
/// The lock lives in temporary storage and is released when the guard is
/// dropped. A failed invocation rolls the lock back with everything else.
pub struct ReentrancyGuard {
    env: Env,
}

impl ReentrancyGuard {
    pub fn enter(env: &Env) -> Result<Self, Error> {
        if is_locked(env) {
            return Err(Error::Reentrant);
        }
        env.storage().temporary().set(&DataKey::Locked, &true);
        Ok(Self { env: env.clone() })
    }
}

impl Drop for ReentrancyGuard {
    fn drop(&mut self) {
        self.env.storage().temporary().remove(&DataKey::Locked);
    }
}

pub fn is_locked(env: &Env) -> bool {
    env.storage().temporary().has(&DataKey::Locked)
}
