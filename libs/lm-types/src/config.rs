use crate::{DEFAULT_FEE_RECEIVING_SHARE, DEFAULT_SWAP_SHARE, SHARE_SCALE};
use soroban_sdk::{contracttype, Address};

/// Split and settlement policy, fixed at initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharePolicy {
    /// Portion of each deposit swapped into the counter asset (SHARE_SCALE)
    pub swap_share: u32,
    /// Protocol share of every minted position (SHARE_SCALE)
    pub fee_receiving_share: u32,
    /// Swap the depositor's counter-asset payout back to native on withdraw
    pub settle_in_native: bool,
}

impl SharePolicy {
    pub fn default_policy() -> Self {
        Self {
            swap_share: DEFAULT_SWAP_SHARE,
            fee_receiving_share: DEFAULT_FEE_RECEIVING_SHARE,
            settle_in_native: true,
        }
    }

    /// Depositor share, the complement of the protocol share
    pub fn lp_share(&self) -> u32 {
        SHARE_SCALE.saturating_sub(self.fee_receiving_share)
    }

    /// Both legs of a deposit must be non-empty, and the protocol
    /// cannot claim more than the whole position.
    pub fn is_valid(&self) -> bool {
        self.swap_share > 0
            && self.swap_share < SHARE_SCALE
            && self.fee_receiving_share <= SHARE_SCALE
    }
}

/// Engine configuration - immutable after initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EngineConfig {
    /// Privileged address allowed to run the emergency sweep
    pub admin: Address,
    /// Swap router contract
    pub router: Address,
    /// Position manager contract
    pub position_manager: Address,
    /// Managed pool contract
    pub pool: Address,
    /// Token0 address (lower address)
    pub token0: Address,
    /// Token1 address (higher address)
    pub token1: Address,
    /// Which of token0/token1 is the native asset
    pub native_token: Address,
    /// Pool fee tier in hundredths of bps
    pub fee: u32,
    /// Lower tick of every position the engine mints
    pub tick_lower: i32,
    /// Upper tick of every position the engine mints
    pub tick_upper: i32,
    /// Receiver of the protocol share on withdrawal
    pub fee_receiver: Address,
    /// Split and settlement policy
    pub policy: SharePolicy,
}

impl EngineConfig {
    pub fn native_is_token0(&self) -> bool {
        self.native_token == self.token0
    }

    pub fn counter_token(&self) -> Address {
        if self.native_is_token0() {
            self.token1.clone()
        } else {
            self.token0.clone()
        }
    }

    /// Arrange (native, counter) amounts into pool order
    pub fn to_pool_order(&self, native: i128, counter: i128) -> (i128, i128) {
        if self.native_is_token0() {
            (native, counter)
        } else {
            (counter, native)
        }
    }

    /// Arrange pool-order amounts into (native, counter)
    pub fn from_pool_order(&self, amount0: i128, amount1: i128) -> (i128, i128) {
        if self.native_is_token0() {
            (amount0, amount1)
        } else {
            (amount1, amount0)
        }
    }
}

/// Aggregate bookkeeping across all ledger entries
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Totals {
    /// Number of records currently Open
    pub open_positions: u32,
    /// Sum of token0 deposited into Open positions
    pub open_amount0: i128,
    /// Sum of token1 deposited into Open positions
    pub open_amount1: i128,
    /// Number of deposits ever recorded
    pub total_deposits: u32,
}
