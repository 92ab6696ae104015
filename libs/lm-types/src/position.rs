use soroban_sdk::{contracttype, Address};

/// Lifecycle of a ledger entry. Withdrawn is terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PositionState {
    Open,
    Withdrawn,
}

/// Ownership and accounting record for one minted position
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionRecord {
    /// Position ID issued by the position manager
    pub position_id: u32,
    /// Token0 actually deposited at mint
    pub amount0: i128,
    /// Token1 actually deposited at mint
    pub amount1: i128,
    /// Liquidity units reported at mint
    pub liquidity: u128,
    /// Depositor entitlement (SHARE_SCALE)
    pub lp_share: u32,
    /// Protocol entitlement (SHARE_SCALE)
    pub fee_receiving_share: u32,
    /// Depositor address
    pub owner: Address,
    /// Open until the single successful withdrawal
    pub state: PositionState,
    /// Ledger timestamp of the mint
    pub opened_at: u64,
}

impl PositionRecord {
    pub fn is_open(&self) -> bool {
        self.state == PositionState::Open
    }

    pub fn deposit_data(&self) -> DepositData {
        DepositData {
            amount0: self.amount0,
            amount1: self.amount1,
            lp_share: self.lp_share,
            fee_receiving_share: self.fee_receiving_share,
        }
    }
}

/// Read-only view of a deposit's accounting
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositData {
    pub amount0: i128,
    pub amount1: i128,
    pub lp_share: u32,
    pub fee_receiving_share: u32,
}

/// Outcome of a settled withdrawal
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Settlement {
    /// Token0 realized from the position (fees + principal)
    pub realized0: i128,
    /// Token1 realized from the position (fees + principal)
    pub realized1: i128,
    /// Native asset paid to the depositor
    pub owner_native: i128,
    /// Counter asset paid to the depositor (zero when settled in native)
    pub owner_counter: i128,
    /// Token0 paid to the fee receiver
    pub protocol0: i128,
    /// Token1 paid to the fee receiver
    pub protocol1: i128,
}
