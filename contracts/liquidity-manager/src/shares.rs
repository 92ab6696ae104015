//! Deposit split and settlement allocation.
//!
//! Pure arithmetic on the `SHARE_SCALE` fixed-point grid. Rounding always
//! favors the depositor leg that is computed as a remainder, so the parts of
//! every split add back up to the whole exactly.

use crate::error::Error;
use lm_types::{SharePolicy, SHARE_SCALE};
use soroban_fixed_point_math::FixedPoint;

/// A native deposit divided into the leg sent to the router and the leg kept
/// for the position
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DepositSplit {
    pub swap_leg: i128,
    pub retained: i128,
}

/// Realized position amounts divided between depositor and fee receiver
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Allocation {
    pub owner0: i128,
    pub owner1: i128,
    pub protocol0: i128,
    pub protocol1: i128,
}

/// Floor of `amount * share / SHARE_SCALE`
fn scale(amount: i128, share: u32) -> Result<i128, Error> {
    amount
        .fixed_mul_floor(share as i128, SHARE_SCALE as i128)
        .ok_or(Error::ArithmeticOverflow)
}

pub fn split_deposit(amount: i128, swap_share: u32) -> Result<DepositSplit, Error> {
    let swap_leg = scale(amount, swap_share)?;
    let retained = amount - swap_leg;
    if swap_leg <= 0 || retained <= 0 {
        return Err(Error::DepositTooSmall);
    }
    Ok(DepositSplit { swap_leg, retained })
}

/// (lp_share, fee_receiving_share) frozen into a new record
pub fn position_shares(policy: &SharePolicy) -> (u32, u32) {
    (policy.lp_share(), policy.fee_receiving_share)
}

pub fn allocate(
    realized0: i128,
    realized1: i128,
    fee_receiving_share: u32,
) -> Result<Allocation, Error> {
    if realized0 < 0 || realized1 < 0 || fee_receiving_share > SHARE_SCALE {
        return Err(Error::InvariantViolation);
    }
    let protocol0 = scale(realized0, fee_receiving_share)?;
    let protocol1 = scale(realized1, fee_receiving_share)?;
    Ok(Allocation {
        owner0: realized0 - protocol0,
        owner1: realized1 - protocol1,
        protocol0,
        protocol1,
    })
}
