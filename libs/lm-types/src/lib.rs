#![no_std]

mod config;
mod position;
mod venue;

pub use config::*;
pub use position::*;
pub use venue::*;

/// Fixed-point scale for shares and split ratios (10_000 == 1.0)
pub const SHARE_SCALE: u32 = 10_000;

/// Default portion of a deposit routed through the swap leg (half/half)
pub const DEFAULT_SWAP_SHARE: u32 = 5_000;

/// Default protocol share of every position (5%)
pub const DEFAULT_FEE_RECEIVING_SHARE: u32 = 500;

/// Lowest tick the managed pools accept (u128 sqrt price bound)
pub const MIN_TICK: i32 = -443636;

/// Highest tick the managed pools accept
pub const MAX_TICK: i32 = 443636;

/// Widest usable tick range for a pool with the given tick spacing.
///
/// Both bounds are rounded toward zero onto the spacing grid so the position
/// manager accepts them.
pub fn full_range_ticks(tick_spacing: i32) -> (i32, i32) {
    if tick_spacing <= 0 {
        return (0, 0);
    }
    let lower = (MIN_TICK / tick_spacing) * tick_spacing;
    let upper = (MAX_TICK / tick_spacing) * tick_spacing;
    (lower, upper)
}
