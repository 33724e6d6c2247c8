/// Fixed-point scale shared by EGLD, the sale token and USD values (18 decimals).
pub const RATE_SCALE: u64 = 1_000_000_000_000_000_000;

/// Sale price of one whole token, in whole USD.
pub const TOKEN_PRICE_USD: u64 = 1;

pub const PERCENTAGE_DENOMINATOR: u64 = 100;

/// Bonus while fewer than `bonus20CapBoundary` tokens have been allocated.
pub const EARLY_BONUS_PERCENTAGE: u64 = 20;

/// Bonus between `bonus20CapBoundary` and `bonus10CapBoundary`.
pub const LATE_BONUS_PERCENTAGE: u64 = 10;

pub const NO_BONUS_PERCENTAGE: u64 = 0;
