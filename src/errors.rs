pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_OUTSIDE_SALE_WINDOW: &str = "Outside sale window";
pub const ERR_INVALID_PURCHASE: &str = "Invalid purchase";
pub const ERR_BELOW_MIN_PAYMENT: &str = "Below minimum payment";
pub const ERR_CAP_EXCEEDED: &str = "Cap exceeded";
pub const ERR_INSUFFICIENT_ALLOWANCE: &str = "Insufficient token allowance";

// Deployment and input validation
pub const ERR_INVALID_RATE: &str = "Invalid rate";
pub const ERR_INVALID_TOKEN: &str = "Invalid token";
pub const ERR_INVALID_AMOUNT: &str = "Invalid amount";
pub const ERR_INVALID_ADDRESS: &str = "Invalid address";
pub const ERR_INVALID_SALE_WINDOW: &str = "Invalid sale window";
pub const ERR_INVALID_CAP: &str = "Invalid cap";
pub const ERR_INVALID_BONUS_BOUNDARIES: &str = "Invalid bonus boundaries";
